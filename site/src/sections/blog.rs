use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use portfolio::content::blog;
use portfolio::contact::newsletter_mailto;
use portfolio::{SectionId, SiteConfig};

use crate::components::{Icon, Notifier, StatusLine};
use crate::dom;

#[component]
pub fn BlogSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notifier = Notifier::new(config.contact.status_dismiss_ms);
    let recipient = config.contact.recipient;
    let subscriber = RwSignal::new(String::new());

    let subscribe = move |ev: SubmitEvent| {
        ev.prevent_default();
        let uri = match newsletter_mailto(&recipient, &subscriber.get_untracked()) {
            Ok(uri) => uri,
            Err(e) => {
                notifier.error("Subscription Error", e.to_string());
                return;
            }
        };
        match dom::open_external(&uri) {
            Ok(()) => {
                tracing::info!("newsletter request opened");
                subscriber.set(String::new());
                notifier.success(
                    "Almost There!",
                    "Send the prepared email to confirm your subscription.",
                );
            }
            Err(e) => {
                tracing::warn!(%e, "could not open newsletter request");
                notifier.error(
                    "Couldn't Open Your Mail App",
                    format!("Email {recipient} with the subject \"Newsletter Subscription\"."),
                );
            }
        }
    };

    view! {
        <section id=SectionId::BLOG.as_str() class="blog">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{blog::HEADLINE}</h2>
                    <p class="section-description">{blog::INTRO}</p>
                    <div class="badge-row">
                        {blog::TOPICS.iter().map(|topic| view! { <span class="badge">{*topic}</span> }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="blog-grid">
                    {blog::FEATURED_ARTICLES.iter().map(|article| {
                        view! {
                            <a
                                href=article.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class=format!("card blog-card {}", article.accent.class())
                            >
                                <div class="blog-card-header">
                                    <Icon kind=article.icon size="18" />
                                    <span class="badge">{article.category}</span>
                                    <span class="blog-meta">{article.published}" · "{article.read_time}</span>
                                </div>
                                <h3 class="blog-title">{article.title}</h3>
                                <p>{article.description}</p>
                                <p class="blog-excerpt">{article.excerpt}</p>
                                <div class="blog-cta">
                                    "Read on Medium"
                                    <span class="arrow">"→"</span>
                                </div>
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <h3 class="subsection-title">"Coming Soon"</h3>
                <div class="upcoming-grid">
                    {blog::UPCOMING.iter().map(|topic| {
                        view! {
                            <div class="card upcoming-card">
                                <span class="badge badge-muted">{topic.category}</span>
                                <h4>{topic.title}</h4>
                                <p>{topic.description}</p>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="newsletter">
                    <h3>"Stay Updated"</h3>
                    <p>"Get notified when new insights on fintech and data science are published."</p>
                    <form class="newsletter-form" on:submit=subscribe novalidate=true>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            aria-label="Email address"
                            prop:value=move || subscriber.get()
                            on:input=move |ev| subscriber.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn-primary">"Subscribe"</button>
                    </form>
                    <StatusLine notifier=notifier />
                </div>

                <div class="section-footer">
                    <a href=blog::MEDIUM_PROFILE target="_blank" rel="noopener noreferrer" class="btn btn-outline">
                        "Follow on Medium"
                    </a>
                </div>
            </div>
        </section>
    }
}
