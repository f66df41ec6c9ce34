use leptos::prelude::*;
use portfolio::SectionId;
use portfolio::content::{BRAND_NAME, home};
use portfolio::section::{contact_item, nav_item_for};

use crate::components::Icon;
use crate::navigation::use_section_link;

#[component]
pub fn HomeSection() -> impl IntoView {
    let go = use_section_link();
    let go_portfolio = go.clone();

    view! {
        <section id=SectionId::HOME.as_str() class="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <span class="hero-badge">{home::BADGE}</span>
                    <h1 class="hero-title">
                        {home::HEADLINE}
                        " "
                        <span class="gradient-text">{home::HEADLINE_ACCENT}</span>
                    </h1>
                    <p class="hero-intro">{home::INTRO}</p>
                    <div class="hero-actions">
                        <button type="button" class="btn btn-primary" on:click=move |_| go(contact_item())>
                            "Get Started"
                        </button>
                        <button
                            type="button"
                            class="btn btn-outline"
                            on:click=move |_| {
                                if let Some(item) = nav_item_for(SectionId::PORTFOLIO) {
                                    go_portfolio(item);
                                }
                            }
                        >
                            "View Portfolio"
                        </button>
                    </div>
                    <div class="hero-stats">
                        {home::STATS.iter().map(|stat| {
                            view! {
                                <div class="stat-card">
                                    <Icon kind=stat.icon size="20" />
                                    <span class="stat-number">{stat.number}</span>
                                    <span class="stat-label">{stat.label}</span>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="hero-portrait">
                    <img src=home::PORTRAIT alt=BRAND_NAME />
                </div>
            </div>

            <div class="container">
                <div class="featured-grid">
                    {home::FEATURED_SERVICES.iter().map(|service| {
                        view! {
                            <div class=format!("card featured-card {}", service.accent.class())>
                                <Icon kind=service.icon />
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                <ul class="cert-list">
                    {home::CERTIFICATIONS.iter().map(|cert| view! { <li class="cert-badge">{*cert}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}
