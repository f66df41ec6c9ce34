use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;
use portfolio::content::{BRAND_BLURB, BRAND_NAME, SOCIAL_LINKS, contact};
use portfolio::{NAV_ITEMS, NavigationItem, SiteConfig};

use crate::components::Icon;
use crate::navigation::use_section_link;

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND_NAME}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let go = use_section_link();
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="footer-title">{BRAND_NAME}</span>
                    <p>{BRAND_BLURB}</p>
                    <div class="social-links">
                        {SOCIAL_LINKS.iter().map(|link| {
                            view! {
                                <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
                                    <Icon kind=link.icon size="18" />
                                </a>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="footer-links">
                    <h4>"Quick Links"</h4>
                    {NAV_ITEMS.iter().map(|item: &'static NavigationItem| {
                        let go = go.clone();
                        view! {
                            <a
                                href=item.href
                                rel="external"
                                class="footer-link"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    go(item);
                                }
                            >
                                {item.label}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="footer-contact">
                    <h4>"Contact"</h4>
                    {contact::DETAILS.iter().take(3).map(|detail| {
                        view! {
                            <p>
                                <Icon kind=detail.icon size="16" />
                                " "
                                {detail.value}
                            </p>
                        }
                    }).collect::<Vec<_>>()}
                    <a href=format!("mailto:{}", config.contact.recipient) class="footer-link">"Email me"</a>
                </div>
            </div>

            <div class="container footer-bottom">
                <p class="footer-copyright">{copyright_line(year)}</p>
                <div class="footer-legal">
                    <A href="/privacy">"Privacy Policy"</A>
                    <A href="/terms">"Terms of Service"</A>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_brand() {
        assert_eq!(copyright_line(2026), "© 2026 Phinidy George. All rights reserved.");
    }
}
