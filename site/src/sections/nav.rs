use leptos::prelude::*;
use leptos_router::hooks::use_location;
use portfolio::content::BRAND_NAME;
use portfolio::section::{contact_item, home_item};
use portfolio::{NAV_ITEMS, NavigationItem, is_item_active};

use crate::navigation::{SectionNav, track_sections, use_section_link};

pub fn nav_link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

#[component]
pub fn Nav() -> impl IntoView {
    let nav = SectionNav::expect();
    track_sections(nav);

    let pathname = use_location().pathname;
    let go = use_section_link();
    let go_home = go.clone();
    let go_contact = go.clone();

    let links = move |extra: &'static str| {
        let go = go.clone();
        NAV_ITEMS
            .iter()
            .map(move |item: &'static NavigationItem| {
                let go = go.clone();
                let class = move || {
                    let active = pathname.with(|path| is_item_active(item, path, nav.active()));
                    format!("{} {extra}", nav_link_class(active)).trim_end().to_string()
                };
                // rel=external keeps the router from claiming the click
                view! {
                    <a
                        href=item.href
                        rel="external"
                        class=class
                        on:click=move |ev| {
                            ev.prevent_default();
                            go(item);
                        }
                    >
                        {item.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a
                    href=home_item().href
                    rel="external"
                    class="nav-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_home(home_item());
                    }
                >
                    <span class="nav-logo">"PG"</span>
                    <span class="nav-title">{BRAND_NAME}</span>
                </a>

                <div class="nav-links">{links("")}</div>

                <button
                    type="button"
                    class="nav-cta"
                    on:click=move |_| go_contact(contact_item())
                >
                    "Get Started"
                </button>

                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.menu_open().to_string()
                    on:click=move |_| nav.toggle_menu()
                >
                    {move || if nav.menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <div class=move || if nav.menu_open() { "nav-drawer open" } else { "nav-drawer" }>
                {links("nav-link-mobile")}
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_gets_modifier() {
        assert_eq!(nav_link_class(true), "nav-link active");
        assert_eq!(nav_link_class(false), "nav-link");
    }
}
