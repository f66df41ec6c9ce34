//! App root: router, layout chrome and shared context.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use portfolio::SiteConfig;

use crate::navigation::SectionNav;
use crate::pages::{MainPage, NotFound, PrivacyPage, TermsPage};
use crate::sections::{Footer, Nav};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <Layout />
        </Router>
    }
}

/// Everything under the router. Owns the active-section state so the
/// navigation bar, in-page buttons and footer links share one tracker.
#[component]
fn Layout() -> impl IntoView {
    SectionNav::provide(&expect_context::<SiteConfig>());

    view! {
        <Nav />
        <main>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=MainPage />
                <Route path=path!("/home") view=MainPage />
                <Route path=path!("/about") view=MainPage />
                <Route path=path!("/services") view=MainPage />
                <Route path=path!("/portfolio") view=MainPage />
                <Route path=path!("/blog") view=MainPage />
                <Route path=path!("/contact") view=MainPage />
                <Route path=path!("/privacy") view=PrivacyPage />
                <Route path=path!("/terms") view=TermsPage />
            </Routes>
        </main>
        <Footer />
    }
}
