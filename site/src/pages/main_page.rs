// Main page: every section, top to bottom. Rendered for `/`, `/home` and each
// navigation href so deep links land on the same document.
use crate::sections::{
    AboutSection, BlogSection, ContactSection, HomeSection, PortfolioSection, ServicesSection,
};
use leptos::prelude::*;

#[component]
pub fn MainPage() -> impl IntoView {
    view! {
        <HomeSection />
        <AboutSection />
        <ServicesSection />
        <PortfolioSection />
        <BlogSection />
        <ContactSection />
    }
}
