use leptos::prelude::*;
use leptos_router::components::A;
use portfolio::SiteConfig;

#[component]
fn LegalPage(title: &'static str, paragraphs: &'static [&'static str]) -> impl IntoView {
    let recipient = expect_context::<SiteConfig>().contact.recipient;

    view! {
        <section class="page-header legal">
            <div class="container narrow">
                <h1 class="page-title">{title}</h1>
                {paragraphs.iter().map(|text| view! { <p>{*text}</p> }).collect::<Vec<_>>()}
                <p>
                    "Questions? Write to "
                    <a href=format!("mailto:{recipient}")>{recipient.clone()}</a>
                    "."
                </p>
                <A href="/" attr:class="btn btn-outline">"Back to Home"</A>
            </div>
        </section>
    }
}

const PRIVACY: &[&str] = &[
    "This site does not use cookies, analytics or tracking scripts, and it has no server-side storage.",
    "The contact and newsletter forms never send data from the page. They open a pre-filled email in \
     your own mail client, and nothing is transmitted until you choose to send it.",
    "Information you send by email is used only to reply to you and is never shared or sold.",
];

const TERMS: &[&str] = &[
    "Content on this site describes services and past projects for information only and does not \
     constitute financial, tax or legal advice.",
    "Engagements are governed by a separate written agreement. Project figures quoted here reflect \
     specific client contexts and are not a guarantee of future results.",
    "Linked articles and repositories are hosted by third parties under their own terms.",
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalPage title="Privacy Policy" paragraphs=PRIVACY /> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalPage title="Terms of Service" paragraphs=TERMS /> }
}
