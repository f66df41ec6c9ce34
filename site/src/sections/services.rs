use leptos::prelude::*;
use portfolio::SectionId;
use portfolio::content::services;
use portfolio::section::contact_item;

use crate::components::Icon;
use crate::navigation::use_section_link;

#[component]
pub fn ServicesSection() -> impl IntoView {
    let go = use_section_link();

    view! {
        <section id=SectionId::SERVICES.as_str() class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        {services::HEADLINE}
                        " "
                        <span class="gradient-text">{services::HEADLINE_ACCENT}</span>
                    </h2>
                    <p class="section-description">{services::INTRO}</p>
                </div>

                <div class="services-grid">
                    {services::MAIN_SERVICES.iter().map(|service| {
                        view! {
                            <article class=format!("card service-card {}", service.accent.class())>
                                <div class="service-head">
                                    <Icon kind=service.icon size="28" />
                                    <h3>{service.title}</h3>
                                </div>
                                <p>{service.description}</p>
                                <ul class="feature-list">
                                    {service.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect::<Vec<_>>()}
                                </ul>
                                <div class="value-box">
                                    <strong>"Value: "</strong>
                                    {service.value}
                                </div>
                                <p class="ideal-for">
                                    <strong>"Ideal for: "</strong>
                                    {service.ideal_for.join(", ")}
                                </p>
                            </article>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <h3 class="subsection-title">"Additional Services"</h3>
                <div class="addon-grid">
                    {services::ADD_ONS.iter().map(|addon| {
                        view! {
                            <div class="card addon-card">
                                <Icon kind=addon.icon />
                                <h4>{addon.title}</h4>
                                <p>{addon.description}</p>
                                <span class="addon-value">{addon.value}</span>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <h3 class="subsection-title">"My Process"</h3>
                <ol class="process">
                    {services::PROCESS.iter().map(|step| {
                        view! {
                            <li class="process-step">
                                <span class="process-number">{step.step}</span>
                                <h4>{step.title}</h4>
                                <p>{step.description}</p>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ol>

                <div class="cta-banner">
                    <h3>"Ready to Transform Your Financial Operations?"</h3>
                    <button type="button" class="btn btn-primary" on:click=move |_| go(contact_item())>
                        "Schedule Consultation"
                    </button>
                </div>
            </div>
        </section>
    }
}
