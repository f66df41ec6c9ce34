use leptos::prelude::*;
use portfolio::SectionId;
use portfolio::content::about;

use crate::components::Icon;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=SectionId::ABOUT.as_str() class="about">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        {about::HEADLINE}
                        " "
                        <span class="gradient-text">{about::HEADLINE_ACCENT}</span>
                    </h2>
                    <p class="section-description">{about::INTRO}</p>
                    <div class="badge-row">
                        {about::BADGES.iter().map(|badge| view! { <span class="badge">{*badge}</span> }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="about-grid">
                    <div class="timeline">
                        <h3>"Professional Journey"</h3>
                        {about::TIMELINE.iter().map(|step| {
                            view! {
                                <div class="timeline-item">
                                    <span class="timeline-year">{step.year}</span>
                                    <div>
                                        <h4>{step.title}</h4>
                                        <p>{step.description}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>

                    <div class="achievements">
                        <h3>"Key Achievements"</h3>
                        {about::ACHIEVEMENTS.iter().map(|achievement| {
                            view! {
                                <div class="card achievement-card">
                                    <span class="achievement-metric">{achievement.metric}</span>
                                    <h4>{achievement.title}</h4>
                                    <p>{achievement.description}</p>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="skills-grid">
                    {about::SKILLS.iter().map(|group| {
                        view! {
                            <div class="card skill-group">
                                <h4>{group.category}</h4>
                                <div class="badge-row">
                                    {group.skills.iter().map(|skill| view! { <span class="badge badge-muted">{*skill}</span> }).collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="mission">
                    <h3>"Mission"</h3>
                    <p class="mission-statement">{about::MISSION}</p>
                    <div class="pillars">
                        {about::PILLARS.iter().map(|pillar| {
                            view! {
                                <div class="pillar">
                                    <Icon kind=pillar.icon />
                                    <h4>{pillar.title}</h4>
                                    <p>{pillar.description}</p>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
