use leptos::prelude::*;
use portfolio::SectionId;
use portfolio::content::portfolio::{self as projects, Project};

use crate::components::Icon;

/// Outbound links of a project card: live demo first, then source.
fn project_links(project: &Project) -> Vec<(&'static str, &'static str)> {
    project
        .live_link
        .map(|href| ("Live Demo", href))
        .into_iter()
        .chain(project.source_link.map(|href| ("Source Code", href)))
        .collect()
}

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <section id=SectionId::PORTFOLIO.as_str() class="portfolio">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{projects::HEADING}</h2>
                    <p class="section-description">{projects::INTRO}</p>
                </div>

                <div class="project-grid">
                    {projects::PROJECTS.iter().map(|project| {
                        view! {
                            <article class="card project-card">
                                <img class="project-image" src=project.image alt=project.title loading="lazy" />
                                <div class="project-body">
                                    <div class="project-meta">
                                        <Icon kind=project.icon size="18" />
                                        <span class="badge">{project.category}</span>
                                    </div>
                                    <h3>{project.title}</h3>
                                    <p class="project-subtitle">{project.subtitle}</p>
                                    <p>{project.description}</p>
                                    <div class="badge-row">
                                        {project.technologies.iter().map(|tech| view! { <span class="badge badge-muted">{*tech}</span> }).collect::<Vec<_>>()}
                                    </div>
                                    <dl class="metrics">
                                        {project.metrics.iter().map(|metric| {
                                            view! {
                                                <div class="metric">
                                                    <dt>{metric.label}</dt>
                                                    <dd>{metric.value}</dd>
                                                </div>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </dl>
                                    <p class="project-results">
                                        <strong>"Business Impact: "</strong>
                                        {project.results}
                                    </p>
                                    <div class="project-links">
                                        {project_links(project).into_iter().map(|(label, href)| {
                                            view! {
                                                <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-small">{label}</a>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            </article>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="section-footer">
                    <a href=projects::ALL_PROJECTS target="_blank" rel="noopener noreferrer" class="btn btn-outline">
                        "View All Projects"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_card_has_at_least_one_link() {
        for project in projects::PROJECTS {
            assert!(!project_links(project).is_empty(), "{}", project.slug);
        }
    }

    #[test]
    fn live_demo_is_listed_before_source() {
        let project = Project {
            live_link: Some("https://example.com/demo"),
            source_link: Some("https://example.com/repo"),
            ..projects::PROJECTS[0]
        };
        assert_eq!(
            project_links(&project),
            [("Live Demo", "https://example.com/demo"), ("Source Code", "https://example.com/repo")]
        );
    }
}
