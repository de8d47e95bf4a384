use dioxus::prelude::*;
use portfolio_core::content::PROJECTS;
use portfolio_core::{RevealConfig, SectionId};
use portfolio_ui::{reveal_id, AssetImage, Icon, IconKind, Reveal, RevealSection};

use super::SectionHeading;

#[component]
pub fn Projects() -> Element {
    rsx! {
        RevealSection { id: SectionId::Projects.id(), config: RevealConfig::SECTION, class: "section",
            SectionHeading { icon: IconKind::Briefcase, title: "My Projects" }

            div { class: "projects-grid",
                for (index, project) in PROJECTS.iter().enumerate() {
                    Reveal {
                        key: "{project.title}",
                        id: reveal_id(SectionId::Projects, index),
                        config: RevealConfig::project_card(index),
                        class: "card project-card",
                        AssetImage { asset: project.screenshot, class: "project-shot" }
                        h4 { class: "project-title", "{project.title}" }
                        p { class: "project-description", "{project.description}" }
                        div { class: "project-links",
                            a {
                                class: "project-link",
                                href: project.repo_url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon { kind: IconKind::Github, size: 20 }
                                "GitHub"
                            }
                            a {
                                class: "project-link",
                                href: project.demo_url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon { kind: IconKind::Code, size: 20 }
                                "Live Demo"
                            }
                        }
                    }
                }
            }
        }
    }
}
