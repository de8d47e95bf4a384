//! Skills grid. Tiles cascade in by index once the grid scrolls into view.

use dioxus::prelude::*;
use portfolio_core::content::skills::{skill_entries, BROKEN_ICON};
use portfolio_core::{RevealConfig, SectionId};
use portfolio_ui::{reveal_id, IconKind, RemoteImage, Reveal, RevealSection};

use super::SectionHeading;

#[component]
pub fn Skills() -> Element {
    let skills = skill_entries();

    rsx! {
        RevealSection { id: SectionId::Skills.id(), config: RevealConfig::SECTION, class: "section",
            SectionHeading { icon: IconKind::Award, title: "My Skills" }

            div { class: "skills-grid",
                for (index, skill) in skills.into_iter().enumerate() {
                    Reveal {
                        key: "{skill.name}",
                        id: reveal_id(SectionId::Skills, index),
                        config: RevealConfig::skill_tile(index),
                        class: "skill-tile",
                        RemoteImage {
                            src: skill.icon_url,
                            fallback: BROKEN_ICON,
                            alt: skill.alt(),
                            class: "skill-icon",
                        }
                        p { class: "skill-name", "{skill.name}" }
                    }
                }
            }
        }
    }
}
