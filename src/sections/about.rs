use dioxus::prelude::*;
use portfolio_core::content::profile::{ABOUT_PARAGRAPHS, ABOUT_PHOTO};
use portfolio_core::{RevealConfig, SectionId};
use portfolio_ui::{reveal_id, AssetImage, IconKind, Reveal, RevealSection};

use super::SectionHeading;

#[component]
pub fn About() -> Element {
    rsx! {
        RevealSection { id: SectionId::About.id(), config: RevealConfig::SECTION, class: "section",
            SectionHeading { icon: IconKind::User, title: "About Me" }

            div { class: "about-grid",
                Reveal {
                    id: reveal_id(SectionId::About, "photo"),
                    config: RevealConfig::ABOUT_IMAGE,
                    class: "about-photo",
                    AssetImage { asset: ABOUT_PHOTO, class: "about-photo-img" }
                }
                Reveal { id: reveal_id(SectionId::About, "text"), config: RevealConfig::ABOUT_TEXT,
                    for paragraph in ABOUT_PARAGRAPHS {
                        p { class: "body-text", "{paragraph}" }
                    }
                }
            }
        }
    }
}
