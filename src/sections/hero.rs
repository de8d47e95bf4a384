//! Hero banner: photo, greeting and the two calls to action

use dioxus::prelude::*;
use portfolio_core::content::profile::{GREETING, PROFILE_PHOTO, TAGLINE};
use portfolio_core::{RevealConfig, SectionId};
use portfolio_ui::{
    AnimatedText, AssetImage, ButtonVariant, Entrance, LinkButton, HERO_POP, HERO_RISE,
};

#[component]
pub fn Hero() -> Element {
    let projects_href = format!("#{}", SectionId::Projects.id());
    let contact_href = format!("#{}", SectionId::Contact.id());

    rsx! {
        section { id: SectionId::Hero.id(), class: "hero",
            Entrance { name: HERO_POP, config: RevealConfig::HERO_AVATAR, class: "hero-avatar",
                AssetImage { asset: PROFILE_PHOTO, class: "hero-avatar-img" }
            }

            h2 { class: "hero-title",
                AnimatedText { text: GREETING, class: "centered" }
            }
            p { class: "hero-tagline",
                AnimatedText { text: TAGLINE, class: "centered" }
            }

            Entrance { name: HERO_RISE, config: RevealConfig::HERO_ACTIONS, class: "hero-actions",
                LinkButton { href: projects_href, variant: ButtonVariant::Primary, "View Projects" }
                LinkButton { href: contact_href, variant: ButtonVariant::Outline, "Get in Touch" }
            }
        }
    }
}
