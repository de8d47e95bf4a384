//! The five page sections plus the footer, in document order.

mod about;
mod contact;
mod footer;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use dioxus::prelude::*;
use portfolio_core::SectionId;
use portfolio_ui::{Icon, IconKind};

/// The section component rendered for `section`
#[component]
pub fn SectionView(section: SectionId) -> Element {
    match section {
        SectionId::Hero => rsx! { Hero {} },
        SectionId::About => rsx! { About {} },
        SectionId::Skills => rsx! { Skills {} },
        SectionId::Projects => rsx! { Projects {} },
        SectionId::Contact => rsx! { Contact {} },
    }
}

/// Centered section heading with a leading icon
#[component]
fn SectionHeading(icon: IconKind, title: &'static str) -> Element {
    rsx! {
        h3 { class: "section-title",
            Icon { kind: icon, size: 32, class: "section-title-icon" }
            "{title}"
        }
    }
}
