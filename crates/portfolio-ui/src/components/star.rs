//! Star Field
//!
//! 150 shooting-star particles behind the page content. Parameters are
//! drawn once when the field mounts and never resampled on re-render.

use dioxus::prelude::*;
use portfolio_core::{StarParams, Theme, STAR_COUNT};

/// A single particle.
///
/// `theme` is carried through to the element but does not select the
/// colour; stars are always white.
#[component]
pub fn Star(params: StarParams, theme: Theme) -> Element {
    let style = params.style();

    rsx! {
        div {
            class: "star",
            "data-theme": "{theme}",
            style: "{style}",
        }
    }
}

/// Full-page layer of independent stars
#[component]
pub fn StarField(theme: Theme, #[props(default = STAR_COUNT)] count: usize) -> Element {
    let stars = use_hook(move || StarParams::field(count, &mut rand::rng()));

    rsx! {
        div { class: "star-field", "aria-hidden": "true",
            for (i, params) in stars.into_iter().enumerate() {
                Star { key: "{i}", params, theme }
            }
        }
    }
}
