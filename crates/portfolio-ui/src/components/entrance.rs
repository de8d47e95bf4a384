//! Mount-time entrance animations
//!
//! Keyframes are generated from `portfolio_core` configs so the CSS and
//! the Rust side agree on frames and timing.

use dioxus::prelude::*;
use portfolio_core::RevealConfig;

pub const WORD_RISE: &str = "word-rise";
pub const HERO_POP: &str = "hero-pop";
pub const HERO_RISE: &str = "hero-rise";

/// `@keyframes` rules for every named entrance
pub fn keyframe_styles() -> String {
    [
        (WORD_RISE, RevealConfig::word(0.0)),
        (HERO_POP, RevealConfig::HERO_AVATAR),
        (HERO_RISE, RevealConfig::HERO_ACTIONS),
    ]
    .iter()
    .map(|(name, config)| config.keyframes(name))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Wrapper that plays the `name` keyframes once on mount
#[component]
pub fn Entrance(
    name: &'static str,
    config: RevealConfig,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let style = config.animation(name);

    rsx! {
        div { class: "{class}", style: "{style}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyframes_cover_all_entrances() {
        let css = keyframe_styles();
        for name in [WORD_RISE, HERO_POP, HERO_RISE] {
            assert!(css.contains(&format!("@keyframes {name} {{")), "{name}");
        }
        assert_eq!(css.lines().count(), 3);
    }
}
