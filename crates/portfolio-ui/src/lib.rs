//! Phoenix Portfolio UI Components
//!
//! Dioxus presentational components for the portfolio page. None of them
//! own application state; the theme and every callback arrive as props.
//!
//! ## Animation
//!
//! - Mount-time entrances ([`Entrance`], [`AnimatedText`]) play CSS
//!   keyframes generated from `portfolio_core` configs; include
//!   [`keyframe_styles`] once in the page stylesheet.
//! - Scroll reveals ([`Reveal`], [`RevealSection`]) watch their element
//!   with an intersection observer and switch from hidden to visible once.

pub mod components;

pub use components::*;
