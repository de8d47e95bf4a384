//! Phoenix Portfolio Core Library
//!
//! Framework-free model behind the single-page portfolio: the theme
//! controller, the hard-coded site content, declarative animation configs
//! and the small state machines the UI drives.
//!
//! ## Overview
//!
//! Nothing here touches the DOM directly. The UI layer implements
//! [`ClassList`] for the document root and feeds intersection ratios into
//! [`RevealTrigger`]; everything else is plain data.
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{MemoryClassList, Theme, ThemeController};
//!
//! let mut controller = ThemeController::new(Theme::Light, MemoryClassList::default());
//! controller.apply();
//! assert!(controller.root().contains("light"));
//!
//! controller.toggle();
//! assert!(controller.root().contains("dark"));
//! assert!(!controller.root().contains("light"));
//! ```

pub mod animation;
pub mod contact;
pub mod content;
pub mod error;
pub mod image;
pub mod menu;
pub mod reveal;
pub mod star;
pub mod text;
pub mod theme;

// Re-exports
pub use animation::{Easing, Frame, RevealConfig, SpringCurve, Transition};
pub use contact::{ContactError, ContactForm, MailtoRequest};
pub use content::{NavIcon, NavLink, ProjectCard, SectionId, SiteContent, SkillEntry, NAV_LINKS};
pub use error::{PortfolioError, Result};
pub use image::{FallbackImage, ImageAsset, ImageSource};
pub use menu::MenuState;
pub use reveal::{RevealState, RevealTrigger, Visibility};
pub use star::{StarParams, STAR_COUNT};
pub use text::{tokenize, WordToken, WORD_STAGGER_S};
pub use theme::{ClassList, MemoryClassList, Theme, ThemeController};
