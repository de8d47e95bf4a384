//! Light/dark theme state and the document-root side effect.
//!
//! The controller owns the current [`Theme`] and the root element's class
//! list. Every change removes the previous marker class and adds the new
//! one, so themed styles scoped under `.light` / `.dark` repaint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual mode of the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Marker class placed on the document root
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// Mutable class attribute of an element (the document root in practice)
pub trait ClassList {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

/// In-memory class list, used in tests and anywhere no DOM exists
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryClassList {
    classes: Vec<String>,
}

impl MemoryClassList {
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl ClassList for MemoryClassList {
    fn add_class(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

/// Owns the theme flag and writes it through to the document root.
///
/// The root is the only writer of the marker class; nothing else on the
/// page should touch it.
#[derive(Debug)]
pub struct ThemeController<R> {
    theme: Theme,
    root: R,
}

impl<R: ClassList> ThemeController<R> {
    /// Create a controller. The root is not touched until [`apply`](Self::apply)
    /// or [`toggle`](Self::toggle) is called.
    pub fn new(theme: Theme, root: R) -> Self {
        Self { theme, root }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    /// Write the current theme's marker onto the root, clearing the other one
    pub fn apply(&mut self) {
        self.root.remove_class(self.theme.toggled().class());
        self.root.add_class(self.theme.class());
    }

    /// Flip light/dark and repaint the root. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.apply();
        tracing::debug!(theme = %self.theme, "theme toggled");
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn apply_sets_single_marker() {
        let mut controller = ThemeController::new(Theme::Dark, MemoryClassList::default());
        controller.apply();
        assert_eq!(controller.root().classes(), ["dark".to_string()]);
    }

    #[test]
    fn toggle_twice_restores_marker() {
        let mut controller = ThemeController::new(Theme::Light, MemoryClassList::default());
        controller.apply();
        let before = controller.root().clone();

        assert_eq!(controller.toggle(), Theme::Dark);
        assert!(controller.root().contains("dark"));
        assert!(!controller.root().contains("light"));

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.root(), &before);
    }

    #[test]
    fn toggle_leaves_unrelated_classes() {
        let mut root = MemoryClassList::default();
        root.add_class("scroll-smooth");
        let mut controller = ThemeController::new(Theme::Light, root);
        controller.apply();
        controller.toggle();
        assert!(controller.root().contains("scroll-smooth"));
        assert!(controller.root().contains("dark"));
    }

    #[test]
    fn serde_uses_marker_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
