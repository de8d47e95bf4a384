//! Button Components
//!
//! - Primary: solid blue call to action
//! - Outline: bordered secondary action
//! - Icon: round control for the theme toggle and menu

use dioxus::prelude::*;

use super::script::{anchor_of, scroll_to_anchor};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid blue fill, white text
    #[default]
    Primary,
    /// Blue border, fills on hover
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

fn full_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         button_type: "submit".to_string(),
///         "Send Message"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = full_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            {props.children}
        }
    }
}

/// Anchor styled as a button, for in-page calls to action.
///
/// `#anchor` targets scroll in place; the `href` stays for semantics.
#[component]
pub fn LinkButton(
    #[props(into)] href: String,
    #[props(default)] variant: ButtonVariant,
    children: Element,
) -> Element {
    let target = anchor_of(&href).map(str::to_string);

    rsx! {
        a {
            class: variant.class(),
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                if let Some(anchor) = &target {
                    evt.prevent_default();
                    scroll_to_anchor(anchor);
                }
            },
            {children}
        }
    }
}

/// Round icon-only control
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    #[props(into)]
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let class = full_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}
