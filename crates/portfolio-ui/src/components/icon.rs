//! Inline Lucide icons

use dioxus::prelude::*;
use portfolio_core::NavIcon;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Home,
    User,
    Award,
    Briefcase,
    Phone,
    Sun,
    Moon,
    Github,
    Mail,
    Code,
    Menu,
    Close,
}

impl From<NavIcon> for IconKind {
    fn from(icon: NavIcon) -> Self {
        match icon {
            NavIcon::Home => IconKind::Home,
            NavIcon::User => IconKind::User,
            NavIcon::Award => IconKind::Award,
            NavIcon::Briefcase => IconKind::Briefcase,
            NavIcon::Phone => IconKind::Phone,
        }
    }
}

/// Stroke icon sized in CSS pixels
#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default = 24)] size: u32,
    #[props(default, into)] class: String,
) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: "{class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_body(kind)}
        }
    }
}

fn icon_body(kind: IconKind) -> Element {
    match kind {
        IconKind::Home => rsx! {
            path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            polyline { points: "9 22 9 12 15 12 15 22" }
        },
        IconKind::User => rsx! {
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        },
        IconKind::Award => rsx! {
            circle { cx: "12", cy: "8", r: "6" }
            path { d: "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" }
        },
        IconKind::Briefcase => rsx! {
            rect { width: "20", height: "14", x: "2", y: "7", rx: "2", ry: "2" }
            path { d: "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
        },
        IconKind::Phone => rsx! {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        },
        IconKind::Sun => rsx! {
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        },
        IconKind::Moon => rsx! {
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        },
        IconKind::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        IconKind::Mail => rsx! {
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        IconKind::Code => rsx! {
            polyline { points: "16 18 22 12 16 6" }
            polyline { points: "8 6 2 12 8 18" }
        },
        // Hamburger and close glyphs from the mobile menu button
        IconKind::Menu => rsx! {
            path { d: "M4 6h16M4 12h16m-7 6h7" }
        },
        IconKind::Close => rsx! {
            path { d: "M6 18L18 6M6 6l12 12" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_icons_map_one_to_one() {
        assert_eq!(IconKind::from(NavIcon::Home), IconKind::Home);
        assert_eq!(IconKind::from(NavIcon::User), IconKind::User);
        assert_eq!(IconKind::from(NavIcon::Award), IconKind::Award);
        assert_eq!(IconKind::from(NavIcon::Briefcase), IconKind::Briefcase);
        assert_eq!(IconKind::from(NavIcon::Phone), IconKind::Phone);
    }
}
