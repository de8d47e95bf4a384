//! Navigation Bar
//!
//! Fixed header with the brand, the section links and the theme toggle.
//! Below 768px the links collapse into a menu behind a hamburger button.

use dioxus::prelude::*;
use portfolio_core::content::profile::BRAND;
use portfolio_core::{MenuState, Theme, NAV_LINKS};
use portfolio_ui::{scroll_to_anchor, Icon, IconButton, IconKind};

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    /// Current theme, owned by the app root
    pub theme: Theme,
    /// Flip light/dark
    pub on_toggle_theme: EventHandler<()>,
}

/// Icon on the theme toggle: the mode a click switches to
fn theme_toggle_icon(theme: Theme) -> IconKind {
    match theme {
        Theme::Light => IconKind::Moon,
        Theme::Dark => IconKind::Sun,
    }
}

fn menu_icon(menu: MenuState) -> IconKind {
    if menu.is_open() {
        IconKind::Close
    } else {
        IconKind::Menu
    }
}

/// Site header
///
/// Desktop and mobile menus both render from `NAV_LINKS`. Link clicks
/// scroll to their section in place; a mobile link click also closes the menu.
#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let mut menu = use_signal(MenuState::default);
    let on_toggle_theme = props.on_toggle_theme;
    let toggle_icon = theme_toggle_icon(props.theme);
    let current_menu = *menu.read();

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                h1 { class: "navbar-brand", "{BRAND}" }

                // Desktop navigation
                div { class: "navbar-links",
                    for link in NAV_LINKS {
                        a {
                            key: "{link.name}",
                            class: "navbar-link",
                            href: link.href(),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                scroll_to_anchor(link.anchor);
                            },
                            Icon { kind: IconKind::from(link.icon), size: 18, class: "navbar-link-icon" }
                            "{link.name}"
                        }
                    }
                    IconButton {
                        aria_label: "Toggle theme",
                        onclick: move |_| on_toggle_theme.call(()),
                        Icon { kind: toggle_icon, size: 20 }
                    }
                }

                // Mobile controls
                div { class: "navbar-mobile-controls",
                    IconButton {
                        aria_label: "Toggle theme",
                        onclick: move |_| on_toggle_theme.call(()),
                        Icon { kind: toggle_icon, size: 20 }
                    }
                    IconButton {
                        aria_label: "Open mobile menu",
                        class: "menu-btn".to_string(),
                        onclick: move |_| menu.write().toggle(),
                        Icon { kind: menu_icon(current_menu), size: 24 }
                    }
                }
            }

            // Mobile navigation
            div {
                class: if current_menu.is_open() { "navbar-mobile-menu open" } else { "navbar-mobile-menu" },
                for link in NAV_LINKS {
                    a {
                        key: "{link.name}",
                        class: "navbar-mobile-link",
                        href: link.href(),
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            menu.write().close();
                            scroll_to_anchor(link.anchor);
                        },
                        Icon { kind: IconKind::from(link.icon), size: 18, class: "navbar-link-icon" }
                        "{link.name}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_icon_shows_other_mode() {
        assert_eq!(theme_toggle_icon(Theme::Light), IconKind::Moon);
        assert_eq!(theme_toggle_icon(Theme::Dark), IconKind::Sun);
    }

    fn light_navbar() -> Element {
        rsx! { Navbar { theme: Theme::Light, on_toggle_theme: move |_| {} } }
    }

    #[test]
    fn both_menus_link_every_section() {
        let mut dom = VirtualDom::new(light_navbar);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        for link in NAV_LINKS {
            let href = format!("href=\"{}\"", link.href());
            assert_eq!(html.matches(&href).count(), 2, "{href}");
        }
        assert!(html.contains("navbar-mobile-menu\""), "menu starts closed");
    }

    #[test]
    fn menu_icon_follows_state() {
        let mut menu = MenuState::default();
        assert_eq!(menu_icon(menu), IconKind::Menu);
        menu.toggle();
        assert_eq!(menu_icon(menu), IconKind::Close);
    }
}
