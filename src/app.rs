use dioxus::prelude::*;
use portfolio_core::{SiteContent, ThemeController};
use portfolio_ui::{keyframe_styles, StarField};

use crate::components::Navbar;
use crate::document_root::DocumentRoot;
use crate::sections::{Footer, SectionView};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the theme controller and passes the current theme plus the toggle
/// down; the controller writes the marker class onto `<html>`. Sections are
/// rendered from the same [`SiteContent`] the binary validates at startup.
#[component]
pub fn App() -> Element {
    let mut controller = use_signal(|| ThemeController::new(crate::initial_theme(), DocumentRoot));
    let keyframes = use_hook(keyframe_styles);
    let site = use_hook(SiteContent::default);

    // Mark the root once on mount; later changes go through toggle()
    use_effect(move || {
        controller.write().apply();
    });

    let theme = controller.read().theme();

    let toggle_theme = move |_: ()| {
        controller.write().toggle();
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {keyframes} }

        div { class: "page page--{theme}",
            StarField { theme }

            Navbar { theme, on_toggle_theme: toggle_theme }

            // Offset for the fixed navbar
            div { class: "page-content",
                for section in site.sections {
                    {
                        let id = section.id();
                        rsx! {
                            SectionView { key: "{id}", section }
                        }
                    }
                }
                Footer {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::NAV_LINKS;

    fn render_page() -> String {
        let mut dom = VirtualDom::new(App);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn every_nav_anchor_rendered_exactly_once() {
        let html = render_page();
        for link in NAV_LINKS {
            let needle = format!("id=\"{}\"", link.anchor);
            assert_eq!(html.matches(&needle).count(), 1, "{}", needle);
        }
    }

    #[test]
    fn sections_render_in_document_order() {
        let html = render_page();
        let positions: Vec<usize> = SiteContent::default()
            .sections
            .iter()
            .map(|section| html.find(&format!("id=\"{}\"", section.id())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
