//! Script Bridge
//!
//! Small scripts evaluated in the webview. They are sent immediately, in
//! call order; results are only awaited to log failures.

use dioxus::document;
use dioxus::prelude::*;

/// Quote a value as a JavaScript string literal
pub fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Evaluate `script` without waiting for it
pub fn run_script(script: String) {
    let eval = document::eval(&script);
    spawn(async move {
        if let Err(e) = eval.await {
            tracing::warn!("Document script failed: {:?}", e);
        }
    });
}

/// Script that smoothly scrolls the element with id `anchor` into view.
///
/// A missing element is a no-op.
pub fn scroll_into_view_script(anchor: &str) -> String {
    format!(
        "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        js_string(anchor)
    )
}

/// Scroll the page to an in-page anchor.
///
/// The desktop webview hands any followed `<a href>` to the system browser,
/// so in-page links cancel the default action and scroll here instead.
pub fn scroll_to_anchor(anchor: &str) {
    tracing::debug!(anchor, "scrolling to section");
    run_script(scroll_into_view_script(anchor));
}

/// `#anchor` hrefs name the target element; anything else has none
pub fn anchor_of(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|anchor| !anchor.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::NAV_LINKS;

    #[test]
    fn strings_are_escaped() {
        assert_eq!(js_string("a\"b\\c"), r#""a\"b\\c""#);
    }

    #[test]
    fn every_nav_link_scrolls_to_its_section() {
        for link in NAV_LINKS {
            let script = scroll_into_view_script(link.anchor);
            assert_eq!(
                script,
                format!(
                    "document.getElementById(\"{}\")?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
                    link.anchor
                )
            );
            assert_eq!(anchor_of(&link.href()), Some(link.anchor));
        }
    }

    #[test]
    fn only_fragment_hrefs_have_anchors() {
        assert_eq!(anchor_of("#projects"), Some("projects"));
        assert_eq!(anchor_of("#"), None);
        assert_eq!(anchor_of("https://github.com/"), None);
        assert_eq!(anchor_of("mailto:someone@example.com"), None);
    }
}
