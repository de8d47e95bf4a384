//! Animated Text
//!
//! Reveals a sentence word by word with a spring entrance. The animation
//! plays once when the words mount.

use dioxus::prelude::*;
use portfolio_core::tokenize;

use super::entrance::WORD_RISE;

/// Word-by-word entrance. Blank `text` renders an empty container.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     h2 { AnimatedText { text: "Hi, I'm Prince Akowe", class: "centered" } }
/// }
/// ```
#[component]
pub fn AnimatedText(#[props(into)] text: String, #[props(default, into)] class: String) -> Element {
    let tokens = tokenize(&text);

    rsx! {
        div { class: "animated-text {class}",
            for token in tokens {
                {
                    let style = token.reveal().animation(WORD_RISE);
                    rsx! {
                        span {
                            key: "{token.index}",
                            class: "animated-word",
                            style: "{style}",
                            "{token.text}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn blank() -> Element {
        rsx! { AnimatedText { text: "" } }
    }

    fn three_words() -> Element {
        rsx! { AnimatedText { text: "a b c" } }
    }

    #[test]
    fn blank_text_renders_no_words() {
        let html = render(blank);
        assert!(html.contains("class=\"animated-text "), "{html}");
        assert_eq!(html.matches("animated-word").count(), 0);
    }

    #[test]
    fn words_render_in_order_with_stagger() {
        let html = render(three_words);
        assert_eq!(html.matches("class=\"animated-word\"").count(), 3, "{html}");

        let words: Vec<usize> = [">a</span>", ">b</span>", ">c</span>"]
            .iter()
            .map(|word| html.find(word).unwrap())
            .collect();
        assert!(words[0] < words[1] && words[1] < words[2]);

        // Second and third words wait for the ones before them
        assert!(html.contains("0.08s 1 both"));
        assert!(html.contains("0.16s 1 both"));
    }
}
