//! Reveal On Scroll
//!
//! Elements start in their hidden frame and transition to the visible one
//! when an intersection observer reports they crossed their threshold.
//! One-shot configs disconnect the observer after the first reveal.

use std::fmt::Display;

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::{RevealConfig, RevealTrigger, SectionId, Visibility};

use super::script::js_string;

/// DOM id of a revealed element inside `section`, e.g. `skills-3`
pub fn reveal_id(section: SectionId, part: impl Display) -> String {
    format!("{}-{}", section.id(), part)
}

/// Script that observes `element_id` and streams [`Visibility`] updates.
///
/// Waits for the element to be mounted before attaching.
pub fn observer_script(element_id: &str, threshold: f64, once: bool) -> String {
    let id = js_string(element_id);

    format!(
        r#"
const id = {id};
const threshold = {threshold};
const once = {once};
const attach = () => {{
  const el = document.getElementById(id);
  if (!el) {{
    requestAnimationFrame(attach);
    return;
  }}
  const observer = new IntersectionObserver((entries) => {{
    for (const entry of entries) {{
      dioxus.send({{ intersecting: entry.isIntersecting, ratio: entry.intersectionRatio }});
      if (once && entry.isIntersecting && entry.intersectionRatio >= threshold) {{
        observer.disconnect();
        return;
      }}
    }}
  }}, {{ threshold: [0, threshold] }});
  observer.observe(el);
}};
attach();
await new Promise(() => {{}});
"#
    )
}

/// Attach a visibility trigger to the element with id `element_id`.
///
/// The id is fixed by the first render.
pub fn use_reveal(config: RevealConfig, element_id: String) -> (String, Signal<RevealTrigger>) {
    let dom_id = use_hook(move || element_id);
    let mut trigger = use_signal(|| RevealTrigger::from(&config));

    let observed = dom_id.clone();
    use_future(move || {
        let observed = observed.clone();
        async move {
            let script = observer_script(&observed, config.threshold, config.once);
            let mut eval = document::eval(&script);

            loop {
                match eval.recv::<Visibility>().await {
                    Ok(visibility) => {
                        if trigger.write().observe(visibility) {
                            tracing::debug!(element = %observed, "revealed");
                        }
                        if trigger.peek().is_settled() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(element = %observed, "visibility observer stopped: {:?}", err);
                        break;
                    }
                }
            }
        }
    });

    (dom_id, trigger)
}

/// Page `section` that reveals on scroll
#[component]
pub fn RevealSection(
    #[props(into)] id: String,
    config: RevealConfig,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let (dom_id, trigger) = use_reveal(config, id);
    let style = config.style(trigger.read().is_revealed());

    rsx! {
        section { id: "{dom_id}", class: "{class}", style: "{style}", {children} }
    }
}

/// `div` that reveals on scroll. `id` must be unique on the page; see
/// [`reveal_id`].
#[component]
pub fn Reveal(
    #[props(into)] id: String,
    config: RevealConfig,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let (dom_id, trigger) = use_reveal(config, id);
    let style = config.style(trigger.read().is_revealed());

    rsx! {
        div { id: "{dom_id}", class: "{class}", style: "{style}", {children} }
    }
}
