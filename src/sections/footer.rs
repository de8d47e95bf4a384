use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::content::profile::copyright;

#[component]
pub fn Footer() -> Element {
    let line = copyright(chrono::Local::now().year());

    rsx! {
        footer { class: "footer",
            p { "{line}" }
        }
    }
}
