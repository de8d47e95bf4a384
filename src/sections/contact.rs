//! Contact section.
//!
//! The form never talks to a server: a valid submission is handed to the
//! user's mail client as a `mailto:` request.

use dioxus::prelude::*;
use portfolio_core::content::profile::{mail_href, phone_href, CONTACT_INTRO, GITHUB_URL};
use portfolio_core::{ContactForm, PortfolioError, RevealConfig, SectionId};
use portfolio_ui::{reveal_id, Button, ButtonVariant, Icon, IconKind, Reveal, RevealSection};

use super::SectionHeading;
use crate::mail_client::open_mail_client;

#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = ContactForm {
            name: name(),
            email: email(),
            message: message(),
        };

        match form.to_request() {
            Ok(request) => {
                error.set(None);
                open_mail_client(&request);
            }
            Err(PortfolioError::Contact(e)) => {
                tracing::debug!("Contact form rejected: {}", e);
                error.set(Some(e.to_string()));
            }
            Err(e) => {
                tracing::warn!("Contact form failed: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        RevealSection { id: SectionId::Contact.id(), config: RevealConfig::SECTION, class: "section",
            SectionHeading { icon: IconKind::Phone, title: "Contact Me" }

            Reveal {
                id: reveal_id(SectionId::Contact, "card"),
                config: RevealConfig::CONTACT_CARD,
                class: "card contact-card",
                p { class: "contact-intro", "{CONTACT_INTRO}" }

                form { class: "contact-form", onsubmit: submit,
                    div { class: "form-field",
                        label { r#for: "name", class: "form-label", "Name" }
                        input {
                            r#type: "text",
                            id: "name",
                            name: "Name",
                            class: "form-input",
                            placeholder: "Your Name",
                            required: true,
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "email", class: "form-label", "Email" }
                        input {
                            r#type: "email",
                            id: "email",
                            name: "Email",
                            class: "form-input",
                            placeholder: "your.email@example.com",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "message", class: "form-label", "Message" }
                        textarea {
                            id: "message",
                            name: "Message",
                            rows: "5",
                            class: "form-input",
                            placeholder: "Your message...",
                            required: true,
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                    }

                    if let Some(err) = error() {
                        p { class: "form-error", role: "alert", "{err}" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        class: "btn-block".to_string(),
                        "Send Message"
                    }
                }

                div { class: "contact-links",
                    a {
                        class: "contact-link",
                        href: GITHUB_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": "GitHub Profile",
                        Icon { kind: IconKind::Github, size: 32 }
                    }
                    a {
                        class: "contact-link",
                        href: phone_href(),
                        "aria-label": "Call Me",
                        Icon { kind: IconKind::Phone, size: 32 }
                    }
                    a {
                        class: "contact-link",
                        href: mail_href(),
                        "aria-label": "Email Me",
                        Icon { kind: IconKind::Mail, size: 32 }
                    }
                }
            }
        }
    }
}
