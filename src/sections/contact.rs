//! Contact Section
//!
//! Placeholder form: submission is cancelled and nothing is sent. A
//! companion card links out to the owner's profiles and mailbox.

use dioxus::prelude::*;
use portfolio_core::contact::{self, ContactField, DISCLAIMER, MESSAGE_ROWS};
use portfolio_ui::{Button, ButtonVariant, Glyph, Icon, LinkButton, Reveal, Section};

use crate::context::use_site_config;

#[component]
pub fn Contact() -> Element {
    let config = use_site_config();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        contact::submit();
    };

    rsx! {
        Section { id: "contact", title: "Contact", eyebrow: "Let’s build something",
            div { class: "grid grid-2",
                Reveal {
                    form { class: "card contact-form", onsubmit: on_submit,
                        div { class: "form-grid",
                            FormField { field: ContactField::Name }
                            FormField { field: ContactField::Email }
                        }
                        FormField { field: ContactField::Message }
                        Button { button_type: "submit".to_string(), class: "form-submit".to_string(),
                            Icon { glyph: Glyph::Mail }
                            "Send Message"
                        }
                        p { class: "form-note", "{DISCLAIMER}" }
                    }
                }
                Reveal { class: "card card-gradient-cool".to_string(),
                    h4 { class: "card-title", "Let’s connect" }
                    p { class: "body-text", "Open to freelance projects, consulting, and full‑time roles." }
                    div { class: "connect-links",
                        LinkButton { href: config.github_url.clone(), variant: ButtonVariant::Outline,
                            Icon { glyph: Glyph::Github }
                            "GitHub"
                        }
                        LinkButton { href: config.linkedin_url.clone(), variant: ButtonVariant::Outline,
                            Icon { glyph: Glyph::Linkedin }
                            "LinkedIn"
                        }
                        LinkButton { href: config.mailto(), variant: ButtonVariant::Outline,
                            Icon { glyph: Glyph::Mail }
                            "Email"
                        }
                    }
                }
            }
        }
    }
}

/// Label plus uncontrolled input (or textarea for the message)
#[component]
fn FormField(field: ContactField) -> Element {
    let id = field.dom_id();
    let placeholder = field.placeholder();

    rsx! {
        div { class: "form-field",
            label { class: "form-label", r#for: id, {field.label()} }
            {match field.input_type() {
                Some(kind) => rsx! {
                    input { id: id, name: id, class: "form-control", r#type: kind, placeholder: placeholder }
                },
                None => rsx! {
                    textarea { id: id, name: id, class: "form-control", rows: "{MESSAGE_ROWS}", placeholder: placeholder }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{provide_static_context, render};

    fn contact() -> Element {
        provide_static_context(2030);
        rsx! {
            Contact {}
        }
    }

    #[test]
    fn form_has_no_submission_target() {
        let html = render(contact);
        assert!(html.contains("<form"));
        assert!(!html.contains("action="));
        assert!(!html.contains("method="));
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains(DISCLAIMER));
    }

    #[test]
    fn renders_all_fields() {
        let html = render(contact);
        for field in ContactField::ALL {
            assert!(html.contains(&format!("id=\"{}\"", field.dom_id())));
            assert!(html.contains(field.placeholder()));
        }
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("rows=\"5\""));
        assert!(html.contains("href=\"mailto:hello@example.com\""));
    }
}
