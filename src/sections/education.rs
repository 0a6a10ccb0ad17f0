use dioxus::prelude::*;
use portfolio_core::content::EDUCATION;
use portfolio_core::Stagger;
use portfolio_ui::{Glyph, Icon, Reveal, Section};

#[component]
pub fn Education() -> Element {
    rsx! {
        Section { id: "education", title: "Education", eyebrow: "How I learned the craft",
            div { class: "grid grid-2",
                for (i, entry) in EDUCATION.iter().enumerate() {
                    Reveal {
                        key: "{entry.title}",
                        class: "card education-card".to_string(),
                        delay_ms: Stagger::TIMELINE_CARDS.delay_ms(i),
                        div { class: "card-head",
                            div { class: "icon-tile tile-indigo",
                                Icon { glyph: Glyph::GraduationCap, size: 20 }
                            }
                            div {
                                h3 { class: "card-title", "{entry.title}" }
                                p { class: "card-meta", "{entry.organization} • {entry.period}" }
                            }
                        }
                        p { class: "body-text", "{entry.description}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{provide_static_context, render};

    fn education() -> Element {
        provide_static_context(2030);
        rsx! {
            Education {}
        }
    }

    #[test]
    fn one_card_per_entry() {
        let html = render(education);
        assert_eq!(html.matches("card education-card").count(), EDUCATION.len());
        assert!(html.contains("Interface School • 2019"));
    }
}
