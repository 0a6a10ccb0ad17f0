use dioxus::prelude::*;
use portfolio_core::content::TESTIMONIALS;
use portfolio_core::Stagger;
use portfolio_ui::{Glyph, Icon, Reveal, Section};

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        Section { id: "testimonials", title: "Testimonials", eyebrow: "Words from collaborators",
            div { class: "grid grid-3",
                for (i, entry) in TESTIMONIALS.iter().enumerate() {
                    Reveal {
                        key: "{i}",
                        class: "card quote-card".to_string(),
                        delay_ms: Stagger::QUOTE_CARDS.delay_ms(i),
                        Icon { glyph: Glyph::Quote, size: 24, class: "quote-mark".to_string() }
                        p { class: "quote-text", "“{entry.quote}”" }
                        p { class: "quote-attribution", "{entry.attribution}" }
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

    fn testimonials() -> Element {
        provide_static_context(2030);
        rsx! {
            Testimonials {}
        }
    }

    #[test]
    fn one_card_per_quote() {
        let html = render(testimonials);
        assert_eq!(html.matches("card quote-card").count(), TESTIMONIALS.len());
        assert!(html.contains("PM, Indie Collective"));
    }
}
