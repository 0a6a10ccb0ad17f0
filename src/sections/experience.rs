use dioxus::prelude::*;
use portfolio_core::content::EXPERIENCE;
use portfolio_core::Stagger;
use portfolio_ui::{Glyph, Icon, Reveal, Section};

#[component]
pub fn Experience() -> Element {
    rsx! {
        Section { id: "experience", title: "Experience", eyebrow: "Where I built cool things",
            div { class: "grid grid-2",
                for (i, entry) in EXPERIENCE.iter().enumerate() {
                    Reveal {
                        key: "{entry.role}",
                        class: "card experience-card".to_string(),
                        delay_ms: Stagger::TIMELINE_CARDS.delay_ms(i),
                        div { class: "card-head",
                            div { class: "icon-tile tile-fuchsia",
                                Icon { glyph: Glyph::Briefcase, size: 20 }
                            }
                            div {
                                h3 { class: "card-title", "{entry.role}" }
                                p { class: "card-meta", "{entry.organization} • {entry.period}" }
                            }
                        }
                        ul { class: "achievements",
                            for point in entry.achievements.iter() {
                                li { key: "{point}", "{point}" }
                            }
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
    use crate::test_util::{provide_static_context, render};

    fn experience() -> Element {
        provide_static_context(2030);
        rsx! {
            Experience {}
        }
    }

    #[test]
    fn one_card_per_role_with_all_achievements() {
        let html = render(experience);
        assert_eq!(html.matches("card experience-card").count(), EXPERIENCE.len());
        let points: usize = EXPERIENCE.iter().map(|e| e.achievements.len()).sum();
        assert_eq!(html.matches("<li>").count(), points);
        assert!(html.contains("Quantum Labs • 2022 — Present"), "{html}");
    }
}
