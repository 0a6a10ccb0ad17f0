//! Skills Section
//!
//! Proficiency cards whose bars fill from 0 to the entry's level on first
//! viewport entry, followed by a row of technology pills.

use dioxus::prelude::*;
use portfolio_core::content::{SkillEntry, SKILLS, TECH_TAGS};
use portfolio_core::motion::{bar_fill_percent, BAR_FILL};
use portfolio_core::Stagger;
use portfolio_ui::{reveal_style, use_reveal, Reveal, Section};

#[component]
pub fn Skills() -> Element {
    rsx! {
        Section { id: "skills", title: "Skills & Superpowers", eyebrow: "What I do best",
            div { class: "grid grid-2",
                for (i, skill) in SKILLS.iter().enumerate() {
                    SkillCard { key: "{skill.name}", skill: *skill, index: i }
                }
            }
            div { class: "tag-row",
                for (i, tag) in TECH_TAGS.iter().enumerate() {
                    Reveal {
                        key: "{tag}",
                        class: "pill tech-tag".to_string(),
                        delay_ms: Stagger::TECH_TAGS.delay_ms(i),
                        offset_px: 8,
                        "{tag}"
                    }
                }
            }
        }
    }
}

/// One skill card. The card and its bar share a single reveal latch.
#[component]
fn SkillCard(skill: SkillEntry, index: usize) -> Element {
    let reveal = use_reveal();
    let fill = bar_fill_percent(skill.level, reveal.is_revealed());
    let card_style = reveal_style(10, Stagger::SKILL_CARDS.delay_ms(index));
    let bar_ms = BAR_FILL.as_millis();

    rsx! {
        div {
            id: reveal.dom_id(),
            class: reveal.class("card skill-card"),
            style: "{card_style}",
            div { class: "skill-head",
                span { class: "skill-name", "{skill.name}" }
                span { class: "skill-level", "{skill.level}%" }
            }
            div { class: "skill-track",
                div {
                    class: "skill-fill",
                    style: "width: {fill}%; transition-duration: {bar_ms}ms;",
                }
            }
            div { class: "card-orb orb-fuchsia" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{provide_context_with_motion, provide_static_context, render};
    use portfolio_core::MotionMode;

    fn skills() -> Element {
        provide_static_context(2030);
        rsx! {
            Skills {}
        }
    }

    #[test]
    fn one_card_per_skill_and_one_pill_per_tag() {
        let html = render(skills);
        assert_eq!(html.matches("card skill-card").count(), SKILLS.len());
        assert_eq!(html.matches("pill tech-tag").count(), TECH_TAGS.len());
    }

    #[test]
    fn settled_bars_match_levels() {
        let html = render(skills);
        for skill in SKILLS {
            assert!(
                html.contains(&format!("width: {}%;", skill.level)),
                "no bar at {}% in {html}",
                skill.level
            );
        }
        assert!(html.contains("width: 92%;"));
    }

    #[test]
    fn cards_stagger_by_index() {
        let html = render(skills);
        assert!(html.contains("--reveal-offset: 10px; --reveal-delay: 0ms;"));
        assert!(html.contains("--reveal-offset: 10px; --reveal-delay: 250ms;"));
        assert!(html.contains("--reveal-offset: 8px; --reveal-delay: 500ms;"));
    }

    fn animated_skills() -> Element {
        provide_context_with_motion(2030, MotionMode::Animated);
        rsx! {
            Skills {}
        }
    }

    #[test]
    fn animated_cards_wait_hidden_with_empty_bars() {
        let html = render(animated_skills);
        assert_eq!(html.matches("width: 0%;").count(), SKILLS.len(), "{html}");
        assert!(!html.contains("revealed"));
        assert_eq!(html.matches("card skill-card reveal\"").count(), SKILLS.len());
        assert!(html.contains("transition-duration: 900ms;"));
    }
}
