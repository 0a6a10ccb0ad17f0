//! Projects Section
//!
//! Each project card is itself the outbound link.

use dioxus::prelude::*;
use portfolio_core::content::{ProjectEntry, PROJECTS};
use portfolio_core::Stagger;
use portfolio_ui::{reveal_style, use_reveal, Glyph, Icon, Pill, Section};

#[component]
pub fn Projects() -> Element {
    rsx! {
        Section { id: "projects", title: "Selected Projects", eyebrow: "A taste of my builds",
            div { class: "grid grid-3",
                for (i, project) in PROJECTS.iter().enumerate() {
                    ProjectCard { key: "{project.title}", project: *project, index: i }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: ProjectEntry, index: usize) -> Element {
    let reveal = use_reveal();
    let style = reveal_style(16, Stagger::PROJECT_CARDS.delay_ms(index));

    rsx! {
        a {
            id: reveal.dom_id(),
            class: reveal.class("card project-card"),
            style: "{style}",
            href: project.link,
            target: "_blank",
            rel: "noreferrer",
            div { class: "card-sheen" }
            div { class: "card-head",
                div { class: "icon-tile tile-cyan",
                    Icon { glyph: Glyph::Code, size: 20 }
                }
                h3 { class: "card-title", "{project.title}" }
            }
            p { class: "body-text", "{project.description}" }
            div { class: "tag-row",
                for tag in project.tags.iter() {
                    Pill { key: "{tag}", class: "tag".to_string(), "{tag}" }
                }
            }
            span { class: "explore",
                "Explore "
                Icon { glyph: Glyph::ExternalLink }
            }
            div { class: "card-orb orb-cyan" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{provide_static_context, render};

    fn projects() -> Element {
        provide_static_context(2030);
        rsx! {
            Projects {}
        }
    }

    #[test]
    fn one_link_card_per_project() {
        let html = render(projects);
        assert_eq!(html.matches("card project-card").count(), PROJECTS.len());
        assert_eq!(html.matches("target=\"_blank\"").count(), PROJECTS.len());
        let tags: usize = PROJECTS.iter().map(|p| p.tags.len()).sum();
        assert_eq!(html.matches("pill tag").count(), tags);
    }
}
