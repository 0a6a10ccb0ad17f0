//! Section Layout
//!
//! Shared wrapper for every content section: anchor id, background glow,
//! eyebrow pill and heading, then arbitrary content.

use dioxus::prelude::*;

use super::icon::{Glyph, Icon};

/// Properties for the Section component
#[derive(Clone, PartialEq, Props)]
pub struct SectionProps {
    /// Anchor id the navigation links target (without `#`)
    pub id: String,
    /// Section heading
    pub title: String,
    /// Short label shown in the pill above the heading
    pub eyebrow: String,
    /// Section body
    pub children: Element,
}

/// Consistent spacing, decoration and heading markup for a page section.
/// Stateless.
#[component]
pub fn Section(props: SectionProps) -> Element {
    rsx! {
        section { id: "{props.id}", class: "page-section",
            div { class: "section-glow" }
            div { class: "container",
                div { class: "section-heading",
                    div { class: "eyebrow",
                        Icon { glyph: Glyph::Sparkles, size: 14, class: "accent-fuchsia".to_string() }
                        "{props.eyebrow}"
                    }
                    h2 { class: "section-title", "{props.title}" }
                }
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        rsx! {
            Section { id: "skills", title: "Skills & Superpowers", eyebrow: "What I do best",
                p { "body" }
            }
        }
    }

    #[test]
    fn renders_anchor_heading_and_children() {
        let mut dom = VirtualDom::new(sample);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("id=\"skills\""));
        assert!(html.contains("What I do best"));
        assert!(html.contains("Skills &amp; Superpowers"), "{html}");
        assert!(html.contains("<p>body</p>"));
    }
}
