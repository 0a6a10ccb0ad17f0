use dioxus::prelude::*;
use portfolio_core::content::{ABOUT_HIGHLIGHTS, ABOUT_STATS, ABOUT_SUMMARY};
use portfolio_ui::{Glyph, Icon, Reveal, Section};

/// Icon tile style for each highlight row, in order
const HIGHLIGHT_TILES: [(Glyph, &str); 2] = [
    (Glyph::Cpu, "icon-tile tile-fuchsia"),
    (Glyph::Rocket, "icon-tile tile-cyan"),
];

#[component]
pub fn About() -> Element {
    rsx! {
        Section { id: "about", title: "About", eyebrow: "Who I am",
            div { class: "grid grid-2 align-center",
                Reveal { class: "card".to_string(), offset_px: 16,
                    p { class: "body-text", "{ABOUT_SUMMARY}" }
                    div { class: "stat-grid",
                        for stat in ABOUT_STATS.iter() {
                            div { key: "{stat.label}", class: "stat-tile",
                                p { class: "stat-label", "{stat.label}" }
                                p { class: "stat-value", "{stat.value}" }
                            }
                        }
                    }
                }
                Reveal { class: "card card-gradient-warm".to_string(), offset_px: 16,
                    for (highlight, (glyph, tile)) in ABOUT_HIGHLIGHTS.iter().zip(HIGHLIGHT_TILES) {
                        div { key: "{highlight.title}", class: "highlight-row",
                            div { class: tile,
                                Icon { glyph: glyph, size: 24 }
                            }
                            div {
                                h4 { class: "card-title", "{highlight.title}" }
                                p { class: "card-meta", "{highlight.blurb}" }
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

    fn about() -> Element {
        provide_static_context(2030);
        rsx! {
            About {}
        }
    }

    #[test]
    fn renders_stats_and_highlights() {
        let html = render(about);
        assert!(html.contains("id=\"about\""));
        assert_eq!(html.matches("class=\"stat-tile\"").count(), ABOUT_STATS.len());
        assert_eq!(html.matches("class=\"highlight-row\"").count(), ABOUT_HIGHLIGHTS.len());
        assert!(html.contains("30+"));
    }
}
