//! Hero Panel
//!
//! Full-viewport introduction: embedded 3D scene, gradient overlay, copy,
//! two calls to action and capability badges that stagger in on mount.
//!
//! The scene is rendered by the `spline-viewer` web component (loaded by
//! `App`); loading and failure states belong to that component.

use dioxus::prelude::*;
use portfolio_core::content::CAPABILITIES;
use portfolio_core::Stagger;
use portfolio_ui::{ButtonVariant, Glyph, Icon, LinkButton, Pill};

use crate::components::GradientOrbs;
use crate::context::use_site_config;

/// Icons paired with `CAPABILITIES`, in the same order
const BADGE_GLYPHS: [Glyph; 4] = [Glyph::Cpu, Glyph::Code, Glyph::Star, Glyph::Award];

/// Inline style that delays a badge's mount animation
fn badge_style(index: usize) -> String {
    format!("animation-delay: {}ms;", Stagger::HERO_BADGES.delay_ms(index))
}

#[component]
pub fn Hero() -> Element {
    let config = use_site_config();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-scene",
                SplineScene { url: config.scene_url.clone() }
            }
            div { class: "hero-overlay" }
            GradientOrbs {}

            div { class: "container hero-content",
                div { class: "hero-copy",
                    div { class: "eyebrow",
                        span { class: "pulse-dot" }
                        "Available for freelance projects"
                    }
                    h1 { class: "hero-title", "Building immersive, futuristic software experiences" }
                    p { class: "hero-lead",
                        "I craft high-performance web apps, delightful UIs, and scalable systems—blending aesthetics with engineering rigor."
                    }

                    div { class: "hero-actions",
                        LinkButton { href: "#projects".to_string(), class: "cta".to_string(),
                            Icon { glyph: Glyph::Rocket }
                            "View Projects"
                            Icon { glyph: Glyph::ArrowUpRight, class: "cta-arrow".to_string() }
                        }
                        LinkButton { href: "#contact".to_string(), variant: ButtonVariant::Outline,
                            Icon { glyph: Glyph::Mail }
                            "Contact Me"
                        }
                    }

                    div { class: "hero-badges",
                        for (i, (label, glyph)) in CAPABILITIES.iter().zip(BADGE_GLYPHS).enumerate() {
                            Pill { key: "{label}", class: "hero-badge".to_string(), style: badge_style(i),
                                Icon { glyph: glyph }
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Embedded 3D scene filling its container
#[component]
fn SplineScene(url: String) -> Element {
    rsx! {
        spline-viewer {
            "url": "{url}",
            "style": "display: block; width: 100%; height: 100%;",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{provide_static_context, render};

    #[test]
    fn badge_delays_stagger_from_200ms() {
        assert_eq!(badge_style(0), "animation-delay: 200ms;");
        assert_eq!(badge_style(3), "animation-delay: 500ms;");
    }

    fn hero() -> Element {
        provide_static_context(2030);
        rsx! {
            Hero {}
        }
    }

    #[test]
    fn renders_scene_ctas_and_badges() {
        let html = render(hero);
        assert!(html.contains("id=\"home\""));
        assert!(html.contains(crate::config::DEFAULT_SCENE_URL), "{html}");
        assert!(html.contains("href=\"#projects\""));
        assert!(html.contains("href=\"#contact\""));
        assert_eq!(html.matches("pill hero-badge").count(), CAPABILITIES.len());
    }
}
