use dioxus::prelude::*;
use portfolio_ui::{ButtonVariant, Glyph, Icon, LinkButton};

use crate::context::use_site_config;

/// GitHub, LinkedIn and contact icon chips
#[component]
pub fn SocialLinks(#[props(default)] class: Option<String>) -> Element {
    let config = use_site_config();
    let class = match class {
        Some(extra) => format!("social-links {}", extra),
        None => "social-links".to_string(),
    };

    rsx! {
        div { class: "{class}",
            LinkButton {
                href: config.github_url.clone(),
                variant: ButtonVariant::Social,
                aria_label: "GitHub".to_string(),
                Icon { glyph: Glyph::Github }
            }
            LinkButton {
                href: config.linkedin_url.clone(),
                variant: ButtonVariant::Social,
                aria_label: "LinkedIn".to_string(),
                Icon { glyph: Glyph::Linkedin }
            }
            LinkButton {
                href: "#contact".to_string(),
                variant: ButtonVariant::Social,
                aria_label: "Email".to_string(),
                Icon { glyph: Glyph::Mail }
            }
        }
    }
}
