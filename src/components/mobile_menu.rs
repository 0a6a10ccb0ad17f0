//! Mobile Menu
//!
//! Collapsible link list shown under the header on narrow viewports.

use dioxus::prelude::*;
use portfolio_core::content::NAV_LINKS;

use crate::components::SocialLinks;

#[derive(Props, Clone, PartialEq)]
pub struct MobileMenuProps {
    /// Called when any section link is clicked
    pub on_link: EventHandler<()>,
}

/// Expanded mobile menu. Every section link reports through `on_link` so
/// the owner can collapse the menu.
#[component]
pub fn MobileMenu(props: MobileMenuProps) -> Element {
    rsx! {
        div { class: "mobile-menu",
            div { class: "mobile-menu-inner",
                for link in NAV_LINKS.iter() {
                    a {
                        key: "{link.target}",
                        href: link.target,
                        class: "mobile-link",
                        onclick: move |_| props.on_link.call(()),
                        "{link.label}"
                    }
                }
                SocialLinks { class: "mobile-social".to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{provide_static_context, render};

    fn open_menu() -> Element {
        provide_static_context(2030);
        rsx! {
            MobileMenu { on_link: move |_| {} }
        }
    }

    #[test]
    fn lists_every_section_link() {
        let html = render(open_menu);
        assert_eq!(html.matches("class=\"mobile-link\"").count(), NAV_LINKS.len());
        for link in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.target)));
        }
    }
}
