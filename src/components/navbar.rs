//! Navigation Bar
//!
//! Fixed header that turns into a blurred panel once the page scrolls past
//! the threshold. Narrow viewports get a toggle that expands [`MobileMenu`].

use dioxus::prelude::*;
use portfolio_core::content::NAV_LINKS;
use portfolio_core::{NavEvent, NavState};
use portfolio_ui::{use_window_scroll, Glyph, Icon};

use crate::components::{MobileMenu, SocialLinks};
use crate::context::use_site_config;

/// Next state for `event`, or `None` when nothing changes
fn transition(current: NavState, event: NavEvent) -> Option<NavState> {
    let next = current.after(event);
    (next != current).then_some(next)
}

/// Moves the bar to its next state, writing only on an actual change
fn dispatch(mut nav: Signal<NavState>, event: NavEvent) {
    let current = *nav.peek();
    if let Some(next) = transition(current, event) {
        tracing::debug!(?event, style = ?next.style, menu = ?next.menu, "nav transition");
        nav.set(next);
    }
}

/// Navigation bar component
///
/// State is local to each mounted instance and starts collapsed and
/// transparent; the scroll listener is released on unmount.
#[component]
pub fn Navbar() -> Element {
    let offset = use_window_scroll();
    let nav = use_signal(NavState::default);

    // Recompute header style from the latest offset
    use_effect(move || {
        dispatch(nav, NavEvent::Scrolled(offset()));
    });

    rsx! {
        NavPanel { nav }
    }
}

/// Header markup for a given navigation state
#[component]
fn NavPanel(nav: Signal<NavState>) -> Element {
    let config = use_site_config();
    let state = nav();
    let expanded = state.menu_open();
    let toggle_glyph = if expanded { Glyph::Close } else { Glyph::Menu };

    rsx! {
        header { class: state.style.class(),
            div { class: "container nav-bar",
                a { href: "#home", class: "brand",
                    span { class: "brand-mark",
                        Icon { glyph: Glyph::Sparkles, size: 24, class: "accent-fuchsia".to_string() }
                        span { class: "brand-glow" }
                    }
                    span { class: "brand-label", "{config.brand}" }
                }

                nav { class: "nav-links",
                    for link in NAV_LINKS.iter() {
                        a { key: "{link.target}", href: link.target, class: "nav-link", "{link.label}" }
                    }
                    SocialLinks { class: "nav-social".to_string() }
                }

                button {
                    r#type: "button",
                    class: "menu-toggle",
                    "aria-label": state.menu.toggle_label(),
                    "aria-expanded": "{expanded}",
                    onclick: move |_| dispatch(nav, NavEvent::ToggleMenu),
                    Icon { glyph: toggle_glyph, size: 20 }
                }
            }

            if expanded {
                MobileMenu {
                    on_link: move |_| dispatch(nav, NavEvent::LinkChosen),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{provide_static_context, render};
    use portfolio_core::{HeaderStyle, MenuState};

    #[test]
    fn transition_skips_no_op_events() {
        let start = NavState::default();
        assert_eq!(transition(start, NavEvent::Scrolled(3.0)), None);
        assert_eq!(transition(start, NavEvent::LinkChosen), None);

        let scrolled = transition(start, NavEvent::Scrolled(40.0)).unwrap();
        assert_eq!(scrolled.style, HeaderStyle::Solid);
        assert_eq!(transition(scrolled, NavEvent::Scrolled(500.0)), None);
    }

    #[test]
    fn transition_opens_then_link_closes() {
        let open = transition(NavState::default(), NavEvent::ToggleMenu).unwrap();
        assert_eq!(open.menu, MenuState::Expanded);

        let closed = transition(open, NavEvent::LinkChosen).unwrap();
        assert_eq!(closed.menu, MenuState::Collapsed);
        assert_eq!(closed, NavState::default());
    }

    fn navbar() -> Element {
        provide_static_context(2030);
        rsx! {
            Navbar {}
        }
    }

    #[test]
    fn navbar_starts_transparent_and_collapsed() {
        let html = render(navbar);
        assert!(html.contains("<header class=\"site-header\">"), "{html}");
        assert!(!html.contains("mobile-menu"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("aria-label=\"Open menu\""));
        assert_eq!(html.matches("class=\"nav-link\"").count(), NAV_LINKS.len());
    }

    fn open_scrolled_panel() -> Element {
        provide_static_context(2030);
        let nav = use_signal(|| {
            NavState::default()
                .after(NavEvent::Scrolled(80.0))
                .after(NavEvent::ToggleMenu)
        });
        rsx! {
            NavPanel { nav }
        }
    }

    #[test]
    fn expanded_panel_shows_mobile_menu() {
        let html = render(open_scrolled_panel);
        assert!(html.contains("<header class=\"site-header scrolled\">"), "{html}");
        assert!(html.contains("class=\"mobile-menu\""));
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("aria-label=\"Close menu\""));
        assert_eq!(html.matches("class=\"mobile-link\"").count(), NAV_LINKS.len());
    }

    fn reopened_then_link_chosen() -> Element {
        provide_static_context(2030);
        let nav = use_signal(|| {
            NavState::default()
                .after(NavEvent::ToggleMenu)
                .after(NavEvent::LinkChosen)
        });
        rsx! {
            NavPanel { nav }
        }
    }

    #[test]
    fn choosing_a_link_hides_mobile_menu() {
        let html = render(reopened_then_link_chosen);
        assert!(!html.contains("mobile-menu"), "{html}");
        assert!(html.contains("aria-expanded=\"false\""));
    }
}
