use dioxus::prelude::*;
use portfolio_core::copyright_line;

use crate::context::{use_clock, use_site_config};

/// Static copyright line; the year comes from the clock at render time
#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let clock = use_clock();
    let line = copyright_line(clock.clock(), &config.owner);

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p { "{line}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{provide_static_context, render};

    fn footer_2019() -> Element {
        provide_static_context(2019);
        rsx! {
            Footer {}
        }
    }

    fn footer_2042() -> Element {
        provide_static_context(2042);
        rsx! {
            Footer {}
        }
    }

    #[test]
    fn year_follows_clock() {
        let early = render(footer_2019);
        let late = render(footer_2042);
        assert!(early.contains("© 2019 Your Name. Crafted with motion and love."), "{early}");
        assert!(late.contains("© 2042 Your Name."));
        assert!(!late.contains("2019"));
    }
}
