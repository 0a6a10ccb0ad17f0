use dioxus::prelude::*;

use crate::components::{Footer, Hero, Navbar};
use crate::config::{site_config, SPLINE_VIEWER_SRC};
use crate::context::ClockContext;
use crate::sections::{About, Contact, Education, Experience, Projects, Skills, Testimonials};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, site configuration, motion mode and clock, then
/// lays the sections out in page order.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(site_config);
    let motion = config.motion;
    use_context_provider(move || motion);
    use_context_provider(ClockContext::system);

    // Check the literal content once per mount
    use_hook(|| {
        if let Err(e) = portfolio_core::content::validate() {
            tracing::warn!("Malformed page content: {}", e);
        }
    });

    let title = config.page_title();

    rsx! {
        document::Title { "{title}" }
        document::Script { r#type: "module".to_string(), src: SPLINE_VIEWER_SRC.to_string() }
        style { {GLOBAL_STYLES} }

        div { class: "page",
            Navbar {}
            main {
                Hero {}
                About {}
                Skills {}
                Experience {}
                Education {}
                Projects {}
                Testimonials {}
                Contact {}
            }
            Footer {}
        }
    }
}
