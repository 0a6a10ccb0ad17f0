//! Server-side rendering helpers for component tests.

use dioxus::prelude::*;
use portfolio_core::motion::MotionMode;

use crate::config::SiteConfig;
use crate::context::ClockContext;

/// Renders `root` once to an HTML string
pub fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Provides default config, static motion and a clock fixed to `year`.
/// Call first thing inside a test root component.
pub fn provide_static_context(year: i32) {
    provide_context_with_motion(year, MotionMode::Static);
}

/// Same as [`provide_static_context`] with an explicit motion mode
pub fn provide_context_with_motion(year: i32, motion: MotionMode) {
    use_context_provider(SiteConfig::default);
    use_context_provider(move || motion);
    use_context_provider(|| ClockContext::fixed(year));
}
