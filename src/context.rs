//! Context hooks shared by the page components.
//!
//! `App` provides the site configuration, the motion mode and a clock;
//! components read them back through these hooks.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{Clock, SystemClock};

use crate::config::SiteConfig;

/// Clock handle stored in context
#[derive(Clone)]
pub struct ClockContext(Rc<dyn Clock>);

impl ClockContext {
    pub fn system() -> Self {
        Self(Rc::new(SystemClock))
    }

    /// Clock pinned to `year`
    #[cfg(test)]
    pub fn fixed(year: i32) -> Self {
        Self(Rc::new(portfolio_core::FixedClock(year)))
    }

    pub fn clock(&self) -> &dyn Clock {
        self.0.as_ref()
    }
}

/// Hook to access the site configuration from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the clock. Falls back to the system clock when no
/// clock was provided.
pub fn use_clock() -> ClockContext {
    try_use_context::<ClockContext>().unwrap_or_else(ClockContext::system)
}
