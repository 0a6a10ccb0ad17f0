//! Portfolio Core
//!
//! Framework-independent pieces of the portfolio page:
//!
//! - [`content`]: the literal lists every section renders, plus validation
//! - [`nav`]: navigation bar state machine and its style mapping
//! - [`motion`]: one-shot reveal latch, stagger delays, skill bar fill
//! - [`clock`]: calendar year source for the footer
//! - [`contact`]: the inert contact form model
//!
//! Nothing here touches the DOM. The Dioxus crates feed browser events in
//! and render whatever these types decide.

pub mod clock;
pub mod contact;
pub mod content;
pub mod error;
pub mod motion;
pub mod nav;

pub use clock::{copyright_line, Clock, FixedClock, SystemClock};
pub use error::{ContentError, Result};
pub use motion::{bar_fill_percent, MotionMode, RevealLatch, Stagger};
pub use nav::{HeaderStyle, MenuState, NavEvent, NavState, SCROLL_THRESHOLD_PX};
