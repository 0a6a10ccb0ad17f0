//! Palette constants for inline styles.
//!
//! The stylesheet carries the same values as CSS custom properties.

pub const FUCHSIA_ORB: &str = "rgba(192, 38, 211, 0.2)";
pub const INDIGO_ORB: &str = "rgba(79, 70, 229, 0.2)";
pub const CYAN_ORB: &str = "rgba(6, 182, 212, 0.1)";
