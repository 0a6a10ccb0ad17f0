//! Portfolio UI Components
//!
//! Reusable Dioxus building blocks for the portfolio page:
//!
//! - **Section**: shared section layout with eyebrow pill and heading
//! - **Reveal**: wrapper that animates in once on first viewport entry
//! - **Buttons**: call-to-action links, social chips, submit button
//! - **Icon**: inline Lucide glyphs
//!
//! Browser listeners live in [`bridge`]; every listener is tied to the
//! component that installed it and torn down when that component unmounts.

pub mod bridge;
pub mod components;

pub use bridge::{reveal_class, reveal_style, use_reveal, use_window_scroll, RevealHandle};
pub use components::*;
