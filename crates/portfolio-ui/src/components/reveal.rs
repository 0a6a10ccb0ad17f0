//! Reveal Wrapper
//!
//! Fades and slides its children into place the first time the wrapper
//! scrolls into view. Later scroll-outs do not replay the transition.

use dioxus::prelude::*;

use crate::bridge::{reveal_style, use_reveal};

/// Properties for the Reveal component
#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Content shown once revealed
    pub children: Element,
    /// Extra CSS classes for the wrapper (card styling etc.)
    #[props(default)]
    pub class: Option<String>,
    /// Transition start delay, usually from a `Stagger`
    #[props(default = 0)]
    pub delay_ms: u64,
    /// Vertical distance the content travels while fading in
    #[props(default = 12)]
    pub offset_px: u32,
}

/// One-shot viewport reveal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for (i, quote) in TESTIMONIALS.iter().enumerate() {
///         Reveal {
///             class: "card",
///             delay_ms: Stagger::QUOTE_CARDS.delay_ms(i),
///             p { "{quote.quote}" }
///         }
///     }
/// }
/// ```
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let reveal = use_reveal();
    let class = reveal.class(props.class.as_deref().unwrap_or(""));
    let style = reveal_style(props.offset_px, props.delay_ms);

    rsx! {
        div {
            id: reveal.dom_id(),
            class: "{class}",
            style: "{style}",
            {props.children}
        }
    }
}
