//! Pill
//!
//! Small rounded label used for tags, badges and eyebrows.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct PillProps {
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub style: Option<String>,
}

#[component]
pub fn Pill(props: PillProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("pill {}", extra),
        _ => "pill".to_string(),
    };

    rsx! {
        span { class: "{class}", style: props.style.clone(), {props.children} }
    }
}
