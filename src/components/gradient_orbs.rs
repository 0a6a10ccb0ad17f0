use dioxus::prelude::*;

use crate::theme::colors::{CYAN_ORB, FUCHSIA_ORB, INDIGO_ORB};

/// Three blurred color blobs behind the hero copy
#[component]
pub fn GradientOrbs() -> Element {
    rsx! {
        div { class: "gradient-orbs", "aria-hidden": "true",
            div { class: "orb orb-top-left", style: "background: {FUCHSIA_ORB};" }
            div { class: "orb orb-right", style: "background: {INDIGO_ORB};" }
            div { class: "orb orb-bottom", style: "background: {CYAN_ORB};" }
        }
    }
}
