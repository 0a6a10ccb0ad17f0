//! Button Components
//!
//! Link-style call-to-action buttons and the form submit button:
//! - Primary: filled fuchsia call to action
//! - Outline: bordered translucent secondary action
//! - Social: compact bordered chip holding an icon (and optional label)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main call to action - filled accent background
    #[default]
    Primary,
    /// Secondary action - translucent with a hairline border
    Outline,
    /// Icon chip for social links
    Social,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Social => "btn-social",
        }
    }
}

fn full_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant.class(), extra),
        _ => variant.class().to_string(),
    }
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    /// Target URL or in-page anchor
    pub href: String,
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Link content (text, icons, etc.)
    pub children: Element,
    /// Accessible label, for icon-only links
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Anchor styled as a button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LinkButton {
///         href: "#projects",
///         Icon { glyph: Glyph::Rocket }
///         "View Projects"
///     }
/// }
/// ```
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let class = full_class(props.variant, props.class.as_deref());

    rsx! {
        a {
            class: "{class}",
            href: "{props.href}",
            "aria-label": props.aria_label.clone(),
            {props.children}
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Primary-styled `<button>` element. Behaviour comes from the enclosing
/// form, e.g. `button_type: "submit"`.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = full_class(ButtonVariant::Primary, props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "{props.button_type}",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Social.class(), "btn-social");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(full_class(ButtonVariant::Outline, None), "btn-outline");
        assert_eq!(full_class(ButtonVariant::Outline, Some("")), "btn-outline");
        assert_eq!(
            full_class(ButtonVariant::Social, Some("compact")),
            "btn-social compact"
        );
    }

    fn social_chip() -> Element {
        rsx! {
            LinkButton { href: "#contact", variant: ButtonVariant::Social, aria_label: "Email".to_string(), "@" }
        }
    }

    fn submit_button() -> Element {
        rsx! {
            Button { button_type: "submit".to_string(), class: "form-submit".to_string(), "Send" }
        }
    }

    #[test]
    fn link_button_renders_label_and_variant() {
        let mut dom = VirtualDom::new(social_chip);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("class=\"btn-social\""), "{html}");
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains("aria-label=\"Email\""));
        assert!(!html.contains("target="));
    }

    #[test]
    fn button_is_primary_with_given_type() {
        let mut dom = VirtualDom::new(submit_button);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("class=\"btn-primary form-submit\""), "{html}");
        assert!(html.contains("type=\"submit\""));
    }
}
