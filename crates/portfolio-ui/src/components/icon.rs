//! Lucide Icons
//!
//! Inline SVG renditions of the Lucide glyphs the page uses. All glyphs
//! share the 24x24 viewbox and stroke styling; only the shapes differ.

use dioxus::prelude::*;

/// Glyphs available to the page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Menu,
    Close,
    Sparkles,
    Github,
    Linkedin,
    Mail,
    Code,
    Rocket,
    Cpu,
    Star,
    Briefcase,
    GraduationCap,
    ArrowUpRight,
    ExternalLink,
    Quote,
    Award,
}

impl Glyph {
    /// Lucide name, used as a CSS hook (`icon-<name>`)
    pub fn name(&self) -> &'static str {
        match self {
            Glyph::Menu => "menu",
            Glyph::Close => "x",
            Glyph::Sparkles => "sparkles",
            Glyph::Github => "github",
            Glyph::Linkedin => "linkedin",
            Glyph::Mail => "mail",
            Glyph::Code => "code-2",
            Glyph::Rocket => "rocket",
            Glyph::Cpu => "cpu",
            Glyph::Star => "star",
            Glyph::Briefcase => "briefcase",
            Glyph::GraduationCap => "graduation-cap",
            Glyph::ArrowUpRight => "arrow-up-right",
            Glyph::ExternalLink => "external-link",
            Glyph::Quote => "quote",
            Glyph::Award => "award",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub glyph: Glyph,
    /// Rendered width and height in pixels
    #[props(default = 16)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

/// Decorative icon; hidden from assistive technology
#[component]
pub fn Icon(props: IconProps) -> Element {
    let extra = props.class.as_deref().unwrap_or("");
    let class = format!("icon icon-{} {}", props.glyph.name(), extra)
        .trim_end()
        .to_string();

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph_shapes(props.glyph)}
        }
    }
}

fn glyph_shapes(glyph: Glyph) -> Element {
    match glyph {
        Glyph::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        Glyph::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
        Glyph::Sparkles => rsx! {
            path { d: "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" }
            path { d: "M5 3v4" }
            path { d: "M19 17v4" }
            path { d: "M3 5h4" }
            path { d: "M17 19h4" }
        },
        Glyph::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        Glyph::Linkedin => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { width: "4", height: "12", x: "2", y: "9" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        Glyph::Mail => rsx! {
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        Glyph::Code => rsx! {
            path { d: "m18 16 4-4-4-4" }
            path { d: "m6 8-4 4 4 4" }
            path { d: "m14.5 4-5 16" }
        },
        Glyph::Rocket => rsx! {
            path { d: "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z" }
            path { d: "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z" }
            path { d: "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0" }
            path { d: "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5" }
        },
        Glyph::Cpu => rsx! {
            rect { width: "16", height: "16", x: "4", y: "4", rx: "2" }
            rect { width: "6", height: "6", x: "9", y: "9", rx: "1" }
            path { d: "M15 2v2" }
            path { d: "M15 20v2" }
            path { d: "M2 15h2" }
            path { d: "M2 9h2" }
            path { d: "M20 15h2" }
            path { d: "M20 9h2" }
            path { d: "M9 2v2" }
            path { d: "M9 20v2" }
        },
        Glyph::Star => rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
        Glyph::Briefcase => rsx! {
            rect { width: "20", height: "14", x: "2", y: "7", rx: "2", ry: "2" }
            path { d: "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
        },
        Glyph::GraduationCap => rsx! {
            path { d: "M22 10v6M2 10l10-5 10 5-10 5z" }
            path { d: "M6 12v5c3 3 9 3 12 0v-5" }
        },
        Glyph::ArrowUpRight => rsx! {
            path { d: "M7 7h10v10" }
            path { d: "M7 17 17 7" }
        },
        Glyph::ExternalLink => rsx! {
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        },
        Glyph::Quote => rsx! {
            path { d: "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z" }
            path { d: "M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z" }
        },
        Glyph::Award => rsx! {
            circle { cx: "12", cy: "8", r: "6" }
            path { d: "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" }
        },
    }
}
