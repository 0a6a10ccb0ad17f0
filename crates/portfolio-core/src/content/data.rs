//! The page copy.

use super::{
    EducationEntry, ExperienceEntry, Highlight, NavLink, ProjectEntry, SkillEntry, Stat,
    TestimonialEntry,
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", target: "#home" },
    NavLink { label: "About", target: "#about" },
    NavLink { label: "Skills", target: "#skills" },
    NavLink { label: "Experience", target: "#experience" },
    NavLink { label: "Education", target: "#education" },
    NavLink { label: "Projects", target: "#projects" },
    NavLink { label: "Testimonials", target: "#testimonials" },
    NavLink { label: "Contact", target: "#contact" },
];

/// Hero capability badges
pub const CAPABILITIES: &[&str] = &[
    "Full\u{2011}Stack",
    "TypeScript",
    "Design Systems",
    "Performance First",
];

pub const ABOUT_SUMMARY: &str = "I\u{2019}m a software engineer focused on crafting interfaces that feel alive. \
I love translating complex problems into elegant, animated experiences and building systems that scale. \
My work spans design systems, real\u{2011}time collaboration, and performance engineering.";

pub const ABOUT_STATS: &[Stat] = &[
    Stat { label: "Years of Experience", value: "5+" },
    Stat { label: "Projects Shipped", value: "30+" },
];

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Engineering with aesthetics",
        blurb: "Motion, polish, and accessibility baked into every build.",
    },
    Highlight {
        title: "Launch\u{2011}ready delivery",
        blurb: "Clean, scalable code with a product mindset.",
    },
];

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry { name: "TypeScript", level: 92 },
    SkillEntry { name: "React / Next.js", level: 94 },
    SkillEntry { name: "Node.js", level: 88 },
    SkillEntry { name: "Python", level: 85 },
    SkillEntry { name: "System Design", level: 86 },
    SkillEntry { name: "UI/UX", level: 83 },
];

/// Secondary tools shown as pills under the skill grid
pub const TECH_TAGS: &[&str] = &[
    "GraphQL",
    "PostgreSQL",
    "MongoDB",
    "Docker",
    "AWS",
    "Tailwind",
    "Framer Motion",
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Senior Software Engineer",
        organization: "Quantum Labs",
        period: "2022 \u{2014} Present",
        achievements: &[
            "Led a platform rewrite to microfrontends",
            "Boosted Core Web Vitals by 31%",
            "Shipped design system used across 6 teams",
        ],
    },
    ExperienceEntry {
        role: "Frontend Engineer",
        organization: "Nebula Systems",
        period: "2020 \u{2014} 2022",
        achievements: &[
            "Built real\u{2011}time analytics dashboards",
            "Introduced visual regression pipeline",
            "Mentored 4 junior engineers",
        ],
    },
];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        title: "B.S. Computer Science",
        organization: "Tech University",
        period: "2016 \u{2014} 2020",
        description: "Specialized in Human\u{2011}Computer Interaction and Distributed Systems.",
    },
    EducationEntry {
        title: "Design for Developers",
        organization: "Interface School",
        period: "2019",
        description: "Intensive program on visual design, accessibility, and motion.",
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "HoloBoard",
        description: "A holographic Kanban with multiplayer cursors and AI planning.",
        tags: &["React", "WebRTC", "Three.js"],
        link: "#",
    },
    ProjectEntry {
        title: "PulseX",
        description: "Real\u{2011}time system health with anomaly detection and alerts.",
        tags: &["Next.js", "Kafka", "Tailwind"],
        link: "#",
    },
    ProjectEntry {
        title: "Astra UI",
        description: "A future\u{2011}facing component library with motion\u{2011}first APIs.",
        tags: &["TypeScript", "Framer Motion"],
        link: "#",
    },
    ProjectEntry {
        title: "Neon Notes",
        description: "Offline\u{2011}first note app with sync and end\u{2011}to\u{2011}end encryption.",
        tags: &["PWA", "CRDT", "IndexedDB"],
        link: "#",
    },
];

pub const TESTIMONIALS: &[TestimonialEntry] = &[
    TestimonialEntry {
        quote: "A rare blend of product sense and engineering mastery. Delivered 2 quarters ahead of schedule.",
        attribution: "CTO, Quantum Labs",
    },
    TestimonialEntry {
        quote: "Turns ambiguous ideas into polished, animated experiences users love.",
        attribution: "Design Lead, Nebula Systems",
    },
    TestimonialEntry {
        quote: "10/10 would collaborate again. Impact far exceeded expectations.",
        attribution: "PM, Indie Collective",
    },
];
