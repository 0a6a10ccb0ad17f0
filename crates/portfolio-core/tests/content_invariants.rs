//! Checks on the literal content lists as the page sees them.

use std::collections::HashSet;

use portfolio_core::content::{self, NAV_LINKS, PROJECTS, SKILLS};
use portfolio_core::{copyright_line, FixedClock};

#[test]
fn content_validates() {
    content::validate().expect("literal lists are well-formed");
}

#[test]
fn nav_targets_are_unique() {
    let targets: HashSet<_> = NAV_LINKS.iter().map(|l| l.target).collect();
    assert_eq!(targets.len(), NAV_LINKS.len());
}

#[test]
fn skill_names_are_unique_and_levels_bounded() {
    let names: HashSet<_> = SKILLS.iter().map(|s| s.name).collect();
    assert_eq!(names.len(), SKILLS.len());
    assert!(SKILLS.iter().all(|s| s.level <= 100));
    assert_eq!(SKILLS[0].name, "TypeScript");
    assert_eq!(SKILLS[0].level, 92);
}

#[test]
fn every_project_has_tags() {
    for project in PROJECTS {
        assert!(!project.tags.is_empty(), "{} has no tags", project.title);
    }
}

#[test]
fn footer_year_follows_clock() {
    let a = copyright_line(&FixedClock(2019), "Your Name");
    let b = copyright_line(&FixedClock(2042), "Your Name");
    assert!(a.contains("2019"));
    assert!(b.contains("2042"));
    assert!(!b.contains("2019"));
}
