//! Literal content lists rendered by the page sections.
//!
//! Every list is a `'static` slice fixed at compile time. Display order is
//! slice order; there is no sorting, filtering or paging anywhere.

mod data;

pub use data::{
    ABOUT_HIGHLIGHTS, ABOUT_STATS, ABOUT_SUMMARY, CAPABILITIES, EDUCATION, EXPERIENCE,
    NAV_LINKS, PROJECTS, SKILLS, TECH_TAGS, TESTIMONIALS,
};

use crate::error::{ContentError, Result};

/// In-page navigation target
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavLink {
    pub label: &'static str,
    /// Anchor including the leading `#`
    pub target: &'static str,
}

/// A skill with a proficiency percentage in 0..=100
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SkillEntry {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EducationEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TestimonialEntry {
    pub quote: &'static str,
    pub attribution: &'static str,
}

/// Headline number shown in the About card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Title plus one-line blurb in the About side card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Highlight {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Checks every literal list for well-formedness.
///
/// Returns the first problem found, walking lists in page order.
pub fn validate() -> Result<()> {
    check_list("nav_links", NAV_LINKS, |i, l| {
        require(l.label, "nav_links", i, "label")?;
        require(l.target, "nav_links", i, "target")
    })?;
    check_list("capabilities", CAPABILITIES, |i, c| require(c, "capabilities", i, "label"))?;
    check_list("skills", SKILLS, |i, s| {
        require(s.name, "skills", i, "name")?;
        if s.level > 100 {
            return Err(ContentError::LevelOutOfRange {
                name: s.name,
                level: s.level,
            });
        }
        Ok(())
    })?;
    check_list("tech_tags", TECH_TAGS, |i, t| require(t, "tech_tags", i, "tag"))?;
    check_list("experience", EXPERIENCE, |i, e| {
        require(e.role, "experience", i, "role")?;
        require(e.organization, "experience", i, "organization")?;
        require(e.period, "experience", i, "period")?;
        require_items(e.achievements, "experience", i, "achievements")
    })?;
    check_list("education", EDUCATION, |i, e| {
        require(e.title, "education", i, "title")?;
        require(e.organization, "education", i, "organization")?;
        require(e.period, "education", i, "period")?;
        require(e.description, "education", i, "description")
    })?;
    check_list("projects", PROJECTS, |i, p| {
        require(p.title, "projects", i, "title")?;
        require(p.description, "projects", i, "description")?;
        require(p.link, "projects", i, "link")?;
        require_items(p.tags, "projects", i, "tags")
    })?;
    check_list("testimonials", TESTIMONIALS, |i, t| {
        require(t.quote, "testimonials", i, "quote")?;
        require(t.attribution, "testimonials", i, "attribution")
    })?;
    Ok(())
}

fn check_list<T>(
    list: &'static str,
    entries: &[T],
    check: impl Fn(usize, &T) -> Result<()>,
) -> Result<()> {
    if entries.is_empty() {
        return Err(ContentError::EmptyList { list });
    }
    entries.iter().enumerate().try_for_each(|(i, e)| check(i, e))
}

fn require(value: &str, list: &'static str, index: usize, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(ContentError::EmptyField { list, index, field })
    } else {
        Ok(())
    }
}

fn require_items(
    items: &[&str],
    list: &'static str,
    index: usize,
    field: &'static str,
) -> Result<()> {
    if items.is_empty() {
        return Err(ContentError::EmptyItems { list, index, field });
    }
    items
        .iter()
        .try_for_each(|item| require(item, list, index, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_lists_are_well_formed() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn list_sizes_match_page() {
        assert_eq!(NAV_LINKS.len(), 8);
        assert_eq!(SKILLS.len(), 6);
        assert_eq!(TECH_TAGS.len(), 7);
        assert_eq!(EXPERIENCE.len(), 2);
        assert_eq!(EDUCATION.len(), 2);
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(CAPABILITIES.len(), 4);
    }

    #[test]
    fn nav_targets_are_anchors() {
        for link in NAV_LINKS {
            assert!(link.target.starts_with('#'), "{} is not an anchor", link.target);
        }
        assert_eq!(NAV_LINKS[0].target, "#home");
        assert_eq!(NAV_LINKS[7].target, "#contact");
    }

    #[test]
    fn empty_field_is_reported_with_position() {
        let err = require("  ", "skills", 3, "name").unwrap_err();
        assert_eq!(
            err,
            ContentError::EmptyField {
                list: "skills",
                index: 3,
                field: "name"
            }
        );
        assert_eq!(err.to_string(), "Empty field 'name' in skills[3]");
    }

    #[test]
    fn empty_list_is_rejected() {
        let none: &[SkillEntry] = &[];
        let err = check_list("skills", none, |_, _| Ok(())).unwrap_err();
        assert_eq!(err, ContentError::EmptyList { list: "skills" });
    }

    #[test]
    fn empty_nested_items_are_rejected() {
        let err = require_items(&[], "projects", 1, "tags").unwrap_err();
        assert_eq!(
            err,
            ContentError::EmptyItems {
                list: "projects",
                index: 1,
                field: "tags"
            }
        );
    }
}
