//! Error types for the portfolio content lists

use thiserror::Error;

/// A malformed entry in one of the literal content lists
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A list that a section renders has no entries
    #[error("Content list '{list}' is empty")]
    EmptyList { list: &'static str },

    /// A required text field is empty or whitespace
    #[error("Empty field '{field}' in {list}[{index}]")]
    EmptyField {
        list: &'static str,
        index: usize,
        field: &'static str,
    },

    /// Skill proficiency outside 0..=100
    #[error("Skill level {level} for '{name}' exceeds 100")]
    LevelOutOfRange { name: &'static str, level: u8 },

    /// An entry's nested list (tags, achievements) has no items
    #[error("Entry {list}[{index}] has no {field}")]
    EmptyItems {
        list: &'static str,
        index: usize,
        field: &'static str,
    },
}

/// Result type alias for content validation
pub type Result<T> = std::result::Result<T, ContentError>;
