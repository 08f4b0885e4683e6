//! Validation errors raised while numbering and rendering checklist rules.

use thiserror::Error;

/// A malformed or inconsistent rule definition.
///
/// Every variant is fatal to the run that produced it: a checklist with
/// skipped or misnumbered rules is never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The rule store contains no definitions.
    #[error("rule store is empty")]
    EmptyStore,

    /// A definition has no rows to render.
    #[error("rule #{position} ({category}) has no rows")]
    NoRows { position: usize, category: String },

    /// Rows in one group supply different numbers of column values.
    #[error(
        "malformed rule group {id} ({category}): row {row} has {found} values, expected {expected}"
    )]
    MisalignedGroup {
        id: String,
        category: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The identifier counter would exceed the three-digit format.
    #[error("rule #{position} would need id {counter}, which exceeds ACA-{max:03}; widen the id format")]
    IdOverflow {
        position: usize,
        counter: usize,
        max: u16,
    },

    /// Text that does not parse as an `ACA-NNN` identifier.
    #[error("invalid rule id: {0:?}")]
    InvalidRuleId(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
