//! Rule numbering and the built-in ACA load review checklist.
//!
//! [`assign_ids`] walks a rule store in order and gives each logical rule the
//! next `ACA-NNN` id. [`standard_checklist`] numbers the built-in store.

pub mod checklist;
pub mod prose;
pub mod registry;

pub use checklist::{STAR_CATALOG_COLUMNS, aca_load_review_rules};
pub use prose::{
    CHECKLIST_AUTHORS, CHECKLIST_TITLE, RUN_INSTRUCTIONS_URL, back_matter, front_matter,
};
pub use registry::{RuleRegistry, assign_ids};

use aca_model::{AssignedRule, ValidationError};

/// The built-in checklist with ids assigned.
pub fn standard_checklist() -> Result<Vec<AssignedRule>, ValidationError> {
    assign_ids(aca_load_review_rules())
}
