use serde::{Deserialize, Serialize};

use crate::RuleId;

/// Card reference shown when a rule does not cite one.
pub const NO_CARD_REFERENCE: &str = "n/a";

/// One rendered line within a checklist rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRow {
    /// Check text for single-row rules, or the row label within a group.
    pub label: String,
    /// Column values, aligned to the group's named columns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    /// Sub-table heading row (e.g. "Observation Request (OR)").
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub heading: bool,
}

impl RuleRow {
    /// A plain check row with no column values.
    pub fn check(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: Vec::new(),
            heading: false,
        }
    }

    pub fn with_values<I, S>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            values: values.into_iter().map(Into::into).collect(),
            heading: false,
        }
    }

    /// A heading row whose values name the group's columns.
    pub fn heading<I, S>(label: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            heading: true,
            ..Self::with_values(label, columns)
        }
    }
}

/// One logical checklist rule. Receives exactly one id however many rows it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub category: String,
    pub rows: Vec<RuleRow>,
    #[serde(default)]
    pub card_reference: Option<String>,
    #[serde(default)]
    pub implications: Vec<String>,
}

impl RuleDefinition {
    /// A single-row rule: the common case in the checklist.
    pub fn check(
        category: impl Into<String>,
        check: impl Into<String>,
        implication: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            rows: vec![RuleRow::check(check)],
            card_reference: None,
            implications: vec![implication.into()],
        }
    }

    pub fn grouped(category: impl Into<String>, rows: Vec<RuleRow>) -> Self {
        Self {
            category: category.into(),
            rows,
            card_reference: None,
            implications: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_card_reference(mut self, card: impl Into<String>) -> Self {
        self.card_reference = Some(card.into());
        self
    }

    #[must_use]
    pub fn with_implications<I, S>(mut self, implications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implications = implications.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_grouped(&self) -> bool {
        self.rows.len() > 1
    }

    pub fn card_reference_or_default(&self) -> &str {
        self.card_reference.as_deref().unwrap_or(NO_CARD_REFERENCE)
    }
}

/// A rule definition with its resolved identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedRule {
    pub id: RuleId,
    #[serde(flatten)]
    pub definition: RuleDefinition,
}

impl AssignedRule {
    pub fn category(&self) -> &str {
        &self.definition.category
    }

    pub fn rows(&self) -> &[RuleRow] {
        &self.definition.rows
    }
}
