//! Expansion of assigned rules into table rows with merged cells.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use aca_model::{AssignedRule, RuleId, RuleRow, StaticBlock, ValidationError};
use aca_rules::{CHECKLIST_AUTHORS, CHECKLIST_TITLE, back_matter, front_matter};

/// Document header settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub authors: Vec<String>,
    /// Revision date printed under the title. Never taken from the clock.
    pub date: Option<NaiveDate>,
    /// Emit the static prose around the rule table.
    pub include_prose: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: CHECKLIST_TITLE.to_string(),
            authors: CHECKLIST_AUTHORS.iter().map(ToString::to_string).collect(),
            date: None,
            include_prose: true,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub fn with_prose(mut self, include: bool) -> Self {
        self.include_prose = include;
        self
    }
}

/// Cells that span every row of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedCells {
    pub id: RuleId,
    pub category: String,
    pub card_reference: String,
    pub implications: Vec<String>,
    /// Number of table rows these cells cover.
    pub span_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckCell {
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub heading: bool,
}

impl From<&RuleRow> for CheckCell {
    fn from(row: &RuleRow) -> Self {
        Self {
            label: row.label.clone(),
            values: row.values.clone(),
            heading: row.heading,
        }
    }
}

/// One rendered table row.
///
/// Only the first row of a rule carries `merged`; continuation rows hold
/// just their own check cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged: Option<MergedCells>,
    pub check: CheckCell,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Widest value list of any row; check cells pad to this many columns.
    pub value_columns: usize,
    pub rows: Vec<TableRow>,
}

impl RuleTable {
    /// Logical rules in the table.
    pub fn rule_count(&self) -> usize {
        self.rows.iter().filter(|row| row.merged.is_some()).count()
    }

    /// Rules rendered across more than one row.
    pub fn group_count(&self) -> usize {
        self.merged_cells()
            .filter(|cells| cells.span_count > 1)
            .count()
    }

    pub fn merged_cells(&self) -> impl Iterator<Item = &MergedCells> {
        self.rows.iter().filter_map(|row| row.merged.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub front_matter: Vec<StaticBlock>,
    pub table: RuleTable,
    pub back_matter: Vec<StaticBlock>,
}

/// Turns assigned rules into a [`Document`].
///
/// Rendering is pure: the same rules and options always give the same
/// document, and any malformed rule aborts the whole render.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    options: RenderOptions,
}

impl DocumentRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, assigned: &[AssignedRule]) -> Result<Document, ValidationError> {
        let table = render_table(assigned)?;
        let (front, back) = if self.options.include_prose {
            (front_matter(), back_matter())
        } else {
            (Vec::new(), Vec::new())
        };
        info!(
            rules = table.rule_count(),
            rows = table.rows.len(),
            groups = table.group_count(),
            "rendered checklist table"
        );
        Ok(Document {
            title: self.options.title.clone(),
            authors: self.options.authors.clone(),
            date: self.options.date,
            front_matter: front,
            table,
            back_matter: back,
        })
    }
}

/// Expand each rule into its rows, marking the first row of each rule with
/// the merged cells and their span.
pub fn render_table(assigned: &[AssignedRule]) -> Result<RuleTable, ValidationError> {
    let mut rows = Vec::new();
    let mut value_columns = 0;
    for (position, rule) in assigned.iter().enumerate() {
        check_rule(position, rule)?;
        let definition = &rule.definition;
        let span_count = definition.rows.len();
        if span_count > 1 {
            debug!(id = %rule.id, rows = span_count, "merging rule group");
        }
        for (index, row) in definition.rows.iter().enumerate() {
            value_columns = value_columns.max(row.values.len());
            let merged = (index == 0).then(|| MergedCells {
                id: rule.id,
                category: definition.category.clone(),
                card_reference: definition.card_reference_or_default().to_string(),
                implications: definition.implications.clone(),
                span_count,
            });
            rows.push(TableRow {
                merged,
                check: CheckCell::from(row),
            });
        }
    }
    Ok(RuleTable {
        value_columns,
        rows,
    })
}

/// Reject rules with no rows and groups whose rows do not line up column
/// for column.
fn check_rule(position: usize, rule: &AssignedRule) -> Result<(), ValidationError> {
    let rows = rule.rows();
    let Some(first) = rows.first() else {
        return Err(ValidationError::NoRows {
            position,
            category: rule.category().to_string(),
        });
    };
    let expected = first.values.len();
    match rows
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, row)| row.values.len() != expected)
    {
        Some((row, misaligned)) => Err(ValidationError::MisalignedGroup {
            id: rule.id.to_string(),
            category: rule.category().to_string(),
            row,
            expected,
            found: misaligned.values.len(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use aca_model::RuleDefinition;

    use super::*;

    fn assigned(counter: usize, definition: RuleDefinition) -> AssignedRule {
        AssignedRule {
            id: RuleId::new(counter).unwrap(),
            definition,
        }
    }

    #[test]
    fn single_row_rule_spans_one() {
        let rule = assigned(
            0,
            RuleDefinition::check("Pointing", "Verify pointing agreement", "Reduced science quality"),
        );
        let table = render_table(&[rule]).unwrap();
        assert_eq!(table.rows.len(), 1);
        let merged = table.rows[0].merged.as_ref().unwrap();
        assert_eq!(merged.span_count, 1);
        assert_eq!(merged.card_reference, "n/a");
        assert_eq!(table.value_columns, 0);
    }

    #[test]
    fn group_marks_only_first_row() {
        let rule = assigned(
            3,
            RuleDefinition::grouped(
                "Star catalog",
                vec![
                    RuleRow::with_values("Requirements", ["<=3", "4", "4", "<=1"]),
                    RuleRow::with_values("Standard", ["3", "4-8", "5", "0"]),
                    RuleRow::with_values("Alternate", ["2", "4-8", "6", "0"]),
                ],
            ),
        );
        let table = render_table(&[rule]).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].merged.as_ref().unwrap().span_count, 3);
        assert!(table.rows[1].merged.is_none());
        assert!(table.rows[2].merged.is_none());
        assert_eq!(table.rows[2].check.values[2], "6");
        assert_eq!(table.value_columns, 4);
        assert_eq!(table.rule_count(), 1);
        assert_eq!(table.group_count(), 1);
    }

    #[test]
    fn misaligned_group_is_rejected() {
        let rule = assigned(
            7,
            RuleDefinition::grouped(
                "Star catalog",
                vec![
                    RuleRow::with_values("Requirements", ["<=3", "4", "4", "<=1"]),
                    RuleRow::with_values("Standard", ["3", "4-8", "5"]),
                ],
            ),
        );
        let err = render_table(&[rule]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MisalignedGroup {
                id: "ACA-007".to_string(),
                category: "Star catalog".to_string(),
                row: 1,
                expected: 4,
                found: 3,
            }
        );
    }

    #[test]
    fn heading_rows_are_held_to_the_group_width() {
        let rule = assigned(
            8,
            RuleDefinition::grouped(
                "Star catalog",
                vec![
                    RuleRow::heading("Observation Request (OR)", ["#FL", "#AS", "#GS", "#MW"]),
                    RuleRow::with_values("Requirements", ["<=3", "4", "4", "<=1"]),
                    RuleRow::heading("Engineering Request (ER)", ["#AS", "#GS"]),
                ],
            ),
        );
        let err = render_table(&[rule]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MisalignedGroup {
                id: "ACA-008".to_string(),
                category: "Star catalog".to_string(),
                row: 2,
                expected: 4,
                found: 2,
            }
        );
    }

    #[test]
    fn hand_built_rule_without_rows_is_rejected() {
        let rule = assigned(0, RuleDefinition::grouped("Dither", Vec::new()));
        assert!(matches!(
            render_table(&[rule]),
            Err(ValidationError::NoRows { position: 0, .. })
        ));
    }

    #[test]
    fn options_without_prose_drop_static_blocks() {
        let rule = assigned(0, RuleDefinition::check("Dither", "check", "impl"));
        let document = DocumentRenderer::new(RenderOptions::default().with_prose(false))
            .render(&[rule])
            .unwrap();
        assert!(document.front_matter.is_empty());
        assert!(document.back_matter.is_empty());
        assert_eq!(document.title, "ACA Load Review Checklist");
    }
}
