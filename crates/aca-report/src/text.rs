//! Plain-text rendering of the checklist for terminals and text files.
//!
//! Text tables cannot span rows, so merged cells are printed on the first row
//! of a rule and left blank on its continuation rows. Prose blocks become
//! underlined headings and indented bullet lists.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use aca_model::{BulletList, BulletStyle, StaticBlock};

use crate::document::{Document, RuleTable, TableRow};

/// Width the text table wraps to.
pub const TEXT_TABLE_WIDTH: u16 = 160;

/// Render the whole document: header lines, front matter, the rule table,
/// then the back matter.
pub fn render_text(document: &Document) -> String {
    let mut out = String::new();
    out.push_str(&document.title);
    out.push('\n');
    if let Some(date) = document.date {
        out.push_str(&format!("Date: {}\n", date.format("%Y-%m-%d")));
    }
    if !document.authors.is_empty() {
        out.push_str(&format!("Author: {}\n", document.authors.join(", ")));
    }
    out.push('\n');
    for block in &document.front_matter {
        write_block(&mut out, block);
    }
    out.push_str(&render_rule_table(&document.table).to_string());
    out.push_str("\n\n");
    for block in &document.back_matter {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &StaticBlock) {
    match block {
        StaticBlock::Heading { level, text } => {
            let rule = if *level <= 1 { '=' } else { '-' };
            out.push_str(text);
            out.push('\n');
            out.extend(std::iter::repeat_n(rule, text.chars().count()));
            out.push_str("\n\n");
        }
        StaticBlock::Paragraph { text } => {
            out.push_str(text);
            out.push_str("\n\n");
        }
        StaticBlock::List { title, list } => {
            out.push_str(title);
            out.push('\n');
            write_list(out, list, 1);
            out.push('\n');
        }
        StaticBlock::Link { title, href } => {
            out.push_str(&format!("{title}\n  * {href}\n\n"));
        }
        StaticBlock::Spacer => out.push('\n'),
        StaticBlock::Glossary { title, entries } => {
            out.push_str(title);
            out.push('\n');
            for entry in entries {
                out.push_str(&format!("  {} = {}\n", entry.term, entry.meaning));
            }
            out.push('\n');
        }
    }
}

fn write_list(out: &mut String, list: &BulletList, depth: usize) {
    let marker = match list.style {
        BulletStyle::Disc => '*',
        BulletStyle::Circle => 'o',
    };
    let indent = "  ".repeat(depth);
    for item in &list.items {
        out.push_str(&format!("{indent}{marker} {}\n", item.text));
        if let Some(children) = &item.children {
            write_list(out, children, depth + 1);
        }
    }
}

/// Build an uncolored comfy-table of the rules.
pub fn render_rule_table(table: &RuleTable) -> Table {
    let mut out = Table::new();
    out.load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TEXT_TABLE_WIDTH)
        .force_no_tty();

    let mut header = vec!["ID".to_string(), "Category".to_string(), "Check".to_string()];
    header.extend((0..table.value_columns).map(|_| String::new()));
    header.push("CARD".to_string());
    header.push("Implications".to_string());
    out.set_header(header);

    for row in &table.rows {
        out.add_row(text_row(row, table.value_columns));
    }
    for index in 3..3 + table.value_columns {
        if let Some(column) = out.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Center);
        }
    }
    out
}

fn text_row(row: &TableRow, value_columns: usize) -> Vec<Cell> {
    let (id, category, card, implications) = match &row.merged {
        Some(merged) => (
            merged.id.to_string(),
            merged.category.clone(),
            merged.card_reference.clone(),
            merged.implications.join("\n"),
        ),
        None => Default::default(),
    };
    let mut cells = vec![Cell::new(id), Cell::new(category), Cell::new(&row.check.label)];
    cells.extend(
        (0..value_columns).map(|index| Cell::new(row.check.values.get(index).map_or("", String::as_str))),
    );
    cells.push(Cell::new(card));
    cells.push(Cell::new(implications));
    cells
}

#[cfg(test)]
mod tests {
    use aca_model::{AssignedRule, RuleDefinition, RuleId, RuleRow};

    use super::*;
    use crate::document::{RenderOptions, render_table};
    use crate::render_standard_checklist;

    #[test]
    fn continuation_rows_leave_merged_cells_blank() {
        let rule = AssignedRule {
            id: RuleId::new(1).unwrap(),
            definition: RuleDefinition::grouped(
                "Star catalog",
                vec![
                    RuleRow::with_values("Requirements", ["<=3", "4", "4", "<=1"]),
                    RuleRow::with_values("Standard", ["3", "4-8", "5", "0"]),
                ],
            ),
        };
        let table = render_table(&[rule]).unwrap();
        let first = text_row(&table.rows[0], table.value_columns);
        let second = text_row(&table.rows[1], table.value_columns);
        assert_eq!(first.len(), 9);
        assert_eq!(first[0].content(), "ACA-001");
        assert_eq!(second[0].content(), "");
        assert_eq!(second[1].content(), "");
        assert_eq!(second[2].content(), "Standard");
        assert_eq!(second[4].content(), "4-8");
    }

    #[test]
    fn rendered_text_lists_every_id() {
        let rules = aca_rules::standard_checklist().unwrap();
        let table = render_table(&rules).unwrap();
        let text = render_rule_table(&table).to_string();
        for rule in &rules {
            assert!(text.contains(&rule.id.to_string()), "{} missing", rule.id);
        }
    }

    #[test]
    fn document_text_keeps_static_prose() {
        let (_, document) = render_standard_checklist(RenderOptions::default()).unwrap();
        let text = render_text(&document);
        assert!(text.contains("Software Packages\n  * starcheck\n  * SAUSAGE\n"));
        assert!(text.contains("    * starcheck confirms that the DOT has been modified by SAUSAGE\n"));
        assert!(text.contains("    o stars_OBSID.gif\n"));
        assert!(text.contains(&format!("  * {}\n", aca_rules::RUN_INSTRUCTIONS_URL)));
        assert!(text.contains("Checks\n======\n"));
        assert!(text.contains("  MU = maneuver uncertainty (arcsec)\n"));

        let prose_end = text.find("Checks\n").unwrap();
        let table_start = text.find("ACA-000").unwrap();
        let key_start = text.find("Key\n").unwrap();
        assert!(prose_end < table_start && table_start < key_start);
    }

    #[test]
    fn rules_only_text_has_no_prose() {
        let options = RenderOptions::default().with_prose(false);
        let (_, document) = render_standard_checklist(options).unwrap();
        let text = render_text(&document);
        assert!(!text.contains("SAUSAGE"));
        assert!(!text.contains("Software Packages"));
        assert!(text.contains("ACA-041"));
    }
}
