use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use aca_cli::pipeline::RenderSummary;
use aca_model::AssignedRule;

pub fn print_summary(summary: &RenderSummary) {
    if let Some(path) = &summary.output {
        println!("Output: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Rules"),
        header_cell("Rows"),
        header_cell("Groups"),
        header_cell("Bytes"),
        header_cell("SHA-256"),
    ]);
    apply_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.format)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.rules),
        Cell::new(summary.rows),
        Cell::new(summary.groups),
        Cell::new(summary.bytes),
        dim_cell(&summary.sha256),
    ]);
    println!("{table}");
}

pub fn print_rules(rules: &[&AssignedRule]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Category"),
        header_cell("Check"),
        header_cell("Rows"),
        header_cell("Implications"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for rule in rules {
        let rows = rule.rows();
        let check = match rows {
            [single] => single.label.clone(),
            _ => rows
                .iter()
                .map(|row| {
                    if row.values.is_empty() {
                        row.label.clone()
                    } else {
                        format!("{}: {}", row.label, row.values.join(" / "))
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
        };
        let implications = rule
            .definition
            .implications
            .iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(rule.id)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(rule.category()),
            Cell::new(check),
            rows_cell(rows.len()),
            Cell::new(implications),
        ]);
    }
    println!("{table}");
    println!("{} rule(s)", rules.len());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn rows_cell(count: usize) -> Cell {
    if count > 1 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
