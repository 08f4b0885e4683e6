//! HTML output for the checklist document.

use std::io::Write;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesStart, BytesText, Event};

use aca_model::{BulletList, StaticBlock};

use crate::common::{
    end, spanning, start, write_caption, write_paragraph, write_text_element,
    write_text_element_with,
};
use crate::document::{CheckCell, Document, MergedCells, RuleTable, TableRow};

/// Layout settings for HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Width attribute of the rule table, in pixels.
    pub table_width: u32,
    /// Spaces per nesting level; zero writes everything on one line.
    pub indent: usize,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            table_width: 854,
            indent: 2,
        }
    }
}

/// Render the document to an HTML string.
pub fn render_html(document: &Document, options: &HtmlOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_html_to(&mut buffer, document, options)?;
    String::from_utf8(buffer).context("html output is not utf-8")
}

fn write_html_to<W: Write>(sink: W, document: &Document, options: &HtmlOptions) -> Result<()> {
    let mut html = if options.indent == 0 {
        Writer::new(sink)
    } else {
        Writer::new_with_indent(sink, b' ', options.indent)
    };

    html.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    let mut root = BytesStart::new("html");
    root.push_attribute(("lang", "en"));
    html.write_event(Event::Start(root))?;

    start(&mut html, "head")?;
    let mut charset = BytesStart::new("meta");
    charset.push_attribute(("charset", "utf-8"));
    html.write_event(Event::Empty(charset))?;
    write_text_element(&mut html, "title", &document.title)?;
    end(&mut html, "head")?;

    start(&mut html, "body")?;
    write_header(&mut html, document)?;
    for block in &document.front_matter {
        write_block(&mut html, block)?;
    }
    write_rule_table(&mut html, &document.table, options)?;
    for block in &document.back_matter {
        write_block(&mut html, block)?;
    }
    html.write_event(Event::Empty(BytesStart::new("hr")))?;
    end(&mut html, "body")?;
    end(&mut html, "html")?;

    html.get_mut().write_all(b"\n")?;
    Ok(())
}

fn write_header<W: Write>(html: &mut Writer<W>, document: &Document) -> Result<()> {
    let mut title = BytesStart::new("h2");
    title.push_attribute(("class", "title"));
    write_text_element_with(html, title, &document.title)?;
    if let Some(date) = document.date {
        write_paragraph(html, &format!("Date: {}", date.format("%Y-%m-%d")))?;
    }
    if !document.authors.is_empty() {
        write_paragraph(html, &format!("Author: {}", document.authors.join(", ")))?;
    }
    Ok(())
}

fn write_block<W: Write>(html: &mut Writer<W>, block: &StaticBlock) -> Result<()> {
    match block {
        StaticBlock::Heading { level, text } => {
            let tag = format!("h{}", (*level).clamp(1, 6));
            write_text_element(html, &tag, text)?;
        }
        StaticBlock::Paragraph { text } => write_paragraph(html, text)?,
        StaticBlock::List { title, list } => {
            write_caption(html, title)?;
            write_list(html, list)?;
        }
        StaticBlock::Link { title, href } => {
            write_caption(html, title)?;
            start(html, "ul")?;
            start(html, "li")?;
            let mut anchor = BytesStart::new("a");
            anchor.push_attribute(("href", href.as_str()));
            write_text_element_with(html, anchor, href)?;
            end(html, "li")?;
            end(html, "ul")?;
        }
        StaticBlock::Spacer => write_paragraph(html, "")?,
        StaticBlock::Glossary { title, entries } => {
            write_caption(html, title)?;
            let mut table = BytesStart::new("table");
            table.push_attribute(("class", "key"));
            html.write_event(Event::Start(table))?;
            for entry in entries {
                start(html, "tr")?;
                write_text_element(html, "td", &format!("{} = {}", entry.term, entry.meaning))?;
                end(html, "tr")?;
            }
            end(html, "table")?;
        }
    }
    Ok(())
}

fn write_list<W: Write>(html: &mut Writer<W>, list: &BulletList) -> Result<()> {
    let mut ul = BytesStart::new("ul");
    let style = format!("list-style-type: {}", list.style.as_css());
    ul.push_attribute(("style", style.as_str()));
    html.write_event(Event::Start(ul))?;
    for item in &list.items {
        match &item.children {
            None => write_text_element(html, "li", &item.text)?,
            Some(children) => {
                start(html, "li")?;
                html.write_event(Event::Text(BytesText::new(&item.text)))?;
                write_list(html, children)?;
                end(html, "li")?;
            }
        }
    }
    end(html, "ul")
}

fn write_rule_table<W: Write>(
    html: &mut Writer<W>,
    table: &RuleTable,
    options: &HtmlOptions,
) -> Result<()> {
    let mut node = BytesStart::new("table");
    let width = options.table_width.to_string();
    node.push_attribute(("class", "checks"));
    node.push_attribute(("width", width.as_str()));
    node.push_attribute(("border", "1"));
    node.push_attribute(("cellpadding", "2"));
    node.push_attribute(("cellspacing", "3"));
    html.write_event(Event::Start(node))?;

    start(html, "thead")?;
    start(html, "tr")?;
    write_text_element(html, "th", "ID")?;
    write_text_element(html, "th", "Category")?;
    write_text_element_with(html, check_start("th", 1 + table.value_columns), "Check Performed")?;
    write_text_element(html, "th", "CARD")?;
    write_text_element(html, "th", "Implications")?;
    end(html, "tr")?;
    end(html, "thead")?;

    start(html, "tbody")?;
    for row in &table.rows {
        write_table_row(html, row, table.value_columns)?;
    }
    end(html, "tbody")?;
    end(html, "table")
}

fn write_table_row<W: Write>(html: &mut Writer<W>, row: &TableRow, value_columns: usize) -> Result<()> {
    start(html, "tr")?;
    if let Some(merged) = &row.merged {
        write_text_element_with(
            html,
            spanning("td", "rule-id", merged.span_count),
            &merged.id.to_string(),
        )?;
        write_text_element_with(
            html,
            spanning("td", "category", merged.span_count),
            &merged.category,
        )?;
    }
    write_check_cells(html, &row.check, value_columns)?;
    if let Some(merged) = &row.merged {
        write_merged_tail(html, merged)?;
    }
    end(html, "tr")
}

/// Label cell plus one cell per value. The label widens to cover value
/// columns this row does not fill.
fn write_check_cells<W: Write>(html: &mut Writer<W>, check: &CheckCell, value_columns: usize) -> Result<()> {
    let colspan = 1 + value_columns.saturating_sub(check.values.len());
    let label = check_start("td", colspan);
    if check.heading {
        html.write_event(Event::Start(label))?;
        write_text_element(html, "i", &check.label)?;
        end(html, "td")?;
    } else {
        write_text_element_with(html, label, &check.label)?;
    }
    for value in &check.values {
        let mut cell = BytesStart::new("td");
        cell.push_attribute(("class", "value"));
        cell.push_attribute(("align", "center"));
        write_text_element_with(html, cell, value)?;
    }
    Ok(())
}

fn write_merged_tail<W: Write>(html: &mut Writer<W>, merged: &MergedCells) -> Result<()> {
    let mut card = spanning("td", "card", merged.span_count);
    card.push_attribute(("align", "center"));
    write_text_element_with(html, card, &merged.card_reference)?;

    html.write_event(Event::Start(spanning(
        "td",
        "implications",
        merged.span_count,
    )))?;
    for implication in &merged.implications {
        write_paragraph(html, implication)?;
    }
    end(html, "td")
}

fn check_start(name: &str, colspan: usize) -> BytesStart<'static> {
    let mut start = BytesStart::new(name.to_string());
    start.push_attribute(("class", "check"));
    if colspan > 1 {
        start.push_attribute(("colspan", colspan.to_string().as_str()));
    }
    start
}
