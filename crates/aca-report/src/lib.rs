//! Checklist document rendering.
//!
//! [`DocumentRenderer`] expands assigned rules into table rows, merging the
//! id, category, CARD and implications cells across each rule group. The
//! resulting [`Document`] can be written as:
//!
//! - **HTML**: the reference page, with `rowspan` cells for rule groups
//! - **Text**: a terminal table
//! - **JSON**: the document structure itself

mod common;
mod document;
mod html;
mod text;

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

use aca_model::AssignedRule;

// Re-export public types and functions
pub use document::{
    CheckCell, Document, DocumentRenderer, MergedCells, RenderOptions, RuleTable, TableRow,
    render_table,
};
pub use html::{HtmlOptions, render_html};
pub use text::{TEXT_TABLE_WIDTH, render_rule_table, render_text};

/// Output formats for a rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("unknown output format: {other}")),
        }
    }
}

/// Serialize the document as pretty-printed JSON.
pub fn render_json(document: &Document) -> Result<String> {
    let mut json = serde_json::to_string_pretty(document).context("serialize document")?;
    json.push('\n');
    Ok(json)
}

/// Render a document in the requested format.
pub fn render_document(
    document: &Document,
    format: OutputFormat,
    html_options: &HtmlOptions,
) -> Result<String> {
    match format {
        OutputFormat::Html => render_html(document, html_options),
        OutputFormat::Text => Ok(render_text(document)),
        OutputFormat::Json => render_json(document),
    }
}

/// Assign ids to the built-in checklist and render it.
pub fn render_standard_checklist(options: RenderOptions) -> Result<(Vec<AssignedRule>, Document)> {
    let rules = aca_rules::standard_checklist().context("assign checklist ids")?;
    let document = DocumentRenderer::new(options)
        .render(&rules)
        .context("render checklist")?;
    Ok((rules, document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_aliases() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn json_output_ends_with_newline() {
        let (_, document) =
            render_standard_checklist(RenderOptions::default().with_prose(false)).unwrap();
        let json = render_json(&document).unwrap();
        assert!(json.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["table"]["value_columns"], 4);
    }
}
