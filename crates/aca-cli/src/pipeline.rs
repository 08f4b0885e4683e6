//! Render pipeline: rule store -> id assignment -> table expansion -> output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tracing::{info, info_span};

use aca_model::{AssignedRule, RuleId};
use aca_report::{HtmlOptions, OutputFormat, RenderOptions, render_document, render_standard_checklist};

/// Everything needed to produce one checklist output.
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub format: OutputFormat,
    pub render: RenderOptions,
    pub html: HtmlOptions,
}

/// Counts and checksum of a rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub format: OutputFormat,
    pub rules: usize,
    pub rows: usize,
    pub groups: usize,
    pub bytes: usize,
    /// Lowercase hex SHA-256 of the rendered output.
    pub sha256: String,
    pub output: Option<PathBuf>,
}

/// A rendered document held in memory.
#[derive(Debug, Clone)]
pub struct RenderedChecklist {
    pub content: String,
    pub summary: RenderSummary,
}

/// Number the built-in checklist and render it in the requested format.
pub fn render_checklist(request: &RenderRequest) -> Result<RenderedChecklist> {
    let span = info_span!("render", format = %request.format);
    let _guard = span.enter();

    let (_, document) = render_standard_checklist(request.render.clone())?;
    let content = render_document(&document, request.format, &request.html)
        .with_context(|| format!("write {} output", request.format))?;
    let summary = RenderSummary {
        format: request.format,
        rules: document.table.rule_count(),
        rows: document.table.rows.len(),
        groups: document.table.group_count(),
        bytes: content.len(),
        sha256: sha256_hex(content.as_bytes()),
        output: None,
    };
    info!(
        rules = summary.rules,
        rows = summary.rows,
        bytes = summary.bytes,
        "rendered checklist"
    );
    Ok(RenderedChecklist { content, summary })
}

/// Write rendered content to `path`, creating parent directories.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote checklist");
    Ok(())
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Rules matching the optional category substring and id filters.
pub fn select_rules<'a>(
    rules: &'a [AssignedRule],
    category: Option<&str>,
    id: Option<RuleId>,
) -> Vec<&'a AssignedRule> {
    let needle = category.map(str::to_lowercase);
    rules
        .iter()
        .filter(|rule| id.is_none_or(|id| rule.id == id))
        .filter(|rule| {
            needle
                .as_deref()
                .is_none_or(|needle| rule.category().to_lowercase().contains(needle))
        })
        .collect()
}
