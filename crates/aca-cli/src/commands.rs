use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use aca_cli::pipeline::{RenderRequest, RenderSummary, render_checklist, select_rules, write_output};
use aca_report::RenderOptions;
use aca_rules::standard_checklist;

use crate::cli::{RenderArgs, RulesArgs};
use crate::summary::print_rules;

/// Render the checklist to stdout or a file.
///
/// Returns the summary only when a file was written, so stdout carries the
/// document alone otherwise.
pub fn run_render(args: &RenderArgs) -> Result<Option<RenderSummary>> {
    let mut render = RenderOptions::default()
        .with_date(args.date)
        .with_prose(!args.rules_only);
    if let Some(title) = &args.title {
        render = render.with_title(title.clone());
    }
    let request = RenderRequest {
        format: args.format,
        render,
        ..RenderRequest::default()
    };
    debug!(format = %request.format, rules_only = args.rules_only, "render request");
    let rendered = render_checklist(&request)?;

    match &args.output {
        Some(path) => {
            write_output(path, &rendered.content)?;
            let mut summary = rendered.summary;
            summary.output = Some(path.clone());
            Ok(Some(summary))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.content.as_bytes())
                .context("write to stdout")?;
            stdout.flush().context("flush stdout")?;
            Ok(None)
        }
    }
}

/// Print the numbered rules as a table.
pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let rules = standard_checklist().context("assign checklist ids")?;
    let selected = select_rules(&rules, args.category.as_deref(), args.id);
    if selected.is_empty() {
        bail!("no rules match the given filters");
    }
    info!(matched = selected.len(), total = rules.len(), "listing rules");
    print_rules(&selected);
    Ok(())
}
