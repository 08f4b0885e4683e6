//! Integration tests for the pipeline module.

use aca_cli::pipeline::{
    RenderRequest, render_checklist, select_rules, sha256_hex, write_output,
};
use aca_model::RuleId;
use aca_report::{OutputFormat, RenderOptions};
use aca_rules::standard_checklist;

#[test]
fn render_summary_counts_rules_and_rows() {
    let rendered = render_checklist(&RenderRequest::default()).unwrap();
    let summary = &rendered.summary;
    assert_eq!(summary.format, OutputFormat::Html);
    assert_eq!(summary.rules, 42);
    assert_eq!(summary.rows, 50);
    assert_eq!(summary.groups, 2);
    assert_eq!(summary.bytes, rendered.content.len());
    assert_eq!(summary.sha256, sha256_hex(rendered.content.as_bytes()));
    assert_eq!(summary.sha256.len(), 64);
}

#[test]
fn repeated_renders_share_a_digest() {
    for format in [OutputFormat::Html, OutputFormat::Text, OutputFormat::Json] {
        let request = RenderRequest {
            format,
            ..RenderRequest::default()
        };
        let first = render_checklist(&request).unwrap();
        let second = render_checklist(&request).unwrap();
        assert_eq!(first.summary.sha256, second.summary.sha256, "{format}");
        assert_eq!(first.content, second.content, "{format}");
    }
}

#[test]
fn title_option_reaches_output() {
    let request = RenderRequest {
        format: OutputFormat::Text,
        render: RenderOptions::default().with_title("Load Review"),
        ..RenderRequest::default()
    };
    let rendered = render_checklist(&request).unwrap();
    assert!(rendered.content.starts_with("Load Review\n"));
}

#[test]
fn write_output_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mplogs").join("checklist.html");
    let rendered = render_checklist(&RenderRequest::default()).unwrap();
    write_output(&path, &rendered.content).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(sha256_hex(written.as_bytes()), rendered.summary.sha256);
}

#[test]
fn sha256_of_empty_input() {
    assert_eq!(
        sha256_hex(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn select_rules_by_category_and_id() {
    let rules = standard_checklist().unwrap();

    let readout = select_rules(&rules, Some("readout"), None);
    assert_eq!(readout.len(), 4);
    assert!(readout.iter().all(|rule| rule.category() == "Readout sizes"));

    let id: RuleId = "ACA-007".parse().unwrap();
    let single = select_rules(&rules, None, Some(id));
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].rows().len(), 5);

    assert!(select_rules(&rules, Some("pointing"), Some(id)).is_empty());
    assert_eq!(select_rules(&rules, None, None).len(), rules.len());
}
