//! CLI argument definitions for the checklist generator.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use aca_cli::logging::{LogConfig, LogFormat};
use aca_model::RuleId;
use aca_report::OutputFormat;

#[derive(Parser)]
#[command(
    name = "aca-checklist",
    version,
    about = "ACA Load Review Checklist generator",
    long_about = "Render the ACA load review checklist.\n\n\
                  Every rule receives a sequential ACA-NNN id; multi-row rules such as the\n\
                  star catalog requirement tables share one id across their rows."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the checklist document.
    Render(RenderArgs),

    /// List the numbered checklist rules.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Output format to generate: html, text or json.
    #[arg(long = "format", value_name = "FORMAT", default_value = "html")]
    pub format: OutputFormat,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Revision date printed under the title (YYYY-MM-DD).
    #[arg(long = "date", value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Document title.
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// Emit only the rule table, without the surrounding prose.
    #[arg(long = "rules-only")]
    pub rules_only: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Only show rules whose category contains this text (case-insensitive).
    #[arg(long = "category", value_name = "TEXT")]
    pub category: Option<String>,

    /// Only show the rule with this id (e.g. ACA-007).
    #[arg(long = "id", value_name = "ID")]
    pub id: Option<RuleId>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    /// Logging settings implied by the global flags.
    ///
    /// `--log-level` beats `-v`/`-q`; either one turns off `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            use_env_filter: self.log_level.is_none() && !self.verbosity.is_present(),
            ..LogConfig::default()
        }
        .with_level_filter(level_filter)
        .with_format(self.log_format.into())
        .with_ansi(ansi)
        .with_log_file(self.log_file.clone())
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|error| format!("expected YYYY-MM-DD: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("aca-checklist").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn render_accepts_format_aliases_and_date() {
        let cli = parse(&["render", "--format", "txt", "--date", "2024-03-01", "--rules-only"]);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert!(args.rules_only);
    }

    #[test]
    fn render_defaults_to_html() {
        let Command::Render(args) = parse(&["render"]).command else {
            panic!("expected render");
        };
        assert_eq!(args.format, OutputFormat::Html);
        assert!(args.output.is_none());
    }

    #[test]
    fn unknown_format_and_bad_date_are_rejected() {
        let base = ["aca-checklist", "render"];
        assert!(Cli::try_parse_from(base.iter().chain(&["--format", "pdf"])).is_err());
        assert!(Cli::try_parse_from(base.iter().chain(&["--date", "01/03/2024"])).is_err());
    }

    #[test]
    fn rules_parses_rule_id() {
        let Command::Rules(args) = parse(&["rules", "--id", "aca-007"]).command else {
            panic!("expected rules");
        };
        assert_eq!(args.id.map(|id| id.to_string()).as_deref(), Some("ACA-007"));
        assert!(Cli::try_parse_from(["aca-checklist", "rules", "--id", "ACA-7"]).is_err());
    }

    #[test]
    fn default_log_config_defers_to_environment() {
        let config = parse(&["--color", "never", "rules"]).log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.with_ansi);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn explicit_log_level_beats_verbosity() {
        let config = parse(&["-v", "--log-level", "debug", "--log-format", "json", "rules"])
            .log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);

        let verbose = parse(&["-v", "rules"]).log_config();
        assert_eq!(verbose.level_filter, LevelFilter::INFO);
        assert!(!verbose.use_env_filter);
    }
}
