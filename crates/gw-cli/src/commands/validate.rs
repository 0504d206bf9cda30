//! Validate command
//!
//! Report how many comments satisfy the mention rule.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use gw_core::export::DrawReport;

use super::{emit_report, format_from_config, load_and_validate, load_config, ReportFormat};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// CSV file with username and text columns
    pub input: PathBuf,

    /// Number of distinct mentions a comment must carry
    #[arg(long, short)]
    pub mentions: Option<usize>,

    /// List rejected comments with the reason
    #[arg(long)]
    pub show_rejected: bool,

    /// Report format
    #[arg(long, short, value_enum)]
    pub format: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the validate command
pub fn execute(args: ValidateArgs, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let (mut config, _) = load_config(config_path)?;
    if let Some(mentions) = args.mentions {
        config.rules.required_mentions = mentions;
    }
    config.validate()?;

    let format = match args.format {
        Some(format) => format,
        None => format_from_config(&config.report.format)?,
    };

    let session = load_and_validate(&config, &args.input)?;

    let mut report = DrawReport::from_session(&session)?;
    if args.show_rejected || config.report.show_rejected {
        report = report.with_rejected(&session);
    }

    emit_report(&report, format, args.output.as_deref())?;

    if report.has_tickets() {
        eprintln!(
            "{} Ready to draw: run '{}'",
            "✓".green(),
            format!("giveaway draw {}", args.input.display()).cyan()
        );
    } else {
        eprintln!(
            "{} No valid comments. Check the @ mentions in the source.",
            "⚠".yellow()
        );
    }

    Ok(())
}
