//! Draw command
//!
//! Load comments, validate them and pick a winner.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use gw_core::draw::Drawer;
use gw_core::error::GiveawayError;
use gw_core::export::DrawReport;

use super::{emit_report, format_from_config, load_and_validate, load_config, ReportFormat};

/// Arguments for the draw command
#[derive(Debug, Args)]
pub struct DrawArgs {
    /// CSV file with username and text columns
    pub input: PathBuf,

    /// Number of distinct mentions a comment must carry
    #[arg(long, short)]
    pub mentions: Option<usize>,

    /// Seed for a reproducible draw
    #[arg(long, short)]
    pub seed: Option<u64>,

    /// Hide the per-user chance table
    #[arg(long)]
    pub no_chances: bool,

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

/// Execute the draw command
pub fn execute(args: DrawArgs, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let (mut config, _) = load_config(config_path)?;
    if let Some(mentions) = args.mentions {
        config.rules.required_mentions = mentions;
    }
    if args.seed.is_some() {
        config.draw.seed = args.seed;
    }
    config.validate()?;

    let format = match args.format {
        Some(format) => format,
        None => format_from_config(&config.report.format)?,
    };

    let session = load_and_validate(&config, &args.input)?;

    let mut report = DrawReport::from_session(&session)?
        .with_chances(config.report.show_chances && !args.no_chances);
    if args.show_rejected || config.report.show_rejected {
        report = report.with_rejected(&session);
    }

    let mut drawer = Drawer::from_seed_option(config.draw.seed);
    match session.draw(&mut drawer) {
        Ok(outcome) => {
            eprintln!("🏆 Winner: {}", format!("@{}", outcome.winner).green().bold());
            report = report.with_outcome(outcome);
        }
        Err(GiveawayError::EmptyPool) => {
            eprintln!(
                "{} No eligible comments with {} distinct mentions, nothing to draw.",
                "⚠".yellow(),
                config.rules.required_mentions
            );
        }
        Err(err) => return Err(err.into()),
    }

    emit_report(&report, format, args.output.as_deref())
}
