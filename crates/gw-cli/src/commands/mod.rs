//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod draw;
pub mod validate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};

use gw_core::comment::CommentValidator;
use gw_core::config::Config;
use gw_core::export::{DrawReport, ExportManager};
use gw_core::session::DrawSession;
use gw_core::ticket::TicketBuilder;
use gw_source::CsvSource;

/// Project-local configuration file
pub const LOCAL_CONFIG_PATH: &str = ".giveaway/config.toml";

/// giveaway - draw a winner from comments that tag three friends
#[derive(Debug, Parser)]
#[command(name = "giveaway")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GIVEAWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load comments and report which ones qualify
    Validate(validate::ValidateArgs),

    /// Load, validate and draw a winner
    Draw(draw::DrawArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Report format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Plain console text
    Text,
    /// Pretty-printed JSON
    Json,
    /// Markdown result page
    Markdown,
}

impl ReportFormat {
    fn name(self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "markdown",
        }
    }
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();

    // Dispatch to command handler
    match cli.command {
        Commands::Validate(args) => validate::execute(args, config_path),
        Commands::Draw(args) => draw::execute(args, config_path),
        Commands::Config(cmd) => config::execute(cmd, config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Reports go to stdout, so logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file locations, most specific first
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_PATH)];

    let user_dir = directories::ProjectDirs::from("com", "giveaway", "giveaway")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .or_else(|| dirs::home_dir().map(|home| home.join(".giveaway")));
    if let Some(dir) = user_dir {
        paths.push(dir.join("config.toml"));
    }

    paths
}

/// Resolve and load configuration
///
/// An explicit path must exist; otherwise the first existing search path is
/// used, falling back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        return Ok((config, Some(path.to_path_buf())));
    }

    for path in config_search_paths() {
        if path.exists() {
            let config = Config::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            return Ok((config, Some(path)));
        }
    }

    tracing::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}

/// Load the input table and run one validation pass
pub fn load_and_validate(config: &Config, input: &Path) -> Result<DrawSession> {
    use colored::Colorize;

    let source = CsvSource::from_config(&config.source);
    let mut session = source
        .load_path(input)
        .with_context(|| format!("Failed to load comments from {}", input.display()))?;

    eprintln!(
        "{} Loaded {} comments from {}",
        "✓".green(),
        session.comment_count().to_string().yellow(),
        input.display().to_string().cyan()
    );

    let builder = TicketBuilder::new(CommentValidator::from_config(&config.rules));
    session.validate(&builder);
    Ok(session)
}

/// Render a report to stdout or a file
pub fn emit_report(report: &DrawReport, format: ReportFormat, output: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let manager = ExportManager::new();

    if let Some(path) = output {
        let written = manager
            .export_to_file(report, format.name(), path)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("{} Report written to {}", "✓".green(), written.display());
    } else {
        let content = manager.export(report, format.name())?;
        let mut stdout = std::io::stdout();
        stdout
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        if !content.ends_with('\n') {
            writeln!(stdout).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Parse a report format name from configuration
pub fn format_from_config(name: &str) -> Result<ReportFormat> {
    ReportFormat::from_str(name, true)
        .map_err(|_| anyhow::anyhow!("Unknown report format in config: {}", name))
}
