//! Config command
//!
//! Manage giveaway configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::{Path, PathBuf};

use gw_core::config::Config;

use super::{config_search_paths, load_config, LOCAL_CONFIG_PATH};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file locations that are searched
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Init { force } => init_config(config_path, force),
        ConfigCommand::Path => show_paths(config_path),
    }
}

fn show_config(config_path: Option<&Path>, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let (config, source) = load_config(config_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    match source {
        Some(path) => println!("{}", path.display().to_string().dimmed()),
        None => println!("{}", "(defaults, no config file found)".dimmed()),
    }
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}

fn init_config(config_path: Option<&Path>, force: bool) -> Result<()> {
    use colored::Colorize;

    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_PATH));

    if path.exists() && !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Init cancelled.");
            return Ok(());
        }
    }

    // Backup existing
    if path.exists() {
        let backup_path = format!(
            "{}.backup-{}",
            path.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(&path, &backup_path)?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let content = format!("# giveaway configuration\n\n{}", Config::default().to_toml()?);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Wrote default configuration to {}", "✓".green(), path.display());
    Ok(())
}

fn show_paths(config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let mut paths = Vec::new();
    if let Some(path) = config_path {
        paths.push(path.to_path_buf());
    }
    paths.extend(config_search_paths());

    for path in paths {
        let marker = if path.exists() {
            "✓".green()
        } else {
            "·".dimmed()
        };
        println!("{} {}", marker, path.display());
    }

    Ok(())
}
