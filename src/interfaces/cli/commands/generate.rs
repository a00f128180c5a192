//! Generate config command

use std::path::Path;

use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::{DEFAULT_CONFIG_PATH, StaticConfig};
use crate::errors::{ClientError, Result};

pub fn run_config_command(action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
    }
}

/// Write the default configuration as TOML
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<()> {
    let path = output_path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    if !force && Path::new(&path).exists() {
        return Err(ClientError::validation(format!(
            "{} already exists (use --force to overwrite)",
            path
        )));
    }

    StaticConfig::default().save_to_file(&path)?;
    println!(
        "{} Configuration file generated: {}",
        "✓".bold().green(),
        path.blue()
    );
    println!(
        "  {}",
        "Environment variables like SNAPLINK__CLIENT__BASE_URL override it".dimmed()
    );
    Ok(())
}
