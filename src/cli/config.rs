//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode, MAX_LONG_PRESS_MS, MIN_LONG_PRESS_MS};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Long-press threshold in milliseconds
    #[arg(long, value_name = "MS")]
    long_press_ms: Option<u64>,

    /// Show the key help line (true or false)
    #[arg(long, value_name = "BOOL")]
    show_help: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    ui: UiOutput,
    input: InputOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help: bool,
}

#[derive(Serialize, Debug)]
struct InputOutput {
    long_press_ms: u64,
}

impl ConfigArgs {
    /// Execute config subcommand against `path`, or the default config file.
    pub fn execute(&self, path: Option<&Path>) -> CliResult<()> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))?,
        };

        match &self.command {
            ConfigCommand::Show(args) => args.execute(&path),
            ConfigCommand::Set(args) => args.execute(&path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    fn execute(&self, path: &Path) -> CliResult<()> {
        let config = Config::load_from(path)
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config, path)?;
        } else {
            output_human_readable(&config, path);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    fn execute(&self, path: &Path) -> CliResult<()> {
        // At least one argument must be provided
        if self.theme.is_none() && self.long_press_ms.is_none() && self.show_help.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --long-press-ms, or --show-help",
            ));
        }

        // Load current configuration; a file that exists but cannot be read is
        // left untouched
        let mut config = Config::load_from(path).map_err(|e| {
            CliError::validation(format!(
                "Failed to load configuration, not overwriting it: {e:#}"
            ))
        })?;

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = parse_theme(theme_str).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(ms) = self.long_press_ms {
            config.set_long_press_ms(ms).map_err(|_| {
                CliError::validation(format!(
                    "Invalid long-press threshold {ms}. Must be between {MIN_LONG_PRESS_MS} and {MAX_LONG_PRESS_MS} ms"
                ))
            })?;
        }

        if let Some(show) = self.show_help {
            config.ui.show_help = show;
        }

        // Save configuration
        config
            .save_to(path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn parse_theme(value: &str) -> Option<ThemeMode> {
    match value.to_lowercase().as_str() {
        "auto" => Some(ThemeMode::Auto),
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

/// Output configuration in JSON format
fn output_json(config: &Config, path: &Path) -> CliResult<()> {
    let output = ConfigOutput {
        path: path.to_string_lossy().to_string(),
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
            show_help: config.ui.show_help,
        },
        input: InputOutput {
            long_press_ms: config.input.long_press_ms,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &Path) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!("File: {}", path.display());
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!("  Show Help:  {}", config.ui.show_help);
    println!();

    println!("Input:");
    println!("  Long Press: {} ms", config.input.long_press_ms);
}
