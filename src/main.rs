//! AzTurk Keyboard - Arabic-script Azerbaijani Turkish keyboard in the terminal
//!
//! Without a subcommand this draws the keyboard and a text field and lets you
//! type by clicking keys; hold a key to pick one of its alternatives. The
//! `layout` and `type` subcommands expose the same input handling headlessly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use azturk_keyboard::cli::{CliResult, ConfigArgs, LayoutArgs, TypeArgs};
use azturk_keyboard::config::Config;
use azturk_keyboard::constants::{APP_BINARY_NAME, APP_NAME};
use azturk_keyboard::tui;

/// AzTurk Keyboard - Arabic-script Azerbaijani Turkish keyboard in the terminal
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the keyboard screen never shows logs)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Hold time before a press opens the alternatives overlay
    #[arg(long, value_name = "MS")]
    long_press_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the key rows and the long-press alternatives
    Layout(LayoutArgs),
    /// Type a sequence of strokes and print the resulting text
    Type(TypeArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        match self {
            Self::Layout(args) => args.execute(),
            Self::Type(args) => args.execute(),
            Self::Config(args) => args.execute(config_path),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Logs go to stderr for headless commands.
fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Logs go to a file while the keyboard screen is up, or nowhere.
fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(ms) = cli.long_press_ms {
        config
            .set_long_press_ms(ms)
            .context("Invalid --long-press-ms")?;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        init_stderr_logging();
        if let Err(e) = command.execute(cli.config.as_deref()) {
            eprintln!("Error: {e}");
            std::process::exit(e.code.code());
        }
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let config = load_config(&cli)?;
    info!(app = APP_NAME, version = env!("CARGO_PKG_VERSION"), "Starting");

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app = tui::App::new(config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    if !app.buffer.is_empty() {
        println!("{}", app.buffer.text());
    }

    Ok(())
}
