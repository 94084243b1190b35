//! CLI command handlers.
//!
//! Headless, scriptable access to the keyboard's layout and input handling
//! for automation and testing.

pub mod common;
pub mod config;
pub mod layout;
pub mod type_cmd;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
pub use type_cmd::{Release, Stroke, TypeArgs};
