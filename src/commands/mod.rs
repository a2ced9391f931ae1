//! Command modules for the xamlgen CLI
//!
//! - `analyze` - class and property markup generation
//! - `profile` - show the default profile, validate profile files
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext` for output format, verbosity and
//! configuration.

pub mod analyze;
pub mod profile;

pub use analyze::{run_class, run_property};
pub use profile::run_profile;

use crate::cli::OutputFormat;
use crate::config::XamlGenConfig;

/// Shared context passed to all command handlers
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
    /// Loaded configuration
    pub config: XamlGenConfig,
}

impl CommandContext {
    /// Create a new CommandContext from CLI args
    pub fn from_cli(format: OutputFormat, verbose: bool, config: XamlGenConfig) -> Self {
        Self {
            format,
            verbose,
            config,
        }
    }
}
