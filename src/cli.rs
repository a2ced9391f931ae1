//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Result, XamlGenError};

/// Generate XAML for a C# class or property
#[derive(Parser, Debug)]
#[command(name = "xamlgen")]
#[command(about = "Generates XAML markup from the class or property at a cursor position")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to <config dir>/xamlgen/config.toml)
    #[arg(long, value_name = "PATH", global = true, env = "XAMLGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands for xamlgen
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate markup for every eligible property of the class at the cursor
    #[command(visible_alias = "c")]
    Class(AnalyzeArgs),

    /// Generate markup for the property declared at the cursor
    #[command(visible_alias = "p")]
    Property(AnalyzeArgs),

    /// Inspect and validate output profiles
    Profile(ProfileArgs),
}

// ============================================
// Class / Property Subcommands
// ============================================

/// Arguments shared by the class and property commands
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// C# source file containing the cursor
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Cursor position: byte offset (`120`) or 1-based `line:column` (`5:12`)
    #[arg(long, value_name = "POS")]
    pub at: Position,

    /// Additional source file consulted for base classes and property types
    #[arg(long = "with", value_name = "FILE")]
    pub with_files: Vec<PathBuf>,

    /// Library manifest (JSON) consulted after the source files
    #[arg(long = "library", value_name = "JSON")]
    pub libraries: Vec<PathBuf>,

    /// Profile file (JSON or TOML); the built-in default otherwise
    #[arg(long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Print the syntax tree of FILE to stderr
    #[arg(long, hide = true)]
    pub print_ast: bool,
}

// ============================================
// Profile Subcommand
// ============================================

/// Arguments for the profile command
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub operation: ProfileOperation,
}

/// Profile subcommand operations
#[derive(Subcommand, Debug)]
pub enum ProfileOperation {
    /// Print the built-in default profile as JSON
    ShowDefault,

    /// Check that a profile file loads and compiles
    Validate {
        /// Profile file (JSON or TOML)
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

// ============================================
// Shared Types
// ============================================

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The generated markup only
    #[default]
    Text,
    /// The full analyzer output as JSON
    Json,
}

/// A cursor position as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Byte offset into the file
    Offset(usize),
    /// 1-based line and column (in characters)
    LineColumn { line: usize, column: usize },
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            Some((line, column)) => {
                let line: usize = line
                    .parse()
                    .map_err(|_| format!("invalid line number '{}'", line))?;
                let column: usize = column
                    .parse()
                    .map_err(|_| format!("invalid column number '{}'", column))?;
                if line == 0 || column == 0 {
                    return Err("line and column are 1-based".to_string());
                }
                Ok(Self::LineColumn { line, column })
            }
            None => s
                .parse()
                .map(Self::Offset)
                .map_err(|_| format!("expected a byte offset or line:column, got '{}'", s)),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Offset(offset) => write!(f, "{}", offset),
            Self::LineColumn { line, column } => write!(f, "{}:{}", line, column),
        }
    }
}

impl Position {
    /// Byte offset of this position within `source`
    pub fn to_offset(self, source: &str) -> Result<usize> {
        let invalid = |message: String| XamlGenError::InvalidPosition {
            position: self.to_string(),
            message,
        };

        match self {
            Self::Offset(offset) => {
                if offset > source.len() {
                    return Err(invalid(format!(
                        "offset is past the end of the file ({} bytes)",
                        source.len()
                    )));
                }
                Ok(offset)
            }
            Self::LineColumn { line, column } => {
                let mut line_start = 0usize;
                for _ in 1..line {
                    match source[line_start..].find('\n') {
                        Some(idx) => line_start += idx + 1,
                        None => return Err(invalid(format!("file has fewer than {} lines", line))),
                    }
                }

                let text = source[line_start..].split('\n').next().unwrap_or_default();
                let text = text.strip_suffix('\r').unwrap_or(text);
                let mut chars = text.char_indices().map(|(idx, _)| idx).chain([text.len()]);
                chars
                    .nth(column - 1)
                    .map(|idx| line_start + idx)
                    .ok_or_else(|| invalid(format!("line {} has fewer than {} columns", line, column)))
            }
        }
    }
}
