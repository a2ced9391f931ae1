//! Error types and exit codes for xamlgen-engine

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for xamlgen-engine operations
///
/// A cursor that is not inside any class is *not* an error; it produces
/// [`AnalyzerOutput::empty`](crate::schema::AnalyzerOutput::empty).
#[derive(Error, Debug)]
pub enum XamlGenError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported language for extension: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Failed to parse file: {message}")]
    ParseFailure { message: String },

    #[error("Invalid cursor position '{position}': {message}")]
    InvalidPosition { position: String, message: String },

    #[error("Invalid profile '{profile}': {message}")]
    InvalidProfile { profile: String, message: String },

    #[error("Failed to load library manifest {}: {message}", path.display())]
    LibraryLoad { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl XamlGenError {
    /// Convert error to the process exit code:
    /// - 1: File not found / IO error
    /// - 2: Unsupported language
    /// - 3: Parse failure
    /// - 4: Invalid position
    /// - 5: Invalid profile, library manifest or configuration
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::UnsupportedLanguage { .. } => ExitCode::from(2),
            Self::ParseFailure { .. } => ExitCode::from(3),
            Self::InvalidPosition { .. } => ExitCode::from(4),
            Self::InvalidProfile { .. } => ExitCode::from(5),
            Self::LibraryLoad { .. } => ExitCode::from(5),
            Self::ConfigError { .. } => ExitCode::from(5),
            Self::Json(_) => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(1),
        }
    }

    /// Shorthand for an [`XamlGenError::InvalidProfile`]
    pub(crate) fn invalid_profile(profile: &str, message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            profile: profile.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for xamlgen-engine operations
pub type Result<T> = std::result::Result<T, XamlGenError>;
