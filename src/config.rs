//! xamlgen configuration management.
//!
//! Handles the configuration file at:
//! - Linux: ~/.config/xamlgen/config.toml
//! - macOS: ~/Library/Application Support/xamlgen/config.toml
//! - Windows: %APPDATA%\xamlgen\config.toml
//!
//! A missing file is not an error; every section has defaults.

use crate::analysis::MemberFilter;
use crate::error::{Result, XamlGenError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// xamlgen configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct XamlGenConfig {
    /// Member filtering
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Default profile
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Files and libraries consulted for every request
    #[serde(default)]
    pub references: ReferencesConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Member filtering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Member names never emitted
    #[serde(default = "default_excluded_names")]
    pub excluded_names: Vec<String>,

    /// Attributes that exclude a member, with or without the `Attribute` suffix
    #[serde(default)]
    pub excluded_attributes: Vec<String>,
}

fn default_excluded_names() -> Vec<String> {
    vec!["IsInDesignMode".to_string()]
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            excluded_names: default_excluded_names(),
            excluded_attributes: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    pub fn member_filter(&self) -> MemberFilter {
        MemberFilter::new(self.excluded_names.clone(), self.excluded_attributes.clone())
    }
}

/// Profile configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Profile file used when `--profile` is not given
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Reference configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReferencesConfig {
    /// Library manifest paths
    #[serde(default)]
    pub libraries: Vec<PathBuf>,

    /// Additional source files
    #[serde(default)]
    pub source_files: Vec<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl XamlGenConfig {
    /// Default configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xamlgen").join("config.toml"))
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;

        toml::from_str(&content).map_err(|e| XamlGenError::ConfigError {
            message: format!("Failed to parse config {}: {}", path.display(), e),
        })
    }
}
