//! Language detection and tree-sitter grammar loading
//!
//! The analyzer works on a language-agnostic symbol model; this module only
//! decides which front end turns a source file into that model.

use std::path::Path;
use tree_sitter::Language;

use crate::error::{Result, XamlGenError};

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    CSharp,
}

impl Lang {
    /// Detect language from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| XamlGenError::UnsupportedLanguage {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "cs" | "csx" => Ok(Self::CSharp),
            _ => Err(XamlGenError::UnsupportedLanguage {
                extension: ext.to_string(),
            }),
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::CSharp => "csharp",
        }
    }

    /// Get the tree-sitter Language for parsing
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            Self::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
        }
    }
}
