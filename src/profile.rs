//! Output profiles
//!
//! A [`Profile`] is the user-editable description of how members become
//! markup. It is compiled once into a [`CompiledProfile`] that the analyzer
//! consumes: type patterns parsed, templates tokenized and the class
//! grouping resolved. Anything malformed is reported here, before analysis.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::classify::TypePattern;
use crate::analysis::grouping::Grouping;
use crate::analysis::template::Template;
use crate::error::{Result, XamlGenError};

/// A profile as written by the user (PascalCase keys, JSON or TOML)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,

    /// Container around the class output, e.g. `StackPanel` or `GRID-PLUS-ROWDEFS`
    #[serde(default)]
    pub class_grouping: String,

    /// Template for members no mapping matches
    #[serde(default)]
    pub fallback_output: String,

    /// Template for each member rendered through `$subprops$`
    #[serde(default)]
    pub sub_property_output: String,

    /// Ordered mapping rules; earlier rules win
    #[serde(default)]
    pub mappings: Vec<Mapping>,
}

/// One mapping rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mapping {
    /// `|`-separated type alternatives; `Name<T>` matches any instantiation
    #[serde(rename = "Type")]
    pub type_name: String,

    /// `|`-separated substrings of the member name; empty matches all
    #[serde(default)]
    pub name_contains: String,

    pub output: String,

    /// Only applies to read-only members
    #[serde(default)]
    pub if_read_only: bool,
}

impl Mapping {
    pub fn new(type_name: &str, output: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            name_contains: String::new(),
            output: output.to_string(),
            if_read_only: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.if_read_only = true;
        self
    }

    pub fn name_contains(mut self, text: &str) -> Self {
        self.name_contains = text.to_string();
        self
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            class_grouping: "StackPanel".to_string(),
            fallback_output: "<TextBlock Text=\"FALLBACK_$name$\" />".to_string(),
            sub_property_output: "<TextBlock Text=\"SUBPROP_$name$\" />".to_string(),
            mappings: vec![
                Mapping::new("string", "<TextBlock Text=\"$name$\" />").read_only(),
                Mapping::new("string", "<TextBox Text=\"{x:Bind $name$, Mode=TwoWay}\" />"),
                Mapping::new(
                    "int|Integer",
                    "<Slider Minimum=\"0\" Maximum=\"100\" x:Name=\"$name$\" Value=\"{x:Bind $name$, Mode=TwoWay}\" />",
                ),
                Mapping::new(
                    "List<T>",
                    "<ItemsControl ItemsSource=\"{x:Bind $name$}\"></ItemsControl>",
                ),
                Mapping::new(
                    "bool|Boolean",
                    "<ToggleSwitch Header=\"$namewithspaces$\" IsOn=\"{x:Bind $name$, Mode=TwoWay}\" />",
                ),
                Mapping::new(
                    "DateTime|DateTimeOffset",
                    "<DatePicker Date=\"{x:Bind $name$, Mode=TwoWay}\" />",
                ),
            ],
        }
    }
}

impl Profile {
    /// Load a profile from a `.json` or `.toml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(XamlGenError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let label = path.display().to_string();
        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml(&label, &content)
        } else {
            Self::from_json(&label, &content)
        }
    }

    pub fn from_json(label: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| XamlGenError::invalid_profile(label, e.to_string()))
    }

    pub fn from_toml(label: &str, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| XamlGenError::invalid_profile(label, e.to_string()))
    }

    /// Validate and pre-parse the profile
    pub fn compile(&self) -> Result<CompiledProfile> {
        let label = if self.name.is_empty() {
            "<unnamed>"
        } else {
            self.name.as_str()
        };

        let mut mappings = Vec::with_capacity(self.mappings.len());
        for (index, mapping) in self.mappings.iter().enumerate() {
            let number = index + 1;
            let pattern = TypePattern::parse(&mapping.type_name).map_err(|e| {
                XamlGenError::invalid_profile(label, format!("mapping #{}: {}", number, e))
            })?;
            if mapping.output.trim().is_empty() {
                return Err(XamlGenError::invalid_profile(
                    label,
                    format!("mapping #{} ({}) has an empty Output", number, mapping.type_name),
                ));
            }

            mappings.push(CompiledMapping {
                number,
                pattern,
                name_contains: mapping
                    .name_contains
                    .split('|')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect(),
                if_read_only: mapping.if_read_only,
                template: Template::parse(&mapping.output),
            });
        }

        tracing::debug!("compiled profile {} with {} mappings", label, mappings.len());

        Ok(CompiledProfile {
            name: self.name.clone(),
            grouping: Grouping::parse(&self.class_grouping),
            fallback: Template::parse(&self.fallback_output),
            sub_property: Template::parse(&self.sub_property_output),
            mappings,
        })
    }
}

/// A mapping rule ready for matching
#[derive(Debug, Clone)]
pub struct CompiledMapping {
    /// 1-based position in the profile
    pub number: usize,
    pub pattern: TypePattern,
    /// Lowercase name fragments, any of which must occur in the member name
    pub name_contains: Vec<String>,
    pub if_read_only: bool,
    pub template: Template,
}

impl CompiledMapping {
    /// Name and read-only criteria; the type is checked separately
    pub fn accepts(&self, name: &str, is_read_only: bool) -> bool {
        if self.if_read_only && !is_read_only {
            return false;
        }
        if self.name_contains.is_empty() {
            return true;
        }
        let name = name.to_lowercase();
        self.name_contains.iter().any(|part| name.contains(part))
    }
}

/// A validated profile
#[derive(Debug, Clone)]
pub struct CompiledProfile {
    pub name: String,
    pub grouping: Grouping,
    pub fallback: Template,
    pub sub_property: Template,
    pub mappings: Vec<CompiledMapping>,
}
