//! Declarations of referenced, compiled libraries
//!
//! Library metadata is supplied as a JSON manifest:
//!
//! ```json
//! {
//!   "name": "TestLibrary",
//!   "types": [
//!     {
//!       "name": "TestLibrary.TestClass",
//!       "base": "TestLibrary.BaseTestClass",
//!       "properties": [ { "name": "TestProperty", "type": "string" } ]
//!     }
//!   ]
//! }
//! ```
//!
//! Property entries default to public, instance, readable and writable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{SymbolSource, TypeTable};
use crate::error::{Result, XamlGenError};
use crate::schema::{
    Accessibility, ClassDeclaration, MemberDeclaration, SymbolOrigin, TypeDescriptor, TypeKind,
};

/// Top-level manifest document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryManifest {
    pub name: String,

    #[serde(default)]
    pub types: Vec<ManifestType>,
}

/// One type exported by a library
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestType {
    /// Namespace-qualified name
    pub name: String,

    #[serde(default)]
    pub kind: TypeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(default)]
    pub properties: Vec<ManifestProperty>,
}

/// One property of a library type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestProperty {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default = "default_accessibility")]
    pub accessibility: Accessibility,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default = "default_true")]
    pub has_getter: bool,

    #[serde(default = "default_true")]
    pub has_setter: bool,

    #[serde(default)]
    pub attributes: Vec<String>,
}

fn default_accessibility() -> Accessibility {
    Accessibility::Public
}

fn default_true() -> bool {
    true
}

impl From<ManifestType> for ClassDeclaration {
    fn from(ty: ManifestType) -> Self {
        let name = TypeDescriptor::parse(&ty.name).simple_name().to_string();
        Self {
            name,
            full_name: ty.name,
            kind: ty.kind,
            members: ty
                .properties
                .into_iter()
                .map(|p| MemberDeclaration {
                    name: p.name,
                    ty: TypeDescriptor::parse(&p.ty),
                    accessibility: p.accessibility,
                    is_static: p.is_static,
                    is_read_only: !p.has_setter,
                    has_getter: p.has_getter,
                    attributes: p.attributes,
                    span: None,
                })
                .collect(),
            bases: ty.base.iter().map(|b| TypeDescriptor::parse(b)).collect(),
            span: None,
            origin: SymbolOrigin::Library,
        }
    }
}

/// Index over the types of one library manifest
#[derive(Debug, Clone)]
pub struct LibraryIndex {
    name: String,
    types: Vec<ClassDeclaration>,
    table: TypeTable,
}

impl LibraryIndex {
    /// Load a manifest from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| XamlGenError::LibraryLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let manifest: LibraryManifest =
            serde_json::from_str(&content).map_err(|e| XamlGenError::LibraryLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self::from_manifest(manifest))
    }

    /// Parse a manifest from a JSON string
    pub fn from_json(label: &str, json: &str) -> Result<Self> {
        let manifest: LibraryManifest =
            serde_json::from_str(json).map_err(|e| XamlGenError::LibraryLoad {
                path: label.into(),
                message: e.to_string(),
            })?;
        Ok(Self::from_manifest(manifest))
    }

    pub fn from_manifest(manifest: LibraryManifest) -> Self {
        let types: Vec<ClassDeclaration> = manifest.types.into_iter().map(Into::into).collect();
        tracing::debug!("library {} provides {} types", manifest.name, types.len());
        Self {
            name: manifest.name,
            table: TypeTable::build(&types),
            types,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> &[ClassDeclaration] {
        &self.types
    }
}

impl SymbolSource for LibraryIndex {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn declarations(&self) -> Box<dyn Iterator<Item = &ClassDeclaration> + '_> {
        Box::new(self.types.iter())
    }

    fn lookup_full_name(&self, full_name: &str) -> Option<&ClassDeclaration> {
        self.table.find_full_name(full_name).map(|idx| &self.types[idx])
    }

    fn lookup(&self, name: &str) -> Option<&ClassDeclaration> {
        self.table.find(name).map(|idx| &self.types[idx])
    }
}
