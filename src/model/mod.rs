//! Symbol resolution and the semantic model
//!
//! The analyzer never looks at syntax. It asks a [`SemanticModel`] for the
//! class at a cursor position and for the declaration behind a type
//! reference. The model answers from a primary [`FileIndex`] and then from
//! any number of additional [`SymbolSource`]s, in the order they were added:
//!
//! - [`FileIndex`] - declarations of one parsed source file
//! - [`WorkspaceIndex`] - declarations of additional source files
//! - [`LibraryIndex`] - declarations described by a library manifest
//!
//! A reference that no source knows is simply unresolved; callers treat it
//! as a type without members.

mod file_index;
mod library;
mod workspace;

use std::collections::HashMap;

pub use file_index::FileIndex;
pub use library::{LibraryIndex, LibraryManifest, ManifestProperty, ManifestType};
pub use workspace::WorkspaceIndex;

use crate::schema::{ClassDeclaration, TypeDescriptor};

/// A queryable set of type declarations
pub trait SymbolSource {
    /// Human-readable name used in logs
    fn source_name(&self) -> &str;

    /// Every declaration, in declaration order
    fn declarations(&self) -> Box<dyn Iterator<Item = &ClassDeclaration> + '_>;

    /// Find a declaration by its namespace-qualified name
    fn lookup_full_name(&self, full_name: &str) -> Option<&ClassDeclaration> {
        self.declarations().find(|decl| decl.full_name == full_name)
    }

    /// Find a declaration by namespace-qualified name, then by simple name
    fn lookup(&self, name: &str) -> Option<&ClassDeclaration> {
        self.lookup_full_name(name)
            .or_else(|| self.declarations().find(|decl| decl.name == name))
    }
}

/// Whether a declaration answers a reference that matched no full name
///
/// A qualified reference (`Models.Customer`) must match a trailing part of
/// the full name at a namespace boundary; an unqualified one matches the
/// simple name.
fn matches_partially(decl: &ClassDeclaration, name: &str) -> bool {
    if name.contains('.') {
        decl.full_name
            .strip_suffix(name)
            .is_some_and(|prefix| prefix.ends_with('.'))
    } else {
        decl.name == name
    }
}

/// Name lookup table over a list of declarations
///
/// Full names are unique keys; simple names map to the first declaration
/// carrying that name.
#[derive(Debug, Clone, Default)]
pub(crate) struct TypeTable {
    by_full_name: HashMap<String, usize>,
    by_simple_name: HashMap<String, usize>,
}

impl TypeTable {
    pub(crate) fn build(types: &[ClassDeclaration]) -> Self {
        let mut table = Self::default();
        for (idx, ty) in types.iter().enumerate() {
            table.by_full_name.entry(ty.full_name.clone()).or_insert(idx);
            table.by_simple_name.entry(ty.name.clone()).or_insert(idx);
        }
        table
    }

    pub(crate) fn find(&self, name: &str) -> Option<usize> {
        self.find_full_name(name)
            .or_else(|| self.by_simple_name.get(name).copied())
    }

    pub(crate) fn find_full_name(&self, full_name: &str) -> Option<usize> {
        self.by_full_name.get(full_name).copied()
    }
}

/// The semantic model for one analysis request
pub struct SemanticModel {
    primary: FileIndex,
    sources: Vec<Box<dyn SymbolSource>>,
}

impl SemanticModel {
    /// Model over a single file
    pub fn new(primary: FileIndex) -> Self {
        Self {
            primary,
            sources: Vec::new(),
        }
    }

    /// Start building a model with additional sources
    pub fn builder(primary: FileIndex) -> SemanticModelBuilder {
        SemanticModelBuilder {
            model: Self::new(primary),
        }
    }

    pub fn primary(&self) -> &FileIndex {
        &self.primary
    }

    /// Number of sources consulted after the primary file
    pub fn additional_sources(&self) -> usize {
        self.sources.len()
    }

    /// Innermost class whose span contains the position in the primary file
    pub fn enclosing_class(&self, position: usize) -> Option<&ClassDeclaration> {
        self.primary.enclosing_class(position)
    }

    /// Resolve a type reference against every source
    ///
    /// Full names are tried against the primary file, other files and
    /// libraries before any partial match is considered, so a qualified
    /// reference is never captured by a same-named type elsewhere.
    pub fn resolve(&self, ty: &TypeDescriptor) -> Option<&ClassDeclaration> {
        self.resolve_excluding(ty, None)
    }

    /// The base class of a declaration
    ///
    /// The first base list entry that resolves to an inheritable type wins;
    /// interfaces and unresolved entries are skipped. The declaration itself
    /// is never its own base, so `class Order : Lib.Order` reaches the
    /// library type.
    pub fn resolve_base(&self, class: &ClassDeclaration) -> Option<&ClassDeclaration> {
        class.bases.iter().find_map(|base| {
            self.resolve_excluding(base, Some(&class.full_name))
                .filter(|found| found.kind.is_inheritable())
        })
    }

    fn resolve_excluding(
        &self,
        ty: &TypeDescriptor,
        exclude: Option<&str>,
    ) -> Option<&ClassDeclaration> {
        let name = ty.name.trim_start_matches("global::");
        let allowed = |decl: &&ClassDeclaration| exclude != Some(decl.full_name.as_str());

        let exact = self
            .all_sources()
            .find_map(|source| source.lookup_full_name(name).filter(allowed).map(|d| (source, d)));
        let found = exact.or_else(|| {
            self.all_sources().find_map(|source| {
                source
                    .declarations()
                    .filter(allowed)
                    .find(|decl| matches_partially(decl, name))
                    .map(|d| (source, d))
            })
        });

        match found {
            Some((source, decl)) => {
                tracing::trace!("resolved {} to {} from {}", ty, decl.full_name, source.source_name());
                Some(decl)
            }
            None => None,
        }
    }

    fn all_sources(&self) -> impl Iterator<Item = &dyn SymbolSource> {
        std::iter::once(&self.primary as &dyn SymbolSource)
            .chain(self.sources.iter().map(|source| source.as_ref()))
    }
}

/// Builder adding sources in resolution order
pub struct SemanticModelBuilder {
    model: SemanticModel,
}

impl SemanticModelBuilder {
    /// Add any symbol source
    pub fn with_source(mut self, source: Box<dyn SymbolSource>) -> Self {
        self.model.sources.push(source);
        self
    }

    /// Add one additional source file
    pub fn with_source_file(self, file: FileIndex) -> Self {
        self.with_source(Box::new(file))
    }

    /// Add additional source files
    pub fn with_workspace(self, workspace: WorkspaceIndex) -> Self {
        if workspace.is_empty() {
            return self;
        }
        self.with_source(Box::new(workspace))
    }

    /// Add a referenced library
    pub fn with_library(self, library: LibraryIndex) -> Self {
        self.with_source(Box::new(library))
    }

    pub fn build(self) -> SemanticModel {
        self.model
    }
}
