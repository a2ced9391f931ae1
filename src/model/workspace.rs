//! Declarations of additional source files

use std::path::PathBuf;

use super::{FileIndex, SymbolSource};
use crate::error::Result;
use crate::schema::{ClassDeclaration, SymbolOrigin};

/// Index over several source files, searched in the order they were added
#[derive(Debug, Clone, Default)]
pub struct WorkspaceIndex {
    files: Vec<FileIndex>,
}

impl WorkspaceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file: FileIndex) {
        self.files.push(file);
    }

    /// Parse an in-memory source buffer and add it
    pub fn add_source(&mut self, path: impl Into<PathBuf>, source: &str) -> Result<()> {
        let file = FileIndex::parse(path.into(), source, SymbolOrigin::SourceFile)?;
        self.add(file);
        Ok(())
    }

    /// Load files from disk. Files that cannot be read or parsed are skipped
    /// with a warning; their types are then simply unresolved.
    pub fn load<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut workspace = Self::new();
        for path in paths {
            let path = path.into();
            match FileIndex::load(&path, SymbolOrigin::SourceFile) {
                Ok(file) => workspace.add(file),
                Err(e) => tracing::warn!("Skipping additional file {}: {}", path.display(), e),
            }
        }
        workspace
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

impl SymbolSource for WorkspaceIndex {
    fn source_name(&self) -> &str {
        "additional source files"
    }

    fn declarations(&self) -> Box<dyn Iterator<Item = &ClassDeclaration> + '_> {
        Box::new(self.files.iter().flat_map(|file| file.types().iter()))
    }

    fn lookup_full_name(&self, full_name: &str) -> Option<&ClassDeclaration> {
        self.files.iter().find_map(|file| file.lookup_full_name(full_name))
    }

    fn lookup(&self, name: &str) -> Option<&ClassDeclaration> {
        self.files.iter().find_map(|file| file.lookup(name))
    }
}
