//! Declarations of a single source file

use std::fs;
use std::path::{Path, PathBuf};

use super::{SymbolSource, TypeTable};
use crate::error::{Result, XamlGenError};
use crate::lang::Lang;
use crate::parsing::parse_and_extract;
use crate::schema::{ClassDeclaration, MemberDeclaration, SymbolOrigin};

/// Index over the type declarations of one file
#[derive(Debug, Clone)]
pub struct FileIndex {
    path: PathBuf,
    name: String,
    types: Vec<ClassDeclaration>,
    table: TypeTable,
}

impl FileIndex {
    /// Parse a source buffer
    pub fn parse(path: impl AsRef<Path>, source: &str, origin: SymbolOrigin) -> Result<Self> {
        let path = path.as_ref();
        let lang = Lang::from_path(path)?;
        let types = parse_and_extract(path, source, lang, origin)?;
        Ok(Self::from_declarations(path, types))
    }

    /// Read and parse a file from disk
    pub fn load(path: impl AsRef<Path>, origin: SymbolOrigin) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(XamlGenError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let source = fs::read_to_string(path)?;
        Self::parse(path, &source, origin)
    }

    /// Index already-extracted declarations
    pub fn from_declarations(path: impl AsRef<Path>, types: Vec<ClassDeclaration>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: path.display().to_string(),
            table: TypeTable::build(&types),
            path,
            types,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn types(&self) -> &[ClassDeclaration] {
        &self.types
    }

    /// Smallest class, record or struct whose span contains the position
    pub fn enclosing_class(&self, position: usize) -> Option<&ClassDeclaration> {
        self.types
            .iter()
            .filter(|ty| !matches!(ty.kind, crate::schema::TypeKind::Interface))
            .filter_map(|ty| ty.span.filter(|s| s.contains(position)).map(|s| (ty, s.len())))
            .min_by_key(|(_, len)| *len)
            .map(|(ty, _)| ty)
    }

    /// Property declaration at the position, with its owning class
    pub fn enclosing_member(
        &self,
        position: usize,
    ) -> Option<(&ClassDeclaration, &MemberDeclaration)> {
        let class = self.enclosing_class(position)?;
        class.member_at(position).map(|member| (class, member))
    }
}

impl SymbolSource for FileIndex {
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
