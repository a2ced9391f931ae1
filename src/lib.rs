//! xamlgen-engine: XAML markup generation from C# declarations
//!
//! Given a C# source file and a cursor position, the engine finds the
//! enclosing class (or the property under the cursor) and renders its
//! public, readable instance properties as XAML using a configurable
//! output profile. Base classes and property types are resolved from the
//! same file, additional source files and library manifests.
//!
//! # Example
//!
//! ```ignore
//! use xamlgen_engine::{ClassAnalyzer, FileIndex, Profile, SemanticModel, SymbolOrigin};
//!
//! let source = r#"
//! public class Person
//! {
//!     public string Name { get; set; }
//! }
//! "#;
//!
//! let primary = FileIndex::parse("Person.cs", source, SymbolOrigin::PrimaryFile)?;
//! let model = SemanticModel::new(primary);
//! let profile = Profile::default().compile()?;
//!
//! let output = ClassAnalyzer::new(&profile).analyze(&model, source.find("Name").unwrap());
//! println!("{}", output.output);
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detectors;
pub mod error;
pub mod lang;
pub mod model;
pub mod parsing;
pub mod profile;
pub mod schema;

// Re-export commonly used types
pub use analysis::{ClassAnalyzer, Counters, Grouping, MemberFilter, TypeClass};
pub use cli::{Cli, OutputFormat};
pub use config::XamlGenConfig;
pub use error::{Result, XamlGenError};
pub use lang::Lang;
pub use model::{
    FileIndex, LibraryIndex, LibraryManifest, SemanticModel, SemanticModelBuilder, SymbolSource,
    WorkspaceIndex,
};
pub use profile::{CompiledProfile, Mapping, Profile};
pub use schema::{
    Accessibility, AnalyzerOutput, ClassDeclaration, MemberDeclaration, OutputType, Span,
    SymbolOrigin, TypeDescriptor, TypeKind,
};
