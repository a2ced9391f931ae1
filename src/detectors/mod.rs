//! Declaration detectors
//!
//! Turn a tree-sitter syntax tree into the [`ClassDeclaration`]s of the
//! symbol model.
//!
//! # Architecture
//!
//! 1. **Grammar definitions** (`grammar.rs`): AST node kinds and field
//!    names per language.
//!
//! 2. **Language extractors** (`csharp.rs`): walk the tree using a grammar
//!    and build declarations (types, properties, attributes, base lists).
//!
//! 3. **Shared helpers** (`common.rs`): node text and child traversal.
//!
//! [`ClassDeclaration`]: crate::schema::ClassDeclaration

pub mod common;
pub mod csharp;
pub mod grammar;
