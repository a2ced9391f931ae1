//! Unified parsing module for declaration extraction.
//!
//! Turns a source buffer into the type declarations of the symbol model.
//! Used by the primary file index, the multi-file index, and the CLI's
//! `--print-ast` debugging switch.
//!
//! # Example
//!
//! ```ignore
//! use xamlgen_engine::parsing::parse_and_extract;
//! use xamlgen_engine::{Lang, SymbolOrigin};
//! use std::path::Path;
//!
//! let source = "public class Order { public int OrderId { get; set; } }";
//! let types = parse_and_extract(Path::new("Order.cs"), source, Lang::CSharp, SymbolOrigin::PrimaryFile)?;
//! ```

use std::path::Path;

use crate::detectors::csharp;
use crate::error::{Result, XamlGenError};
use crate::lang::Lang;
use crate::schema::{ClassDeclaration, SymbolOrigin};

/// Parse source code and extract its type declarations.
///
/// # Errors
///
/// Returns `XamlGenError::ParseFailure` if the language cannot be set on the
/// parser or tree-sitter produces no tree. Syntax errors inside the source
/// are tolerated: whatever declarations tree-sitter recovers are returned.
pub fn parse_and_extract(
    file_path: &Path,
    source: &str,
    lang: Lang,
    origin: SymbolOrigin,
) -> Result<Vec<ClassDeclaration>> {
    parse_and_extract_with_options(file_path, source, lang, origin, false)
}

/// Parse source code and extract declarations with debug options.
///
/// * `print_ast` - If true, prints the AST to stderr for debugging
pub fn parse_and_extract_with_options(
    file_path: &Path,
    source: &str,
    lang: Lang,
    origin: SymbolOrigin,
    print_ast: bool,
) -> Result<Vec<ClassDeclaration>> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&lang.tree_sitter_language())
        .map_err(|e| XamlGenError::ParseFailure {
            message: format!(
                "Failed to set language for {}: {:?}",
                file_path.display(),
                e
            ),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| XamlGenError::ParseFailure {
            message: format!("Failed to parse file: {}", file_path.display()),
        })?;

    if print_ast {
        eprintln!("=== AST for {} ===", file_path.display());
        eprintln!("{}", tree.root_node().to_sexp());
        eprintln!("=================");
    }

    if tree.root_node().has_error() {
        tracing::debug!(
            "{} contains syntax errors; using recovered declarations",
            file_path.display()
        );
    }

    let types = match lang {
        Lang::CSharp => csharp::extract_types(source, &tree, origin),
    };
    Ok(types)
}
