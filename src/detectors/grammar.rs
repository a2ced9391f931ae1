//! Declaration grammar definitions
//!
//! Maps the declaration concepts the analyzer needs (types, namespaces,
//! properties, accessors, base lists) to tree-sitter node kinds. The
//! extractor in `csharp.rs` reads these tables instead of hard-coding
//! node names.

use crate::schema::TypeKind;

/// Language-specific AST node mappings for declaration extraction
#[derive(Debug, Clone)]
pub struct DeclarationGrammar {
    /// Language identifier
    pub name: &'static str,

    // =========================================================================
    // Containers
    // =========================================================================
    /// Namespace nodes whose `name` field prefixes nested type names
    pub namespace_nodes: &'static [&'static str],

    /// Namespace nodes that apply to the rest of the file
    /// e.g., C# 10 `namespace Foo;`
    pub file_scoped_namespace_nodes: &'static [&'static str],

    /// Type declaration nodes and the kind each produces
    pub type_nodes: &'static [(&'static str, TypeKind)],

    /// Body node holding a type's member declarations
    pub body_nodes: &'static [&'static str],

    // =========================================================================
    // Members
    // =========================================================================
    /// Property declaration nodes
    pub property_nodes: &'static [&'static str],

    /// Primary constructor parameter list (records)
    pub parameter_list_nodes: &'static [&'static str],

    /// Single parameter inside a parameter list
    pub parameter_nodes: &'static [&'static str],

    /// Accessor list of a property
    pub accessor_list_nodes: &'static [&'static str],

    /// Single accessor inside an accessor list
    pub accessor_nodes: &'static [&'static str],

    /// Expression body (`=> expr`), which implies a getter only
    pub expression_body_nodes: &'static [&'static str],

    // =========================================================================
    // Modifiers and Metadata
    // =========================================================================
    /// Modifier nodes (`public`, `static`, ...)
    pub modifier_nodes: &'static [&'static str],

    /// Modifier keywords that may appear as bare tokens
    pub modifier_keywords: &'static [&'static str],

    /// Attribute list wrappers
    pub attribute_list_nodes: &'static [&'static str],

    /// Single attribute nodes
    pub attribute_nodes: &'static [&'static str],

    /// Base list of a type declaration
    pub base_list_nodes: &'static [&'static str],

    /// Base list entries that wrap a type with constructor arguments
    /// e.g., `record Child(int X) : Parent(X)`
    pub base_with_arguments_nodes: &'static [&'static str],

    // =========================================================================
    // Field Names for Child Access
    // =========================================================================
    /// Field name for declaration names (usually "name")
    pub name_field: &'static str,

    /// Field name for declared types (usually "type")
    pub type_field: &'static str,
}

pub static CSHARP_GRAMMAR: DeclarationGrammar = DeclarationGrammar {
    name: "csharp",
    namespace_nodes: &["namespace_declaration"],
    file_scoped_namespace_nodes: &["file_scoped_namespace_declaration"],
    type_nodes: &[
        ("class_declaration", TypeKind::Class),
        ("record_declaration", TypeKind::Record),
        ("record_struct_declaration", TypeKind::Struct),
        ("struct_declaration", TypeKind::Struct),
        ("interface_declaration", TypeKind::Interface),
    ],
    body_nodes: &["declaration_list"],
    property_nodes: &["property_declaration"],
    parameter_list_nodes: &["parameter_list"],
    parameter_nodes: &["parameter"],
    accessor_list_nodes: &["accessor_list"],
    accessor_nodes: &["accessor_declaration"],
    expression_body_nodes: &["arrow_expression_clause"],
    modifier_nodes: &["modifier"],
    modifier_keywords: &[
        "public",
        "protected",
        "private",
        "internal",
        "static",
        "readonly",
        "abstract",
        "virtual",
        "override",
        "sealed",
        "new",
        "required",
    ],
    attribute_list_nodes: &["attribute_list"],
    attribute_nodes: &["attribute"],
    base_list_nodes: &["base_list"],
    base_with_arguments_nodes: &["primary_constructor_base_type"],
    name_field: "name",
    type_field: "type",
};

impl DeclarationGrammar {
    /// Type kind for a declaration node kind, if it declares a type
    pub fn type_kind(&self, node_kind: &str) -> Option<TypeKind> {
        self.type_nodes
            .iter()
            .find(|(kind, _)| *kind == node_kind)
            .map(|(_, type_kind)| *type_kind)
    }
}
