//! C# declaration detector
//!
//! Builds the language-agnostic symbol model from a C# syntax tree.
//!
//! # Supported Constructs
//!
//! - **Types**: class_declaration, record_declaration, struct_declaration,
//!   interface_declaration (nested types included)
//! - **Namespaces**: block-scoped and file-scoped
//! - **Members**: property_declaration (accessor lists and expression
//!   bodies), record primary constructor parameters
//! - **Metadata**: modifiers, attribute lists, base lists

use tree_sitter::{Node, Tree};

use crate::detectors::common::{children_of_kind, field_text, first_child_of_kind, get_node_text};
use crate::detectors::grammar::{DeclarationGrammar, CSHARP_GRAMMAR};
use crate::schema::{
    Accessibility, ClassDeclaration, MemberDeclaration, Span, SymbolOrigin, TypeDescriptor,
    TypeKind,
};

/// Extract all type declarations of a C# source file, outer types first
pub fn extract_types(source: &str, tree: &Tree, origin: SymbolOrigin) -> Vec<ClassDeclaration> {
    let mut extractor = Extractor {
        source,
        grammar: &CSHARP_GRAMMAR,
        origin,
        types: Vec::new(),
    };
    extractor.walk_container(&tree.root_node(), "");
    extractor.types
}

struct Extractor<'a> {
    source: &'a str,
    grammar: &'static DeclarationGrammar,
    origin: SymbolOrigin,
    types: Vec<ClassDeclaration>,
}

impl Extractor<'_> {
    fn walk_container(&mut self, node: &Node, prefix: &str) {
        let mut scoped_prefix = prefix.to_string();

        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        for child in children {
            let kind = child.kind();

            if self.grammar.namespace_nodes.contains(&kind) {
                let ns = qualify(&scoped_prefix, &self.name_of(&child));
                if let Some(body) = first_child_of_kind(&child, self.grammar.body_nodes) {
                    self.walk_container(&body, &ns);
                }
            } else if self.grammar.file_scoped_namespace_nodes.contains(&kind) {
                // Applies to the following siblings; some grammar versions nest them instead
                scoped_prefix = qualify(prefix, &self.name_of(&child));
                self.walk_container(&child, &scoped_prefix);
            } else if let Some(type_kind) = self.grammar.type_kind(kind) {
                self.extract_type(&child, type_kind, &scoped_prefix);
            } else if child.is_error() || self.grammar.body_nodes.contains(&kind) {
                self.walk_container(&child, &scoped_prefix);
            }
        }
    }

    fn extract_type(&mut self, node: &Node, kind: TypeKind, prefix: &str) {
        let name = self.name_of(node);
        if name.is_empty() {
            return;
        }
        let full_name = qualify(prefix, &name);

        let mut members = Vec::new();
        if node.kind().starts_with("record") {
            members.extend(self.record_parameters(node));
        }

        let body = first_child_of_kind(node, self.grammar.body_nodes);
        if let Some(ref body) = body {
            for property in children_of_kind(body, self.grammar.property_nodes) {
                if let Some(member) = self.extract_property(&property, kind) {
                    members.push(member);
                }
            }
        }

        tracing::trace!("extracted {} with {} members", full_name, members.len());

        self.types.push(ClassDeclaration {
            name,
            full_name: full_name.clone(),
            kind,
            members,
            bases: self.base_types(node),
            span: Some(Span::new(node.start_byte(), node.end_byte())),
            origin: self.origin,
        });

        if let Some(body) = body {
            self.walk_container(&body, &full_name);
        }
    }

    fn extract_property(&self, node: &Node, owner: TypeKind) -> Option<MemberDeclaration> {
        let name = field_text(node, self.grammar.name_field, self.source)?;
        let ty = field_text(node, self.grammar.type_field, self.source)
            .map(|text| TypeDescriptor::parse(&text))
            .unwrap_or_default();

        let modifiers = self.modifiers(node);
        let accessibility = if owner == TypeKind::Interface && !has_access_modifier(&modifiers) {
            Accessibility::Public
        } else {
            Accessibility::from_modifiers(modifiers.iter().map(String::as_str))
        };

        let accessors = self.accessors(node);
        let (has_getter, is_read_only) = if accessors.is_empty() {
            // Expression-bodied property: `public string Title => _title;`
            let expression_bodied =
                first_child_of_kind(node, self.grammar.expression_body_nodes).is_some();
            (expression_bodied, true)
        } else {
            let getter = accessors
                .iter()
                .any(|a| a.keyword == "get" && !a.restricted);
            let setter = accessors
                .iter()
                .any(|a| a.keyword == "set" && !a.restricted);
            (getter, !setter)
        };

        Some(MemberDeclaration {
            name,
            ty,
            accessibility,
            is_static: modifiers.iter().any(|m| m == "static"),
            is_read_only,
            has_getter,
            attributes: self.attributes(node),
            span: Some(Span::new(node.start_byte(), node.end_byte())),
        })
    }

    /// Positional record parameters become public init-only properties
    fn record_parameters(&self, node: &Node) -> Vec<MemberDeclaration> {
        let Some(list) = first_child_of_kind(node, self.grammar.parameter_list_nodes) else {
            return Vec::new();
        };

        children_of_kind(&list, self.grammar.parameter_nodes)
            .iter()
            .filter_map(|param| {
                let name = field_text(param, self.grammar.name_field, self.source)?;
                let ty = field_text(param, self.grammar.type_field, self.source)?;
                Some(MemberDeclaration {
                    name,
                    ty: TypeDescriptor::parse(&ty),
                    accessibility: Accessibility::Public,
                    is_static: false,
                    is_read_only: true,
                    has_getter: true,
                    attributes: self.attributes(param),
                    span: Some(Span::new(param.start_byte(), param.end_byte())),
                })
            })
            .collect()
    }

    fn accessors(&self, node: &Node) -> Vec<Accessor> {
        let Some(list) = first_child_of_kind(node, self.grammar.accessor_list_nodes) else {
            return Vec::new();
        };

        children_of_kind(&list, self.grammar.accessor_nodes)
            .iter()
            .filter_map(|accessor| {
                let keyword = self.accessor_keyword(accessor)?;
                let restricted = self
                    .modifiers(accessor)
                    .iter()
                    .any(|m| matches!(m.as_str(), "private" | "protected" | "internal"));
                Some(Accessor { keyword, restricted })
            })
            .collect()
    }

    fn accessor_keyword(&self, accessor: &Node) -> Option<String> {
        let mut cursor = accessor.walk();
        for child in accessor.children(&mut cursor) {
            if matches!(child.kind(), "get" | "set" | "init") {
                return Some(child.kind().to_string());
            }
        }
        field_text(accessor, self.grammar.name_field, self.source)
    }

    fn modifiers(&self, node: &Node) -> Vec<String> {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .filter_map(|child| {
                if self.grammar.modifier_nodes.contains(&child.kind()) {
                    Some(get_node_text(&child, self.source).trim().to_string())
                } else if self.grammar.modifier_keywords.contains(&child.kind()) {
                    Some(child.kind().to_string())
                } else {
                    None
                }
            })
            .collect()
    }

    fn attributes(&self, node: &Node) -> Vec<String> {
        children_of_kind(node, self.grammar.attribute_list_nodes)
            .iter()
            .flat_map(|list| children_of_kind(list, self.grammar.attribute_nodes))
            .filter_map(|attr| field_text(&attr, self.grammar.name_field, self.source))
            .collect()
    }

    fn base_types(&self, node: &Node) -> Vec<TypeDescriptor> {
        let Some(list) = first_child_of_kind(node, self.grammar.base_list_nodes) else {
            return Vec::new();
        };

        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter_map(|entry| {
                let ty_node = if self.grammar.base_with_arguments_nodes.contains(&entry.kind()) {
                    entry.named_child(0)?
                } else if entry.kind() == "argument_list" {
                    return None;
                } else {
                    entry
                };
                let text = get_node_text(&ty_node, self.source);
                Some(TypeDescriptor::parse(&text))
            })
            .collect()
    }

    fn name_of(&self, node: &Node) -> String {
        field_text(node, self.grammar.name_field, self.source).unwrap_or_default()
    }
}

struct Accessor {
    keyword: String,
    restricted: bool,
}

fn has_access_modifier(modifiers: &[String]) -> bool {
    modifiers
        .iter()
        .any(|m| matches!(m.as_str(), "public" | "protected" | "private" | "internal"))
}

fn qualify(prefix: &str, name: &str) -> String {
    match (prefix.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (_, true) => prefix.to_string(),
        _ => format!("{}.{}", prefix, name),
    }
}
