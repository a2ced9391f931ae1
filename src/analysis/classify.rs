//! Type classification and mapping type patterns
//!
//! Classification decides whether a member recurses into sub-properties
//! (objects and collections) and lets primitive aliases (`int`, `Int32`,
//! `Integer`) match each other in mapping rules.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::schema::TypeDescriptor;

/// Classification of a declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeClass {
    String,
    Boolean,
    Numeric,
    /// Enumerable with the given element type
    Collection(TypeDescriptor),
    Object,
}

impl TypeClass {
    /// Whether `$subprops$` has members to enumerate for this class
    pub fn has_sub_properties(&self) -> bool {
        matches!(self, Self::Collection(_) | Self::Object)
    }
}

/// Primitive spellings across C#, VB and the BCL, keyed by lowercase simple name
static PRIMITIVE_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("string", "string"),
        ("char", "char"),
        ("bool", "bool"),
        ("boolean", "bool"),
        ("byte", "byte"),
        ("sbyte", "sbyte"),
        ("short", "short"),
        ("int16", "short"),
        ("ushort", "ushort"),
        ("uint16", "ushort"),
        ("int", "int"),
        ("int32", "int"),
        ("integer", "int"),
        ("uint", "uint"),
        ("uint32", "uint"),
        ("uinteger", "uint"),
        ("long", "long"),
        ("int64", "long"),
        ("ulong", "ulong"),
        ("uint64", "ulong"),
        ("float", "float"),
        ("single", "float"),
        ("double", "double"),
        ("decimal", "decimal"),
        ("nint", "nint"),
        ("intptr", "nint"),
        ("nuint", "nuint"),
        ("uintptr", "nuint"),
        ("object", "object"),
    ]
    .into_iter()
    .collect()
});

const NUMERIC: &[&str] = &[
    "byte", "sbyte", "short", "ushort", "int", "uint", "long", "ulong", "float", "double",
    "decimal", "nint", "nuint",
];

/// Single-argument generics that wrap a value rather than enumerate values
const NON_COLLECTION_WRAPPERS: &[&str] = &[
    "nullable",
    "task",
    "valuetask",
    "lazy",
    "func",
    "action",
    "predicate",
    "iobservable",
    "iobserver",
    "weakreference",
    "expression",
    "eventhandler",
];

/// Canonical primitive name for a type name, if it names a primitive
pub fn canonical_primitive(name: &str) -> Option<&'static str> {
    let simple = TypeDescriptor::named(name).simple_name().to_lowercase();
    PRIMITIVE_ALIASES.get(simple.as_str()).copied()
}

/// Classify a declared type
pub fn classify(ty: &TypeDescriptor) -> TypeClass {
    if let Some(element) = ty.array_element() {
        return TypeClass::Collection(element);
    }

    match canonical_primitive(&ty.name) {
        Some("string") | Some("char") => return TypeClass::String,
        Some("bool") => return TypeClass::Boolean,
        Some(p) if NUMERIC.contains(&p) => return TypeClass::Numeric,
        _ => {}
    }

    let simple = ty.simple_name().to_lowercase();
    if ty.args.len() == 1 {
        if simple == "nullable" {
            return classify(&ty.args[0]);
        }
        if !NON_COLLECTION_WRAPPERS.contains(&simple.as_str()) {
            return TypeClass::Collection(ty.args[0].clone());
        }
    }

    TypeClass::Object
}

/// Case-insensitive canonical text with primitive aliases unified
fn canonical_text(ty: &TypeDescriptor) -> String {
    let mut text = match canonical_primitive(&ty.name) {
        Some(p) => p.to_string(),
        None => ty.name.trim_start_matches("global::").to_lowercase(),
    };
    if !ty.args.is_empty() {
        let args: Vec<String> = ty.args.iter().map(canonical_text).collect();
        text.push('<');
        text.push_str(&args.join(","));
        text.push('>');
    }
    if ty.nullable {
        text.push('?');
    }
    if ty.is_array {
        text.push_str("[]");
    }
    text
}

/// How a type pattern matched a member type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    /// Same type text (aliases and namespaces aside)
    Exact,
    /// Same generic type with a single argument, via a `Name<T>` pattern
    Shape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Alternative {
    Exact(TypeDescriptor),
    Shape(String),
}

/// The parsed `Type` field of a mapping
///
/// Alternatives are separated by `|`, e.g. `int|Integer|long`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePattern {
    source: String,
    alternatives: Vec<Alternative>,
}

impl TypePattern {
    /// Parse a mapping's `Type` text
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        if text.trim().is_empty() {
            return Err("Type must not be empty".to_string());
        }

        let mut alternatives = Vec::new();
        for raw in text.split('|') {
            let alt = raw.trim();
            if alt.is_empty() {
                return Err(format!("'{}' contains an empty alternative", text));
            }
            if !brackets_balanced(alt) {
                return Err(format!("'{}' has unbalanced brackets", alt));
            }

            let ty = TypeDescriptor::parse(alt);
            if ty.name.is_empty() || ty.args.iter().any(|a| a.name.is_empty()) {
                return Err(format!("'{}' is not a valid type", alt));
            }

            if ty.args.len() == 1 && is_type_parameter(&ty.args[0]) {
                alternatives.push(Alternative::Shape(ty.name.clone()));
            } else {
                alternatives.push(Alternative::Exact(ty));
            }
        }

        Ok(Self {
            source: text.to_string(),
            alternatives,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Best way any alternative matches the type
    pub fn match_kind(&self, ty: &TypeDescriptor) -> Option<MatchKind> {
        let exact = self.alternatives.iter().any(|alt| match alt {
            Alternative::Exact(pattern) => {
                canonical_text(pattern) == canonical_text(ty)
                    || canonical_text(&pattern.unqualified()) == canonical_text(&ty.unqualified())
            }
            Alternative::Shape(_) => false,
        });
        if exact {
            return Some(MatchKind::Exact);
        }

        let shape = ty.args.len() == 1
            && self.alternatives.iter().any(|alt| match alt {
                Alternative::Shape(name) => {
                    let pattern = TypeDescriptor::named(name.as_str());
                    pattern.simple_name().eq_ignore_ascii_case(ty.simple_name())
                }
                Alternative::Exact(_) => false,
            });
        shape.then_some(MatchKind::Shape)
    }
}

/// `T`, `U`, `TItem`: the conventional spelling of a type parameter
fn is_type_parameter(ty: &TypeDescriptor) -> bool {
    if ty.is_generic() || ty.is_array || ty.nullable {
        return false;
    }
    let mut chars = ty.name.chars();
    match (chars.next(), chars.next()) {
        (Some(first), None) => first.is_ascii_uppercase(),
        (Some('T'), Some(second)) => second.is_ascii_uppercase(),
        _ => false,
    }
}

fn brackets_balanced(text: &str) -> bool {
    let mut stack = Vec::new();
    for c in text.chars() {
        match c {
            '<' | '(' | '[' => stack.push(c),
            '>' => {
                if stack.pop() != Some('<') {
                    return false;
                }
            }
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}
