//! Semantic model data structures for class analysis
//!
//! These types are the language-agnostic symbol graph the analyzer works on.
//! Front ends (the C# detector, library manifests) produce them; nothing in
//! `analysis` looks at syntax trees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comment emitted when a class has no eligible members
pub const NO_PROPERTIES_COMMENT: &str = "<!-- No accessible properties when copying as XAML -->";

/// Byte range of a declaration in its source buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Inclusive containment: a cursor right after the closing token still
    /// belongs to the declaration.
    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position <= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Declared accessibility of a member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Public,
    Protected,
    #[default]
    Private,
    Internal,
    ProtectedInternal,
    PrivateProtected,
}

impl Accessibility {
    /// Combine C# accessibility modifiers into one accessibility
    ///
    /// Members without any modifier are private.
    pub fn from_modifiers<'a>(modifiers: impl IntoIterator<Item = &'a str>) -> Self {
        let (mut public, mut protected, mut private, mut internal) = (false, false, false, false);
        for modifier in modifiers {
            match modifier {
                "public" => public = true,
                "protected" => protected = true,
                "private" => private = true,
                "internal" => internal = true,
                _ => {}
            }
        }

        match (public, protected, private, internal) {
            (true, _, _, _) => Self::Public,
            (_, true, _, true) => Self::ProtectedInternal,
            (_, true, true, _) => Self::PrivateProtected,
            (_, true, _, _) => Self::Protected,
            (_, _, _, true) => Self::Internal,
            _ => Self::Private,
        }
    }
}

/// Type reference with generic arguments
///
/// Parsed from the text a declaration uses, e.g. `ObservableCollection<Order>`,
/// `List(Of String)`, `int?` or `TestLibrary.TestClass[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Type name as written, possibly namespace-qualified
    pub name: String,

    /// Generic type arguments, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeDescriptor>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_array: bool,
}

impl TypeDescriptor {
    /// Non-generic type with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Generic instantiation `name<args>`
    pub fn generic(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            args,
            ..Default::default()
        }
    }

    /// Parse type text. Never fails: text that is not understood becomes
    /// the name of a non-generic type.
    pub fn parse(text: &str) -> Self {
        let chars: Vec<char> = text.trim().chars().collect();
        let mut pos = 0;
        let parsed = parse_type(&chars, &mut pos);
        if pos < chars.len() {
            return Self::named(text.trim());
        }
        parsed
    }

    /// Name without namespace qualifier or `global::` alias
    pub fn simple_name(&self) -> &str {
        let name = self.name.rsplit("::").next().unwrap_or(&self.name);
        name.rsplit('.').next().unwrap_or(name)
    }

    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }

    /// Element type of an array type
    pub fn array_element(&self) -> Option<TypeDescriptor> {
        if !self.is_array {
            return None;
        }
        Some(Self {
            is_array: false,
            ..self.clone()
        })
    }

    /// The same type with namespace qualifiers removed at every level
    pub fn unqualified(&self) -> TypeDescriptor {
        Self {
            name: self.simple_name().to_string(),
            args: self.args.iter().map(|a| a.unqualified()).collect(),
            nullable: self.nullable,
            is_array: self.is_array,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        if self.nullable {
            write!(f, "?")?;
        }
        if self.is_array {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

fn skip_ws(chars: &[char], pos: &mut usize) {
    while *pos < chars.len() && chars[*pos].is_whitespace() {
        *pos += 1;
    }
}

fn parse_type(chars: &[char], pos: &mut usize) -> TypeDescriptor {
    skip_ws(chars, pos);

    // Tuples are kept as opaque names
    if *pos < chars.len() && chars[*pos] == '(' {
        let start = *pos;
        let mut depth = 0usize;
        while *pos < chars.len() {
            match chars[*pos] {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        *pos += 1;
                        break;
                    }
                }
                _ => {}
            }
            *pos += 1;
        }
        let name: String = chars[start..*pos].iter().collect();
        let mut ty = TypeDescriptor::named(name);
        parse_suffixes(chars, pos, &mut ty);
        return ty;
    }

    let start = *pos;
    while *pos < chars.len() && !"<>(),?[]".contains(chars[*pos]) {
        *pos += 1;
    }
    let name: String = chars[start..*pos].iter().collect::<String>().trim().to_string();
    let mut ty = TypeDescriptor::named(name);

    skip_ws(chars, pos);
    if *pos < chars.len() && chars[*pos] == '<' {
        *pos += 1;
        ty.args = parse_args(chars, pos, '>');
    } else if *pos < chars.len() && chars[*pos] == '(' && starts_with_of(chars, *pos + 1) {
        // VB generic syntax: List(Of String)
        *pos += 1;
        skip_ws(chars, pos);
        *pos += 2;
        ty.args = parse_args(chars, pos, ')');
    }

    parse_suffixes(chars, pos, &mut ty);
    ty
}

fn starts_with_of(chars: &[char], mut pos: usize) -> bool {
    skip_ws(chars, &mut pos);
    pos + 2 < chars.len()
        && chars[pos].eq_ignore_ascii_case(&'o')
        && chars[pos + 1].eq_ignore_ascii_case(&'f')
        && chars[pos + 2].is_whitespace()
}

fn parse_args(chars: &[char], pos: &mut usize, close: char) -> Vec<TypeDescriptor> {
    let mut args = Vec::new();
    loop {
        args.push(parse_type(chars, pos));
        skip_ws(chars, pos);
        match chars.get(*pos) {
            Some(',') => *pos += 1,
            Some(c) if *c == close => {
                *pos += 1;
                break;
            }
            _ => break,
        }
    }
    args
}

fn parse_suffixes(chars: &[char], pos: &mut usize, ty: &mut TypeDescriptor) {
    loop {
        skip_ws(chars, pos);
        match chars.get(*pos) {
            Some('?') => {
                ty.nullable = true;
                *pos += 1;
            }
            Some('[') => {
                while *pos < chars.len() && chars[*pos] != ']' {
                    *pos += 1;
                }
                if *pos < chars.len() {
                    *pos += 1;
                }
                ty.is_array = true;
            }
            _ => break,
        }
    }
}

/// Kind of type declaration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Record,
    Struct,
    Interface,
}

impl TypeKind {
    /// Whether members of this kind are inherited by a derived class
    pub fn is_inheritable(&self) -> bool {
        matches!(self, Self::Class | Self::Record)
    }
}

/// Where a declaration came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolOrigin {
    #[default]
    PrimaryFile,
    SourceFile,
    Library,
}

/// A property-like member of a type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDeclaration {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeDescriptor,

    #[serde(default)]
    pub accessibility: Accessibility,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_read_only: bool,

    #[serde(default)]
    pub has_getter: bool,

    /// Attribute names as written, without arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

/// A type declaration with its members and base list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: String,

    /// Namespace-qualified name (nested types joined with `.`)
    pub full_name: String,

    #[serde(default)]
    pub kind: TypeKind,

    /// Members in declaration order
    #[serde(default)]
    pub members: Vec<MemberDeclaration>,

    /// Base list entries in declaration order (base class and interfaces)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<TypeDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,

    #[serde(default)]
    pub origin: SymbolOrigin,
}

impl ClassDeclaration {
    /// Find the member whose span contains the position
    pub fn member_at(&self, position: usize) -> Option<&MemberDeclaration> {
        self.members
            .iter()
            .find(|m| m.span.is_some_and(|s| s.contains(position)))
    }
}

/// Discriminator of an [`AnalyzerOutput`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputType {
    #[default]
    None,
    Class,
    Property,
}

/// Result of one analysis request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerOutput {
    pub name: String,
    pub output: String,
    pub output_type: OutputType,
}

impl AnalyzerOutput {
    /// The "nothing found at the cursor" result
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.output_type == OutputType::None
    }
}
