//! Placeholder substitution
//!
//! Templates are tokenized once when a profile is compiled and expanded per
//! member. Expansion runs left to right, so counter effects follow the order
//! in which placeholders appear.
//!
//! | Placeholder | Expansion |
//! |---|---|
//! | `$name$` | member name |
//! | `$namewithspaces$` | member name split into words |
//! | `$type$` | declared type |
//! | `$incint$` | increment counter, then advance it |
//! | `$repint$` | value last emitted by `$incint$` |
//! | `$subprops$` | rendered sub-properties |
//!
//! `<GRID-PLUS-ROWDEFS>` and `<GRID-PLUS-ROWDEFS-2COLS>` (any case) inside a
//! template open a grid sized to the sub-properties rendered by the template.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::grouping::Grouping;
use crate::schema::MemberDeclaration;

pub const NAME: &str = "$name$";
pub const NAME_WITH_SPACES: &str = "$namewithspaces$";
pub const TYPE: &str = "$type$";
pub const INCREMENT: &str = "$incint$";
pub const REPEAT: &str = "$repint$";
pub const SUB_PROPERTIES: &str = "$subprops$";

/// Numeric placeholder state for one top-level analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Next value emitted by `$incint$`
    pub increment: u32,
    /// Value emitted by `$repint$`
    pub repeat: u32,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    fn take_increment(&mut self) -> u32 {
        let value = self.increment;
        self.repeat = value;
        self.increment += 1;
        value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Name,
    NameWithSpaces,
    Type,
    Increment,
    Repeat,
    SubProperties,
    GridOpen(Grouping),
    GridClose(Grouping),
}

const PLACEHOLDERS: &[(&str, Segment)] = &[
    (NAME_WITH_SPACES, Segment::NameWithSpaces),
    (NAME, Segment::Name),
    (TYPE, Segment::Type),
    (INCREMENT, Segment::Increment),
    (REPEAT, Segment::Repeat),
    (SUB_PROPERTIES, Segment::SubProperties),
];

/// A tokenized output template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Tokenize template text. `\r\n` line breaks become `\n`.
    pub fn parse(text: &str) -> Self {
        let source = text.replace("\r\n", "\n");
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source.as_str();

        'scan: while let Some(c) = rest.chars().next() {
            if c == '$' {
                for (token, segment) in PLACEHOLDERS {
                    if rest.starts_with(token) {
                        flush(&mut literal, &mut segments);
                        segments.push(segment.clone());
                        rest = &rest[token.len()..];
                        continue 'scan;
                    }
                }
            } else if c == '<' {
                if let Some((segment, len)) = inline_grid_tag(rest) {
                    flush(&mut literal, &mut segments);
                    segments.push(segment);
                    rest = &rest[len..];
                    continue 'scan;
                }
            }
            literal.push(c);
            rest = &rest[c.len_utf8()..];
        }
        flush(&mut literal, &mut segments);

        Self { source, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn uses_sub_properties(&self) -> bool {
        self.segments.contains(&Segment::SubProperties)
    }

    /// Expand the template for one member.
    ///
    /// `sub_properties` is called once per `$subprops$` occurrence, at that
    /// point of the expansion, and returns one rendered entry per
    /// sub-property.
    pub fn expand(
        &self,
        member: &MemberDeclaration,
        counters: &mut Counters,
        sub_properties: &mut dyn FnMut(&mut Counters) -> Vec<String>,
    ) -> String {
        enum Piece {
            Text(String),
            Open(Grouping),
        }

        let mut pieces = Vec::with_capacity(self.segments.len());
        let mut rows = 0usize;

        for segment in &self.segments {
            let text = match segment {
                Segment::Literal(text) => text.clone(),
                Segment::Name => member.name.clone(),
                Segment::NameWithSpaces => name_with_spaces(&member.name),
                Segment::Type => member.ty.to_string(),
                Segment::Increment => counters.take_increment().to_string(),
                Segment::Repeat => counters.repeat.to_string(),
                Segment::SubProperties => {
                    let entries = sub_properties(counters);
                    rows += entries.len();
                    if entries.is_empty() {
                        String::new()
                    } else {
                        format!("\n{}\n", entries.join("\n"))
                    }
                }
                Segment::GridOpen(grouping) => {
                    pieces.push(Piece::Open(grouping.clone()));
                    continue;
                }
                Segment::GridClose(grouping) => grouping.close_tag(),
            };
            pieces.push(Piece::Text(text));
        }

        pieces
            .into_iter()
            .map(|piece| match piece {
                Piece::Text(text) => text,
                Piece::Open(grouping) => grouping.open_lines(rows.max(1)).join("\n"),
            })
            .collect()
    }
}

fn flush(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

/// Match `<GRID-PLUS-ROWDEFS...>` or its closing tag at the start of `text`
fn inline_grid_tag(text: &str) -> Option<(Segment, usize)> {
    let end = text.find('>')?;
    let inner = &text[1..end];
    let (closing, name) = match inner.strip_prefix('/') {
        Some(name) => (true, name),
        None => (false, inner),
    };

    let grouping = Grouping::parse(name);
    if !grouping.is_grid_indicator() {
        return None;
    }

    let segment = if closing {
        Segment::GridClose(grouping)
    } else {
        Segment::GridOpen(grouping)
    };
    Some((segment, end + 1))
}

static ACRONYM_BOUNDARY: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").ok());
static WORD_BOUNDARY: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").ok());

/// `OrderDescription` -> `Order Description`, `HTTPStatus` -> `HTTP Status`
pub fn name_with_spaces(name: &str) -> String {
    let mut text = name.replace('_', " ");
    for re in [&*ACRONYM_BOUNDARY, &*WORD_BOUNDARY].into_iter().flatten() {
        text = re.replace_all(&text, "$1 $2").into_owned();
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
