//! Grouping wrapper around per-member output

use std::fmt;

const GRID_ROWS: &str = "GRID-PLUS-ROWDEFS";
const GRID_ROWS_AND_COLUMNS: &str = "GRID-PLUS-ROWDEFS-2COLS";

/// Container placed around the rendered members of a class
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Grouping {
    /// Entries are emitted unwrapped
    #[default]
    None,
    /// `<tag attributes>` ... `</tag>`
    Container {
        tag: String,
        attributes: Option<String>,
    },
    /// `<Grid>` with one row per entry
    GridWithRowDefinitions,
    /// `<Grid>` with an Auto and a star column plus one row per entry
    GridWithRowAndColumnDefinitions,
}

impl Grouping {
    /// Resolve a `ClassGrouping` value such as `StackPanel`,
    /// `StackPanel Orientation="Horizontal"` or `GRID-PLUS-ROWDEFS`
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::None;
        }
        if text.eq_ignore_ascii_case(GRID_ROWS_AND_COLUMNS) {
            return Self::GridWithRowAndColumnDefinitions;
        }
        if text.eq_ignore_ascii_case(GRID_ROWS) {
            return Self::GridWithRowDefinitions;
        }

        match text.split_once(char::is_whitespace) {
            Some((tag, attributes)) => Self::Container {
                tag: tag.to_string(),
                attributes: Some(attributes.trim().to_string()),
            },
            None => Self::Container {
                tag: text.to_string(),
                attributes: None,
            },
        }
    }

    /// Whether this is one of the generated grid layouts
    pub fn is_grid_indicator(&self) -> bool {
        matches!(
            self,
            Self::GridWithRowDefinitions | Self::GridWithRowAndColumnDefinitions
        )
    }

    /// Opening lines for a container holding `rows` entries
    pub fn open_lines(&self, rows: usize) -> Vec<String> {
        match self {
            Self::None => Vec::new(),
            Self::Container { tag, attributes } => match attributes {
                Some(attributes) => vec![format!("<{} {}>", tag, attributes)],
                None => vec![format!("<{}>", tag)],
            },
            Self::GridWithRowDefinitions => {
                let mut lines = vec!["<Grid>".to_string()];
                lines.extend(row_definitions(rows));
                lines
            }
            Self::GridWithRowAndColumnDefinitions => {
                let mut lines = vec!["<Grid>".to_string()];
                lines.extend(column_definitions());
                lines.extend(row_definitions(rows));
                lines
            }
        }
    }

    /// Closing tag, empty for [`Grouping::None`]
    pub fn close_tag(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Container { tag, .. } => format!("</{}>", tag),
            Self::GridWithRowDefinitions | Self::GridWithRowAndColumnDefinitions => {
                "</Grid>".to_string()
            }
        }
    }

    /// Wrap rendered entries, newline-joined without a trailing newline
    pub fn wrap(&self, entries: &[String]) -> String {
        let mut lines = self.open_lines(entries.len().max(1));
        lines.extend(entries.iter().cloned());
        if !matches!(self, Self::None) {
            lines.push(self.close_tag());
        }
        lines.join("\n")
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Container {
                tag,
                attributes: Some(attributes),
            } => write!(f, "{} {}", tag, attributes),
            Self::Container { tag, .. } => f.write_str(tag),
            Self::GridWithRowDefinitions => f.write_str(GRID_ROWS),
            Self::GridWithRowAndColumnDefinitions => f.write_str(GRID_ROWS_AND_COLUMNS),
        }
    }
}

fn column_definitions() -> Vec<String> {
    vec![
        "<Grid.ColumnDefinitions>".to_string(),
        "<ColumnDefinition Width=\"Auto\" />".to_string(),
        "<ColumnDefinition Width=\"*\" />".to_string(),
        "</Grid.ColumnDefinitions>".to_string(),
    ]
}

/// `rows - 1` Auto rows followed by one star row
fn row_definitions(rows: usize) -> Vec<String> {
    let rows = rows.max(1);
    let mut lines = Vec::with_capacity(rows + 2);
    lines.push("<Grid.RowDefinitions>".to_string());
    for _ in 1..rows {
        lines.push("<RowDefinition Height=\"Auto\" />".to_string());
    }
    lines.push("<RowDefinition Height=\"*\" />".to_string());
    lines.push("</Grid.RowDefinitions>".to_string());
    lines
}
