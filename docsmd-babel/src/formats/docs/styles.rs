//! Named paragraph styles and their Markdown prefixes.

use std::fmt;

/// Markdown line prefix for every named style the renderer knows.
const STYLE_PREFIXES: &[(&str, &str)] = &[
    ("NORMAL_TEXT", ""),
    ("TITLE", "# "),
    ("SUBTITLE", "## "),
    ("HEADING_1", "# "),
    ("HEADING_2", "## "),
    ("HEADING_3", "### "),
    ("HEADING_4", "#### "),
    ("HEADING_5", "##### "),
    ("HEADING_6", "###### "),
];

/// Markdown prefix for a named style type.
///
/// Unknown names map to the empty prefix, so such paragraphs render as plain text.
pub fn markdown_prefix(named_style_type: &str) -> &'static str {
    STYLE_PREFIXES
        .iter()
        .find(|(name, _)| *name == named_style_type)
        .map(|(_, prefix)| *prefix)
        .unwrap_or("")
}

/// Paragraph style identifiers understood by the document service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamedStyle {
    #[default]
    NormalText,
    Title,
    Subtitle,
    /// Heading level, 1 through 6
    Heading(u8),
}

impl NamedStyle {
    pub const MAX_HEADING_LEVEL: u8 = 6;

    /// Parse a service identifier such as `HEADING_2`.
    pub fn parse(name: &str) -> Option<NamedStyle> {
        match name {
            "NORMAL_TEXT" => Some(NamedStyle::NormalText),
            "TITLE" => Some(NamedStyle::Title),
            "SUBTITLE" => Some(NamedStyle::Subtitle),
            _ => {
                let level: u8 = name.strip_prefix("HEADING_")?.parse().ok()?;
                (1..=Self::MAX_HEADING_LEVEL)
                    .contains(&level)
                    .then_some(NamedStyle::Heading(level))
            }
        }
    }

    /// Style for a Markdown heading level, clamped to the supported range.
    pub fn heading(level: u8) -> NamedStyle {
        NamedStyle::Heading(level.clamp(1, Self::MAX_HEADING_LEVEL))
    }
}

impl fmt::Display for NamedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedStyle::NormalText => f.write_str("NORMAL_TEXT"),
            NamedStyle::Title => f.write_str("TITLE"),
            NamedStyle::Subtitle => f.write_str("SUBTITLE"),
            NamedStyle::Heading(level) => write!(f, "HEADING_{level}"),
        }
    }
}
