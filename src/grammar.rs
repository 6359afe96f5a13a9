//! The fixed heading grammar of lab-notebook documents.
//!
//! Notebooks only use a handful of line shapes: `### [UHW100 ...]` opens a Unit Operation,
//! `#### Method` opens a subsection within it, and a parenthesised stub such as
//! `- (method used in this step)` marks content waiting to be filled in. Everything else is body
//! text. The grammar is flat, so a line is classified on its own without any surrounding context.

use once_cell::sync::Lazy;
use regex::Regex;

/// Level-3 Unit Operation heading; capture 1 is the UO identifier.
///
/// Notes exported from some editors escape the opening bracket, so `### \[UHW100 ...\]` is
/// accepted alongside the plain form.
pub const UO_HEADING_PATTERN: &str = r"^###\s*\\?\[?(U[A-Z]{1,3}[0-9]{3,4})";

/// Level-4 section heading; capture 1 is the untrimmed section title.
pub const SECTION_HEADING_PATTERN: &str = r"^####\s*(.+)$";

/// A trimmed line holding a "fill me in" stub, optionally bullet-prefixed.
pub const PLACEHOLDER_PATTERN: &str = r"^(-\s*)?\(.*\)$";

/// Leading front matter whose first key is `title`; capture 1 is the raw title value.
pub const FRONT_MATTER_TITLE_PATTERN: &str =
    r#"^---[ \t]*[\r\n]+title:[ \t]*["']?(.*?)["']?[ \t]*[\r\n]+"#;

/// Whole leading front matter block; capture 1 is the YAML body between the fences.
pub const FRONT_MATTER_BLOCK_PATTERN: &str = r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)";

static UO_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(UO_HEADING_PATTERN).unwrap());
static SECTION_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(SECTION_HEADING_PATTERN).unwrap());
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(PLACEHOLDER_PATTERN).unwrap());

/// Compiled [`FRONT_MATTER_TITLE_PATTERN`].
pub(crate) static FRONT_MATTER_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(FRONT_MATTER_TITLE_PATTERN).unwrap());

/// Compiled [`FRONT_MATTER_BLOCK_PATTERN`].
pub(crate) static FRONT_MATTER_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(FRONT_MATTER_BLOCK_PATTERN).unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a single line means to the section locator.
pub enum LineKind<'a> {
    /// `### [UOID ...]`: switches the current Unit Operation.
    UoHeading(&'a str),
    /// `#### Title`: a subsection of whichever Unit Operation is current. Holds the trimmed title.
    SectionHeading(&'a str),
    /// Any other line starting with `#`, including level-3 headings without a UO identifier.
    OtherHeading,
    /// Anything that is not a heading.
    Body,
}

impl LineKind<'_> {
    #[must_use]
    /// Whether this line terminates a subsection body.
    pub fn is_heading(&self) -> bool {
        !matches!(self, LineKind::Body)
    }
}

#[must_use]
/// Classify one line of a document.
///
/// UO headings take priority over section headings. Deeper markers still match the section
/// pattern, so `##### Detail` is the section `# Detail`.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = UO_HEADING.captures(line) {
        if let Some(id) = caps.get(1) {
            return LineKind::UoHeading(id.as_str());
        }
    }

    if let Some(title) = SECTION_HEADING.captures(line).and_then(|caps| caps.get(1)) {
        return LineKind::SectionHeading(title.as_str().trim());
    }

    if is_heading_line(line) {
        LineKind::OtherHeading
    } else {
        LineKind::Body
    }
}

#[must_use]
/// Any line starting with `#` bounds a subsection body, whatever its level.
pub fn is_heading_line(line: &str) -> bool {
    line.starts_with('#')
}

#[must_use]
/// Whether a body line is a placeholder stub awaiting content.
pub fn is_placeholder(line: &str) -> bool {
    PLACEHOLDER.is_match(line.trim())
}

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests;
