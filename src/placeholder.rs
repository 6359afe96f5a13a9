//! Locating the replaceable content of a section.
//!
//! A section body runs from the line after its heading up to the next line starting with `#`, of
//! any level, or the end of the document. Within it, the first line shaped like a placeholder stub
//! is what gets replaced.

use crate::document::{Document, Position, Range};
use crate::grammar::{is_heading_line, is_placeholder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "range", rename_all = "snake_case")]
/// Outcome of looking for a placeholder under a section heading.
pub enum Placeholder {
    /// The full range of the first placeholder line in the body.
    Replace(Range),
    /// The body is empty or blank: a zero-width insertion point on the line after the heading.
    Insert(Range),
    /// The body has content but none of it is a placeholder, e.g. a section already filled in.
    Missing,
}

impl Placeholder {
    #[must_use]
    /// The range a caller may replace, if there is one.
    pub fn range(&self) -> Option<Range> {
        match self {
            Placeholder::Replace(range) | Placeholder::Insert(range) => Some(*range),
            Placeholder::Missing => None,
        }
    }
}

#[must_use]
/// Find the placeholder belonging to the section whose heading is on `heading_line`.
///
/// Lines that are empty or only whitespace do not count as content, so a body made only of blank
/// lines is treated like an empty one. The returned range never covers a heading line.
pub fn find_placeholder(document: &Document, heading_line: usize) -> Placeholder {
    let body_start = heading_line + 1;
    let mut has_content = false;

    for index in body_start..document.line_count() {
        let Some(line) = document.line(index) else {
            break;
        };
        if is_heading_line(line) {
            break;
        }
        if is_placeholder(line) {
            if let Some(range) = document.line_range(index) {
                tracing::trace!(heading_line, line = index, "found placeholder");
                return Placeholder::Replace(range);
            }
        }
        if !line.trim().is_empty() {
            has_content = true;
        }
    }

    if has_content {
        tracing::debug!(heading_line, "section has content but no placeholder");
        Placeholder::Missing
    } else {
        Placeholder::Insert(Range::empty_at(Position::new(body_start, 0)))
    }
}

#[cfg(test)]
#[path = "tests/placeholder.rs"]
mod tests;
