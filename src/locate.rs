//! The single entry point combining scanning, resolution, placeholder search and the title query.
//!
//! A [`SectionContext`] is a read of one document snapshot. Once the document is edited the
//! context is stale and must be located again before a second edit is applied.

use crate::document::{Document, Range};
use crate::front_matter::{extract_query_with, QueryStyle};
use crate::placeholder::{find_placeholder, Placeholder};
use crate::resolver::{resolve_explicit, resolve_from_cursor};
use crate::scanner::scan;
use crate::section::HeadingRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// What to resolve: a cursor line, or a Unit Operation and section picked from a menu.
pub enum Target {
    /// Resolve via the section enclosing this zero-based line.
    Cursor {
        /// Zero-based cursor line.
        line: usize,
    },
    /// Resolve via the first section with this title inside a block of this Unit Operation.
    Explicit {
        /// Unit Operation identifier, e.g. `UHW100`.
        uo_id: String,
        /// Exact section title.
        section: String,
    },
}

impl Target {
    #[must_use]
    /// Target the section enclosing a cursor line.
    pub fn cursor(line: usize) -> Self {
        Target::Cursor { line }
    }

    #[must_use]
    /// Target a section by Unit Operation and title.
    pub fn explicit(uo_id: impl Into<String>, section: impl Into<String>) -> Self {
        Target::Explicit {
            uo_id: uo_id.into(),
            section: section.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Everything a drafting step needs about one resolved section.
pub struct SectionContext {
    /// Unit Operation the section belongs to.
    pub uo_id: String,
    /// Section title.
    pub section: String,
    /// Experiment title from front matter, or the fallback.
    pub query: String,
    /// Zero-based line of the section heading.
    pub heading_line: usize,
    /// The whole document text this context was read from.
    pub file_content: String,
    /// Range within `file_content` a caller may replace. Zero-width when inserting into an
    /// empty section.
    pub placeholder_range: Range,
}

impl SectionContext {
    #[must_use]
    /// Whether filling this section inserts rather than replaces.
    pub fn is_insertion(&self) -> bool {
        self.placeholder_range.is_empty()
    }
}

#[must_use]
/// Locate a target with the default query style.
pub fn locate(document: &Document, target: &Target) -> Option<SectionContext> {
    locate_with(document, target, &QueryStyle::default())
}

#[must_use]
/// Locate a target and collect its context.
///
/// Returns `None` when no section matches or when the matched section already has content and no
/// placeholder to replace.
pub fn locate_with(
    document: &Document,
    target: &Target,
    style: &QueryStyle,
) -> Option<SectionContext> {
    let records = scan(document);
    let record = resolve(document, &records, target)?;

    let placeholder_range = match find_placeholder(document, record.heading_line) {
        Placeholder::Replace(range) | Placeholder::Insert(range) => range,
        Placeholder::Missing => return None,
    };

    let HeadingRecord {
        uo_id,
        section,
        heading_line,
    } = record;

    Some(SectionContext {
        uo_id,
        section,
        query: extract_query_with(document.text(), style),
        heading_line,
        file_content: document.text().to_string(),
        placeholder_range,
    })
}

#[must_use]
/// Resolve a target against already scanned records, without looking for a placeholder.
pub fn resolve(
    document: &Document,
    records: &[HeadingRecord],
    target: &Target,
) -> Option<HeadingRecord> {
    match target {
        Target::Cursor { line } => resolve_from_cursor(document, records, *line),
        Target::Explicit { uo_id, section } => resolve_explicit(document, records, uo_id, section),
    }
}

#[cfg(test)]
#[path = "tests/locate.rs"]
mod tests;
