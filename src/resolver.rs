//! Resolution of a target to exactly one section heading.
//!
//! Unit Operation identifiers may repeat within a notebook (the same operation performed twice),
//! and identifiers can share prefixes (`UHW40` and `UHW400`), so neither form of resolution looks
//! anything up by identifier alone. Both walk the document in order and attribute headings the same
//! way [`crate::scanner::scan`] does, which is what makes a cursor inside a section and an explicit
//! `(uo_id, section)` pair land on the same record.

use crate::document::Document;
use crate::grammar::{classify, LineKind};
use crate::section::HeadingRecord;

#[must_use]
/// Resolve the section enclosing a cursor line.
///
/// Walks upward from the cursor to the nearest `####` heading, then further up to the nearest
/// UO heading. Meeting a UO heading before any section heading means the cursor sits in a UO's
/// preamble, which belongs to no section. Cursor lines past the end of the document are treated as
/// the last line.
pub fn resolve_from_cursor(
    document: &Document,
    records: &[HeadingRecord],
    cursor_line: usize,
) -> Option<HeadingRecord> {
    let last = document.line_count().checked_sub(1)?;
    let cursor_line = cursor_line.min(last);
    let lines = document.lines();

    let mut heading = None;
    for index in (0..=cursor_line).rev() {
        match classify(&lines[index]) {
            LineKind::SectionHeading(title) => {
                heading = Some((index, title));
                break;
            }
            LineKind::UoHeading(_) => return None,
            LineKind::OtherHeading | LineKind::Body => {}
        }
    }
    let (heading_line, section) = heading?;

    let uo_id = (0..heading_line)
        .rev()
        .find_map(|index| match classify(&lines[index]) {
            LineKind::UoHeading(id) => Some(id),
            _ => None,
        })?;

    let resolved = find_record(records, uo_id, section, heading_line);
    tracing::debug!(
        cursor_line,
        heading_line,
        uo_id,
        section,
        found = resolved.is_some(),
        "resolved cursor"
    );
    resolved
}

#[must_use]
/// Resolve an explicit `(uo_id, section)` pair to its first occurrence in document order.
///
/// A section heading matches only while `uo_id` is the Unit Operation in force at that point of
/// the walk and its trimmed title equals `section` exactly.
pub fn resolve_explicit(
    document: &Document,
    records: &[HeadingRecord],
    uo_id: &str,
    section: &str,
) -> Option<HeadingRecord> {
    let mut current_uo: Option<&str> = None;
    let mut heading_line = None;

    for (index, line) in document.lines().iter().enumerate() {
        match classify(line) {
            LineKind::UoHeading(id) => current_uo = Some(id),
            LineKind::SectionHeading(title) if current_uo == Some(uo_id) && title == section => {
                heading_line = Some(index);
                break;
            }
            _ => {}
        }
    }

    let resolved = heading_line.and_then(|line| find_record(records, uo_id, section, line));
    tracing::debug!(uo_id, section, found = resolved.is_some(), "resolved explicit target");
    resolved
}

/// Pick the scanned record for a heading line, confirming it carries the same attribution.
///
/// Records from a different snapshot than `document` will not agree and yield `None`.
fn find_record(
    records: &[HeadingRecord],
    uo_id: &str,
    section: &str,
    heading_line: usize,
) -> Option<HeadingRecord> {
    records
        .binary_search_by_key(&heading_line, |record| record.heading_line)
        .ok()
        .map(|index| &records[index])
        .filter(|record| record.matches(uo_id, section))
        .cloned()
}

#[cfg(test)]
#[path = "tests/resolver.rs"]
mod tests;
