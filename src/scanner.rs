//! Single forward pass that attributes every section heading to its Unit Operation.

use crate::document::Document;
use crate::grammar::{classify, LineKind};
use crate::section::HeadingRecord;

/// Running state of one scan: the Unit Operation currently in force and the records so far.
#[derive(Default)]
struct ScanState {
    current_uo: Option<String>,
    records: Vec<HeadingRecord>,
}

#[must_use]
/// Scan a document into heading records, in document order.
///
/// Every `### [UOID ...]` heading replaces the current Unit Operation; every `#### Title` after it
/// is attributed to that UO. Level-3 headings without an identifier (`### Notes`) leave the
/// attribution untouched. Section headings before any UO heading are dropped.
pub fn scan(document: &Document) -> Vec<HeadingRecord> {
    let state = document
        .lines()
        .iter()
        .enumerate()
        .fold(ScanState::default(), |mut state, (index, line)| {
            match classify(line) {
                LineKind::UoHeading(id) => state.current_uo = Some(id.to_string()),
                LineKind::SectionHeading(title) => match state.current_uo {
                    Some(ref uo_id) => {
                        state
                            .records
                            .push(HeadingRecord::new(uo_id.clone(), title, index));
                    }
                    None => {
                        tracing::debug!(
                            line = index,
                            section = title,
                            "dropping section heading with no unit operation above it"
                        );
                    }
                },
                LineKind::OtherHeading | LineKind::Body => {}
            }
            state
        });

    tracing::trace!(records = state.records.len(), "scanned document");
    state.records
}

#[cfg(test)]
#[path = "tests/scanner.rs"]
mod tests;
