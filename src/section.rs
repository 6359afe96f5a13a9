//! Heading records produced by scanning a lab-notebook document.
//!
//! A record ties a `#### Section` heading to the Unit Operation it belongs to, identified by the
//! nearest `### [UOID ...]` heading above it. Records carry only the heading's line: the extent of
//! the section body is decided later, when a placeholder is looked for.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A section heading attributed to its Unit Operation.
pub struct HeadingRecord {
    /// Identifier of the enclosing Unit Operation, e.g. `UHW100`.
    pub uo_id: String,
    /// Trimmed title following the `####` marker.
    pub section: String,
    /// Zero-based line of the section heading.
    pub heading_line: usize,
}

impl HeadingRecord {
    #[must_use]
    /// Construct a record.
    pub fn new(uo_id: impl Into<String>, section: impl Into<String>, heading_line: usize) -> Self {
        Self {
            uo_id: uo_id.into(),
            section: section.into(),
            heading_line,
        }
    }

    #[must_use]
    /// Whether this record is the given Unit Operation's section.
    pub fn matches(&self, uo_id: &str, section: &str) -> bool {
        self.uo_id == uo_id && self.section == section
    }

    #[must_use]
    /// Menu label in the `[UOID] Section` form notebooks use elsewhere.
    pub fn label(&self) -> String {
        format!("[{}] {}", self.uo_id, self.section)
    }
}
