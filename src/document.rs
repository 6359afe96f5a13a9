//! Immutable document snapshots and the positions used to address them.
//!
//! A [`Document`] is read once from an editor buffer or a file and never changes afterwards; any
//! edit to the underlying text means taking a new snapshot. Lines are split on `\n` with a trailing
//! `\r` removed, matching how editors number lines, so a text ending in a newline has a final
//! empty line.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// A zero-based line and column pair. Columns count Unicode scalar values.
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column within the line.
    pub column: usize,
}

impl Position {
    #[must_use]
    /// Construct a position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Half-open range between two positions.
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    #[must_use]
    /// Construct a range.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    #[must_use]
    /// A zero-width range marking an insertion point.
    pub fn empty_at(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    #[must_use]
    /// True for insertion points.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Read-only snapshot of a markdown document, addressable by line or as one text blob.
pub struct Document {
    text: String,
    lines: Vec<String>,
    line_starts: Vec<usize>,
}

impl Document {
    #[must_use]
    /// Snapshot the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut lines = Vec::new();
        let mut line_starts = Vec::new();
        let mut offset = 0;

        for raw in text.split('\n') {
            line_starts.push(offset);
            offset += raw.len() + 1;
            lines.push(raw.strip_suffix('\r').unwrap_or(raw).to_string());
        }

        Self {
            text,
            lines,
            line_starts,
        }
    }

    #[must_use]
    /// The full text blob.
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    /// All lines in order, without line terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    /// Number of lines; never zero, since even empty text has one empty line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Text of one line, if it exists.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    #[must_use]
    /// The range covering one whole line, excluding its terminator.
    pub fn line_range(&self, index: usize) -> Option<Range> {
        let line = self.line(index)?;
        Some(Range::new(
            Position::new(index, 0),
            Position::new(index, line.chars().count()),
        ))
    }

    #[must_use]
    /// Byte offset into [`Document::text`] for a position.
    ///
    /// Columns past the end of a line clamp to the end of that line, and lines past the end of
    /// the document clamp to the end of the text.
    pub fn offset_at(&self, position: Position) -> usize {
        let (Some(start), Some(line)) = (
            self.line_starts.get(position.line),
            self.lines.get(position.line),
        ) else {
            return self.text.len();
        };

        let within = line
            .char_indices()
            .nth(position.column)
            .map_or(line.len(), |(byte, _)| byte);
        start + within
    }

    #[must_use]
    /// The text a range currently covers.
    pub fn slice(&self, range: Range) -> &str {
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end).max(start);
        &self.text[start..end]
    }

    #[must_use]
    /// New text with the range replaced. The snapshot itself is left untouched.
    pub fn replace(&self, range: Range, replacement: &str) -> String {
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end).max(start);

        let mut out = String::with_capacity(self.text.len() + replacement.len());
        out.push_str(&self.text[..start]);
        out.push_str(replacement);
        out.push_str(&self.text[end..]);
        out
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
