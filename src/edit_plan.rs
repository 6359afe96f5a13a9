//! The edit plan carries chosen drafts back into notebook files.
//!
//! An edit is built from a located section and replaces its placeholder line, or inserts after
//! the heading when the section body was empty. Plans are serialisable so a batch of fills can be
//! reviewed as JSON before anything on disk changes. Each edit remembers the text it expects to
//! replace; if the file has changed there since the section was located, applying the plan fails
//! rather than overwriting the wrong lines.

use crate::document::{Document, Range};
use crate::error::{Error, Result};
use crate::locate::SectionContext;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable collection of file modifications, applied file by file.
pub struct EditPlan {
    /// Individual placeholder replacements.
    pub edits: Vec<Edit>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Replacement of one section's placeholder in a file.
pub struct Edit {
    /// Target file path for this modification.
    pub file_name: String,
    /// Range to replace, zero-width for an insertion.
    pub range: Range,
    /// Text the range held when the section was located.
    pub original: String,
    /// New content for the range.
    pub replacement: String,
    /// Unit Operation of the filled section.
    pub uo_id: String,
    /// Title of the filled section.
    pub section: String,
}

impl Edit {
    #[must_use]
    /// Build the edit that fills a located section with `text`.
    ///
    /// A replaced placeholder line keeps its line break. An insertion gets a trailing newline so
    /// the following heading stays on its own line, or a leading one when inserting after a final
    /// heading that has no line break.
    pub fn from_context(file_name: impl Into<String>, context: &SectionContext, text: &str) -> Self {
        let document = Document::new(context.file_content.as_str());
        let range = context.placeholder_range;
        let body = text.trim_end_matches(['\r', '\n']);

        let replacement = if range.is_empty() {
            let text_len = document.text().len();
            let at_unterminated_end = document.offset_at(range.start) == text_len
                && text_len > 0
                && !document.text().ends_with('\n');
            if at_unterminated_end {
                format!("\n{body}")
            } else {
                format!("{body}\n")
            }
        } else {
            body.to_string()
        };

        Self {
            file_name: file_name.into(),
            range,
            original: document.slice(range).to_string(),
            replacement,
            uo_id: context.uo_id.clone(),
            section: context.section.clone(),
        }
    }
}

impl EditPlan {
    #[must_use]
    /// A plan with a single edit.
    pub fn single(edit: Edit) -> Self {
        Self { edits: vec![edit] }
    }

    /// Apply this plan's edits for `file_name` to `content`, returning the new text.
    ///
    /// Edits are applied from the end of the file backwards so earlier ranges stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleEdit`] if the content under any edit no longer matches what was there
    /// when its section was located.
    pub fn render(&self, file_name: &str, content: &str) -> Result<String> {
        let mut edits: Vec<&Edit> = self
            .edits
            .iter()
            .filter(|edit| edit.file_name == file_name)
            .collect();
        edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));

        let mut text = content.to_string();
        for edit in edits {
            let document = Document::new(text);
            if document.slice(edit.range) != edit.original {
                return Err(Error::StaleEdit {
                    file: edit.file_name.clone(),
                    line: edit.range.start.line,
                    column: edit.range.start.column,
                });
            }
            text = document.replace(edit.range, &edit.replacement);
        }
        Ok(text)
    }

    /// Apply all edits in the plan to the files on disk.
    ///
    /// Every file is read and rendered before any is written, so a stale edit in one file leaves all
    /// of them untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if file operations fail or an edit is stale.
    pub fn apply(&self) -> Result<()> {
        let mut file_groups: HashMap<&str, usize> = HashMap::new();
        for edit in &self.edits {
            *file_groups.entry(edit.file_name.as_str()).or_default() += 1;
        }

        let mut rendered = Vec::with_capacity(file_groups.len());
        for (file_name, count) in file_groups {
            let content = fs::read_to_string(file_name)?;
            rendered.push((file_name, count, self.render(file_name, &content)?));
        }

        for (file_name, count, new_content) in rendered {
            fs::write(file_name, new_content)?;
            tracing::info!(file = file_name, edits = count, "applied edits");
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
