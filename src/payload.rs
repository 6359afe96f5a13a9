//! JSON payloads exchanged with the external drafting backend.
//!
//! The backend receives a located section and answers with candidate texts. Once a candidate is
//! picked, and possibly edited, a preference record reports the choice back. Field names follow the
//! backend's snake_case wire format. Transport is left to the caller.

use crate::error::{Error, Result};
use crate::locate::SectionContext;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request for draft content for one section.
pub struct PopulateRequest {
    /// Whole document text.
    pub file_content: String,
    /// Unit Operation of the section.
    pub uo_id: String,
    /// Section title.
    pub section: String,
    /// Experiment title used as context.
    pub query: String,
}

impl From<&SectionContext> for PopulateRequest {
    fn from(context: &SectionContext) -> Self {
        Self {
            file_content: context.file_content.clone(),
            uo_id: context.uo_id.clone(),
            section: context.section.clone(),
            query: context.query.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Candidate drafts returned for a section.
pub struct PopulateResponse {
    /// Unit Operation the drafts were written for.
    pub uo_id: String,
    /// Section the drafts were written for.
    pub section: String,
    #[serde(default)]
    /// Candidate replacement texts, best first.
    pub options: Vec<String>,
    #[serde(default)]
    /// Opaque reviewer output, passed back untouched with the preference.
    pub supervisor_evaluations: Vec<serde_json::Value>,
}

impl PopulateResponse {
    /// The option at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoOptions`] for an empty response and [`Error::OptionOutOfRange`] for an
    /// index past the end.
    pub fn choose(&self, index: usize) -> Result<&str> {
        if self.options.is_empty() {
            return Err(Error::NoOptions);
        }
        self.options
            .get(index)
            .map(String::as_str)
            .ok_or(Error::OptionOutOfRange {
                index,
                available: self.options.len(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Which draft was picked, how it was edited, and which drafts were passed over.
pub struct PreferenceRecord {
    /// Unit Operation of the section.
    pub uo_id: String,
    /// Section title.
    pub section: String,
    /// The draft as offered.
    pub chosen_original: String,
    /// The draft as applied.
    pub chosen_edited: String,
    /// All other offered drafts.
    pub rejected: Vec<String>,
    /// Experiment title used as context.
    pub query: String,
    /// Document text after the edit was applied.
    pub file_content: String,
    /// Path of the edited document.
    pub file_path: String,
    #[serde(default)]
    /// Reviewer output from the response.
    pub supervisor_evaluations: Vec<serde_json::Value>,
}

impl PreferenceRecord {
    /// Record the choice of option `index`, applied as `chosen_edited`.
    ///
    /// # Errors
    ///
    /// Fails as [`PopulateResponse::choose`] does.
    pub fn new(
        context: &SectionContext,
        response: &PopulateResponse,
        index: usize,
        chosen_edited: impl Into<String>,
        file_path: impl Into<String>,
        file_content: impl Into<String>,
    ) -> Result<Self> {
        let chosen_original = response.choose(index)?.to_string();
        let rejected = response
            .options
            .iter()
            .filter(|option| **option != chosen_original)
            .cloned()
            .collect();

        Ok(Self {
            uo_id: context.uo_id.clone(),
            section: context.section.clone(),
            chosen_original,
            chosen_edited: chosen_edited.into(),
            rejected,
            query: context.query.clone(),
            file_content: file_content.into(),
            file_path: file_path.into(),
            supervisor_evaluations: response.supervisor_evaluations.clone(),
        })
    }
}

#[cfg(test)]
#[path = "tests/payload.rs"]
mod tests;
