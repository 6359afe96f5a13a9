//! Front matter: the experiment title used as drafting context, and the typed YAML block.
//!
//! The title query is a narrow anchored match on the opening fence and a leading `title:` key,
//! never a YAML parse, so a broken YAML block still yields a usable query. [`parse_front_matter`]
//! is the full parse, for callers that want the other fields.

use crate::grammar::{FRONT_MATTER_BLOCK, FRONT_MATTER_TITLE};
use serde::{Deserialize, Serialize};

/// Query used when a document has no reachable title.
pub const FALLBACK_QUERY: &str = "Untitled Experiment";

/// Marker that drafting tools prefix to titles they generated.
pub const GENERATED_TITLE_TAG: &str = "[AI Generated]";

#[derive(Debug, Clone, PartialEq, Eq)]
/// How a title is turned into a query.
pub struct QueryStyle {
    /// Returned when no title can be extracted.
    pub fallback: String,
    /// Literal tag stripped from the title, together with whitespace following it.
    pub generated_tag: String,
}

impl Default for QueryStyle {
    fn default() -> Self {
        Self {
            fallback: FALLBACK_QUERY.to_string(),
            generated_tag: GENERATED_TITLE_TAG.to_string(),
        }
    }
}

#[must_use]
/// Extract the query with the default fallback and tag.
pub fn extract_query(file_content: &str) -> String {
    extract_query_with(file_content, &QueryStyle::default())
}

#[must_use]
/// Extract the experiment title from leading front matter as a drafting query.
///
/// Quotes and the generated-title tag are stripped and the rest trimmed. No front matter, a
/// `title` that is not the first key, or an empty title all give the fallback.
pub fn extract_query_with(file_content: &str, style: &QueryStyle) -> String {
    let Some(raw) = FRONT_MATTER_TITLE
        .captures(file_content)
        .and_then(|caps| caps.get(1))
    else {
        return style.fallback.clone();
    };

    let title = strip_tag(raw.as_str(), &style.generated_tag);
    let title = title.trim();
    if title.is_empty() {
        style.fallback.clone()
    } else {
        title.to_string()
    }
}

fn strip_tag(value: &str, tag: &str) -> String {
    if tag.is_empty() {
        return value.to_string();
    }
    match value.find(tag) {
        Some(at) => {
            let rest = value[at + tag.len()..].trim_start();
            format!("{}{rest}", &value[..at])
        }
        None => value.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// The keys notebooks and workflow files carry in their front matter.
///
/// Experiment READMEs use `author` and `experiment_type`; workflow files use `experimenter`.
/// Unknown keys are ignored.
pub struct FrontMatter {
    /// Experiment or workflow title.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Experiment owner, set on README files.
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Person running a workflow.
    pub experimenter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Kind of experiment, `labnote` for notebook READMEs.
    pub experiment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Creation date as written in the file.
    pub created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Last modification date as written in the file.
    pub last_updated_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Free-text description.
    pub description: Option<String>,
}

#[must_use]
/// Parse the leading `---` block as YAML.
///
/// Missing blocks, invalid YAML and blocks without a string `title` all give `None`.
pub fn parse_front_matter(file_content: &str) -> Option<FrontMatter> {
    let block = FRONT_MATTER_BLOCK.captures(file_content)?.get(1)?;
    match serde_yaml::from_str::<FrontMatter>(block.as_str()) {
        Ok(front_matter) => Some(front_matter),
        Err(err) => {
            tracing::debug!(error = %err, "front matter is not valid YAML");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/front_matter.rs"]
mod tests;
