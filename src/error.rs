//! Errors raised around the locator: reading and writing files, configuration, and drafting
//! payloads. Locating a section itself never fails; a miss is an empty result.

use std::io;

#[derive(Debug, thiserror::Error)]
/// Failure of a file, configuration or payload operation.
pub enum Error {
    #[error("io error: {0}")]
    /// Reading or writing a document, plan or configuration file failed.
    Io(#[from] io::Error),
    #[error("invalid json: {0}")]
    /// A plan or drafting payload was not the expected JSON.
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    /// `labnote.toml` could not be decoded.
    Config(String),
    #[error("section '{section}' not found (UO: {uo_id})")]
    /// No fillable section matched an explicit target.
    SectionNotFound {
        /// Requested Unit Operation.
        uo_id: String,
        /// Requested section title.
        section: String,
    },
    #[error("no fillable section encloses line {line}")]
    /// No fillable section encloses a cursor line.
    NoSectionAtLine {
        /// Requested zero-based line.
        line: usize,
    },
    #[error("the drafting response contains no options")]
    /// A drafting response had nothing to choose from.
    NoOptions,
    #[error("option {index} requested but only {available} available")]
    /// A chosen option index was past the end of the options.
    OptionOutOfRange {
        /// Requested zero-based option.
        index: usize,
        /// Number of options in the response.
        available: usize,
    },
    #[error("{file}: content at {line}:{column} changed since the section was located")]
    /// The file changed under an edit; the section must be located again.
    StaleEdit {
        /// File the edit targets.
        file: String,
        /// Zero-based line where the edit starts.
        line: usize,
        /// Zero-based column where the edit starts.
        column: usize,
    },
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
