//! Finding notebook documents on disk.
//!
//! Notebooks live under a `labnote/` directory, one numbered folder per experiment
//! (`labnote/001_Transformation/`), each holding a `README.md` and numbered workflow files.

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect files matching `extensions` from the given files and directories.
///
/// Directories are walked recursively without following symlinks. Explicitly named files are kept
/// whatever their extension. The result is sorted and free of duplicates.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(&path).follow_links(false) {
                let entry = entry?;
                if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                    documents.push(entry.into_path());
                }
            }
        } else if path.is_file() {
            documents.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            ));
        }
    }

    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}

#[must_use]
/// Whether a folder name carries the three-digit sequence prefix, as in `001_Transformation`.
pub fn has_sequence_prefix(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 3 && bytes[..3].iter().all(u8::is_ascii_digit) && bytes[3] == b'_'
}

/// The experiment folder name and its parent folder name, if both are valid UTF-8.
fn experiment_and_root(path: &Path) -> Option<(&str, &str)> {
    let experiment = path.parent()?;
    let root = experiment.parent()?;
    Some((
        experiment.file_name()?.to_str()?,
        root.file_name()?.to_str()?,
    ))
}

#[must_use]
/// Whether a path is an experiment README: `labnote/NNN_Name/README.md`.
pub fn is_readme_path(path: &Path) -> bool {
    let is_readme = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case("readme.md"));

    is_readme
        && experiment_and_root(path).is_some_and(|(experiment, root)| {
            root.eq_ignore_ascii_case("labnote") && has_sequence_prefix(experiment)
        })
}

#[must_use]
/// Whether a path is a workflow file: any other markdown file in `labnote/NNN_Name/`.
pub fn is_workflow_path(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    let lower = name.to_ascii_lowercase();
    if !lower.ends_with(".md") || lower == "readme.md" {
        return false;
    }

    experiment_and_root(path).is_some_and(|(experiment, root)| {
        root.eq_ignore_ascii_case("labnote") && has_sequence_prefix(experiment)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Role of a file within the `labnote/` layout.
pub enum DocumentKind {
    /// Experiment overview, `labnote/NNN_Name/README.md`.
    Readme,
    /// Workflow file holding Unit Operations, `labnote/NNN_Name/*.md`.
    Workflow,
    /// Anything outside the layout.
    Other,
}

#[must_use]
/// Classify a path by where it sits in the `labnote/` layout.
pub fn document_kind(path: &Path) -> DocumentKind {
    if is_readme_path(path) {
        DocumentKind::Readme
    } else if is_workflow_path(path) {
        DocumentKind::Workflow
    } else {
        DocumentKind::Other
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
