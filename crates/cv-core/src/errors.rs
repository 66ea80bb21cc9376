//! Error taxonomy for the CV core.
//!
//! Validation and completion are total — malformed user data is reported as
//! `FieldError` values, never raised. Panics are reserved for programmer
//! errors (contract violations).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single invariant violation, addressed by field path + message.
///
/// Paths are namespaced the way the form renders them, e.g.
/// `experience[2].end_date`, so the UI can point at the exact control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Failure modes of document export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// The CV failed aggregate validation; export stays disabled until the
    /// listed errors are fixed. Completion percentage never overrides this.
    #[error("export blocked by {} validation issue(s)", .0.len())]
    Blocked(Vec<FieldError>),

    /// The external document producer failed. Surfaced to the caller as-is —
    /// no retry logic lives in this core.
    #[error("export backend failed: {0}")]
    Backend(String),
}

/// Failure modes of collection edit operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no entry with id '{0}'")]
    UnknownId(String),
}

/// Renders the "complete these items" list shown next to a disabled export
/// button: at most `cap` messages, with an overflow indicator.
pub fn summarize_blockers(errors: &[FieldError], cap: usize) -> Vec<String> {
    let mut summary: Vec<String> = errors.iter().take(cap).map(|e| e.to_string()).collect();
    if errors.len() > cap {
        summary.push(format!("…and {} more", errors.len() - cap));
    }
    summary
}
