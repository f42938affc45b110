//! Error taxonomy for the planner and auditor entry points.

use thiserror::Error;

/// Fatal input errors. Rule violations found while auditing a sequence
/// are not errors; they are returned as `ValidationIssue`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HanoiError {
    /// The requested disc count cannot seed a puzzle state.
    #[error("invalid disc count {0}")]
    InvalidDiscCount(i64),
}
