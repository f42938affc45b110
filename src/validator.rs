//! Independent replay audit of a move sequence.
//!
//! The validator rebuilds the initial state from the claimed disc count
//! and replays every record without trusting its annotations. It never
//! stops at the first problem: every move is checked and the full issue
//! list is returned, so one bad move early in a sequence surfaces all of
//! its knock-on effects in a single pass.

use serde::{Deserialize, Serialize};

use crate::error::HanoiError;
use crate::state::{MoveRecord, PuzzleState};

/// Category of a detected inconsistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A recorded count-before field disagrees with the replayed state.
    CountMismatch,
    /// The move lifts from a peg that is empty at replay time.
    EmptySourceMove,
    /// The move rests a disc on a smaller one.
    OversizedMove,
}

/// One inconsistency found while replaying a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub move_index: u64,
    pub kind: IssueKind,
    pub detail: String,
}

/// Replay `moves` against a fresh state for `disc_count` discs and
/// report every inconsistency, in move order.
///
/// Non-fatal by design: a move from an empty peg is skipped, but an
/// oversized move is still applied so that later count checks run
/// against the state the sequence actually produces. Only a non-positive
/// `disc_count` is an error, since no reference state can be built.
pub fn validate(
    moves: &[MoveRecord],
    disc_count: i64,
) -> Result<Vec<ValidationIssue>, HanoiError> {
    if disc_count <= 0 {
        return Err(HanoiError::InvalidDiscCount(disc_count));
    }
    let n = u32::try_from(disc_count).map_err(|_| HanoiError::InvalidDiscCount(disc_count))?;

    let mut state = PuzzleState::new(n);
    let mut issues = Vec::new();

    for record in moves {
        let origin_height = state.height(record.origin);
        let destination_height = state.height(record.destination);

        if origin_height != record.origin_count_before
            || destination_height != record.destination_count_before
        {
            let detail = format!(
                "{} holds {} discs (recorded {}), {} holds {} discs (recorded {})",
                record.origin,
                origin_height,
                record.origin_count_before,
                record.destination,
                destination_height,
                record.destination_count_before
            );
            tracing::error!(index = record.index, %detail, "count mismatch");
            issues.push(ValidationIssue {
                move_index: record.index,
                kind: IssueKind::CountMismatch,
                detail,
            });
        }

        let Some(disc) = state.pop(record.origin) else {
            let detail = format!("{} is empty, nothing to lift", record.origin);
            tracing::warn!(index = record.index, %detail, "empty source move");
            issues.push(ValidationIssue {
                move_index: record.index,
                kind: IssueKind::EmptySourceMove,
                detail,
            });
            continue;
        };

        if let Some(top) = state.top(record.destination) {
            if top < disc {
                let detail = format!(
                    "disc {} cannot rest on disc {} ({})",
                    disc, top, record.destination
                );
                tracing::error!(index = record.index, %detail, "oversized move");
                issues.push(ValidationIssue {
                    move_index: record.index,
                    kind: IssueKind::OversizedMove,
                    detail,
                });
            }
        }
        // Applied even when oversized, so the audit keeps tracking the
        // state the sequence actually produces.
        state.push(record.destination, disc);
    }

    tracing::info!(
        moves = moves.len(),
        issues = issues.len(),
        "sequence audit complete"
    );
    Ok(issues)
}
