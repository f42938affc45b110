//! Iterative Tower of Hanoi move planner and independent sequence
//! auditor.
//!
//! The planner produces the minimal move sequence for a given disc
//! count without recursion; the auditor replays any sequence against a
//! fresh reference state and reports every rule violation it finds.
//! Downstream consumers (robot driver, simulator) iterate the recorded
//! moves in index order.

pub mod error;
pub mod generator;
pub mod state;
pub mod validator;

// Re-export main types
pub use error::HanoiError;
pub use generator::{decide, generate, MoveDecision};
pub use state::{MoveRecord, Peg, PuzzleState};
pub use validator::{validate, IssueKind, ValidationIssue};
