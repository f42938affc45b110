//! Non-recursive move generation for the three-peg puzzle.
//!
//! The generator walks move indices 1..=2^N - 1 and picks a nominal peg
//! pair from the index modulo 3. Whichever direction of that pair is
//! legal gets executed; with unique disc sizes exactly one direction is
//! legal until the puzzle is solved. An even disc count swaps the
//! auxiliary and destination labels so the cycle still terminates with
//! every disc on the right peg.

use crate::error::HanoiError;
use crate::state::{MoveRecord, Peg, PuzzleState};

/// Which direction of a nominal peg pair is legal to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDecision {
    /// Move the top of `from` onto `to`.
    Forward,
    /// Move the top of `to` onto `from`.
    Reverse,
    /// Both pegs are empty; cannot occur within the 2^N - 1 move budget.
    Blocked,
}

/// Decide which direction of the pair `(from, to)` obeys the stacking
/// rule. Independent of the cyclic index rule so it can be checked on
/// its own.
pub fn decide(state: &PuzzleState, from: Peg, to: Peg) -> MoveDecision {
    match (state.top(from), state.top(to)) {
        (Some(f), Some(t)) if f < t => MoveDecision::Forward,
        (Some(_), None) => MoveDecision::Forward,
        (Some(f), Some(t)) if t < f => MoveDecision::Reverse,
        (None, Some(_)) => MoveDecision::Reverse,
        // Equal tops are impossible: disc sizes are unique.
        _ => MoveDecision::Blocked,
    }
}

/// Produce the minimal ordered move sequence solving the puzzle for
/// `disc_count` discs.
///
/// Fails with [`HanoiError::InvalidDiscCount`] when `disc_count` is not
/// positive. The sequence length is 2^N - 1, so callers should keep the
/// count small when the moves drive physical hardware.
pub fn generate(disc_count: i64) -> Result<Vec<MoveRecord>, HanoiError> {
    if disc_count <= 0 {
        return Err(HanoiError::InvalidDiscCount(disc_count));
    }
    let n = u32::try_from(disc_count).map_err(|_| HanoiError::InvalidDiscCount(disc_count))?;

    let mut state = PuzzleState::new(n);

    let source = Peg::Left;
    let mut auxiliary = Peg::Middle;
    let mut destination = Peg::Right;
    // Parity adjustment: with an even count the cycle below would finish
    // on the middle peg unless the two roles are swapped.
    if n % 2 == 0 {
        std::mem::swap(&mut auxiliary, &mut destination);
    }

    let total_moves = 1u64.checked_shl(n).map_or(u64::MAX, |v| v - 1);
    let mut moves = Vec::with_capacity(total_moves as usize);

    for index in 1..=total_moves {
        let (from, to) = match index % 3 {
            1 => (source, destination),
            2 => (source, auxiliary),
            _ => (auxiliary, destination),
        };

        let record = match decide(&state, from, to) {
            MoveDecision::Forward => apply(&mut state, index, from, to),
            MoveDecision::Reverse => apply(&mut state, index, to, from),
            MoveDecision::Blocked => unreachable!("cyclic rule selected two empty pegs"),
        };

        tracing::debug!(
            index = record.index,
            origin = %record.origin,
            destination = %record.destination,
            origin_before = record.origin_count_before,
            destination_before = record.destination_count_before,
            "planned move"
        );
        moves.push(record);
    }

    tracing::info!(discs = n, moves = moves.len(), "solution generated");
    Ok(moves)
}

/// Execute `origin -> destination`, capturing both peg heights before
/// the disc is lifted.
fn apply(state: &mut PuzzleState, index: u64, origin: Peg, destination: Peg) -> MoveRecord {
    let origin_count_before = state.height(origin);
    let destination_count_before = state.height(destination);
    let disc = state
        .pop(origin)
        .expect("decided direction always has a disc to lift");
    state.push(destination, disc);
    MoveRecord {
        index,
        origin,
        destination,
        origin_count_before,
        destination_count_before,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replay a sequence onto a fresh state, trusting it blindly.
    fn replay(moves: &[MoveRecord], disc_count: u32) -> PuzzleState {
        let mut state = PuzzleState::new(disc_count);
        for record in moves {
            let disc = state.pop(record.origin).expect("replay hit an empty peg");
            state.push(record.destination, disc);
        }
        state
    }

    #[test]
    fn test_sequence_length_is_minimal() {
        for n in 1..=10u32 {
            let moves = generate(n as i64).unwrap();
            assert_eq!(moves.len(), (1usize << n) - 1, "disc count {}", n);
        }
    }

    #[test]
    fn test_all_discs_end_on_right_peg() {
        for n in 1..=10u32 {
            let moves = generate(n as i64).unwrap();
            let state = replay(&moves, n);
            assert_eq!(state.height(Peg::Left), 0, "disc count {}", n);
            assert_eq!(state.height(Peg::Middle), 0, "disc count {}", n);
            let expected: Vec<u32> = (1..=n).rev().collect();
            assert_eq!(state.discs(Peg::Right), expected.as_slice());
        }
    }

    #[test]
    fn test_single_disc_sequence() {
        let moves = generate(1).unwrap();
        let tuples: Vec<_> = moves.iter().map(|m| m.as_tuple()).collect();
        assert_eq!(tuples, vec![(1, 1, 3, 1, 0)]);

        let state = replay(&moves, 1);
        assert_eq!(state.discs(Peg::Right), &[1]);
    }

    #[test]
    fn test_two_disc_sequence() {
        let moves = generate(2).unwrap();
        let tuples: Vec<_> = moves.iter().map(|m| m.as_tuple()).collect();
        assert_eq!(
            tuples,
            vec![(1, 1, 2, 2, 0), (2, 1, 3, 1, 0), (3, 2, 3, 1, 1)]
        );

        let state = replay(&moves, 2);
        assert_eq!(state.discs(Peg::Right), &[2, 1]);
        assert_eq!(state.height(Peg::Left), 0);
        assert_eq!(state.height(Peg::Middle), 0);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate(6).unwrap(), generate(6).unwrap());
    }

    #[test]
    fn test_rejects_non_positive_counts() {
        assert_eq!(generate(0), Err(HanoiError::InvalidDiscCount(0)));
        assert_eq!(generate(-1), Err(HanoiError::InvalidDiscCount(-1)));
    }

    #[test]
    fn test_decide_forward_onto_empty_peg() {
        let state = PuzzleState::new(3);
        assert_eq!(decide(&state, Peg::Left, Peg::Right), MoveDecision::Forward);
    }

    #[test]
    fn test_decide_reverse_when_target_top_is_smaller() {
        let mut state = PuzzleState::new(3);
        let disc = state.pop(Peg::Left).unwrap();
        state.push(Peg::Right, disc);
        // Left top is now 2, right top is 1: only right -> left is legal.
        assert_eq!(decide(&state, Peg::Left, Peg::Right), MoveDecision::Reverse);
    }

    #[test]
    fn test_decide_reverse_from_empty_origin() {
        let state = PuzzleState::new(3);
        assert_eq!(decide(&state, Peg::Middle, Peg::Left), MoveDecision::Reverse);
    }

    #[test]
    fn test_decide_blocked_when_both_empty() {
        let state = PuzzleState::new(1);
        assert_eq!(
            decide(&state, Peg::Middle, Peg::Right),
            MoveDecision::Blocked
        );
    }
}
