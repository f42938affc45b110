//! Shared data model for the Hanoi planner and auditor.
//!
//! These types are the contract between the move generator, the
//! validator, and downstream consumers (robot driver, simulator).
//! `MoveRecord` serializes to the named-field JSON shape those
//! consumers iterate over.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// One of the three physical pegs. Serializes as its 1-based number
/// so consumers keep the 1/2/3 peg addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Peg {
    Left,
    Middle,
    Right,
}

impl Peg {
    /// 1-based peg number used on the wire and in diagnostics.
    pub fn number(self) -> u8 {
        match self {
            Peg::Left => 1,
            Peg::Middle => 2,
            Peg::Right => 3,
        }
    }

    fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl From<Peg> for u8 {
    fn from(peg: Peg) -> u8 {
        peg.number()
    }
}

impl TryFrom<u8> for Peg {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Peg::Left),
            2 => Ok(Peg::Middle),
            3 => Ok(Peg::Right),
            other => Err(format!("peg number must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "peg {}", self.number())
    }
}

/// Per-peg disc stack, bottom of the peg first. Disc 1 is the smallest.
type DiscStack = SmallVec<[u32; 8]>;

/// The live position of every disc across the three pegs.
///
/// Owned exclusively by one generator or validator invocation; created
/// fresh per call and discarded when the run completes. A legal stack is
/// strictly decreasing bottom to top, but the validator deliberately
/// applies illegal moves (see `validator`), so `push` does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    pegs: [DiscStack; 3],
}

impl PuzzleState {
    /// All `disc_count` discs on the left peg, largest at the bottom.
    pub fn new(disc_count: u32) -> Self {
        let mut start = DiscStack::new();
        start.extend((1..=disc_count).rev());
        Self {
            pegs: [start, DiscStack::new(), DiscStack::new()],
        }
    }

    /// Number of discs currently on `peg`.
    pub fn height(&self, peg: Peg) -> usize {
        self.pegs[peg.index()].len()
    }

    /// Size of the topmost disc on `peg`, if any.
    pub fn top(&self, peg: Peg) -> Option<u32> {
        self.pegs[peg.index()].last().copied()
    }

    /// Discs on `peg`, bottom to top.
    pub fn discs(&self, peg: Peg) -> &[u32] {
        &self.pegs[peg.index()]
    }

    /// Remove and return the topmost disc of `peg`.
    pub fn pop(&mut self, peg: Peg) -> Option<u32> {
        self.pegs[peg.index()].pop()
    }

    /// Place `disc` on top of `peg`. Legality is the caller's concern.
    pub fn push(&mut self, peg: Peg, disc: u32) {
        self.pegs[peg.index()].push(disc);
    }
}

/// The recorded outcome of one executed move.
///
/// The count fields capture how many discs sat on each named peg
/// immediately before the disc was lifted; the robot driver uses them to
/// pick the grip height. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    #[serde(rename = "moveIndex")]
    pub index: u64,
    #[serde(rename = "originPeg")]
    pub origin: Peg,
    #[serde(rename = "destinationPeg")]
    pub destination: Peg,
    pub origin_count_before: usize,
    pub destination_count_before: usize,
}

impl MoveRecord {
    /// Positional form `(index, origin, destination, origin_count_before,
    /// destination_count_before)` with numeric pegs.
    pub fn as_tuple(&self) -> (u64, u8, u8, usize, usize) {
        (
            self.index,
            self.origin.number(),
            self.destination.number(),
            self.origin_count_before,
            self.destination_count_before,
        )
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move {}: {} -> {} (origin held {}, destination held {})",
            self.index,
            self.origin,
            self.destination,
            self.origin_count_before,
            self.destination_count_before
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PuzzleState::new(4);
        assert_eq!(state.height(Peg::Left), 4);
        assert_eq!(state.height(Peg::Middle), 0);
        assert_eq!(state.height(Peg::Right), 0);
        // Largest at the bottom, smallest on top
        assert_eq!(state.discs(Peg::Left), &[4, 3, 2, 1]);
        assert_eq!(state.top(Peg::Left), Some(1));
        assert_eq!(state.top(Peg::Middle), None);
    }

    #[test]
    fn test_pop_and_push() {
        let mut state = PuzzleState::new(3);
        assert_eq!(state.pop(Peg::Left), Some(1));
        state.push(Peg::Right, 1);
        assert_eq!(state.discs(Peg::Left), &[3, 2]);
        assert_eq!(state.discs(Peg::Right), &[1]);
        assert_eq!(state.pop(Peg::Middle), None);
    }

    #[test]
    fn test_peg_numbers_round_trip() {
        for (peg, n) in [(Peg::Left, 1), (Peg::Middle, 2), (Peg::Right, 3)] {
            assert_eq!(peg.number(), n);
            assert_eq!(Peg::try_from(n), Ok(peg));
        }
        assert!(Peg::try_from(0).is_err());
        assert!(Peg::try_from(4).is_err());
    }

    #[test]
    fn test_move_record_wire_shape() {
        let record = MoveRecord {
            index: 1,
            origin: Peg::Left,
            destination: Peg::Right,
            origin_count_before: 3,
            destination_count_before: 0,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "moveIndex": 1,
                "originPeg": 1,
                "destinationPeg": 3,
                "originCountBefore": 3,
                "destinationCountBefore": 0
            })
        );

        let back: MoveRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_move_record_display() {
        let record = MoveRecord {
            index: 3,
            origin: Peg::Middle,
            destination: Peg::Right,
            origin_count_before: 1,
            destination_count_before: 1,
        };
        assert_eq!(
            record.to_string(),
            "move 3: peg 2 -> peg 3 (origin held 1, destination held 1)"
        );
    }
}
