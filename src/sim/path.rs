//! Ball paths through the peg board
//!
//! Columns are tracked from the left edge of each row. The ball enters at the
//! apex (column 0 of a one-peg row); a right move shifts it one peg over, a
//! left move keeps its offset while the row below grows by one peg. After the
//! last row the column is the landing slot.
//!
//! Generation and resolution share `step`, so replaying a generated path
//! always lands where the generator did. At most `rows` moves are applied
//! and each adds at most one, so the column never passes `rows`, the last
//! slot.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::rng::BitSource;

/// One deflection off a peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Move {
    Left,
    Right,
}

impl Move {
    pub fn from_bit(bit: bool) -> Self {
        if bit { Move::Right } else { Move::Left }
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Move::Right)
    }
}

impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        match m {
            Move::Left => 0,
            Move::Right => 1,
        }
    }
}

impl TryFrom<u8> for Move {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Move::Left),
            1 => Ok(Move::Right),
            other => Err(format!("move must be 0 or 1, got {other}")),
        }
    }
}

/// Ordered moves, one per peg row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    moves: Vec<Move>,
}

impl Path {
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        bits.into_iter().map(Move::from_bit).collect()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Number of right deflections
    pub fn rights(&self) -> usize {
        self.moves.iter().filter(|m| m.is_right()).count()
    }
}

impl FromIterator<Move> for Path {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

/// Generates and resolves paths for one board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathGenerator {
    board: Board,
}

impl PathGenerator {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Column after applying `m` from `column`.
    ///
    /// Callers apply at most `rows` moves, which keeps the result within the
    /// slot row.
    #[inline]
    fn step(&self, column: usize, m: Move) -> usize {
        debug_assert!(column < self.board.last_slot() || !m.is_right());
        column + usize::from(m.is_right())
    }

    /// Draw a fresh path, one fair bit per row. Its slot is its number of
    /// right moves.
    pub fn generate_path<B: BitSource + ?Sized>(&self, bits: &mut B) -> Path {
        (0..self.board.rows())
            .map(|_| Move::from_bit(bits.next_bit()))
            .collect()
    }

    /// Landing slot for any path.
    ///
    /// Only the first `rows` moves count, so the result is always in
    /// `[0, slot_count - 1]`; a short path lands on the column it reached.
    pub fn resolve_slot(&self, path: &Path) -> usize {
        path.iter()
            .take(self.board.rows())
            .fold(0, |column, &m| self.step(column, m))
    }

    /// Column after each applied move, for animating the descent
    pub fn trace(&self, path: &Path) -> Vec<usize> {
        let mut column = 0;
        path.iter()
            .take(self.board.rows())
            .map(|&m| {
                column = self.step(column, m);
                column
            })
            .collect()
    }
}
