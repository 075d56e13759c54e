//! Fixed-capacity list of candidate dominoes, filled slot by slot.

use linkage_core::{Board, Color, Move};

/// Every horizontal and vertical domino slot on the board, blocked center included.
pub const DOMINO_SLOTS: usize = 2 * Board::SIZE * (Board::SIZE - 1);

/// Upper bound on legal moves: every slot in every color.
pub const MAX_MOVES: usize = DOMINO_SLOTS * Color::COUNT;

/// Moves in generation order. Derefs to `[Move]` for indexing and searching.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub const fn new() -> Self {
        Self {
            moves: [Move::ZERO; MAX_MOVES],
            len: 0,
        }
    }

    #[inline(always)]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < MAX_MOVES, "more moves than domino slots allow");
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// One move per color on the same cells. The slot's own color is ignored.
    #[inline]
    pub fn push_slot(&mut self, slot: Move, colors: impl IntoIterator<Item = Color>) {
        for color in colors {
            self.push(slot.with_color(color));
        }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for MoveList {
    type Target = [Move];

    #[inline(always)]
    fn deref(&self) -> &[Move] {
        self.as_slice()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
