//! Geometric placement checks. Does not look at the previous move.

use linkage_core::{Board, Coord, Move};

/// True if the two cells form a straight domino: unit distance along exactly one axis.
#[inline(always)]
pub fn is_domino(a: Coord, b: Coord) -> bool {
    a.touches_edge(b)
}

/// Check a candidate against shape, bounds and occupancy.
/// Warning: the adjacency rule is not checked here, see `is_adjacency_satisfied`.
#[inline]
pub fn is_placement_valid(mv: &Move, board: &Board) -> bool {
    let [a, b] = mv.cells;
    if !is_domino(a, b) {
        return false;
    }
    // off-board cells read as not empty
    board.is_empty_at(a) && board.is_empty_at(b)
}
