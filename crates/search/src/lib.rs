//! Linkage search crate - move selection for the automated opponent.

mod selector;

pub use selector::{MoveSelector, TIE_EPSILON};

use linkage_core::{Board, Inventory, Move, Side};
use rand::Rng;

/// Pick a move for `side` with the default weights. `None` when there is no legal move.
pub fn select_automated_move<R: Rng + ?Sized>(
    side: Side,
    board: &Board,
    previous: Option<&Move>,
    inventory: &Inventory,
    rng: &mut R,
) -> Option<Move> {
    MoveSelector::default()
        .select(side, board, previous, inventory, rng)
        .map(|(mv, _)| mv)
}
