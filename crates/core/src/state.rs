//! Game state representation.

use crate::{Board, Inventory, Move, Side};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub inventory: Inventory,
    /// Last accepted placement. `None` means no adjacency constraint is active.
    pub previous: Option<Move>,
    pub to_move: Side,
    /// Set when the side to move gets another turn because its opponent had no legal move.
    pub turn_skipped: bool,
    pub placements: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            inventory: Inventory::new(),
            previous: None,
            to_move: Side::More,
            turn_skipped: false,
            placements: 0,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Board, inventory: Inventory) -> Self {
        Self {
            board,
            inventory,
            ..Self::default()
        }
    }
}
