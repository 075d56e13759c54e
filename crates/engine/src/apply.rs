use linkage_core::{Board, Inventory, Move};

/// Apply a move to a board and return the resulting board.
/// Does not check legality; callers validate first.
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    for cell in mv.cells {
        if Board::in_bounds(cell) {
            next.set(cell.row as usize, cell.col as usize, Some(mv.color));
        }
    }
    next
}

/// Undo info for unapply_move. A placement only ever fills two empty cells.
#[derive(Clone, Copy, Debug)]
pub struct UndoInfo {
    pub mv: Move,
}

/// Apply a legal move in place, consuming one piece of its color.
#[inline]
pub fn apply_move_mut(board: &mut Board, inventory: &mut Inventory, mv: &Move) -> UndoInfo {
    // movegen guarantees cells are empty and the color is in stock
    for cell in mv.cells {
        board.set_raw(cell, mv.color);
    }
    let taken = inventory.take(mv.color);
    debug_assert!(taken, "applied a move with exhausted color {}", mv.color);
    UndoInfo { mv: *mv }
}

/// Undo a move - restores board and inventory to the state before apply_move_mut
#[inline]
pub fn unapply_move(board: &mut Board, inventory: &mut Inventory, undo: &UndoInfo) {
    for cell in undo.mv.cells {
        board.clear_raw(cell);
    }
    inventory.restore(undo.mv.color);
}
