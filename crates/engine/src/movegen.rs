//! Legal move generation for a given game state.
//!
//! Slots are visited in row-major order; from each anchor the horizontal partner
//! (i, j+1) is tried before the vertical partner (i+1, j), so every domino is
//! produced exactly once, from its top-left cell.

use linkage_core::{Board, Color, Coord, Inventory, Move};

use crate::adjacency::is_adjacency_satisfied;
use crate::geometry::is_placement_valid;
use crate::move_list::MoveList;

/// All domino slots whose cells are both empty, in generation order. Color is a placeholder.
#[inline]
fn open_slots(board: &Board) -> impl Iterator<Item = Move> + '_ {
    let n = Board::SIZE as i8;
    (0..n).flat_map(move |row| {
        (0..n).flat_map(move |col| {
            let anchor = Coord::new(row, col);
            [
                Move::new(anchor, Coord::new(row, col + 1), Color::White),
                Move::new(anchor, Coord::new(row + 1, col), Color::White),
            ]
            .into_iter()
            .filter(move |slot| is_placement_valid(slot, board))
        })
    })
}

/// Every legal move: geometry, adjacency to `previous`, and one entry per color still in stock.
pub fn generate_moves(board: &Board, previous: Option<&Move>, inventory: &Inventory) -> MoveList {
    let mut moves = MoveList::new();
    if inventory.is_exhausted() {
        return moves;
    }
    for slot in open_slots(board).filter(|slot| is_adjacency_satisfied(slot, previous)) {
        moves.push_slot(slot, inventory.available());
    }
    moves
}

/// Same count as `generate_moves(..).len()` without filling a list.
pub fn count_moves(board: &Board, previous: Option<&Move>, inventory: &Inventory) -> usize {
    let colors = inventory.available().count();
    if colors == 0 {
        return 0;
    }
    open_slots(board)
        .filter(|slot| is_adjacency_satisfied(slot, previous))
        .count()
        * colors
}

/// Geometrically valid placements of one color, adjacency rule ignored.
pub fn generate_placements(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for slot in open_slots(board) {
        moves.push(slot.with_color(color));
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_move_count() {
        let moves = generate_moves(&Board::new(), None, &Inventory::new());
        // 84 slots, 4 of them touch the blocked center, times 4 colors
        assert_eq!(moves.len(), 320);
    }

    #[test]
    fn test_start_position_has_corner_domino_in_every_color() {
        let moves = generate_moves(&Board::new(), None, &Inventory::new());
        for color in Color::ALL {
            assert!(moves.contains(&Move::new((0, 0), (0, 1), color)));
        }
        // first emitted move is the top-left horizontal, colors in inventory order
        assert_eq!(moves[0], Move::new((0, 0), (0, 1), Color::White));
        assert_eq!(moves[1], Move::new((0, 0), (0, 1), Color::Yellow));
        assert_eq!(moves[4], Move::new((0, 0), (1, 0), Color::White));
    }

    #[test]
    fn test_exhausted_colors_are_skipped() {
        let inv = Inventory::from_counts([0, 3, 0, 0]);
        let moves = generate_moves(&Board::new(), None, &inv);
        assert_eq!(moves.len(), 80);
        assert!(moves.iter().all(|m| m.color == Color::Yellow));
        assert!(generate_moves(&Board::new(), None, &Inventory::empty()).is_empty());
    }

    #[test]
    fn test_every_move_passes_both_validators() {
        let mut board = Board::new();
        board.set(2, 2, Some(Color::Red));
        board.set(2, 3, Some(Color::Red));
        let previous = Move::new((2, 2), (2, 3), Color::Red);
        let moves = generate_moves(&board, Some(&previous), &Inventory::new());
        assert!(!moves.is_empty());
        for mv in &moves {
            assert!(is_placement_valid(mv, &board), "{mv}");
            assert!(is_adjacency_satisfied(mv, Some(&previous)), "{mv}");
        }
    }

    #[test]
    fn test_no_duplicates() {
        let moves = generate_moves(&Board::new(), None, &Inventory::new());
        let mut seen = std::collections::HashSet::new();
        for mv in &moves {
            let mut cells = mv.cells;
            cells.sort_by_key(|c| (c.row, c.col));
            assert!(seen.insert((cells, mv.color)), "duplicate {mv}");
        }
    }

    #[test]
    fn test_count_matches_generate() {
        let mut board = Board::new();
        board.set(0, 0, Some(Color::White));
        board.set(0, 1, Some(Color::White));
        let previous = Move::new((0, 0), (0, 1), Color::White);
        let inv = Inventory::from_counts([5, 6, 0, 2]);
        assert_eq!(
            count_moves(&board, Some(&previous), &inv),
            generate_moves(&board, Some(&previous), &inv).len()
        );
    }

    #[test]
    fn test_placements_ignore_adjacency() {
        let board = Board::new();
        let placements = generate_placements(&board, Color::Blue);
        assert_eq!(placements.len(), 80);
        assert!(placements.iter().all(|m| m.color == Color::Blue));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_rows(&[
            "WWYYRRB", "WWYYRRB", "BBWWYYR", "BBW#YYR", "RRWWBBY", "RRYYBBY", "WWYYRRB",
        ])
        .expect("valid board");
        let previous = Move::new((0, 0), (0, 1), Color::White);
        assert!(generate_moves(&board, None, &Inventory::new()).is_empty());
        assert!(generate_moves(&board, Some(&previous), &Inventory::new()).is_empty());
    }
}
