//! perft - move-tree leaf counts for movegen verification
//! A forced skip clears the adjacency constraint without consuming a ply.

use linkage_core::{Board, Inventory, Move};
use rustc_hash::FxHashMap;

use crate::apply::{apply_move_mut, unapply_move};
use crate::movegen::{count_moves, generate_moves};
use crate::terminal::is_terminal;

fn perft_recursive(
    board: &mut Board,
    inventory: &mut Inventory,
    previous: Option<Move>,
    depth: u32,
) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, previous.as_ref(), inventory);
    if moves.is_empty() {
        if previous.is_some() && !is_terminal(board) {
            return perft_recursive(board, inventory, None, depth);
        }
        return 1;
    }

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let undo = apply_move_mut(board, inventory, mv);
        nodes += perft_recursive(board, inventory, Some(*mv), depth - 1);
        unapply_move(board, inventory, &undo);
    }
    nodes
}

/// perft - counts leaf nodes at depth
pub fn perft(board: &Board, previous: Option<&Move>, inventory: &Inventory, depth: u32) -> u64 {
    let mut local_board = board.clone();
    let mut local_inventory = *inventory;
    perft_recursive(&mut local_board, &mut local_inventory, previous.copied(), depth)
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct PerftKey {
    board: Board,
    previous: Option<Move>,
    inventory: Inventory,
    depth: u32,
}

/// Memo of subtree counts. Boards hash by their Zobrist key.
#[derive(Default)]
pub struct PerftCache {
    table: FxHashMap<PerftKey, u64>,
}

impl PerftCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }
}

fn perft_cached_recursive(
    board: &mut Board,
    inventory: &mut Inventory,
    previous: Option<Move>,
    depth: u32,
    cache: &mut PerftCache,
) -> u64 {
    if depth <= 1 {
        return perft_recursive(board, inventory, previous, depth);
    }

    let key = PerftKey {
        board: board.clone(),
        previous,
        inventory: *inventory,
        depth,
    };
    if let Some(&nodes) = cache.table.get(&key) {
        return nodes;
    }

    let moves = generate_moves(board, previous.as_ref(), inventory);
    let nodes = if moves.is_empty() {
        if previous.is_some() && !is_terminal(board) {
            perft_cached_recursive(board, inventory, None, depth, cache)
        } else {
            1
        }
    } else {
        let mut nodes = 0u64;
        for mv in &moves {
            let undo = apply_move_mut(board, inventory, mv);
            nodes += perft_cached_recursive(board, inventory, Some(*mv), depth - 1, cache);
            unapply_move(board, inventory, &undo);
        }
        nodes
    };

    cache.table.insert(key, nodes);
    nodes
}

/// Perft with a transposition memo
pub fn perft_cached(
    board: &Board,
    previous: Option<&Move>,
    inventory: &Inventory,
    depth: u32,
    cache: &mut PerftCache,
) -> u64 {
    let mut local_board = board.clone();
    let mut local_inventory = *inventory;
    perft_cached_recursive(
        &mut local_board,
        &mut local_inventory,
        previous.copied(),
        depth,
        cache,
    )
}

/// Parallel perft - splits top-level moves across threads
#[cfg(feature = "rayon")]
pub fn perft_parallel(
    board: &Board,
    previous: Option<&Move>,
    inventory: &Inventory,
    depth: u32,
) -> u64 {
    use rayon::prelude::*;

    if depth <= 1 {
        return perft(board, previous, inventory, depth);
    }

    let moves = generate_moves(board, previous, inventory);
    if moves.is_empty() {
        return perft(board, previous, inventory, depth);
    }

    moves
        .as_slice()
        .par_iter()
        .map(|mv| {
            let mut local_board = board.clone();
            let mut local_inventory = *inventory;
            let undo = apply_move_mut(&mut local_board, &mut local_inventory, mv);
            let result =
                perft_recursive(&mut local_board, &mut local_inventory, Some(*mv), depth - 1);
            unapply_move(&mut local_board, &mut local_inventory, &undo);
            result
        })
        .sum()
}

/// Leaf count one ply deep, without building the move list.
pub fn perft_1(board: &Board, previous: Option<&Move>, inventory: &Inventory) -> u64 {
    count_moves(board, previous, inventory) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_and_one() {
        let board = Board::new();
        let inv = Inventory::new();
        assert_eq!(perft(&board, None, &inv, 0), 1);
        assert_eq!(perft(&board, None, &inv, 1), 320);
        assert_eq!(perft_1(&board, None, &inv), 320);
    }

    #[test]
    fn test_depth_two_matches_manual_sum() {
        let board = Board::from_rows(&[
            "WWYYRRB", "WWYYRRB", "BBWWYYR", "BBW#YYR", "RRW....", "RRY....", "WWYYRRB",
        ])
        .expect("valid board");
        let inv = Inventory::from_counts([1, 1, 1, 1]);

        let mut expected = 0u64;
        for mv in &generate_moves(&board, None, &inv) {
            let mut b = board.clone();
            let mut i = inv;
            apply_move_mut(&mut b, &mut i, mv);
            let replies = generate_moves(&b, Some(mv), &i).len() as u64;
            expected += if replies == 0 {
                if is_terminal(&b) {
                    1
                } else {
                    generate_moves(&b, None, &i).len().max(1) as u64
                }
            } else {
                replies
            };
        }
        assert_eq!(perft(&board, None, &inv, 2), expected);
    }

    #[test]
    fn test_cached_matches_plain() {
        let board = Board::from_rows(&[
            "WWYYRRB", "WWYYRRB", "BBW...R", "BBW#..R", "RRW....", "RRY....", "WWYYRRB",
        ])
        .expect("valid board");
        let inv = Inventory::from_counts([2, 2, 1, 1]);
        let mut cache = PerftCache::new();
        for depth in 0..4 {
            assert_eq!(
                perft_cached(&board, None, &inv, depth, &mut cache),
                perft(&board, None, &inv, depth),
                "depth {depth}"
            );
        }
        assert!(!cache.is_empty());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_matches_plain() {
        let previous = Move::new((0, 0), (0, 1), linkage_core::Color::Red);
        let mut b = Board::new();
        let mut inv = Inventory::new();
        apply_move_mut(&mut b, &mut inv, &previous);
        assert_eq!(
            perft_parallel(&b, Some(&previous), &inv, 2),
            perft(&b, Some(&previous), &inv, 2)
        );
    }

    #[test]
    fn test_terminal_board_is_single_leaf() {
        let board = Board::from_rows(&[
            "WWYYRRB", "WWYYRRB", "BBWWYYR", "BBW#YYR", "RRWWBBY", "RRYYBBY", "WWYYRRB",
        ])
        .expect("valid board");
        assert_eq!(perft(&board, None, &Inventory::empty(), 3), 1);
    }
}
