//! linkage-engine - rule engine for the More/Less domino game.
//!
//! Provides placement geometry, the corner-only adjacency rule, region
//! counting, terminal detection, move generation and perft.

pub mod adjacency;
pub mod apply;
pub mod geometry;
pub mod move_list;
pub mod movegen;
pub mod perft;
pub mod regions;
pub mod terminal;

pub use adjacency::is_adjacency_satisfied;
pub use apply::{apply_move, apply_move_mut, unapply_move, UndoInfo};
pub use geometry::{is_domino, is_placement_valid};
pub use move_list::{MoveList, MAX_MOVES};
pub use movegen::{count_moves, generate_moves, generate_placements};
#[cfg(feature = "rayon")]
pub use perft::perft_parallel;
pub use perft::{perft, perft_cached, PerftCache};
pub use regions::{count_regions, label_regions, RegionMap};
pub use terminal::is_terminal;

/// Legality of a full move: geometry, adjacency and color stock together.
pub fn is_legal(
    mv: &linkage_core::Move,
    board: &linkage_core::Board,
    previous: Option<&linkage_core::Move>,
    inventory: &linkage_core::Inventory,
) -> bool {
    inventory.has(mv.color) && is_placement_valid(mv, board) && is_adjacency_satisfied(mv, previous)
}
