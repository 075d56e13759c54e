//! Linkage core crate - fundamental types for the More/Less domino game.

mod board;
mod inventory;
mod moves;
mod piece;
mod side;
mod state;

pub use board::{Board, BoardParseError};
pub use inventory::Inventory;
pub use moves::{Coord, Move};
pub use piece::{Cell, Color};
pub use side::{Side, REGION_THRESHOLD};
pub use state::GameState;
