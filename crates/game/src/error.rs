use linkage_core::Color;
use thiserror::Error;

/// Why the controller refused an input. Any variant means "illegal, nothing changed".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("select a color first")]
    NoColorSelected,
    #[error("no {0} pieces left")]
    ColorExhausted(Color),
    #[error("not a domino on two empty cells")]
    InvalidPlacement,
    #[error("placement shares an edge with the previous piece")]
    AdjacencyViolated,
}
