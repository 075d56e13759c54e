//! Linkage game crate - turn controller, human input staging and self-play.

mod controller;
mod error;
mod stats;

pub use controller::{GameController, Mode, MoveStage, Status, TurnOutcome};
pub use error::MoveError;
pub use stats::{self_play, MatchStats, MatchSummary};
