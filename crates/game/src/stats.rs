use linkage_core::{Board, Inventory, Side};
use linkage_search::MoveSelector;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::controller::{GameController, Mode};

/// Running counters for one match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    pub placements: u32,
    pub skips: u32,
    /// Region count after the latest placement.
    pub regions: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchSummary {
    pub winner: Side,
    pub stats: MatchStats,
    pub board: Board,
    pub inventory: Inventory,
}

/// Play a computer-vs-computer game to the end. `None` only if the selector stalls.
pub fn self_play<R: Rng + ?Sized>(selector: &MoveSelector, rng: &mut R) -> Option<MatchSummary> {
    let mut game = GameController::new(Mode::ComputerVsComputer);
    while !game.is_over() {
        if game.play_automated(selector, rng).is_empty() {
            return None;
        }
    }

    let winner = game.winner()?;
    let summary = MatchSummary {
        winner,
        stats: *game.stats(),
        board: game.state().board.clone(),
        inventory: game.state().inventory,
    };
    info!(
        %winner,
        regions = summary.stats.regions,
        placements = summary.stats.placements,
        skips = summary.stats.skips,
        "self-play finished"
    );
    Some(summary)
}
