//! Turn controller: owns the authoritative game state and applies accepted moves.

use linkage_core::{Color, Coord, GameState, Move, Side};
use linkage_engine::{
    apply_move_mut, count_moves, count_regions, generate_moves, is_adjacency_satisfied,
    is_placement_valid, is_terminal, MoveList,
};
use linkage_search::MoveSelector;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::MoveError;
use crate::stats::MatchStats;

/// Who plays which side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    HumanVsHuman,
    HumanVsComputer { computer: Side },
    ComputerVsComputer,
}

impl Mode {
    pub fn is_computer(self, side: Side) -> bool {
        match self {
            Mode::HumanVsHuman => false,
            Mode::HumanVsComputer { computer } => computer == side,
            Mode::ComputerVsComputer => true,
        }
    }
}

/// Progress of a move built from two cell picks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStage {
    #[default]
    AwaitingFirstCell,
    AwaitingSecondCell(Coord),
}

/// What happened after an accepted placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The turn passes to the opponent.
    Continue,
    /// The opponent had no legal reply. The adjacency constraint is cleared and the same side moves again.
    TurnSkipped,
    GameOver { winner: Side, regions: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    ToMove(Side),
    GoesAgain(Side),
    Won(Side),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::ToMove(side) => write!(f, "Next Player: {side}"),
            Status::GoesAgain(side) => write!(f, "Player {side} goes again!"),
            Status::Won(side) => write!(f, "Player {side} wins!"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GameController {
    state: GameState,
    mode: Mode,
    stage: MoveStage,
    selected: Option<Color>,
    winner: Option<Side>,
    stats: MatchStats,
}

impl GameController {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Resume from an arbitrary position. A finished board is scored immediately,
    /// and a side left without a reply to `previous` goes again.
    pub fn from_state(state: GameState, mode: Mode) -> Self {
        let mut controller = Self {
            state,
            mode,
            ..Self::default()
        };
        controller.stats.placements = controller.state.placements;
        controller.stats.regions = count_regions(&controller.state.board);
        if controller.is_finished() {
            controller.finish();
        } else if controller.legal_moves().is_empty() {
            controller.state.previous = None;
            controller.state.turn_skipped = true;
            controller.stats.skips += 1;
            info!(side = %controller.state.to_move, "loaded position has no reply, turn skipped");
        }
        controller
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn stage(&self) -> MoveStage {
        self.stage
    }

    pub fn selected_color(&self) -> Option<Color> {
        self.selected
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Legal moves for the side to move. Empty once the game is over.
    pub fn legal_moves(&self) -> MoveList {
        if self.is_over() {
            return MoveList::new();
        }
        generate_moves(
            &self.state.board,
            self.state.previous.as_ref(),
            &self.state.inventory,
        )
    }

    pub fn set_mode(&mut self, mode: Mode) {
        debug!(?mode, "mode changed");
        self.mode = mode;
    }

    /// Start a new game, keeping the mode.
    pub fn reset(&mut self) {
        info!("new game");
        *self = Self::new(self.mode);
    }

    pub fn status(&self) -> Status {
        match self.winner {
            Some(side) => Status::Won(side),
            None if self.state.turn_skipped => Status::GoesAgain(self.state.to_move),
            None => Status::ToMove(self.state.to_move),
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.mode.is_computer(self.state.to_move)
    }

    /// Arm a color for the next placement. Drops any half-built move.
    pub fn select_color(&mut self, color: Color) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.state.inventory.has(color) {
            return Err(MoveError::ColorExhausted(color));
        }
        self.selected = Some(color);
        self.stage = MoveStage::AwaitingFirstCell;
        Ok(())
    }

    /// Feed one cell pick. Returns `Ok(None)` while the move is still being built
    /// or when the pick is ignored. The stage and color reset after every submission.
    pub fn pick_cell(&mut self, coord: Coord) -> Result<Option<TurnOutcome>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let Some(color) = self.selected else {
            return Err(MoveError::NoColorSelected);
        };
        if !self.state.board.is_empty_at(coord) {
            // blocked and occupied cells are not selectable
            return Ok(None);
        }

        match self.stage {
            MoveStage::AwaitingFirstCell => {
                self.stage = MoveStage::AwaitingSecondCell(coord);
                Ok(None)
            }
            MoveStage::AwaitingSecondCell(first) => {
                self.stage = MoveStage::AwaitingFirstCell;
                self.selected = None;
                self.submit_move(Move::new(first, coord, color)).map(Some)
            }
        }
    }

    /// Validate and apply a whole move for the side to move.
    #[instrument(skip(self), fields(side = %self.state.to_move))]
    pub fn submit_move(&mut self, mv: Move) -> Result<TurnOutcome, MoveError> {
        if let Err(err) = self.check(&mv) {
            debug!(%mv, %err, "move rejected");
            return Err(err);
        }

        apply_move_mut(&mut self.state.board, &mut self.state.inventory, &mv);
        self.state.previous = Some(mv);
        self.state.placements += 1;
        self.stats.placements += 1;
        self.stats.regions = count_regions(&self.state.board);
        debug!(%mv, regions = self.stats.regions, "move accepted");

        if self.is_finished() {
            return Ok(self.finish());
        }

        let replies = count_moves(&self.state.board, Some(&mv), &self.state.inventory);
        if replies == 0 {
            self.state.previous = None;
            self.state.turn_skipped = true;
            self.stats.skips += 1;
            info!(side = %self.state.to_move, "opponent has no legal move, turn skipped");
            return Ok(TurnOutcome::TurnSkipped);
        }

        self.state.turn_skipped = false;
        self.state.to_move = self.state.to_move.opponent();
        Ok(TurnOutcome::Continue)
    }

    /// Let the selector play for the side to move until the turn changes or the game ends.
    #[instrument(skip_all, fields(side = %self.state.to_move))]
    pub fn play_automated<R: Rng + ?Sized>(
        &mut self,
        selector: &MoveSelector,
        rng: &mut R,
    ) -> Vec<TurnOutcome> {
        let mut outcomes = Vec::new();
        while !self.is_over() {
            let side = self.state.to_move;
            let Some((mv, _)) = selector.select(
                side,
                &self.state.board,
                self.state.previous.as_ref(),
                &self.state.inventory,
                rng,
            ) else {
                warn!(%side, "no move available for automated side");
                break;
            };

            match self.submit_move(mv) {
                Ok(TurnOutcome::TurnSkipped) => outcomes.push(TurnOutcome::TurnSkipped),
                Ok(outcome) => {
                    outcomes.push(outcome);
                    break;
                }
                Err(err) => {
                    warn!(%mv, %err, "selector produced an illegal move");
                    break;
                }
            }
        }
        self.stage = MoveStage::AwaitingFirstCell;
        self.selected = None;
        outcomes
    }

    fn check(&self, mv: &Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.state.inventory.has(mv.color) {
            return Err(MoveError::ColorExhausted(mv.color));
        }
        if !is_placement_valid(mv, &self.state.board) {
            return Err(MoveError::InvalidPlacement);
        }
        if !is_adjacency_satisfied(mv, self.state.previous.as_ref()) {
            return Err(MoveError::AdjacencyViolated);
        }
        Ok(())
    }

    // an exhausted inventory leaves nobody a move even if holes remain
    fn is_finished(&self) -> bool {
        is_terminal(&self.state.board) || self.state.inventory.is_exhausted()
    }

    fn finish(&mut self) -> TurnOutcome {
        let regions = count_regions(&self.state.board);
        let winner = Side::winner_for(regions);
        self.winner = Some(winner);
        self.state.turn_skipped = false;
        self.stats.regions = regions;
        info!(%winner, regions, placements = self.stats.placements, "game over");
        TurnOutcome::GameOver { winner, regions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkage_core::Inventory;

    #[test]
    fn test_new_game_status() {
        let game = GameController::new(Mode::HumanVsHuman);
        assert_eq!(game.status(), Status::ToMove(Side::More));
        assert_eq!(game.status().to_string(), "Next Player: More");
        assert!(!game.is_computer_turn());
        assert_eq!(game.legal_moves().len(), 320);
    }

    #[test]
    fn test_two_picks_submit_and_reset_stage() {
        let mut game = GameController::default();
        game.select_color(Color::Red).expect("red in stock");

        assert_eq!(game.pick_cell(Coord::new(0, 0)), Ok(None));
        assert_eq!(game.stage(), MoveStage::AwaitingSecondCell(Coord::new(0, 0)));
        assert_eq!(game.pick_cell(Coord::new(0, 1)), Ok(Some(TurnOutcome::Continue)));

        assert_eq!(game.stage(), MoveStage::AwaitingFirstCell);
        assert_eq!(game.selected_color(), None);
        assert_eq!(game.state().inventory.get(Color::Red), 5);
        assert_eq!(game.status(), Status::ToMove(Side::Less));
    }

    #[test]
    fn test_blocked_and_occupied_picks_ignored() {
        let mut game = GameController::default();
        game.select_color(Color::White).expect("white in stock");
        assert_eq!(game.pick_cell(Coord::new(3, 3)), Ok(None));
        assert_eq!(game.stage(), MoveStage::AwaitingFirstCell);

        game.submit_move(Move::new((0, 0), (0, 1), Color::Blue))
            .expect("legal opening");
        game.select_color(Color::White).expect("white in stock");
        assert_eq!(game.pick_cell(Coord::new(0, 1)), Ok(None));
        assert_eq!(game.stage(), MoveStage::AwaitingFirstCell);
    }

    #[test]
    fn test_pick_needs_color() {
        let mut game = GameController::default();
        assert_eq!(game.pick_cell(Coord::new(0, 0)), Err(MoveError::NoColorSelected));
    }

    #[test]
    fn test_exhausted_color_rejected() {
        let state = GameState::with_board(Default::default(), Inventory::from_counts([0, 6, 6, 6]));
        let mut game = GameController::from_state(state, Mode::HumanVsHuman);
        assert_eq!(
            game.select_color(Color::White),
            Err(MoveError::ColorExhausted(Color::White))
        );
        assert_eq!(
            game.submit_move(Move::new((0, 0), (0, 1), Color::White)),
            Err(MoveError::ColorExhausted(Color::White))
        );
    }

    #[test]
    fn test_rejections_leave_state_untouched() {
        let mut game = GameController::default();
        game.submit_move(Move::new((0, 0), (0, 1), Color::Blue))
            .expect("legal opening");
        let before = game.state().clone();

        assert_eq!(
            game.submit_move(Move::new((1, 0), (2, 0), Color::Red)),
            Err(MoveError::AdjacencyViolated)
        );
        assert_eq!(
            game.submit_move(Move::new((5, 5), (6, 6), Color::Red)),
            Err(MoveError::InvalidPlacement)
        );
        assert_eq!(
            game.submit_move(Move::new((3, 2), (3, 3), Color::Red)),
            Err(MoveError::InvalidPlacement)
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_mode_decides_computer_turn() {
        let mut game = GameController::new(Mode::HumanVsComputer { computer: Side::Less });
        assert!(!game.is_computer_turn());
        game.submit_move(Move::new((0, 0), (0, 1), Color::Blue))
            .expect("legal opening");
        assert!(game.is_computer_turn());

        game.set_mode(Mode::HumanVsHuman);
        assert!(!game.is_computer_turn());
        game.set_mode(Mode::ComputerVsComputer);
        assert!(game.is_computer_turn());
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut game = GameController::new(Mode::ComputerVsComputer);
        game.submit_move(Move::new((0, 0), (0, 1), Color::Blue))
            .expect("legal opening");
        game.reset();
        assert_eq!(game.mode(), Mode::ComputerVsComputer);
        assert_eq!(game.state(), &GameState::new());
        assert_eq!(game.stats(), &MatchStats::default());
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::GoesAgain(Side::Less).to_string(), "Player Less goes again!");
        assert_eq!(Status::Won(Side::More).to_string(), "Player More wins!");
    }
}
