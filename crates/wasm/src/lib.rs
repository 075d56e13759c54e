//! linkage-wasm - WebAssembly entry points and bindings for browser execution.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use linkage_core::{Board, Color, Coord, Inventory, Move, Side};
use linkage_game::{GameController, Mode, TurnOutcome};
use linkage_search::MoveSelector;

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn browser_rng() -> StdRng {
    let seed = js_sys::Math::random() * u64::MAX as f64;
    StdRng::seed_from_u64(seed as u64)
}

fn color_from_str(symbol: &str) -> Option<Color> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Color::from_symbol(c),
        _ => None,
    }
}

fn side_from_str(side: &str) -> Option<Side> {
    match side {
        "More" | "more" => Some(Side::More),
        "Less" | "less" => Some(Side::Less),
        _ => None,
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn board_from_js(board: JsValue) -> Option<Board> {
    serde_wasm_bindgen::from_value(board).ok()
}

fn move_from_js(mv: JsValue) -> Option<Move> {
    serde_wasm_bindgen::from_value(mv).ok()
}

/// `null`/`undefined` is the cleared previous move.
fn previous_from_js(previous: JsValue) -> Result<Option<Move>, JsError> {
    if previous.is_null() || previous.is_undefined() {
        return Ok(None);
    }
    move_from_js(previous)
        .map(Some)
        .ok_or_else(|| JsError::new("malformed previous move"))
}

fn inventory_from_js(counts: &[u8]) -> Result<Inventory, JsError> {
    let counts: [u8; Color::COUNT] = counts
        .try_into()
        .map_err(|_| JsError::new("inventory needs one count per color"))?;
    Ok(Inventory::from_counts(counts))
}

#[wasm_bindgen]
pub struct JsGame {
    inner: GameController,
    selector: MoveSelector,
    rng: StdRng,
}

#[wasm_bindgen]
impl JsGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: GameController::default(),
            selector: MoveSelector::default(),
            rng: browser_rng(),
        }
    }

    /// `"human"`, `"computer"` for both sides, or `"More"`/`"Less"` for the computer's side.
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsError> {
        let mode = match mode {
            "human" => Mode::HumanVsHuman,
            "computer" => Mode::ComputerVsComputer,
            side => Mode::HumanVsComputer {
                computer: side_from_str(side)
                    .ok_or_else(|| JsError::new(&format!("unknown mode `{side}`")))?,
            },
        };
        self.inner.set_mode(mode);
        Ok(())
    }

    pub fn select_color(&mut self, symbol: &str) -> Result<(), JsError> {
        let color =
            color_from_str(symbol).ok_or_else(|| JsError::new(&format!("unknown color `{symbol}`")))?;
        self.inner.select_color(color).map_err(JsError::from)
    }

    /// Returns the turn outcome, or `null` while the move is still being built.
    pub fn click(&mut self, row: i8, col: i8) -> Result<JsValue, JsError> {
        let outcome = self.inner.pick_cell(Coord::new(row, col))?;
        Ok(outcome.as_ref().map_or(JsValue::NULL, to_js))
    }

    /// Lets the selector play for the side to move. Returns the outcomes in order.
    pub fn computer_move(&mut self) -> JsValue {
        let outcomes: Vec<TurnOutcome> = self.inner.play_automated(&self.selector, &mut self.rng);
        to_js(&outcomes)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.inner.is_computer_turn()
    }

    pub fn rows(&self) -> Vec<String> {
        self.inner.state().board.rows()
    }

    /// Remaining pieces in W, Y, R, B order.
    pub fn inventory(&self) -> Vec<u8> {
        self.inner.state().inventory.counts().to_vec()
    }

    pub fn previous(&self) -> JsValue {
        to_js(&self.inner.state().previous)
    }

    pub fn status(&self) -> String {
        self.inner.status().to_string()
    }

    pub fn winner(&self) -> Option<String> {
        self.inner.winner().map(|side| side.to_string())
    }

    pub fn regions(&self) -> usize {
        self.inner.stats().regions
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl Default for JsGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub fn validate_placement(mv: JsValue, board: JsValue) -> bool {
    match (move_from_js(mv), board_from_js(board)) {
        (Some(mv), Some(board)) => linkage_engine::is_placement_valid(&mv, &board),
        _ => false,
    }
}

#[wasm_bindgen]
pub fn is_adjacent(mv: JsValue, previous: JsValue) -> Result<bool, JsError> {
    let mv = move_from_js(mv).ok_or_else(|| JsError::new("malformed move"))?;
    let previous = previous_from_js(previous)?;
    Ok(linkage_engine::is_adjacency_satisfied(&mv, previous.as_ref()))
}

/// New board rows after placing `mv`, or `null` if either input is malformed
/// or `mv` does not fit on empty cells.
#[wasm_bindgen]
pub fn apply_move(mv: JsValue, board: JsValue) -> JsValue {
    match (move_from_js(mv), board_from_js(board)) {
        (Some(mv), Some(board)) if linkage_engine::is_placement_valid(&mv, &board) => {
            to_js(&linkage_engine::apply_move(&board, &mv))
        }
        _ => JsValue::NULL,
    }
}

#[wasm_bindgen]
pub fn enumerate_legal_moves(
    board: JsValue,
    previous: JsValue,
    inventory: &[u8],
) -> Result<JsValue, JsError> {
    let board = board_from_js(board).ok_or_else(|| JsError::new("malformed board"))?;
    let previous = previous_from_js(previous)?;
    let inventory = inventory_from_js(inventory)?;
    let moves = linkage_engine::generate_moves(&board, previous.as_ref(), &inventory);
    Ok(to_js(&moves.to_vec()))
}

#[wasm_bindgen]
pub fn count_regions(board: JsValue) -> Result<usize, JsError> {
    let board = board_from_js(board).ok_or_else(|| JsError::new("malformed board"))?;
    Ok(linkage_engine::count_regions(&board))
}

#[wasm_bindgen]
pub fn is_terminal(board: JsValue) -> Result<bool, JsError> {
    let board = board_from_js(board).ok_or_else(|| JsError::new("malformed board"))?;
    Ok(linkage_engine::is_terminal(&board))
}

/// The automated opponent's choice for `side`, or `null` when it has no legal move.
#[wasm_bindgen]
pub fn select_automated_move(
    side: &str,
    board: JsValue,
    previous: JsValue,
    inventory: &[u8],
) -> Result<JsValue, JsError> {
    let side = side_from_str(side).ok_or_else(|| JsError::new(&format!("unknown side `{side}`")))?;
    let board = board_from_js(board).ok_or_else(|| JsError::new("malformed board"))?;
    let previous = previous_from_js(previous)?;
    let inventory = inventory_from_js(inventory)?;
    let mv = linkage_search::select_automated_move(
        side,
        &board,
        previous.as_ref(),
        &inventory,
        &mut browser_rng(),
    );
    Ok(mv.as_ref().map_or(JsValue::NULL, to_js))
}
