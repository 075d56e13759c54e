//! board representation - fixed 7x7 grid of cells, center permanently blocked
//! zobrist hash maintained incrementally on every cell write

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::{Cell, Color, Coord};

const CELL_STATES: usize = 1 + Color::COUNT;

/// Precomputed random values for Zobrist hashing.
/// ZOBRIST_TABLE[row][col][state], state 0 = blocked, 1.. = colors. Empty hashes to nothing.
/// Generated from a fixed seed so hashes are deterministic across runs.
const ZOBRIST_TABLE: [[[u64; CELL_STATES]; Board::SIZE]; Board::SIZE] = {
    let mut table = [[[0u64; CELL_STATES]; Board::SIZE]; Board::SIZE];
    let mut state: u64 = 0xdeadbeefcafe1234;
    let mut row = 0;
    while row < Board::SIZE {
        let mut col = 0;
        while col < Board::SIZE {
            let mut s = 0;
            while s < CELL_STATES {
                // xorshift64
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                table[row][col][s] = state;
                s += 1;
            }
            col += 1;
        }
        row += 1;
    }
    table
};

#[inline(always)]
fn zobrist(row: usize, col: usize, cell: Cell) -> u64 {
    match cell {
        Cell::Empty => 0,
        Cell::Blocked => ZOBRIST_TABLE[row][col][0],
        Cell::Filled(color) => ZOBRIST_TABLE[row][col][1 + color.index()],
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },
    #[error("row {row}: expected {expected} cells, got {got}")]
    RowLength { row: usize, expected: usize, got: usize },
    #[error("row {row}, col {col}: unknown cell symbol {symbol:?}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
    #[error("blocked cell must be exactly the center ({center},{center})")]
    BlockedCell { center: usize },
}

/// 7x7 game board. Exactly one cell, the center, is blocked for the life of the board.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [[Cell; Board::SIZE]; Board::SIZE],
    hash: u64,
}

impl Board {
    pub const SIZE: usize = 7;
    pub const CENTER: Coord = Coord::new(3, 3);
    /// Cells that can ever hold a color.
    pub const PLAYABLE_CELLS: usize = Board::SIZE * Board::SIZE - 1;

    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; Board::SIZE]; Board::SIZE];
        let (r, c) = (Self::CENTER.row as usize, Self::CENTER.col as usize);
        cells[r][c] = Cell::Blocked;
        Self {
            cells,
            hash: zobrist(r, c, Cell::Blocked),
        }
    }

    /// Incremental Zobrist hash - O(1), no recomputation
    #[inline(always)]
    pub fn zobrist_hash(&self) -> u64 {
        self.hash
    }

    #[inline(always)]
    pub fn in_bounds(coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < Self::SIZE
            && (coord.col as usize) < Self::SIZE
    }

    /// Cell at `coord`, or `None` off the board.
    #[inline(always)]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if Self::in_bounds(coord) {
            Some(self.cells[coord.row as usize][coord.col as usize])
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// False for off-board coordinates.
    #[inline(always)]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Write a color (or clear with `None`). The blocked center is never overwritten.
    pub fn set(&mut self, row: usize, col: usize, color: Option<Color>) {
        let old = self.cells[row][col];
        if old == Cell::Blocked {
            debug_assert!(false, "attempt to overwrite blocked cell ({row},{col})");
            return;
        }
        let new = color.map_or(Cell::Empty, Cell::Filled);
        if old != new {
            self.hash ^= zobrist(row, col, old) ^ zobrist(row, col, new);
            self.cells[row][col] = new;
        }
    }

    /// Hot-path write for cells movegen already proved empty.
    #[inline(always)]
    pub fn set_raw(&mut self, coord: Coord, color: Color) {
        let (r, c) = (coord.row as usize, coord.col as usize);
        debug_assert!(self.cells[r][c].is_empty());
        self.cells[r][c] = Cell::Filled(color);
        self.hash ^= zobrist(r, c, Cell::Filled(color));
    }

    /// Inverse of `set_raw`.
    #[inline(always)]
    pub fn clear_raw(&mut self, coord: Coord) {
        let (r, c) = (coord.row as usize, coord.col as usize);
        let old = self.cells[r][c];
        debug_assert!(old.color().is_some());
        self.cells[r][c] = Cell::Empty;
        self.hash ^= zobrist(r, c, old);
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells() == 0
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &cell)| (Coord::new(r as i8, c as i8), cell))
        })
    }

    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    /// Parse the `.`/`#`/`WYRB` row notation used by serde and `Display`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardParseError> {
        if rows.len() != Self::SIZE {
            return Err(BoardParseError::RowCount {
                expected: Self::SIZE,
                got: rows.len(),
            });
        }
        let mut cells = [[Cell::Empty; Board::SIZE]; Board::SIZE];
        let mut hash = 0u64;
        for (r, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != Self::SIZE {
                return Err(BoardParseError::RowLength {
                    row: r,
                    expected: Self::SIZE,
                    got: len,
                });
            }
            for (c, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(BoardParseError::UnknownSymbol {
                    row: r,
                    col: c,
                    symbol,
                })?;
                let is_center = Coord::new(r as i8, c as i8) == Self::CENTER;
                if (cell == Cell::Blocked) != is_center {
                    return Err(BoardParseError::BlockedCell {
                        center: Self::CENTER.row as usize,
                    });
                }
                cells[r][c] = cell;
                hash ^= zobrist(r, c, cell);
            }
        }
        Ok(Self { cells, hash })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl std::hash::Hash for Board {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<String> = Vec::deserialize(deserializer)?;
        Board::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_blocks_center_only() {
        let b = Board::new();
        assert_eq!(b.get(Board::CENTER), Some(Cell::Blocked));
        assert_eq!(b.empty_cells(), Board::PLAYABLE_CELLS);
        assert_eq!(b.get(Coord::new(7, 0)), None);
        assert_eq!(b.get(Coord::new(0, -1)), None);
    }

    #[test]
    fn test_set_get() {
        let mut b = Board::new();
        b.set(5, 1, Some(Color::Yellow));
        assert_eq!(b.cell(5, 1), Cell::Filled(Color::Yellow));
        assert!(!b.is_empty_at(Coord::new(5, 1)));
        assert!(b.is_empty_at(Coord::new(5, 2)));
    }

    #[test]
    fn test_hash_is_incremental() {
        let mut b = Board::new();
        let base = b.zobrist_hash();
        b.set(0, 0, Some(Color::Red));
        assert_ne!(b.zobrist_hash(), base);
        b.set(0, 0, Some(Color::Blue));
        b.set(0, 0, None);
        assert_eq!(b.zobrist_hash(), base);

        b.set_raw(Coord::new(1, 1), Color::White);
        let parsed = Board::from_rows(&b.rows()).expect("valid rows");
        assert_eq!(parsed.zobrist_hash(), b.zobrist_hash());
        b.clear_raw(Coord::new(1, 1));
        assert_eq!(b.zobrist_hash(), base);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        let mut rows = Board::new().rows();
        rows.pop();
        assert!(matches!(
            Board::from_rows(&rows),
            Err(BoardParseError::RowCount { .. })
        ));

        let mut rows = Board::new().rows();
        rows[3] = ".......".to_string();
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardParseError::BlockedCell { center: 3 })
        );

        let mut rows = Board::new().rows();
        rows[0] = "..X....".to_string();
        assert!(matches!(
            Board::from_rows(&rows),
            Err(BoardParseError::UnknownSymbol { row: 0, col: 2, .. })
        ));
    }

    #[test]
    fn test_serde_rows() {
        let mut b = Board::new();
        b.set(6, 6, Some(Color::Blue));
        let json = serde_json::to_string(&b).expect("serialize");
        assert!(json.contains("\"......B\""));
        let back: Board = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, b);
        assert_eq!(back.zobrist_hash(), b.zobrist_hash());
    }

    #[test]
    fn test_display() {
        let s = Board::new().to_string();
        assert_eq!(s.lines().nth(3), Some("...#..."));
    }
}
