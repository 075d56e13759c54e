//! Grid coordinates and domino moves.

use crate::Color;
use serde::{Deserialize, Serialize};

/// A grid coordinate. Signed so that off-board candidates can be built and rejected.
/// Serialized as a `[row, col]` pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(from = "(i8, i8)", into = "(i8, i8)")]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True if `self` and `other` share a side. Corner contact does not count.
    #[inline(always)]
    pub fn touches_edge(self, other: Coord) -> bool {
        let dr = (self.row as i16 - other.row as i16).abs();
        let dc = (self.col as i16 - other.col as i16).abs();
        dr + dc == 1
    }

    /// The four edge neighbours, possibly off the board.
    #[inline(always)]
    pub fn neighbors(self) -> [Coord; 4] {
        [
            Coord::new(self.row, self.col + 1),
            Coord::new(self.row, self.col - 1),
            Coord::new(self.row + 1, self.col),
            Coord::new(self.row - 1, self.col),
        ]
    }
}

impl From<(i8, i8)> for Coord {
    fn from((row, col): (i8, i8)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (i8, i8) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

/// One domino placement: two cells of a single color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Move {
    pub cells: [Coord; 2],
    pub color: Color,
}

impl Move {
    pub const ZERO: Self = Self {
        cells: [Coord::new(0, 0), Coord::new(0, 0)],
        color: Color::White,
    };

    pub fn new(first: impl Into<Coord>, second: impl Into<Coord>, color: Color) -> Self {
        Self {
            cells: [first.into(), second.into()],
            color,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn is_horizontal(&self) -> bool {
        self.cells[0].row == self.cells[1].row
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b] = self.cells;
        write!(
            f,
            "{} ({},{})-({},{})",
            self.color, a.row, a.col, b.row, b.col
        )
    }
}
