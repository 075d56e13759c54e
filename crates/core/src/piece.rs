//! Piece colors and cell contents.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "Y")]
    Yellow,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "B")]
    Blue,
}

impl Color {
    pub const COUNT: usize = 4;

    /// Inventory order. Move generation emits colors in this order.
    pub const ALL: [Color; Color::COUNT] = [Color::White, Color::Yellow, Color::Red, Color::Blue];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Blue => 'B',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'W' => Some(Color::White),
            'Y' => Some(Color::Yellow),
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// The permanently blocked center. Never a color, never part of a region.
    Blocked,
    Filled(Color),
}

impl Cell {
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline(always)]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Filled(color) => Some(color),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Blocked => '#',
            Cell::Filled(color) => color.symbol(),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Blocked),
            other => Color::from_symbol(other).map(Cell::Filled),
        }
    }
}
