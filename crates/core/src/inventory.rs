//! Remaining pieces per color.

use crate::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Inventory {
    counts: [u8; Color::COUNT],
}

impl Inventory {
    pub const STARTING_COUNT: u8 = 6;

    pub const fn new() -> Self {
        Self {
            counts: [Self::STARTING_COUNT; Color::COUNT],
        }
    }

    pub const fn from_counts(counts: [u8; Color::COUNT]) -> Self {
        Self { counts }
    }

    pub const fn empty() -> Self {
        Self {
            counts: [0; Color::COUNT],
        }
    }

    #[inline(always)]
    pub fn get(&self, color: Color) -> u8 {
        self.counts[color.index()]
    }

    #[inline(always)]
    pub fn has(&self, color: Color) -> bool {
        self.get(color) > 0
    }

    /// Consume one piece. Returns false, leaving the count untouched, if none remain.
    pub fn take(&mut self, color: Color) -> bool {
        match self.counts[color.index()].checked_sub(1) {
            Some(left) => {
                self.counts[color.index()] = left;
                true
            }
            None => false,
        }
    }

    /// Return one piece, used when undoing a placement.
    pub fn restore(&mut self, color: Color) {
        let slot = &mut self.counts[color.index()];
        debug_assert!(*slot < Self::STARTING_COUNT);
        *slot += 1;
    }

    /// Colors with at least one piece left, in inventory order.
    pub fn available(&self) -> impl Iterator<Item = Color> + '_ {
        Color::ALL.into_iter().filter(|&c| self.has(c))
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&n| n as u32).sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.total() == 0
    }

    pub fn counts(&self) -> [u8; Color::COUNT] {
        self.counts
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
