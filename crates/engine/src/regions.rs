//! Connected same-color region labelling.
//! Iterative DFS, 4-neighbour connectivity. The blocked center has no color and never forms a region.

use linkage_core::{Board, Coord};
use smallvec::SmallVec;

const NO_REGION: u8 = u8::MAX;

/// Per-cell region ids for one board snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMap {
    labels: [[u8; Board::SIZE]; Board::SIZE],
    count: usize,
}

impl RegionMap {
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Region id of a colored cell. `None` for empty, blocked or off-board cells.
    #[inline(always)]
    pub fn region_at(&self, coord: Coord) -> Option<u8> {
        if !Board::in_bounds(coord) {
            return None;
        }
        match self.labels[coord.row as usize][coord.col as usize] {
            NO_REGION => None,
            id => Some(id),
        }
    }
}

/// Label every maximal 4-connected group of same-colored cells.
/// Allocates its own scratch state and never touches `board`.
pub fn label_regions(board: &Board) -> RegionMap {
    let mut labels = [[NO_REGION; Board::SIZE]; Board::SIZE];
    let mut count = 0usize;
    let mut stack: SmallVec<[Coord; Board::PLAYABLE_CELLS]> = SmallVec::new();

    for (start, cell) in board.iter() {
        let Some(color) = cell.color() else {
            continue;
        };
        if labels[start.row as usize][start.col as usize] != NO_REGION {
            continue;
        }

        let id = count as u8;
        count += 1;
        labels[start.row as usize][start.col as usize] = id;
        stack.push(start);

        while let Some(node) = stack.pop() {
            for next in node.neighbors() {
                let Some(neighbor) = board.get(next) else {
                    continue;
                };
                let slot = &mut labels[next.row as usize][next.col as usize];
                if *slot == NO_REGION && neighbor.color() == Some(color) {
                    *slot = id;
                    stack.push(next);
                }
            }
        }
    }

    RegionMap { labels, count }
}

/// Number of same-color regions on the board.
#[inline]
pub fn count_regions(board: &Board) -> usize {
    label_regions(board).count()
}
