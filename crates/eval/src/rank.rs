use linkage_core::{Board, Color, Inventory, Move, Side};
use linkage_engine::{apply_move, count_moves, generate_placements, label_regions, RegionMap};

use crate::RankWeights;

/// Raw ranking terms for one candidate, before weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RankBreakdown {
    /// Legal replies on the projected board with the candidate as previous move.
    pub mobility: usize,
    pub regions: usize,
    /// The candidate spends the last unit of its color.
    pub last_piece: bool,
    /// Same-color follow-ups that would merge regions. `None` when too few pieces remain to score it.
    pub merge_risk: Option<usize>,
}

impl RankBreakdown {
    pub fn score(&self, side: Side, weights: &RankWeights) -> f32 {
        let mut rank = weights.mobility * self.mobility as f32;
        rank += weights.regions * self.regions as f32;

        if self.last_piece {
            match side {
                Side::More => rank += weights.last_piece,
                Side::Less => rank -= weights.last_piece,
            }
        }

        if let Some(merges) = self.merge_risk {
            rank -= weights.merge_risk * merges as f32;
        }

        rank
    }
}

/// One-ply lookahead terms for `mv`. The caller's board and inventory are untouched.
pub fn rank_breakdown(
    board: &Board,
    inventory: &Inventory,
    mv: &Move,
    weights: &RankWeights,
) -> RankBreakdown {
    let projected = apply_move(board, mv);
    let mut remaining = *inventory;
    let last_piece = inventory.get(mv.color) == 1;
    remaining.take(mv.color);

    let mobility = count_moves(&projected, Some(mv), &remaining);
    let map = label_regions(&projected);

    let merge_risk = (remaining.get(mv.color) > weights.merge_risk_threshold)
        .then(|| merge_opportunities(&projected, mv.color, &map));

    RankBreakdown {
        mobility,
        regions: map.count(),
        last_piece,
        merge_risk,
    }
}

/// Scalar rank of `mv` for `side`. Higher is better for `More`, lower for `Less`.
pub fn rank_move(
    board: &Board,
    inventory: &Inventory,
    mv: &Move,
    side: Side,
    weights: &RankWeights,
) -> f32 {
    rank_breakdown(board, inventory, mv, weights).score(side, weights)
}

/// Number of geometrically valid `color` placements that would lower the region count.
///
/// A new domino joins every same-color region it touches into one, so the count
/// drops exactly when it touches two or more distinct regions of its color.
/// `map` must be the labelling of `board`.
pub fn merge_opportunities(board: &Board, color: Color, map: &RegionMap) -> usize {
    generate_placements(board, color)
        .iter()
        .filter(|placement| touched_regions(board, color, map, placement) >= 2)
        .count()
}

fn touched_regions(board: &Board, color: Color, map: &RegionMap, placement: &Move) -> usize {
    // at most 6 distinct neighbours around a domino
    let mut seen = [u8::MAX; 6];
    let mut len = 0;
    for cell in placement.cells {
        for next in cell.neighbors() {
            if board.get(next).and_then(|c| c.color()) != Some(color) {
                continue;
            }
            let Some(id) = map.region_at(next) else {
                continue;
            };
            if !seen[..len].contains(&id) {
                seen[len] = id;
                len += 1;
            }
        }
    }
    len
}
