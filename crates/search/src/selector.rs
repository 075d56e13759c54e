use linkage_core::{Board, Inventory, Move, Side};
use linkage_engine::generate_moves;
use linkage_eval::{rank_move, RankWeights};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

/// Ranks closer than this count as tied.
pub const TIE_EPSILON: f32 = 1e-4;

#[derive(Clone, Debug, Default)]
pub struct MoveSelector {
    pub weights: RankWeights,
}

impl MoveSelector {
    pub fn new(weights: RankWeights) -> Self {
        Self { weights }
    }

    /// Every legal move paired with its rank for `side`, in generation order.
    pub fn rank_moves(
        &self,
        side: Side,
        board: &Board,
        previous: Option<&Move>,
        inventory: &Inventory,
    ) -> Vec<(Move, f32)> {
        generate_moves(board, previous, inventory)
            .iter()
            .map(|mv| (*mv, rank_move(board, inventory, mv, side, &self.weights)))
            .collect()
    }

    /// The moves tied at the best rank for `side`: highest for `More`, lowest for `Less`.
    pub fn optimal_moves(
        &self,
        side: Side,
        board: &Board,
        previous: Option<&Move>,
        inventory: &Inventory,
    ) -> Vec<(Move, f32)> {
        let mut ranked = self.rank_moves(side, board, previous, inventory);
        keep_optimal(side, &mut ranked);
        ranked
    }

    pub fn select<R: Rng + ?Sized>(
        &self,
        side: Side,
        board: &Board,
        previous: Option<&Move>,
        inventory: &Inventory,
        rng: &mut R,
    ) -> Option<(Move, f32)> {
        let mut ranked = self.rank_moves(side, board, previous, inventory);
        let candidates = ranked.len();
        keep_optimal(side, &mut ranked);

        let &(mv, rank) = ranked.choose(rng)?;
        debug!(%side, candidates, tied = ranked.len(), rank, "selected {mv}");
        Some((mv, rank))
    }
}

fn keep_optimal(side: Side, ranked: &mut Vec<(Move, f32)>) {
    let best = match side {
        Side::More => ranked.iter().map(|&(_, r)| r).fold(f32::NEG_INFINITY, f32::max),
        Side::Less => ranked.iter().map(|&(_, r)| r).fold(f32::INFINITY, f32::min),
    };
    ranked.retain(|&(_, r)| (r - best).abs() <= TIE_EPSILON);
}
