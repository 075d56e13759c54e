//! Linkage eval crate - one-ply ranking heuristic for the automated opponent.

mod rank;

pub use rank::{merge_opportunities, rank_breakdown, rank_move, RankBreakdown};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid rank weights: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("weight `{name}` must be finite, got {value}")]
    InvalidWeight { name: &'static str, value: f32 },
}

/// Weights for each ranking term. Missing TOML keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankWeights {
    /// Per legal reply left open for the next ply.
    pub mobility: f32,
    /// Per color region on the projected board.
    pub regions: f32,
    /// Bonus for More, penalty for Less, when a move spends a color's last piece.
    pub last_piece: f32,
    /// Per same-color follow-up that could merge two regions.
    pub merge_risk: f32,
    /// Merge risk is only scored while more than this many pieces of the color remain.
    pub merge_risk_threshold: u8,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            mobility: 0.01,
            regions: 20.0,
            last_piece: 10.0,
            merge_risk: 5.0,
            merge_risk_threshold: 2,
        }
    }
}

impl RankWeights {
    /// Leans hard on splitting the board, ignores merge threats.
    pub fn aggressive() -> Self {
        Self {
            regions: 30.0,
            merge_risk: 0.0,
            ..Self::default()
        }
    }

    /// Weighs leftover merge opportunities as heavily as new regions.
    pub fn cautious() -> Self {
        Self {
            merge_risk: 20.0,
            merge_risk_threshold: 1,
            ..Self::default()
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let weights: Self = toml::from_str(source)?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("mobility", self.mobility),
            ("regions", self.regions),
            ("last_piece", self.last_piece),
            ("merge_risk", self.merge_risk),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}
