//! The two competing teams.

use serde::{Deserialize, Serialize};

/// Region count at or above which `More` wins.
pub const REGION_THRESHOLD: usize = 12;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Wants the final board split into many regions.
    More,
    /// Wants as few regions as possible.
    Less,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::More => Side::Less,
            Side::Less => Side::More,
        }
    }

    /// Winner of a finished board with `regions` color regions.
    pub fn winner_for(regions: usize) -> Self {
        if regions < REGION_THRESHOLD {
            Side::Less
        } else {
            Side::More
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::More => write!(f, "More"),
            Side::Less => write!(f, "Less"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_threshold() {
        assert_eq!(Side::winner_for(11), Side::Less);
        assert_eq!(Side::winner_for(12), Side::More);
        assert_eq!(Side::winner_for(0), Side::Less);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::More.opponent(), Side::Less);
        assert_eq!(Side::Less.opponent().opponent(), Side::Less);
    }
}
