//! The corner-only attachment rule against the previous placement.

use linkage_core::Move;

/// A placement may touch the previous piece at a corner but never along an edge.
/// With no previous piece (game start, or right after a forced skip) anything goes.
#[inline]
pub fn is_adjacency_satisfied(mv: &Move, previous: Option<&Move>) -> bool {
    let Some(previous) = previous else {
        return true;
    };
    !mv.cells
        .iter()
        .any(|&cell| previous.cells.iter().any(|&p| cell.touches_edge(p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkage_core::Color;

    fn prev() -> Move {
        // horizontal piece at (2,2)-(2,3)
        Move::new((2, 2), (2, 3), Color::White)
    }

    #[test]
    fn test_no_previous_is_vacuous() {
        let mv = Move::new((2, 4), (2, 5), Color::Red);
        assert!(is_adjacency_satisfied(&mv, None));
    }

    #[test]
    fn test_edge_contact_rejected() {
        let p = prev();
        // flush against the right end
        assert!(!is_adjacency_satisfied(&Move::new((2, 4), (2, 5), Color::Red), Some(&p)));
        // directly above the left cell
        assert!(!is_adjacency_satisfied(&Move::new((1, 2), (0, 2), Color::Red), Some(&p)));
        // below the right cell
        assert!(!is_adjacency_satisfied(&Move::new((3, 3), (4, 3), Color::Red), Some(&p)));
        // second cell touching is enough
        let upper = Move::new((1, 2), (1, 3), Color::White);
        assert!(!is_adjacency_satisfied(&Move::new((0, 1), (1, 1), Color::Red), Some(&upper)));
    }

    #[test]
    fn test_corner_contact_allowed() {
        let p = prev();
        assert!(is_adjacency_satisfied(&Move::new((1, 4), (0, 4), Color::Red), Some(&p)));
        assert!(is_adjacency_satisfied(&Move::new((3, 1), (3, 0), Color::Red), Some(&p)));
        assert!(is_adjacency_satisfied(&Move::new((3, 4), (4, 4), Color::Red), Some(&p)));
    }

    #[test]
    fn test_distant_allowed() {
        let p = prev();
        assert!(is_adjacency_satisfied(&Move::new((6, 6), (6, 5), Color::Blue), Some(&p)));
    }
}
