//! End-of-game detection.

use linkage_core::{Board, Cell};

/// True once no domino of any color fits anywhere.
///
/// Purely geometric: side to move, remaining colors and the previous move are
/// irrelevant, so a position can be live while the side to move has no legal move.
pub fn is_terminal(board: &Board) -> bool {
    let n = Board::SIZE;
    for row in 0..n {
        for col in 0..n {
            if board.cell(row, col) != Cell::Empty {
                continue;
            }
            if col + 1 < n && board.cell(row, col + 1) == Cell::Empty {
                return false;
            }
            if row + 1 < n && board.cell(row + 1, col) == Cell::Empty {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 7]) -> Board {
        Board::from_rows(&rows).expect("valid board")
    }

    #[test]
    fn test_new_board_is_live() {
        assert!(!is_terminal(&Board::new()));
    }

    #[test]
    fn test_full_board_is_terminal() {
        let b = board([
            "WWYYRRB",
            "WWYYRRB",
            "BBWWYYR",
            "BBW#YYR",
            "RRWWBBY",
            "RRYYBBY",
            "WWYYRRB",
        ]);
        assert!(is_terminal(&b));
    }

    #[test]
    fn test_isolated_empty_cell_is_terminal() {
        let b = board([
            "WWYYRRB",
            "WWYYRRB",
            "BBWWYYR",
            "BBW#.YR",
            "RRWWBBY",
            "RRYYBBY",
            "WWYYRRB",
        ]);
        assert!(is_terminal(&b));
    }

    #[test]
    fn test_scattered_singletons_are_terminal() {
        let b = board([
            ".W.W.W.",
            "W.W.W.W",
            ".W.W.W.",
            "W.W#W.W",
            ".W.W.W.",
            "W.W.W.W",
            ".W.W.W.",
        ]);
        assert!(is_terminal(&b));
    }

    #[test]
    fn test_single_horizontal_pair_is_live() {
        let b = board([
            "WWYYRRB",
            "WWYYRRB",
            "BBWWYYR",
            "BBW#YYR",
            "RRWWBBY",
            "RRYYBBY",
            "WWYYR..",
        ]);
        assert!(!is_terminal(&b));
    }

    #[test]
    fn test_single_vertical_pair_is_live() {
        let b = board([
            ".WYYRRB",
            ".WYYRRB",
            "BBWWYYR",
            "BBW#YYR",
            "RRWWBBY",
            "RRYYBBY",
            "WWYYRRB",
        ]);
        assert!(!is_terminal(&b));
    }
}
