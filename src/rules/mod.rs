//! Game rules for k-in-a-row
//!
//! - Win conditions (k or more in a row, any direction)
//! - Move legality (on the board, empty cell, game still running)

pub mod win;

use crate::board::{Board, Pos};

pub use win::{check_winner, find_line, has_line_at};

/// Check whether a stone may be placed at `pos`.
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.contains(pos) && board.is_empty(pos) && !board.status().is_over()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_valid_move_rules() {
        let board = Board::parse("X../.O./...", 3).unwrap();
        assert!(is_valid_move(&board, Pos::new(0, 1)));
        assert!(!is_valid_move(&board, Pos::new(0, 0)));
        assert!(!is_valid_move(&board, Pos::new(1, 3)));
    }

    #[test]
    fn test_play_accepts_exactly_valid_moves() {
        let boards = [
            Board::parse("X../.O./...", 3).unwrap(),
            Board::parse("XXX/OO./...", 3).unwrap(),
            Board::parse("XOX/XOO/OXX", 3).unwrap(),
        ];
        for board in &boards {
            for row in 0..4 {
                for col in 0..4 {
                    let pos = Pos::new(row, col);
                    assert_eq!(
                        board.play(pos, Stone::White).is_ok(),
                        is_valid_move(board, pos),
                        "{pos} on\n{board}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_valid_moves_after_win() {
        let board = Board::parse("XX./OO./...", 3).unwrap();
        let won = board.update(Stone::Black, Pos::new(0, 2));
        assert!(!is_valid_move(&won, Pos::new(2, 2)));
    }
}
