//! Win condition checking for k-in-a-row
//!
//! A player wins by owning `win_length` or more consecutive cells along a
//! row, a column or either diagonal. Longer lines (overlines) also win.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `color` stones starting one step away from `pos`.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    (1..)
        .map_while(|step| pos.offset(dr, dc, step).filter(|&p| board.contains(p)))
        .take_while(|&p| board.get(p) == Some(color))
        .count()
}

/// Fast line check through a specific position.
///
/// Only looks along the 4 directions through `pos`, which is all that can
/// change when a stone is placed there.
#[inline]
pub fn has_line_at(board: &Board, pos: Pos, color: Stone) -> bool {
    let needed = board.win_length();
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, dr, dc, color) + run_length(board, pos, -dr, -dc, color)
            >= needed
    })
}

/// Find the positions of a winning line for `stone`, if one exists.
///
/// The returned line starts at its first stone along the direction it was
/// found in and holds at least `win_length` positions.
pub fn find_line(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    let needed = board.win_length();

    for pos in board.stones(stone).iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            // Only start from the first stone of a run
            if run_length(board, pos, -dr, -dc, stone) > 0 {
                continue;
            }
            let len = 1 + run_length(board, pos, dr, dc, stone);
            if len >= needed {
                let line = (0..len as i32)
                    .filter_map(|step| pos.offset(dr, dc, step))
                    .collect();
                return Some(line);
            }
        }
    }
    None
}

/// Check for a winner by scanning the whole board.
///
/// Returns `Some(Stone)` if either side owns a winning line. Black is
/// checked first.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| find_line(board, stone).is_some())
}
