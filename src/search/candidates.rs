//! Candidate move filters for [`Board`]
//!
//! On a large board most empty cells are far away from the action. Only
//! looking near existing stones shrinks the search tree considerably.

use crate::board::{Bitboard, Board, Pos};

use super::MoveGenerator;

/// Every empty cell, in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllEmpty;

impl MoveGenerator<Board> for AllEmpty {
    fn moves(&self, board: &Board) -> Vec<Pos> {
        if board.status().is_over() {
            return Vec::new();
        }
        board.empty_cells().collect()
    }
}

/// Empty cells within `radius` (Chebyshev distance) of any stone.
///
/// With a radius of at least 1 some empty cell always touches a stone, so a
/// move is offered whenever one exists.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    radius: u8,
}

impl Neighborhood {
    /// A radius of 0 would never offer a move, it is raised to 1.
    pub fn new(radius: u8) -> Self {
        Self {
            radius: radius.max(1),
        }
    }

    #[inline]
    pub fn radius(&self) -> u8 {
        self.radius
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new(1)
    }
}

impl MoveGenerator<Board> for Neighborhood {
    fn moves(&self, board: &Board) -> Vec<Pos> {
        if board.status().is_over() {
            return Vec::new();
        }
        if board.is_board_empty() {
            return vec![board.center()];
        }

        let radius = i32::from(self.radius);
        let mut near = Bitboard::new();

        for pos in board.occupied().iter_ones() {
            for dr in -radius..=radius {
                for dc in -radius..=radius {
                    let r = i32::from(pos.row) + dr;
                    let c = i32::from(pos.col) + dc;
                    if board.contains_coords(r, c) {
                        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                        near.set(Pos::new(r as u8, c as u8));
                    }
                }
            }
        }

        near.iter_ones().filter(|&pos| board.is_empty(pos)).collect()
    }
}
