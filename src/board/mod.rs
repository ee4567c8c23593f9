//! Board representation for k-in-a-row games

pub mod bitboard;
pub mod board;


use std::fmt;

use crate::game::Player;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, DEFAULT_SIZE, DEFAULT_WIN_LENGTH};

/// Largest supported side length (19x19)
pub const MAX_BOARD_SIZE: usize = 19;
pub const TOTAL_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 361

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// Character used in the text form of a board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Stone> {
        match c {
            'X' | 'x' => Some(Stone::Black),
            'O' | 'o' => Some(Stone::White),
            _ => None,
        }
    }
}

impl Player for Stone {
    #[inline]
    fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

/// Position on the board.
///
/// Indices always use a stride of [`MAX_BOARD_SIZE`], so a position keeps
/// the same bit on every board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < MAX_BOARD_SIZE as u8 && col < MAX_BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * MAX_BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / MAX_BOARD_SIZE) as u8,
            col: (idx % MAX_BOARD_SIZE) as u8,
        }
    }

    /// Step `steps` cells along `(dr, dc)`, or `None` when leaving the
    /// addressable area. Board-specific bounds are checked by the caller.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Option<Pos> {
        let r = i32::from(self.row) + dr * steps;
        let c = i32::from(self.col) + dc * steps;
        if r < 0 || c < 0 || r >= MAX_BOARD_SIZE as i32 || c >= MAX_BOARD_SIZE as i32 {
            return None;
        }
        Some(Pos::new(r as u8, c as u8))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
