//! Board structure with cached game status

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, MAX_BOARD_SIZE};
use crate::error::{Error, Result};
use crate::game::{GameState, GameStatus};
use crate::rules::{check_winner, has_line_at, is_valid_move};

/// Default side length
pub const DEFAULT_SIZE: usize = 15;
/// Default number of stones in a row needed to win
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Game board for a k-in-a-row game.
///
/// The status is kept up to date by every placement, so terminal checks
/// during search are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    win_length: u8,
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
    status: GameStatus<Stone>,
}

impl Board {
    /// Empty 15x15 five-in-a-row board
    pub fn new() -> Self {
        Self::empty(DEFAULT_SIZE as u8, DEFAULT_SIZE as u8, DEFAULT_WIN_LENGTH as u8)
    }

    /// Empty 3x3 board with win length 3
    pub fn tic_tac_toe() -> Self {
        Self::empty(3, 3, 3)
    }

    /// Empty board with the given dimensions.
    pub fn with_size(rows: usize, cols: usize, win_length: usize) -> Result<Self> {
        if !(1..=MAX_BOARD_SIZE).contains(&rows) || !(1..=MAX_BOARD_SIZE).contains(&cols) {
            return Err(Error::InvalidBoardSize { rows, cols });
        }
        if win_length == 0 || win_length > rows.max(cols) {
            return Err(Error::InvalidWinLength {
                win_length,
                rows,
                cols,
            });
        }
        Ok(Self::empty(rows as u8, cols as u8, win_length as u8))
    }

    fn empty(rows: u8, cols: u8, win_length: u8) -> Self {
        Self {
            rows,
            cols,
            win_length,
            black: Bitboard::new(),
            white: Bitboard::new(),
            status: GameStatus::NotOver,
        }
    }

    /// Parse the text form: one line per row, `X` for Black, `O` for White,
    /// `.` for an empty cell. Rows may also be separated by `/`.
    pub fn parse(text: &str, win_length: usize) -> Result<Self> {
        let lines: Vec<&str> = text
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        let mut board = Self::with_size(rows, cols, win_length)?;

        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(Error::RaggedBoard { row: r });
            }
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                match ch {
                    '.' | '-' | '_' => {}
                    _ => match Stone::from_symbol(ch) {
                        Some(stone) => board.stones_mut(stone).set(pos),
                        None => {
                            return Err(Error::InvalidCellCharacter {
                                character: ch,
                                row: r,
                                col: c,
                            })
                        }
                    },
                }
            }
        }

        board.refresh_status();
        Ok(board)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length as usize
    }

    /// Check that a position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Signed-coordinate variant of [`Board::contains`]
    #[inline]
    pub fn contains_coords(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && row < i32::from(self.rows) && col < i32::from(self.cols)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.black.get(pos) {
            Some(Stone::Black)
        } else if self.white.get(pos) {
            Some(Stone::White)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone and update the status.
    ///
    /// This is the setup path and performs no legality checks. A won game
    /// stays won.
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.contains(pos), "{pos} is off a {}x{} board", self.rows, self.cols);
        self.stones_mut(stone).set(pos);

        if self.status.is_over() {
            return;
        }
        if has_line_at(self, pos, stone) {
            self.status = GameStatus::Won(stone);
        } else if self.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    /// Return a copy of this board with `stone` placed at `pos`.
    #[must_use]
    pub fn update(&self, stone: Stone, pos: Pos) -> Board {
        let mut next = self.clone();
        next.place_stone(pos, stone);
        next
    }

    /// Checked variant of [`Board::update`] for moves coming from outside the engine.
    ///
    /// Accepts exactly the moves [`is_valid_move`] accepts.
    pub fn play(&self, pos: Pos, stone: Stone) -> Result<Board> {
        if is_valid_move(self, pos) {
            return Ok(self.update(stone, pos));
        }

        let (row, col) = (pos.row as usize, pos.col as usize);
        if !self.contains(pos) {
            Err(Error::OutOfBounds { row, col })
        } else if self.status.is_over() {
            Err(Error::GameOver)
        } else {
            Err(Error::Occupied { row, col })
        }
    }

    /// Recompute the status from scratch.
    fn refresh_status(&mut self) {
        self.status = match check_winner(self) {
            Some(stone) => GameStatus::Won(stone),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::NotOver,
        };
    }

    #[inline]
    pub fn status(&self) -> GameStatus<Stone> {
        self.status
    }

    /// Get bitboard for a color
    #[inline]
    pub fn stones(&self, stone: Stone) -> &Bitboard {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    #[inline]
    fn stones_mut(&mut self, stone: Stone) -> &mut Bitboard {
        match stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn cell_count(&self) -> u32 {
        u32::from(self.rows) * u32::from(self.cols)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() >= self.cell_count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Center cell (rounded towards the top-left)
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new((self.rows - 1) / 2, (self.cols - 1) / 2)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| Pos::new(r, c)))
            .filter(move |&pos| self.is_empty(pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Board {
    type Player = Stone;
    type Move = Pos;

    #[inline]
    fn status(&self) -> GameStatus<Stone> {
        self.status
    }

    #[inline]
    fn occupant(&self, mv: Pos) -> Option<Stone> {
        self.get(mv)
    }

    #[inline]
    fn update(&self, player: Stone, mv: Pos) -> Board {
        Board::update(self, player, mv)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = self.get(Pos::new(r, c)).map_or('.', Stone::symbol);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
