//! Error types for the minimax engine and its board

use thiserror::Error;

/// Errors raised by the search engine and the board collaborators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The move generator produced nothing for a position that is still in play.
    #[error("move generator returned no candidates for a non-terminal position ({depth} ply remaining)")]
    NoCandidateMoves { depth: u32 },

    /// The evaluator disagrees in sign with the engine's outcome scoring on a terminal position.
    #[error("evaluator returned {estimate} for a terminal position the engine scores as {outcome}")]
    InconsistentTerminalScore { outcome: i32, estimate: i32 },

    #[error("search depth must be at least 1 to select a move")]
    ZeroDepth,

    #[error("game already over")]
    GameOver,

    #[error("invalid board size {rows}x{cols} (each side must be 1-19)")]
    InvalidBoardSize { rows: usize, cols: usize },

    #[error("win length {win_length} does not fit a {rows}x{cols} board")]
    InvalidWinLength {
        win_length: usize,
        rows: usize,
        cols: usize,
    },

    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid move: position ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("invalid character '{character}' at ({row}, {col})")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("row {row} has a different width than the first row")]
    RaggedBoard { row: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
