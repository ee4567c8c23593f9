//! Pattern scores for line evaluation
//!
//! A run of stones is classified by how many stones it still lacks to reach
//! the win length and how many of its ends are open. On a five-in-a-row
//! board "one short" is a four, "two short" a three and so on.

use crate::search::WIN_SCORE;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    // Strong attacking patterns
    /// One stone short, both ends open: cannot be stopped with one move
    pub const OPEN_ONE_SHORT: i32 = 100_000;
    /// One stone short, one end blocked
    pub const CLOSED_ONE_SHORT: i32 = 50_000;

    // Moderate threats
    /// Two short, both ends open: becomes an open one-short if ignored
    pub const OPEN_TWO_SHORT: i32 = 10_000;
    /// Two short, one end blocked. Well below the open variant, the
    /// opponent has a clear blocking point.
    pub const CLOSED_TWO_SHORT: i32 = 1_500;

    // Building patterns
    pub const OPEN_THREE_SHORT: i32 = 1_000;
    pub const CLOSED_THREE_SHORT: i32 = 200;

    /// Largest magnitude a heuristic estimate may take
    pub const MAX_ESTIMATE: i32 = WIN_SCORE - 1;
}

/// Score a run of `count` stones with `open_ends` free ends on a board
/// needing `win_length` in a row.
///
/// A run with an interior gap (`has_gap`) is scored by the stones it holds.
/// Filling the gap is always one move away, so a gapped run is never worth
/// more than an open one-short.
pub fn line_score(count: usize, open_ends: u8, has_gap: bool, win_length: usize) -> i32 {
    let missing = win_length.saturating_sub(count);

    if has_gap {
        return match (missing, open_ends) {
            // X_XXX, XX_XX: the gap wins whatever the ends look like
            (0 | 1, _) => PatternScore::OPEN_ONE_SHORT,
            (2, 2) => PatternScore::OPEN_TWO_SHORT,
            (2, 1) => PatternScore::CLOSED_TWO_SHORT,
            _ => 0,
        };
    }

    match (missing, open_ends) {
        // A full line only shows up here if the board was set up by hand
        (0, _) => PatternScore::OPEN_ONE_SHORT,
        (1, 2) => PatternScore::OPEN_ONE_SHORT,
        (1, 1) => PatternScore::CLOSED_ONE_SHORT,
        (2, 2) => PatternScore::OPEN_TWO_SHORT,
        (2, 1) => PatternScore::CLOSED_TWO_SHORT,
        (3, 2) => PatternScore::OPEN_THREE_SHORT,
        (3, 1) => PatternScore::CLOSED_THREE_SHORT,
        _ => 0,
    }
}
