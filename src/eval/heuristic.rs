//! Heuristic evaluation function for k-in-a-row positions
//!
//! This module provides the leaf evaluators for the minimax search.
//! A position is scored from:
//! - Win/loss detection (terminal positions score the search sentinel)
//! - Pattern scoring (runs one, two and three stones short of a line)
//! - Positional bonuses (center control)

use crate::board::{Board, Pos, Stone};
use crate::game::{GameState, Player};
use crate::rules::win::DIRECTIONS;
use crate::search::{terminal_score, Evaluator};

use super::patterns::{line_score, PatternScore};

/// Weight per distance unit from center
const POSITION_WEIGHT: i32 = 3;

/// Pattern and position heuristic.
///
/// Terminal positions score exactly like the search does. Everything else
/// is clamped to [`PatternScore::MAX_ESTIMATE`] so an estimate never looks
/// like a decided game.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEvaluator;

impl Evaluator<Board> for PatternEvaluator {
    fn estimate(&self, board: &Board, me: Stone) -> i32 {
        let status = board.status();
        if status.is_over() {
            return terminal_score(status, me);
        }
        evaluate(board, me).clamp(-PatternScore::MAX_ESTIMATE, PatternScore::MAX_ESTIMATE)
    }
}

/// Only knows won, lost and drawn. Every open position is worth 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEvaluator;

impl<S: GameState> Evaluator<S> for TerminalEvaluator {
    #[inline]
    fn estimate(&self, state: &S, me: S::Player) -> i32 {
        terminal_score(state.status(), me)
    }
}

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate disadvantage for `color`
///
/// The result is antisymmetric: `evaluate(b, Black) == -evaluate(b, White)`.
/// It is not clamped; use [`PatternEvaluator`] inside a search.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();

    let pattern_score = evaluate_patterns(board, color) - evaluate_patterns(board, opponent);
    let position_score = evaluate_positions(board, color) - evaluate_positions(board, opponent);

    pattern_score.saturating_add(position_score)
}

/// Evaluate pattern-based score for a color.
///
/// Each line segment is counted exactly once by only evaluating from its
/// "start" stone. Several simultaneous threats the opponent cannot all
/// block earn the open one-short bonus once more:
/// - Open one-short plus any other strong run
/// - Two closed one-shorts
/// - Closed one-short plus open two-short
/// - Two open two-shorts
fn evaluate_patterns(board: &Board, color: Stone) -> i32 {
    let mut score = 0i32;
    let mut open_ones = 0;
    let mut closed_ones = 0;
    let mut open_twos = 0;

    for pos in board.stones(color).iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            let pattern_score = evaluate_line(board, pos, dr, dc, color);
            score = score.saturating_add(pattern_score);

            if pattern_score >= PatternScore::OPEN_ONE_SHORT {
                open_ones += 1;
            } else if pattern_score >= PatternScore::CLOSED_ONE_SHORT {
                closed_ones += 1;
            } else if pattern_score >= PatternScore::OPEN_TWO_SHORT {
                open_twos += 1;
            }
        }
    }

    let combos = [
        open_ones >= 1 && (closed_ones >= 1 || open_twos >= 1),
        closed_ones >= 2,
        closed_ones >= 1 && open_twos >= 1,
        open_twos >= 2,
    ];
    for _ in combos.iter().filter(|&&hit| hit) {
        score = score.saturating_add(PatternScore::OPEN_ONE_SHORT);
    }

    score
}

/// Next cell along `(dr, dc)` if it is on this board.
#[inline]
fn step(board: &Board, pos: Pos, dr: i32, dc: i32) -> Option<Pos> {
    pos.offset(dr, dc, 1).filter(|&p| board.contains(p))
}

/// Evaluate a single line pattern from a position in a given direction.
///
/// Returns 0 unless `pos` starts the run: no same-color stone behind it,
/// and no same-color stone one gap behind it either. Allows one interior
/// gap, so `X_XXX` or `XX_XX` on a five-in-a-row board count as one short,
/// and only once.
fn evaluate_line(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    let mut open_ends = 0u8;

    if let Some(prev) = step(board, pos, -dr, -dc) {
        match board.get(prev) {
            Some(stone) if stone == color => return 0,
            Some(_) => {}
            None => {
                // Tail of a gapped run
                let before = step(board, prev, -dr, -dc);
                if before.is_some_and(|p| board.get(p) == Some(color)) {
                    return 0;
                }
                open_ends += 1;
            }
        }
    }

    let mut count = 1;
    let mut has_gap = false;
    let mut cursor = step(board, pos, dr, dc);

    while let Some(p) = cursor {
        match board.get(p) {
            Some(stone) if stone == color => count += 1,
            None => {
                let after = step(board, p, dr, dc);
                let bridges = !has_gap
                    && after.is_some_and(|next| board.get(next) == Some(color));
                if !bridges {
                    open_ends += 1;
                    break;
                }
                has_gap = true;
            }
            Some(_) => break,
        }
        cursor = step(board, p, dr, dc);
    }

    line_score(count, open_ends, has_gap, board.win_length())
}

/// Evaluate positional bonuses for a color.
///
/// Stones closer to the center are worth more as they have more
/// potential for creating patterns in multiple directions.
fn evaluate_positions(board: &Board, color: Stone) -> i32 {
    let center = board.center();
    let (center_row, center_col) = (i32::from(center.row), i32::from(center.col));
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    let max_dist = (board.rows() as i32 - 1 - center_row) + (board.cols() as i32 - 1 - center_col);

    board
        .stones(color)
        .iter_ones()
        .map(|pos| {
            let dist =
                (i32::from(pos.row) - center_row).abs() + (i32::from(pos.col) - center_col).abs();
            (max_dist - dist) * POSITION_WEIGHT
        })
        .sum()
}
