//! Main AI engine for one side of a k-in-a-row game
//!
//! The engine binds a [`Searcher`] to concrete strategies for [`Board`]:
//! [`Neighborhood`] candidates and the [`PatternEvaluator`] heuristic. It
//! knows which stone it plays and how deep to look, and nothing about the
//! game history, so any position can be handed to it at any time.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let engine = AIEngine::with_config(Stone::White, EngineConfig::default().depth(2));
//! let result = engine.next_move(&board).unwrap();
//! println!("Best move: {} (score {})", result.best_move, result.score);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::info;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::eval::PatternEvaluator;
use crate::search::{Neighborhood, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Move chosen for the engine's stone
    pub best_move: Pos,
    /// Minimax score of the position from the engine's point of view
    pub score: i32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Main AI engine.
///
/// Immutable once built: asking twice about the same board gives the same
/// answer.
#[derive(Debug, Clone)]
pub struct AIEngine {
    me: Stone,
    config: EngineConfig,
    searcher: Searcher<Neighborhood, PatternEvaluator>,
}

impl AIEngine {
    /// Create an engine playing `me` with the default configuration.
    #[must_use]
    pub fn new(me: Stone) -> Self {
        Self::with_config(me, EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(me: Stone, config: EngineConfig) -> Self {
        let searcher = Searcher::new(Neighborhood::new(config.radius), PatternEvaluator)
            .with_terminal_check(config.verify_terminal);
        Self {
            me,
            config,
            searcher,
        }
    }

    /// Stone this engine plays
    #[inline]
    pub fn stone(&self) -> Stone {
        self.me
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the best move for the engine's stone on `board`.
    ///
    /// See [`AIEngine::next_move`] for the statistics.
    pub fn get_move(&self, board: &Board) -> Result<Pos> {
        self.next_move(board).map(|result| result.best_move)
    }

    /// Search `board` with the engine's stone to move.
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroDepth`] if the configured depth is 0
    /// - [`Error::GameOver`] if the game on `board` has already ended
    pub fn next_move(&self, board: &Board) -> Result<MoveResult> {
        let depth = self.config.depth;
        if depth == 0 {
            return Err(Error::ZeroDepth);
        }
        if board.status().is_over() {
            return Err(Error::GameOver);
        }

        let start = Instant::now();
        let result = if self.config.parallel {
            self.searcher.search_parallel(board, self.me, depth)?
        } else {
            self.searcher.search(board, self.me, depth)?
        };
        let best_move = result.best_move.ok_or(Error::GameOver)?;
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            "{} plays {} (score {}, depth {}, {} nodes, {}ms)",
            self.me, best_move, result.score, depth, result.nodes, time_ms
        );

        Ok(MoveResult {
            best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::WIN_SCORE;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new(Stone::White);
        assert_eq!(engine.stone(), Stone::White);
        assert_eq!(engine.config(), &EngineConfig::default());
    }

    #[test]
    fn test_engine_with_config() {
        let config = EngineConfig::default().depth(5).radius(2);
        let engine = AIEngine::with_config(Stone::Black, config);
        assert_eq!(engine.config().depth, 5);
        assert_eq!(engine.config().radius, 2);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        // Open four: both ends win
        for i in 3..7 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }

        let engine = AIEngine::with_config(Stone::Black, EngineConfig::default().depth(1));
        let result = engine.next_move(&board).unwrap();

        assert_eq!(result.best_move, Pos::new(7, 2), "first cell completing the line");
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_engine_deeper_search_keeps_winning_score() {
        let mut board = Board::new();
        for i in 3..7 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }

        // With lookahead, quiet moves next to an open four also win: White
        // can only close one end. Any of them may be picked.
        let engine = AIEngine::new(Stone::Black);
        let result = engine.next_move(&board).unwrap();
        assert_eq!(result.score, WIN_SCORE);
        assert!(board.is_empty(result.best_move));
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        // White four closed on the left, open at (7, 7)
        board.place_stone(Pos::new(7, 2), Stone::Black);
        for i in 3..7 {
            board.place_stone(Pos::new(7, i), Stone::White);
        }
        board.place_stone(Pos::new(8, 8), Stone::Black);
        board.place_stone(Pos::new(9, 9), Stone::White);

        let engine = AIEngine::with_config(Stone::Black, EngineConfig::default().depth(2));
        let result = engine.next_move(&board).unwrap();

        assert_eq!(result.best_move, Pos::new(7, 7));
        assert!(result.score > -WIN_SCORE, "blocking must avoid the loss");
    }

    #[test]
    fn test_engine_empty_board() {
        let board = Board::new();
        let engine = AIEngine::new(Stone::Black);

        assert_eq!(engine.get_move(&board).unwrap(), Pos::new(7, 7));
    }

    #[test]
    fn test_engine_rejects_finished_game() {
        let board = Board::parse("XXX/OO./...", 3).unwrap();
        let engine = AIEngine::new(Stone::White);
        assert_eq!(engine.next_move(&board).unwrap_err(), Error::GameOver);
    }

    #[test]
    fn test_engine_rejects_zero_depth() {
        let board = Board::new();
        let engine = AIEngine::with_config(Stone::Black, EngineConfig::default().depth(0));
        assert_eq!(engine.next_move(&board).unwrap_err(), Error::ZeroDepth);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);

        let engine = AIEngine::with_config(Stone::Black, EngineConfig::default().depth(2));
        let first = engine.next_move(&board).unwrap();
        let second = engine.next_move(&board).unwrap();

        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_parallel_engine_agrees() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);
        board.place_stone(Pos::new(6, 7), Stone::Black);

        let config = EngineConfig::default().depth(2);
        let sequential = AIEngine::with_config(Stone::White, config).next_move(&board).unwrap();
        let parallel = AIEngine::with_config(Stone::White, config.parallel(true))
            .next_move(&board)
            .unwrap();

        assert_eq!(parallel.best_move, sequential.best_move);
        assert_eq!(parallel.score, sequential.score);
        assert_eq!(parallel.nodes, sequential.nodes);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let config = EngineConfig::default().depth(2);
        let black = AIEngine::with_config(Stone::Black, config);
        let white = AIEngine::with_config(Stone::White, config);
        let mut board = Board::new();

        for _ in 0..3 {
            let pos = black.get_move(&board).unwrap();
            board = board.play(pos, Stone::Black).unwrap();
            let pos = white.get_move(&board).unwrap();
            board = board.play(pos, Stone::White).unwrap();
        }
        assert_eq!(board.stone_count(), 6);
    }

    #[test]
    fn test_verified_engine_plays_tic_tac_toe() {
        let board = Board::parse("OO./X../...", 3).unwrap();
        let config = EngineConfig::default().depth(2).verify_terminal(true);
        let engine = AIEngine::with_config(Stone::Black, config);

        assert_eq!(engine.get_move(&board).unwrap(), Pos::new(0, 2));
    }
}
