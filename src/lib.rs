//! Fixed-depth minimax engine for k-in-a-row games
//!
//! A game-agnostic minimax search with pluggable strategies, and a
//! concrete k-in-a-row board to run it on:
//! - Boards up to 19x19, any win length up to the longer side
//! - Tic-tac-toe (3x3, three in a row) and Gomoku (15x15, five in a row) presets
//! - Overlines count as wins
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`game`]: The contracts a game must meet to be searched
//! - [`search`]: Minimax search and the strategy traits it is generic over
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection and move legality
//! - [`eval`]: Position evaluation and heuristics
//! - [`engine`]: AI engine binding the search to the board
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let board = Board::parse("OO./X../...", 3).unwrap();
//! let engine = AIEngine::with_config(Stone::Black, EngineConfig::default().depth(2));
//!
//! // Black must block White's row
//! assert_eq!(engine.get_move(&board).unwrap(), Pos::new(0, 2));
//! ```
//!
//! # Custom strategies
//!
//! Any [`GameState`] can be searched, and closures work as strategies:
//!
//! ```
//! use gomoku::search::{Searcher, WIN_SCORE};
//! use gomoku::{Board, Pos, Stone};
//!
//! let board = Board::parse("X.X/OO./...", 3).unwrap();
//! let searcher = Searcher::new(
//!     |b: &Board| b.empty_cells().collect::<Vec<_>>(),
//!     |_: &Board, _: Stone| 0,
//! );
//!
//! assert_eq!(searcher.select_move(&board, 2, Stone::Black).unwrap(), Pos::new(0, 1));
//! assert_eq!(searcher.search(&board, Stone::Black, 2).unwrap().score, WIN_SCORE);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, MAX_BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{Error, Result};
pub use game::{GameState, GameStatus, Player, PlayerSide};
