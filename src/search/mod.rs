//! Search module
//!
//! Contains:
//! - Fixed-depth minimax over any [`GameState`](crate::game::GameState)
//! - The strategy traits the search is parameterized by
//! - Candidate move filters for [`Board`](crate::board::Board)

pub mod candidates;
pub mod minimax;
pub mod strategy;

pub use candidates::{AllEmpty, Neighborhood};
pub use minimax::{terminal_score, ScoredCandidate, SearchResult, Searcher, WIN_SCORE};
pub use strategy::{Evaluator, MoveGenerator};
