//! Position evaluation
//!
//! - [`PatternEvaluator`]: line patterns plus center control
//! - [`TerminalEvaluator`]: won, lost or drawn, nothing else

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, PatternEvaluator, TerminalEvaluator};
pub use patterns::{line_score, PatternScore};
