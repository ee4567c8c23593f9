//! Pluggable search-space reductions
//!
//! A strategy is a pair of collaborators:
//! - [`MoveGenerator`] narrows the branching factor to the moves worth trying
//! - [`Evaluator`] scores positions where the depth budget runs out
//!
//! Both are also implemented for plain closures, so a caller can inject two
//! function values instead of writing types.

use crate::game::GameState;

/// Lists the moves the engine is willing to consider from a position.
///
/// Must return at least one move whenever the position has a legal move.
/// Order matters: among equally scored moves the first one listed is kept.
pub trait MoveGenerator<S: GameState> {
    fn moves(&self, state: &S) -> Vec<S::Move>;
}

/// Estimates how good a position is for `me`: larger is better.
///
/// On terminal positions the estimate must agree with the engine's own
/// scoring (see [`terminal_score`](super::terminal_score)).
pub trait Evaluator<S: GameState> {
    fn estimate(&self, state: &S, me: S::Player) -> i32;
}

impl<S, F> MoveGenerator<S> for F
where
    S: GameState,
    F: Fn(&S) -> Vec<S::Move>,
{
    #[inline]
    fn moves(&self, state: &S) -> Vec<S::Move> {
        self(state)
    }
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, S::Player) -> i32,
{
    #[inline]
    fn estimate(&self, state: &S, me: S::Player) -> i32 {
        self(state, me)
    }
}
