//! Fixed-depth minimax search
//!
//! The search walks the game tree depth-first, trying candidates in the
//! order the [`MoveGenerator`] lists them:
//! - terminal positions score [`WIN_SCORE`], `-WIN_SCORE` or 0, whatever depth remains
//! - positions at depth 0 are scored by the [`Evaluator`]
//! - everything else takes the best child score for the side to move:
//!   the maximum on the engine's own turns, the minimum on the opponent's
//!
//! Ties keep the first candidate, so the result is fully determined by the
//! position and the generator's order. There is no pruning and no cache;
//! the depth budget is the only bound on work.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::eval::TerminalEvaluator;
//! use gomoku::search::{AllEmpty, Searcher, WIN_SCORE};
//!
//! let board = Board::parse("XX./OO./...", 3).unwrap();
//! let searcher = Searcher::new(AllEmpty, TerminalEvaluator);
//!
//! let result = searcher.search(&board, Stone::Black, 1).unwrap();
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! assert_eq!(result.score, WIN_SCORE);
//! ```

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::game::{GameState, GameStatus, Player, PlayerSide};

use super::{Evaluator, MoveGenerator};

/// Score of a won position. Heuristic estimates must stay strictly inside
/// `(-WIN_SCORE, WIN_SCORE)`.
pub const WIN_SCORE: i32 = 100_000_000;

/// Score of a terminal position from `me`'s point of view.
#[inline]
pub fn terminal_score<P: Player>(status: GameStatus<P>, me: P) -> i32 {
    match status {
        GameStatus::Won(winner) if winner == me => WIN_SCORE,
        GameStatus::Won(_) => -WIN_SCORE,
        GameStatus::Draw | GameStatus::NotOver => 0,
    }
}

/// A move paired with the score of the subtree it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<M> {
    pub mv: M,
    pub score: i32,
}

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// Best move found. `None` when the root is terminal or the depth is 0.
    pub best_move: Option<M>,
    /// Minimax score of the root from the engine's point of view
    pub score: i32,
    /// Total nodes visited, root included
    pub nodes: u64,
}

/// Whether `score` replaces `kept` for the side to move. Strict comparison
/// keeps the first of equal scores.
#[inline]
fn prefers(side: PlayerSide, score: i32, kept: i32) -> bool {
    match side {
        PlayerSide::Own => score > kept,
        PlayerSide::Opponent => score < kept,
    }
}

/// Minimax search engine over any [`GameState`].
///
/// Holds only the two strategy collaborators; the player, depth and side to
/// move are arguments, so one searcher can serve any number of searches.
#[derive(Debug, Clone)]
pub struct Searcher<G, E> {
    generator: G,
    evaluator: E,
    verify_terminal: bool,
}

impl<G, E> Searcher<G, E> {
    #[must_use]
    pub fn new(generator: G, evaluator: E) -> Self {
        Self {
            generator,
            evaluator,
            verify_terminal: false,
        }
    }

    /// Cross-check the evaluator against the engine's terminal scoring.
    ///
    /// Only has an effect in debug builds. A disagreement in sign is
    /// reported as [`Error::InconsistentTerminalScore`].
    #[must_use]
    pub fn with_terminal_check(mut self, enabled: bool) -> Self {
        self.verify_terminal = enabled;
        self
    }

    /// Pick the move for `me` in `state`, looking `depth` ply ahead.
    ///
    /// Unlike [`Searcher::search`], this insists on a move: a depth of 0 or
    /// a finished game is an error.
    pub fn select_move<S>(&self, state: &S, depth: u32, me: S::Player) -> Result<S::Move>
    where
        S: GameState,
        G: MoveGenerator<S>,
        E: Evaluator<S>,
    {
        if depth == 0 {
            return Err(Error::ZeroDepth);
        }
        if state.status().is_over() {
            return Err(Error::GameOver);
        }
        self.search(state, me, depth)?.best_move.ok_or(Error::GameOver)
    }

    /// Run a minimax search for `me` with `me` to move.
    pub fn search<S>(&self, state: &S, me: S::Player, depth: u32) -> Result<SearchResult<S::Move>>
    where
        S: GameState,
        G: MoveGenerator<S>,
        E: Evaluator<S>,
    {
        let mut nodes = 0;
        if depth == 0 || state.status().is_over() {
            let score = self.value(state, me, PlayerSide::Own, depth, &mut nodes)?;
            return Ok(SearchResult {
                best_move: None,
                score,
                nodes,
            });
        }

        nodes += 1;
        let mut best: Option<ScoredCandidate<S::Move>> = None;
        for mv in self.generator.moves(state) {
            let child = state.update(me, mv);
            let score = self.value(&child, me, PlayerSide::Opponent, depth - 1, &mut nodes)?;
            debug!("candidate {mv:?} scores {score}");
            best = Self::keep(best, ScoredCandidate { mv, score });
        }

        Self::finish(best, depth, nodes)
    }

    /// Same result as [`Searcher::search`], with each root candidate's
    /// subtree searched on the rayon thread pool.
    ///
    /// Subtree results are merged in generator order, so ties resolve
    /// exactly as in the sequential search.
    pub fn search_parallel<S>(
        &self,
        state: &S,
        me: S::Player,
        depth: u32,
    ) -> Result<SearchResult<S::Move>>
    where
        S: GameState + Sync,
        S::Player: Send + Sync,
        S::Move: Send + Sync,
        G: MoveGenerator<S> + Sync,
        E: Evaluator<S> + Sync,
    {
        if depth == 0 || state.status().is_over() {
            return self.search(state, me, depth);
        }

        let moves = self.generator.moves(state);
        let branches: Vec<Result<(ScoredCandidate<S::Move>, u64)>> = moves
            .par_iter()
            .map(|&mv| {
                let child = state.update(me, mv);
                let mut nodes = 0;
                let score = self.value(&child, me, PlayerSide::Opponent, depth - 1, &mut nodes)?;
                Ok((ScoredCandidate { mv, score }, nodes))
            })
            .collect();

        let mut nodes = 1;
        let mut best = None;
        for branch in branches {
            let (candidate, branch_nodes) = branch?;
            debug!("candidate {:?} scores {}", candidate.mv, candidate.score);
            nodes += branch_nodes;
            best = Self::keep(best, candidate);
        }

        Self::finish(best, depth, nodes)
    }

    /// Root merge: the root is always the engine's own turn.
    #[inline]
    fn keep<M>(
        best: Option<ScoredCandidate<M>>,
        candidate: ScoredCandidate<M>,
    ) -> Option<ScoredCandidate<M>> {
        match best {
            Some(kept) if !prefers(PlayerSide::Own, candidate.score, kept.score) => Some(kept),
            _ => Some(candidate),
        }
    }

    fn finish<M: std::fmt::Debug>(
        best: Option<ScoredCandidate<M>>,
        depth: u32,
        nodes: u64,
    ) -> Result<SearchResult<M>> {
        let best = best.ok_or(Error::NoCandidateMoves { depth })?;
        debug!(
            "selected {:?} with score {} at depth {} ({} nodes)",
            best.mv, best.score, depth, nodes
        );
        Ok(SearchResult {
            best_move: Some(best.mv),
            score: best.score,
            nodes,
        })
    }

    /// Minimax value of `state` with `side` to move and `depth` ply left.
    fn value<S>(
        &self,
        state: &S,
        me: S::Player,
        side: PlayerSide,
        depth: u32,
        nodes: &mut u64,
    ) -> Result<i32>
    where
        S: GameState,
        G: MoveGenerator<S>,
        E: Evaluator<S>,
    {
        *nodes += 1;

        let status = state.status();
        if status.is_over() {
            return self.terminal_value(state, status, me);
        }
        if depth == 0 {
            return Ok(self.evaluator.estimate(state, me));
        }

        let mover = side.resolve(me);
        let mut best: Option<i32> = None;
        for mv in self.generator.moves(state) {
            let child = state.update(mover, mv);
            let score = self.value(&child, me, side.opponent(), depth - 1, nodes)?;
            if best.map_or(true, |kept| prefers(side, score, kept)) {
                best = Some(score);
            }
        }

        let best = best.ok_or(Error::NoCandidateMoves { depth })?;
        trace!("{side:?} node at depth {depth} resolves to {best}");
        Ok(best)
    }

    fn terminal_value<S>(&self, state: &S, status: GameStatus<S::Player>, me: S::Player) -> Result<i32>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let score = terminal_score(status, me);
        if self.verify_terminal && cfg!(debug_assertions) && score != 0 {
            let estimate = self.evaluator.estimate(state, me);
            if estimate.signum() != score.signum() {
                return Err(Error::InconsistentTerminalScore {
                    outcome: score,
                    estimate,
                });
            }
        }
        Ok(score)
    }
}
