//! Contracts between the search engine and the game it plays
//!
//! The engine never looks inside a position. It only needs to:
//! - ask whether the game is over and who won
//! - ask who occupies a location
//! - derive a successor position without touching the current one
//!
//! Anything implementing [`GameState`] can be searched.

use std::fmt::Debug;

/// Outcome of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus<P> {
    NotOver,
    Draw,
    Won(P),
}

impl<P> GameStatus<P> {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NotOver)
    }
}

/// Absolute identity of one of the two players.
pub trait Player: Copy + Eq + Debug {
    /// The other player.
    fn opponent(self) -> Self;
}

/// An immutable game position.
///
/// `update` must leave `self` untouched: sibling branches of the search tree
/// are derived from the same parent and must not see each other's moves.
pub trait GameState: Sized {
    type Player: Player;
    type Move: Copy + Eq + Debug;

    /// Terminal status of this position.
    fn status(&self) -> GameStatus<Self::Player>;

    /// Who occupies the given location, if anyone.
    fn occupant(&self, mv: Self::Move) -> Option<Self::Player>;

    /// Return a new position with `player` having played `mv`.
    fn update(&self, player: Self::Player, mv: Self::Move) -> Self;
}

/// Side to move, relative to the player the engine is searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSide {
    /// The engine's own player (maximizing levels)
    Own,
    /// The other player (minimizing levels)
    Opponent,
}

impl PlayerSide {
    #[inline]
    pub fn opponent(self) -> PlayerSide {
        match self {
            PlayerSide::Own => PlayerSide::Opponent,
            PlayerSide::Opponent => PlayerSide::Own,
        }
    }

    /// Map this side onto an absolute player, given the engine's own player.
    #[inline]
    pub fn resolve<P: Player>(self, me: P) -> P {
        match self {
            PlayerSide::Own => me,
            PlayerSide::Opponent => me.opponent(),
        }
    }
}
