//! Exhaustive checks on tic-tac-toe, small enough to search to the end.

use gomoku::eval::TerminalEvaluator;
use gomoku::search::{AllEmpty, Searcher, WIN_SCORE};
use gomoku::{AIEngine, Board, EngineConfig, GameStatus, Player, Pos, Stone};

/// Deeper than any tic-tac-toe game lasts.
const FULL_DEPTH: u32 = 9;

fn engine(stone: Stone) -> AIEngine {
    AIEngine::with_config(stone, EngineConfig::default().depth(FULL_DEPTH))
}

#[test]
fn test_self_play_is_a_draw() {
    let players = [engine(Stone::Black), engine(Stone::White)];
    let mut board = Board::tic_tac_toe();
    let mut turn = 0;

    while !board.status().is_over() {
        let engine = &players[turn % 2];
        let result = engine.next_move(&board).unwrap();
        assert_eq!(result.score, 0, "perfect play from a drawn position stays drawn:\n{board}");
        board = board.play(result.best_move, engine.stone()).unwrap();
        turn += 1;
    }

    assert_eq!(board.status(), GameStatus::Draw, "final board:\n{board}");
    assert_eq!(turn, 9);
}

/// Walk every reply the opponent could make; the engine answers each one.
fn assert_never_loses(board: &Board, engine: &AIEngine, to_move: Stone) {
    match board.status() {
        GameStatus::Won(winner) => {
            assert_eq!(winner, engine.stone(), "engine lost:\n{board}");
        }
        GameStatus::Draw => {}
        GameStatus::NotOver if to_move == engine.stone() => {
            let pos = engine.get_move(board).unwrap();
            let next = board.play(pos, to_move).unwrap();
            assert_never_loses(&next, engine, to_move.opponent());
        }
        GameStatus::NotOver => {
            for pos in board.empty_cells() {
                assert_never_loses(&board.update(to_move, pos), engine, to_move.opponent());
            }
        }
    }
}

#[test]
fn test_never_loses_moving_first() {
    assert_never_loses(&Board::tic_tac_toe(), &engine(Stone::Black), Stone::Black);
}

#[test]
fn test_never_loses_moving_second() {
    assert_never_loses(&Board::tic_tac_toe(), &engine(Stone::White), Stone::Black);
}

#[test]
fn test_takes_win_over_block() {
    // Both sides threaten; completing our own row beats blocking theirs.
    let board = Board::parse("XX./OO./X..", 3).unwrap();
    let result = engine(Stone::White).next_move(&board).unwrap();

    assert_eq!(result.best_move, Pos::new(1, 2));
    assert_eq!(result.score, WIN_SCORE);
}

#[test]
fn test_sees_fork_coming() {
    // X in opposite corners, O in the center: O must take an edge, a corner loses.
    let board = Board::parse("X../.O./..X", 3).unwrap();
    let searcher = Searcher::new(AllEmpty, TerminalEvaluator);

    let result = searcher.search(&board, Stone::White, FULL_DEPTH).unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.best_move, Some(Pos::new(0, 1)));

    let corner = board.update(Stone::White, Pos::new(0, 2));
    let reply = searcher.search(&corner, Stone::Black, FULL_DEPTH).unwrap();
    assert_eq!(reply.score, WIN_SCORE, "a corner lets X fork");
}
