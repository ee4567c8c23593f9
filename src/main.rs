//! Gomoku minimax CLI
//!
//! - `play`: engine-vs-engine self-play on a configurable board
//! - `best`: the engine's move for a position given as text

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use gomoku::board::{DEFAULT_SIZE, DEFAULT_WIN_LENGTH};
use gomoku::rules::find_line;
use gomoku::{AIEngine, Board, EngineConfig, GameStatus, Result, Stone};

#[derive(Parser)]
#[command(name = "gomoku")]
#[command(version, about = "Fixed-depth minimax for k-in-a-row games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the engine play both sides until the game ends
    Play(PlayArgs),

    /// Print the engine's move for a given position
    Best(BestArgs),
}

/// Search knobs shared by both commands
#[derive(Args)]
struct SearchArgs {
    /// Plies to look ahead
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Only consider cells this close to an existing stone
    #[arg(long, default_value_t = 1)]
    radius: u8,

    /// Search root moves on all cores
    #[arg(long)]
    parallel: bool,
}

impl SearchArgs {
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
            .depth(self.depth)
            .radius(self.radius)
            .parallel(self.parallel)
    }
}

#[derive(Args)]
struct PlayArgs {
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    rows: usize,

    #[arg(long, default_value_t = DEFAULT_SIZE)]
    cols: usize,

    /// Stones in a row needed to win
    #[arg(long, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,

    /// Stop after this many moves even if the game is still running
    #[arg(long)]
    max_moves: Option<usize>,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args)]
struct BestArgs {
    /// Rows of `X`, `O` and `.` separated by newlines or `/`
    #[arg(long)]
    board: String,

    /// Side to move
    #[arg(long, value_enum)]
    to_move: Side,

    /// Stones in a row needed to win [default: 5, or the longer side of a smaller board]
    #[arg(long)]
    win_length: Option<usize>,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Stone {
        match side {
            Side::X => Stone::Black,
            Side::O => Stone::White,
        }
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let mut board = Board::with_size(args.rows, args.cols, args.win_length)?;
    let config = args.search.config();
    let engines = [
        AIEngine::with_config(Stone::Black, config),
        AIEngine::with_config(Stone::White, config),
    ];
    let limit = args.max_moves.unwrap_or(usize::MAX);

    let mut moves = 0;
    while !board.status().is_over() && moves < limit {
        let engine = &engines[moves % 2];
        let result = engine.next_move(&board)?;
        board = board.play(result.best_move, engine.stone())?;
        moves += 1;
        println!("{:>3}. {} {}", moves, engine.stone(), result.best_move);
    }

    println!();
    print!("{board}");
    match board.status() {
        GameStatus::Won(stone) => {
            println!("{stone} wins after {moves} moves");
            if let Some(line) = find_line(&board, stone) {
                let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
                println!("Winning line: {}", cells.join(" "));
            }
        }
        GameStatus::Draw => println!("Draw after {moves} moves"),
        GameStatus::NotOver => println!("Stopped after {moves} moves"),
    }
    Ok(())
}

/// Parse a board given on the command line. Without an explicit win length
/// the default is shortened to fit the board.
fn parse_board(text: &str, win_length: Option<usize>) -> Result<Board> {
    match win_length {
        Some(win_length) => Board::parse(text, win_length),
        None => {
            let shape = Board::parse(text, 1)?;
            let fitted = DEFAULT_WIN_LENGTH.min(shape.rows().max(shape.cols()));
            Board::parse(text, fitted)
        }
    }
}

fn best(args: BestArgs) -> Result<()> {
    let board = parse_board(&args.board, args.win_length)?;
    let engine = AIEngine::with_config(args.to_move.into(), args.search.config());

    let result = engine.next_move(&board)?;
    println!(
        "{} plays {} (score {}, {} nodes, {}ms)",
        engine.stone(),
        result.best_move,
        result.score,
        result.nodes,
        result.time_ms
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("gomoku {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Best(args) => best(args),
    }
}
