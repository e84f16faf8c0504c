use anyhow::{Context, Result};
use clap::Parser;
use linechess::board::{Board, Color, GameState, STANDARD_SQUARES};
use linechess::console::Console;
use linechess::search::encoder::PositionEncoder;
use linechess::{LineSolver, SolverConfig};
use std::io;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve one-dimensional chess and play it with solved evaluations", long_about = None)]
struct Args {
    /// Board length for the standard layout
    #[arg(long, default_value_t = STANDARD_SQUARES)]
    length: usize,

    /// Custom layout, e.g. "KNR..rnk" (overrides --length)
    #[arg(long)]
    board: Option<String>,

    /// Side to move in the starting position: 'w' or 'b'
    #[arg(long, default_value = "w")]
    to_move: String,

    /// Let the solver play this side: 'w' or 'b'
    #[arg(long)]
    engine: Option<String>,

    /// Seed for choosing among equally good engine moves
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the solved value and statistics, then exit
    #[arg(long)]
    solve_only: bool,

    /// Discard the search tree after solving
    #[arg(long)]
    drop_tree: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board = match &args.board {
        Some(layout) => layout.parse::<Board>().with_context(|| format!("invalid board layout '{layout}'"))?,
        None => Board::standard(args.length).context("invalid board length")?,
    };
    let to_move: Color = args.to_move.parse().context("invalid --to-move")?;
    let state = GameState::new(board, to_move).context("invalid starting position")?;

    let config = SolverConfig { retain_tree: !args.drop_tree, ..SolverConfig::default() };
    let mut solver = LineSolver::with_config(PositionEncoder::for_board(state.board()), config);

    println!("Evaluating whole game...");
    let t0 = Instant::now();
    let value = solver.evaluate(&state);
    let stats = solver.stats();
    println!("Evaluation done!");
    println!("----------------");
    println!("Value: {value}");
    println!("Total node number: {}", stats.nodes);
    println!("Highest depth: {}", stats.highest_depth);
    println!("Cache hits: {}", stats.cache_hits);
    println!("Saved node evaluations through caching: {}", stats.nodes_saved);
    println!("Elapsed: {:.3}s", t0.elapsed().as_secs_f64());

    if args.solve_only { return Ok(()); }

    let mut console = Console::new(state, &solver);
    if let Some(side) = &args.engine {
        let side: Color = side.parse().context("invalid --engine")?;
        console = console.with_engine(side, args.seed);
    }
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console.run_loop(stdin.lock(), &mut stdout)?;
    Ok(())
}
