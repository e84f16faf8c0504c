use anyhow::{Context, Result};
use linechess::board::{Board, Color, GameState, STANDARD_SQUARES};
use linechess::perft::{divide, perft};

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the line chess rules engine")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board layout such as "KNR..rnk", or "startpos"
    #[arg(value_name = "BOARD", default_value = "startpos")]
    board: String,
    /// Board length used with "startpos"
    #[arg(long, default_value_t = STANDARD_SQUARES)]
    length: usize,
    /// Side to move: 'w' or 'b'
    #[arg(long, default_value = "w")]
    to_move: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print per-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let board = if args.board == "startpos" {
        Board::standard(args.length).context("invalid board length")?
    } else {
        args.board.parse::<Board>().with_context(|| format!("invalid board '{}'", args.board))?
    };
    let to_move: Color = args.to_move.parse().context("invalid --to-move")?;
    let base = GameState::new(board, to_move).context("invalid position")?;
    let depth = args.depth;

    if args.divide {
        for (mv, n) in divide(&base, depth) { println!("{mv}: {n}"); }
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build().context("thread pool")?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth <= 1 || base.is_game_over() {
            perft(&base, depth)
        } else {
            base.moves().par_iter().map(|&mv| perft(&base.after(mv), depth - 1)).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
