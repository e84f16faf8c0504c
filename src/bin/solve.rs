use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use linechess::board::{GameState, MAX_SQUARES};
use linechess::search::encoder::PositionEncoder;
use linechess::search::StateEncoder;
use linechess::{LineSolver, SolveStats, SolverConfig};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "linechess-solve", version, about = "Solve the standard line chess setup for a range of board lengths")]
struct Args {
    /// Smallest board length
    #[arg(long, default_value_t = 6)]
    min_length: usize,

    /// Largest board length
    #[arg(long, default_value_t = 10)]
    max_length: usize,

    /// Emit one JSON object per board length
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Skip per-index subtree bookkeeping (no nodes-saved statistic)
    #[arg(long, default_value_t = false)]
    no_savings: bool,
}

#[derive(serde::Serialize)]
struct Report {
    length: usize,
    value: i8,
    table_bytes: usize,
    entries_filled: usize,
    elapsed_ms: u128,
    stats: SolveStats,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.max_length > MAX_SQUARES { anyhow::bail!("max length {} exceeds {}", args.max_length, MAX_SQUARES); }

    for length in args.min_length..=args.max_length {
        let state = GameState::standard(length).with_context(|| format!("no standard layout for length {length}"))?;
        let encoder = PositionEncoder::for_board(state.board());
        let config = SolverConfig { retain_tree: false, record_savings: !args.no_savings };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg} [{elapsed}]").context("spinner template")?);
        spinner.set_message(format!("solving length {length} ({} table entries)", encoder.capacity()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let mut solver = LineSolver::with_config(encoder, config);
        let t0 = Instant::now();
        let value = solver.evaluate(&state);
        let elapsed = t0.elapsed();
        spinner.finish_and_clear();

        let report = Report {
            length,
            value: value.score(),
            table_bytes: solver.table().byte_len(),
            entries_filled: solver.table().filled(),
            elapsed_ms: elapsed.as_millis(),
            stats: *solver.stats(),
        };
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!(
                "length={} value={} nodes={} highest_depth={} cache_hits={} nodes_saved={} table_bytes={} elapsed={:.3}s",
                report.length, report.value, report.stats.nodes, report.stats.highest_depth, report.stats.cache_hits,
                report.stats.nodes_saved, report.table_bytes, elapsed.as_secs_f64()
            );
        }
    }
    Ok(())
}
