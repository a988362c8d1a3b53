use anyhow::{Context, Result};
use clap::Parser;
use perc::PercolationStats;
use rand::{rngs::StdRng, SeedableRng};

use std::io::{self, Write};

/// Estimates the site percolation threshold of an n-by-n grid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Grid dimension.
    size: usize,

    /// Number of independent trials.
    trials: usize,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, default_value_t = 1)]
    log_level: usize,
}

fn report(stats: &PercolationStats, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "mean                    = {}", stats.mean())?;
    writeln!(out, "stddev                  = {}", stats.stddev())?;
    writeln!(
        out,
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    )
}

fn run(args: &Arguments, out: &mut impl Write) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stats = PercolationStats::run(args.size, args.trials, &mut rng)
        .context("failed to run percolation experiment")?;
    if stats.trials() == 1 {
        log::warn!("a single trial gives no standard deviation");
    }

    report(&stats, out).context("failed to write report")
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    stderrlog::new()
        .verbosity(args.log_level)
        .module(module_path!())
        .module("perc")
        .init()
        .context("failed to initialize logger")?;

    run(&args, &mut io::stdout().lock())
}

////////////////////////////////////////////////////////////////////////////////
