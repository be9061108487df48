//! Command-line driver: solve an instance file or generate a random one.
//!
//! Set `RUST_LOG=debug` to trace every chosen median and accepted swap.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_pmedian::instance::generator::random_symmetric;
use u_pmedian::instance::io::{read_instance, write_instance};
use u_pmedian::solver::{PMedianConfig, PMedianSolver};

#[derive(Parser)]
#[command(name = "pmedian", about = "p-median solver: randomized greedy + swap local search")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve an instance file
    Solve {
        /// Instance file: n, p, then n rows of n distances
        file: PathBuf,

        /// Restricted candidate list size
        #[arg(short, long, default_value_t = 3)]
        k_rcl: usize,

        /// Random seed (fresh entropy when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Maximum accepted swaps, 0 for no limit
        #[arg(short, long, default_value_t = 0)]
        max_swaps: usize,
    },

    /// Write a random symmetric instance
    Generate {
        /// Output file
        file: PathBuf,

        /// Number of points
        #[arg(short, long)]
        n: usize,

        /// Number of medians
        #[arg(short, long)]
        p: usize,

        /// Largest off-diagonal distance
        #[arg(short = 'd', long, default_value_t = 100)]
        max_dist: u32,

        /// Random seed (fresh entropy when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Solve {
            file,
            k_rcl,
            seed,
            max_swaps,
        } => solve(file, k_rcl, seed, max_swaps),
        Command::Generate {
            file,
            n,
            p,
            max_dist,
            seed,
        } => generate(file, n, p, max_dist, seed),
    }
}

fn solve(file: PathBuf, k_rcl: usize, seed: Option<u64>, max_swaps: usize) -> Result<()> {
    let instance = read_instance(&file)?;
    println!("Instance: {}", file.display());
    println!("Data: n = {}, p = {}", instance.n(), instance.p());

    let mut config = PMedianConfig::default()
        .with_k_rcl(k_rcl)
        .with_max_swaps(max_swaps);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let result = PMedianSolver::run(&instance, &config)?;

    let mut medians = result.solution.clone();
    medians.sort_unstable();
    let medians: Vec<String> = medians.iter().map(|m| m.to_string()).collect();

    println!();
    println!("=== FINAL RESULT ===");
    println!(
        "Initial cost: {:.6} -> Final cost: {:.6}",
        result.constructive_cost, result.cost
    );
    println!("Improvement: {:.6}", result.improvement());
    println!("Swaps: {} ({:?})", result.swaps, result.state);
    println!("Final medians: [{}]", medians.join(", "));
    println!();
    println!("=== EXECUTION TIME ===");
    println!(
        "Constructive (rgreedy): {:.6} seconds",
        result.construct_time.as_secs_f64()
    );
    println!(
        "Local search (swap):    {:.6} seconds",
        result.search_time.as_secs_f64()
    );
    println!(
        "Total:                  {:.6} seconds",
        result.total_time().as_secs_f64()
    );
    Ok(())
}

fn generate(file: PathBuf, n: usize, p: usize, max_dist: u32, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };
    let instance = random_symmetric(n, p, max_dist, &mut rng)?;
    let out = File::create(&file).with_context(|| format!("cannot create {}", file.display()))?;
    let mut out = BufWriter::new(out);
    write_instance(&instance, &mut out)?;
    out.flush()?;
    println!("Instance n = {n}, p = {p} written to {}", file.display());
    Ok(())
}
