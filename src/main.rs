//! christofides-tsp - Command Line Interface
//!
//! Approximate Euclidean TSP tours with a Christofides-style heuristic.

use christofides_tsp::heuristics::{
    ChristofidesSolver, NearestNeighborHeuristic, SolverConfig, TourHeuristic,
};
use christofides_tsp::instance::Instance;
use christofides_tsp::solution::Solution;
use christofides_tsp::Result;
use clap::{Parser, Subcommand};

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "christofides-tsp")]
#[command(version = "1.0")]
#[command(about = "Approximate Euclidean TSP tours (MST + greedy matching + Eulerian shortcut)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an instance and write the tour
    Solve {
        /// Input file, one `id x y` record per line
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (length, then one id per line); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Random seed for the odd-vertex shuffle
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of runs with consecutive seeds; the shortest tour is kept
        #[arg(short, long, default_value = "1")]
        runs: usize,

        /// Also dump the full solution as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze an instance
    Analyze {
        /// Input file, one `id x y` record per line
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve { input, output, seed, runs, json, verbose } => {
            let config = SolverConfig { seed, runs };
            solve_instance(&input, output.as_deref(), config, json.as_deref(), verbose)
        }
        Commands::Analyze { input } => analyze_instance(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn solve_instance(
    path: &Path,
    output: Option<&Path>,
    config: SolverConfig,
    json: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let instance = Instance::from_file(path)?;

    if verbose {
        eprintln!("{}", instance.statistics());
    }

    let start = Instant::now();
    let solver = ChristofidesSolver::with_config(config);
    let solution = solver.solve(&instance)?;
    let elapsed = start.elapsed();

    eprintln!("Algorithm: {}", solution.algorithm);
    eprintln!("Length: {}", solution.length);
    eprintln!("Seed: {}", solution.seed);
    eprintln!("Time: {:.4}s", elapsed.as_secs_f64());
    if verbose {
        eprintln!("{}", solution);
    }

    match output {
        Some(out_path) => {
            solution.write_to(BufWriter::new(File::create(out_path)?))?;
            eprintln!("Tour saved to {:?}", out_path);
        }
        None => solution.write_to(std::io::stdout().lock())?,
    }

    if let Some(json_path) = json {
        write_json(&solution, json_path)?;
        eprintln!("Solution saved to {:?}", json_path);
    }

    Ok(())
}

fn write_json(solution: &Solution, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(solution)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn analyze_instance(path: &Path) -> Result<()> {
    let instance = Instance::from_file(path)?;

    println!("========== Instance Analysis ==========\n");
    println!("{}", instance.statistics());

    let christofides = ChristofidesSolver::new().solve(&instance)?;
    let nn = NearestNeighborHeuristic::new().solve(&instance)?;

    println!("Quick Solution Estimates:");
    for sol in [&christofides, &nn] {
        println!("  {}: {} ({:.4}s)", sol.algorithm, sol.length, sol.computation_time);
    }

    Ok(())
}
