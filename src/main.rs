//! # geo-aco CLI
//!
//! Reads points from a text file, runs the ant colony optimizer several
//! times, and writes the shortest tour found.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use geo_aco::aco::AcoConfig;
use geo_aco::{driver, io};
use log::{error, info};

/// Command-line interface for geo-aco
#[derive(Parser)]
#[command(name = "geo-aco")]
#[command(about = "Approximates the shortest closed tour over geographic points")]
#[command(version)]
struct Cli {
    /// Input file with one `latitude,longitude` record per line
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Output file for the best tour
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// JSON file with solver parameters; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ants per iteration (default: number of points)
    #[arg(long)]
    ants: Option<usize>,

    /// Iterations per run (default: round(100 + 0.2 * ants))
    #[arg(long)]
    iterations: Option<usize>,

    /// Pheromone exponent
    #[arg(long)]
    alpha: Option<f64>,

    /// Heuristic exponent
    #[arg(long)]
    beta: Option<f64>,

    /// Evaporation rate in (0, 1)
    #[arg(long)]
    evaporation: Option<f64>,

    /// Deposit strength
    #[arg(long)]
    deposit: Option<f64>,

    /// Independent runs; the shortest is kept
    #[arg(long)]
    runs: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Line written above the result
    #[arg(long)]
    header: Option<String>,

    /// Write the result as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Loads the optional config file and applies flag overrides.
    fn solver_config(&self) -> Result<AcoConfig> {
        let mut config: AcoConfig = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open config {}", path.display()))?;
                serde_json::from_reader(file)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => AcoConfig::default(),
        };

        if self.ants.is_some() {
            config.ants = self.ants;
        }
        if self.iterations.is_some() {
            config.iterations = self.iterations;
        }
        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if let Some(beta) = self.beta {
            config.beta = beta;
        }
        if let Some(evaporation) = self.evaporation {
            config.evaporation = evaporation;
        }
        if let Some(deposit) = self.deposit {
            config.deposit = deposit;
        }
        if let Some(runs) = self.runs {
            config.runs = runs;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let config = cli.solver_config()?;

    let points = io::read_points(&cli.input)
        .with_context(|| format!("cannot read points from {}", cli.input.display()))?;
    info!(
        "loaded {} points from {}",
        points.len(),
        cli.input.display()
    );

    let outcome = driver::solve(&points, &config)?;
    let tour = &outcome.best.tour;
    info!("best length {:.3} (run {})", tour.length(), outcome.best_run + 1);

    let file = File::create(&cli.output)
        .with_context(|| format!("cannot create {}", cli.output.display()))?;
    let writer = BufWriter::new(file);
    if cli.json {
        io::write_json(writer, tour)?;
    } else {
        io::write_result(writer, tour, cli.header.as_deref())?;
    }
    info!("saved {}", cli.output.display());
    info!("time spent {:.3} sec", start.elapsed().as_secs_f64());
    Ok(())
}
