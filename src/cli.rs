//! CLI argument processing module
//!
//! Defines the command-line surface and validates arguments early, before
//! any file is touched.

use anyhow::Result;
use clap::Parser;

use crate::analyzer::Simulation;

#[derive(Parser, Debug)]
#[command(name = "logsweep")]
#[command(about = "A concurrent batch log file analyzer with JSON reporting")]
#[command(
    long_about = "A concurrent batch log file analyzer with JSON reporting\n\nReads a JSON configuration file naming the log files to analyze, processes\nthem concurrently, and prints a per-file report. Per-file failures are\ncaptured in the report instead of aborting the batch."
)]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to the JSON configuration file",
        help_heading = "Input Options"
    )]
    pub config: String,

    #[arg(
        short = 'o',
        long = "output",
        help = "Path to export the analysis report to JSON",
        help_heading = "Output Options"
    )]
    pub output: Option<String>,

    #[arg(
        long = "seed",
        help = "Seed for the simulated latency and failure injection",
        help_heading = "Simulation Options"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "fail-rate",
        default_value_t = 0.1,
        help = "Probability of an injected parsing failure per file (0.0 to 1.0)",
        help_heading = "Simulation Options"
    )]
    pub fail_rate: f64,

    #[arg(
        long = "no-delay",
        help = "Skip the simulated processing delay",
        help_heading = "Simulation Options"
    )]
    pub no_delay: bool,
}

impl Cli {
    /// Build the analyzer's randomness capability from the simulation flags.
    pub fn simulation(&self) -> Simulation {
        let mut sim = match self.seed {
            Some(seed) => Simulation::seeded(seed),
            None => Simulation::new(),
        };
        sim = sim.with_fail_rate(self.fail_rate);
        if self.no_delay {
            sim = sim.without_delay();
        }
        sim
    }
}

/// Validate CLI arguments for early error detection
pub fn validate_cli_args(cli: &Cli) -> Result<()> {
    if !(0.0..=1.0).contains(&cli.fail_rate) {
        return Err(anyhow::anyhow!(
            "--fail-rate must be between 0.0 and 1.0 (got {})",
            cli.fail_rate
        ));
    }

    Ok(())
}
