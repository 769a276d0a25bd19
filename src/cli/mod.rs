//! Command-line interface for parsieve
//!
//! Thin front end over the sieve library: argument parsing with clap,
//! strategy selection, and result rendering. Everything here is
//! presentation; interval validation lives in the library and surfaces as
//! typed errors.

use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::sieve::{self, Strategy};

mod output;

pub use output::ComputeReport;

/// Parsieve - parallel prime sieve with competing decomposition strategies
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Lower bound of the search interval (inclusive, must be >= 2)
    #[arg(value_name = "MIN")]
    pub min: u64,

    /// Upper bound of the search interval
    #[arg(value_name = "MAX")]
    pub max: u64,

    /// Calculation strategy
    #[arg(short, long, value_enum, default_value = "domain")]
    pub strategy: StrategyArg,

    /// How much of the result to display
    #[arg(short, long, value_enum, default_value = "count")]
    pub display: DisplayMode,

    /// Worker thread count (defaults to available CPU cores)
    #[arg(short, long, env = "PARSIEVE_THREADS")]
    pub threads: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

/// CLI spelling of the library strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Sequential additive sieve over [2, max]
    SeqAdditive,
    /// Sequential trial division over [min, max)
    SeqDivisive,
    /// Parallel by numeric sub-range
    Domain,
    /// Parallel by seed prime
    Functional,
    /// Parallel trial division
    Divisive,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::SeqAdditive => Strategy::SequentialAdditive,
            StrategyArg::SeqDivisive => Strategy::SequentialDivisive,
            StrategyArg::Domain => Strategy::Domain,
            StrategyArg::Functional => Strategy::Functional,
            StrategyArg::Divisive => Strategy::Divisive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DisplayMode {
    /// Print nothing beyond the completion line
    Silent,
    /// Print how many primes were found
    Count,
    /// Print every prime, ten per row
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let strategy: Strategy = self.strategy.into();
        let workers = self.threads.unwrap_or_else(num_cpus::get);

        let start = Instant::now();
        let primes = sieve::compute(self.min, self.max, workers, strategy)?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let report = ComputeReport::new(
            strategy,
            self.min,
            self.max,
            workers,
            elapsed_ms,
            primes,
            self.display,
        );

        match self.format {
            Format::Text => report.print_text(self.display),
            Format::Json => report.print_json()?,
        }

        Ok(())
    }
}
