//! Result rendering for the CLI
//!
//! Text output follows the classic display modes (silent, count, full
//! listing with ten primes per row); JSON output serializes the whole
//! report for downstream tooling.

use anyhow::Result;
use console::style;
use serde::Serialize;

use super::DisplayMode;
use crate::sieve::Strategy;

const PRIMES_PER_ROW: usize = 10;

/// One finished computation, ready to render.
#[derive(Debug, Serialize)]
pub struct ComputeReport {
    pub strategy: String,
    pub min: u64,
    pub max: u64,
    pub workers: usize,
    pub count: usize,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primes: Option<Vec<u64>>,
}

impl ComputeReport {
    pub fn new(
        strategy: Strategy,
        min: u64,
        max: u64,
        workers: usize,
        elapsed_ms: u64,
        primes: Vec<u64>,
        display: DisplayMode,
    ) -> Self {
        Self {
            strategy: strategy.to_string(),
            min,
            max,
            workers,
            count: primes.len(),
            elapsed_ms,
            // The full listing is large; only carry it when it will be shown
            primes: (display == DisplayMode::List).then_some(primes),
        }
    }

    pub fn print_text(&self, display: DisplayMode) {
        match display {
            DisplayMode::Silent => {}
            DisplayMode::Count => {
                println!("{} Found {} primes", style("✔").green(), self.count);
            }
            DisplayMode::List => {
                println!("{} Found {} primes:", style("✔").green(), self.count);
                if let Some(primes) = &self.primes {
                    print_grid(primes);
                }
            }
        }
        println!(
            "{} {} strategy finished in {}ms ({} workers)",
            style("ℹ").blue(),
            self.strategy,
            self.elapsed_ms,
            self.workers
        );
    }

    pub fn print_json(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

fn print_grid(primes: &[u64]) {
    for row in primes.chunks(PRIMES_PER_ROW) {
        let line: Vec<String> = row.iter().map(u64::to_string).collect();
        println!("{}", line.join("\t"));
    }
}
