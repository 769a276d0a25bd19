use std::time::Instant;

use tracing::debug;

use super::types::{SieveError, Strategy};
use super::{divisive, domain, functional, seed};
use crate::Result;

/// Largest accepted upper bound. Multiple striking steps at most one prime
/// past `max`, so `max` must leave headroom in `u64`, and presence arrays
/// index by `usize`.
const MAX_UPPER_BOUND: u64 = u64::MAX / 2;

/// A validated prime search over `[min, max]` with a fixed worker count.
///
/// Construction performs every input check; by the time a strategy runs, no
/// worker can fail. Boundary conventions differ per strategy and are
/// preserved from the reference behavior: the additive baseline covers
/// `[2, max]`, the sequential divisive baseline `[min, max)`, and the three
/// parallel strategies `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct Sieve {
    min: u64,
    max: u64,
    workers: usize,
}

impl Sieve {
    /// Validate the interval and worker count.
    ///
    /// All failures are deterministic input-validation errors detected here,
    /// before any worker is spawned; no strategy ever starts partial
    /// parallel work on invalid input.
    pub fn new(min: u64, max: u64, workers: usize) -> std::result::Result<Self, SieveError> {
        if min < 2 || max < min {
            return Err(SieveError::InvalidRange { min, max });
        }
        if max > MAX_UPPER_BOUND || usize::try_from(max).is_err() {
            return Err(SieveError::ArithmeticOverflow { max });
        }
        let span = max - min + 1;
        if workers == 0 || span < workers as u64 {
            return Err(SieveError::InvalidPartition { span, workers });
        }
        Ok(Self { min, max, workers })
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run the selected strategy to completion and return the ordered primes.
    pub fn compute(&self, strategy: Strategy) -> Result<Vec<u64>> {
        let start = Instant::now();
        let primes = match strategy {
            Strategy::SequentialAdditive => seed::sieve_additive(self.max),
            Strategy::SequentialDivisive => {
                divisive::find_primes_sequential(self.min, self.max)
            }
            Strategy::Domain => domain::find_primes(self.min, self.max, self.workers)?,
            Strategy::Functional => functional::find_primes(self.min, self.max, self.workers)?,
            Strategy::Divisive => divisive::find_primes(self.min, self.max, self.workers)?,
        };
        debug!(
            %strategy,
            primes = primes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "computation finished"
        );
        Ok(primes)
    }
}

/// Compute all primes in the interval with the given strategy.
///
/// Convenience entry point over [`Sieve::new`] + [`Sieve::compute`].
pub fn compute(min: u64, max: u64, workers: usize, strategy: Strategy) -> Result<Vec<u64>> {
    let sieve = Sieve::new(min, max, workers)?;
    sieve.compute(strategy)
}
