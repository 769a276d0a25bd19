//! Domain strategy: parallelize by splitting the numeric range.
//!
//! Each worker sieves one contiguous sub-range against the shared seed
//! primes in a private presence array. Seed primes that fall inside a
//! sub-range are struck locally and re-added exactly once by the merge,
//! so no seed is ever duplicated across sub-range boundaries.

use tracing::debug;

use super::merge;
use super::partition::partition;
use super::presence::PresenceArray;
use super::seed;
use super::types::SubRange;
use crate::Result;
use crate::parallel::WorkerPool;

pub fn find_primes(min: u64, max: u64, workers: usize) -> Result<Vec<u64>> {
    let plan = partition(min, max, workers)?;
    let seeds = seed::sieve_additive(seed::isqrt(max));
    debug!(
        seeds = seeds.len(),
        workers,
        "domain setup complete, spawning range workers"
    );

    let pool = WorkerPool::new(workers);
    let locals = pool.run(plan, |_, range| sieve_subrange(range, &seeds))?;

    Ok(merge::merge_lists(&seeds, min, locals))
}

/// Sieve one sub-range: strike every multiple of every seed prime, starting
/// at the smallest multiple at or above the lower bound.
fn sieve_subrange(range: SubRange, seeds: &[u64]) -> Vec<u64> {
    let mut presence = PresenceArray::new(range.lo, range.len() as usize);
    for &prime in seeds {
        presence.strike_multiples(prime);
    }
    presence.collect_primes()
}
