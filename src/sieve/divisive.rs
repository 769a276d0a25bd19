//! Divisive strategies: primality by trial division, no seed primes needed.
//!
//! The sequential form is the naive baseline over `[min, max)`. The
//! parallel form assigns each worker a disjoint contiguous slice of
//! candidates; every worker records its verdicts in a private full-length
//! array and the arrays are folded with a logical AND, the same merge
//! contract as the functional strategy. Untouched positions stay true, so
//! only the worker that owns a candidate decides its fate.

use tracing::debug;

use super::merge;
use super::partition::partition;
use super::presence::PresenceArray;
use super::seed;
use crate::Result;
use crate::parallel::WorkerPool;

/// Trial division by every integer up to the floor of the square root.
pub fn is_prime_division(number: u64) -> bool {
    if number < 2 {
        return false;
    }
    let limit = seed::isqrt(number);
    let mut divider = 2;
    while divider <= limit {
        if number % divider == 0 {
            return false;
        }
        divider += 1;
    }
    true
}

/// Sequential baseline over `[min, max)`, upper bound exclusive.
pub fn find_primes_sequential(min: u64, max: u64) -> Vec<u64> {
    (min..max).filter(|&n| is_prime_division(n)).collect()
}

/// Embarrassingly parallel trial division over `[min, max]`.
pub fn find_primes(min: u64, max: u64, workers: usize) -> Result<Vec<u64>> {
    let plan = partition(min, max, workers)?;
    let len = (max - min + 1) as usize;
    debug!(workers, "divisive setup complete, spawning slice workers");

    let pool = WorkerPool::new(workers);
    let arrays = pool.run(plan, |_, range| {
        let mut presence = PresenceArray::new(min, len);
        for candidate in range.lo..=range.hi {
            presence.set(candidate, is_prime_division(candidate));
        }
        presence.into_bits()
    })?;

    let combined = PresenceArray::from_bits(min, merge::and_reduce(arrays));
    Ok(combined.collect_primes())
}
