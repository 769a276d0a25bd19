//! Functional strategy: parallelize by splitting the seed prime set.
//!
//! Each worker owns a full-length presence array over the whole range and
//! strikes only proper multiples of its assigned seeds, so its array
//! reflects the composites contributed by that seed subset and nothing
//! else. The arrays are then folded together with a logical AND. The cost
//! is one full-length allocation per worker; the payoff is that no two
//! workers ever write to the same memory.

use tracing::debug;

use super::merge;
use super::presence::PresenceArray;
use super::seed;
use crate::Result;
use crate::parallel::WorkerPool;

pub fn find_primes(min: u64, max: u64, workers: usize) -> Result<Vec<u64>> {
    let seeds = seed::sieve_additive(seed::isqrt(max));
    let assignments = stripe(&seeds, workers);
    let len = (max - min + 1) as usize;
    debug!(
        seeds = seeds.len(),
        workers,
        "functional setup complete, striping seeds across workers"
    );

    let pool = WorkerPool::new(workers);
    let arrays = pool.run(assignments, |_, worker_seeds: Vec<u64>| {
        let mut presence = PresenceArray::new(min, len);
        for prime in worker_seeds {
            presence.strike_proper_multiples(prime);
        }
        presence.into_bits()
    })?;

    let combined = PresenceArray::from_bits(min, merge::and_reduce(arrays));
    Ok(combined.collect_primes())
}

/// Deterministic round-robin assignment of seed primes to workers.
///
/// Workers left without seeds produce all-true arrays, which are identity
/// elements of the AND fold.
fn stripe(seeds: &[u64], workers: usize) -> Vec<Vec<u64>> {
    let mut assignments = vec![Vec::new(); workers];
    for (index, &prime) in seeds.iter().enumerate() {
        assignments[index % workers].push(prime);
    }
    assignments
}
