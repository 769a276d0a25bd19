use rayon::prelude::*;

/// Concatenate the globally-applicable seed primes with each sub-range's
/// local prime list, in ascending partition order.
///
/// Sub-range outputs are already sorted and the partition is contiguous and
/// increasing, so plain concatenation preserves global order with no sort.
/// Seed primes were struck inside their sub-ranges, so re-adding them here
/// is the single place they enter the result.
pub fn merge_lists(seeds: &[u64], min: u64, locals: Vec<Vec<u64>>) -> Vec<u64> {
    let mut primes: Vec<u64> = seeds.iter().copied().filter(|&p| p >= min).collect();
    for local in locals {
        primes.extend(local);
    }
    primes
}

/// Fold per-worker presence arrays into one: a position survives only if it
/// survives in every worker's array.
///
/// Each position's fold is independent of every other's, so the reduction
/// runs in parallel over positions; this is a read-only fan-in, the one safe
/// cross-worker access pattern in the design. If the arrays differ in
/// length, the tail beyond the shortest is copied verbatim from the array
/// that extends furthest.
pub fn and_reduce(arrays: Vec<Vec<bool>>) -> Vec<bool> {
    let Some(shortest) = arrays.iter().map(Vec::len).min() else {
        return Vec::new();
    };

    let mut combined: Vec<bool> = (0..shortest)
        .into_par_iter()
        .map(|i| arrays.iter().all(|array| array[i]))
        .collect();

    if let Some(longest) = arrays.iter().max_by_key(|array| array.len()) {
        combined.extend_from_slice(&longest[shortest..]);
    }

    combined
}
