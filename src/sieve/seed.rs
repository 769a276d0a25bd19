use super::presence::PresenceArray;

/// Sequential Sieve of Eratosthenes over the candidates `[2, limit]`.
///
/// This is both the sequential-additive baseline and the seed generator for
/// the parallel strategies: called with `isqrt(max)` it yields exactly the
/// primes needed to strike every composite in `[min, max]` without trial
/// division. It deliberately takes its own bound and always starts from 2.
pub fn sieve_additive(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let mut presence = PresenceArray::new(2, (limit - 1) as usize);
    for divider in 2..=limit {
        if !presence.is_candidate(divider) {
            continue;
        }
        presence.strike_proper_multiples(divider);
    }

    presence.collect_primes()
}

/// Floor of the integer square root.
///
/// Seeded from the float square root, then corrected, since `f64` rounding
/// can land one step off for large inputs.
pub fn isqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root > 0 && root.checked_mul(root).is_none_or(|sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}
