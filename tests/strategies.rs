//! Cross-strategy properties over the library API
//!
//! The five strategies use different boundary conventions: the additive
//! baseline covers [2, max], the sequential divisive baseline [min, max),
//! and the three parallel strategies [min, max]. The helpers below adjust
//! for that before comparing.

use parsieve::sieve::{self, SieveError, Strategy, SubRange, compute};

/// Independent primality check, deliberately written without any sieve code.
fn verified_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

fn assert_agreement(min: u64, max: u64, workers: usize) {
    let domain = compute(min, max, workers, Strategy::Domain).unwrap();
    let functional = compute(min, max, workers, Strategy::Functional).unwrap();
    let divisive = compute(min, max, workers, Strategy::Divisive).unwrap();
    assert_eq!(domain, functional, "domain vs functional on [{min}, {max}]");
    assert_eq!(domain, divisive, "domain vs divisive on [{min}, {max}]");

    // Sequential divisive excludes max
    let seq_divisive = compute(min, max, workers, Strategy::SequentialDivisive).unwrap();
    let domain_below_max: Vec<u64> = domain.iter().copied().filter(|&p| p < max).collect();
    assert_eq!(seq_divisive, domain_below_max);

    // Sequential additive ignores min and includes max
    let seq_additive = compute(min, max, workers, Strategy::SequentialAdditive).unwrap();
    let additive_in_range: Vec<u64> =
        seq_additive.iter().copied().filter(|&p| p >= min).collect();
    assert_eq!(additive_in_range, domain);
}

#[test]
fn strategies_agree_on_a_small_range() {
    assert_agreement(2, 50, 4);
}

#[test]
fn strategies_agree_on_a_range_away_from_two() {
    assert_agreement(100, 200, 4);
}

#[test]
fn strategies_agree_on_a_single_candidate() {
    assert_agreement(2, 2, 1);
}

#[test]
fn strategies_agree_when_the_span_barely_fits_the_workers() {
    assert_agreement(2, 9, 8);
}

#[test]
fn ground_truth_up_to_thirty() {
    assert_eq!(
        compute(2, 30, 4, Strategy::Domain).unwrap(),
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
    );
}

#[test]
fn partition_plans_cover_every_candidate_exactly_once() {
    for workers in [1usize, 2, 3, 5, 8] {
        let plan = sieve::partition(2, 1000, workers).unwrap();
        assert_eq!(plan.len(), workers);
        let total: u64 = plan.iter().map(SubRange::len).sum();
        assert_eq!(total, 999);
        for pair in plan.windows(2) {
            assert_eq!(pair[0].hi + 1, pair[1].lo);
        }
        assert_eq!(plan[0].lo, 2);
        assert_eq!(plan[workers - 1].hi, 1000);
    }
}

#[test]
fn single_worker_result_matches_many_workers() {
    for strategy in [Strategy::Domain, Strategy::Functional, Strategy::Divisive] {
        let alone = compute(2, 500, 1, strategy).unwrap();
        let crowd = compute(2, 500, 6, strategy).unwrap();
        assert_eq!(alone, crowd);
    }
}

#[test]
fn seed_primes_appear_exactly_once() {
    let primes = compute(2, 10_000, 8, Strategy::Domain).unwrap();
    // Strictly increasing rules out duplicates anywhere, seeds included
    assert!(primes.windows(2).all(|w| w[0] < w[1]));
    for seed in sieve::sieve_additive(sieve::isqrt(10_000)) {
        let occurrences = primes.iter().filter(|&&p| p == seed).count();
        assert_eq!(occurrences, 1, "seed {seed} must appear exactly once");
    }
}

#[test]
fn no_composite_leaks_and_no_prime_is_missing() {
    let primes = compute(2, 10_000, 8, Strategy::Domain).unwrap();
    for &p in &primes {
        assert!(verified_prime(p), "{p} is not prime");
    }
    // Trusted sequential sieve over the same inclusive range
    assert_eq!(primes, sieve::sieve_additive(10_000));

    let functional = compute(2, 10_000, 8, Strategy::Functional).unwrap();
    let divisive = compute(2, 10_000, 8, Strategy::Divisive).unwrap();
    assert_eq!(primes, functional);
    assert_eq!(primes, divisive);
}

#[test]
fn setup_failures_carry_their_typed_kind() {
    let err = compute(10, 5, 4, Strategy::Domain).unwrap_err();
    assert_eq!(
        err.downcast_ref::<SieveError>(),
        Some(&SieveError::InvalidRange { min: 10, max: 5 })
    );

    let err = compute(2, 5, 8, Strategy::Domain).unwrap_err();
    assert_eq!(
        err.downcast_ref::<SieveError>(),
        Some(&SieveError::InvalidPartition { span: 4, workers: 8 })
    );
}
