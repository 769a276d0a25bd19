//! # Parsieve - Parallel Prime Sieve
//!
//! Computes all primes in an integer interval using five competing
//! strategies: two sequential baselines and three parallel decompositions
//! (by numeric sub-range, by seed prime, and by trial-division slice).
//!
//! Every parallel strategy follows the same three-phase pipeline:
//! a sequential setup (validation, seed sieve, partitioning), a parallel
//! sieve phase in which each worker mutates only memory it owns, and a
//! merge phase that reads every worker's output after all of them have
//! finished. No locks or atomics are involved anywhere; correctness comes
//! from partitioned ownership.
//!
//! ## Quick Start
//!
//! ```
//! use parsieve::sieve::{self, Strategy};
//!
//! let primes = sieve::compute(2, 30, 4, Strategy::Domain).unwrap();
//! assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! ```

pub mod cli;
pub mod parallel;
pub mod sieve;

pub use sieve::{Sieve, SieveError, Strategy};

/// Result type alias for parsieve operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
