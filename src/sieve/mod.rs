//! Prime sieve strategies and their shared building blocks
//!
//! Every strategy is a strict three-phase pipeline: sequential setup
//! (validation, seed sieve, partitioning), a parallel sieve phase in which
//! each worker mutates only a presence array it owns, and a merge phase
//! that reads all worker outputs after the join barrier. The modules here
//! follow that split.

pub mod core;
pub mod divisive;
pub mod domain;
pub mod functional;
pub mod merge;
pub mod partition;
pub mod presence;
pub mod seed;
pub mod types;

// Re-export main types for easier access
pub use self::core::{Sieve, compute};
pub use self::partition::partition;
pub use self::presence::PresenceArray;
pub use self::seed::{isqrt, sieve_additive};
pub use self::types::{PartitionPlan, SieveError, Strategy, SubRange};
