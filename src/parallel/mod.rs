//! Fixed-size worker pool for the parallel sieve phase
//!
//! Every parallel strategy hands this module one owned work item per worker
//! and gets back the per-worker outputs in worker order. Memory ownership is
//! the whole synchronization story: inputs are moved into their worker,
//! outputs travel back over a channel, and the scope join is the barrier
//! that separates the sieve phase from the merge phase.

pub mod executor;

pub use executor::WorkerPool;
