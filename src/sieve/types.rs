use std::fmt;

/// Strategy used to find the primes in the requested interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Sequential additive sieve over [2, max] (ignores min; also the seed generator)
    SequentialAdditive,
    /// Sequential trial division over [min, max)
    SequentialDivisive,
    /// Parallel by numeric sub-range, one private array per worker
    Domain,
    /// Parallel by seed prime, one full-length private array per worker
    Functional,
    /// Parallel trial division over disjoint candidate slices
    Divisive,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::SequentialAdditive => "sequential-additive",
            Strategy::SequentialDivisive => "sequential-divisive",
            Strategy::Domain => "domain",
            Strategy::Functional => "functional",
            Strategy::Divisive => "divisive",
        };
        f.write_str(name)
    }
}

/// One contiguous worker sub-range, both bounds inclusive.
///
/// A sub-range with `hi < lo` is empty; the partitioner emits these when the
/// span is exactly as large as the worker count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRange {
    pub lo: u64,
    pub hi: u64,
}

impl SubRange {
    /// Number of candidates covered by this sub-range
    pub fn len(&self) -> u64 {
        (self.hi + 1).saturating_sub(self.lo)
    }

    pub fn is_empty(&self) -> bool {
        self.hi < self.lo
    }
}

/// Ordered division of the full candidate range into contiguous,
/// non-overlapping sub-ranges, one per worker.
pub type PartitionPlan = Vec<SubRange>;

/// Error enumeration for setup validation failures.
///
/// All of these are detected before any worker is spawned; a strategy never
/// returns a partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// min was above max, or below the smallest prime candidate
    InvalidRange { min: u64, max: u64 },
    /// Worker count was zero, or the span holds fewer candidates than workers
    InvalidPartition { span: u64, workers: usize },
    /// Upper bound exceeds representable candidate indices
    ArithmeticOverflow { max: u64 },
}

impl fmt::Display for SieveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SieveError::InvalidRange { min, max } => {
                write!(f, "invalid range [{min}, {max}]: min must be >= 2 and <= max")
            }
            SieveError::InvalidPartition { span, workers } => {
                write!(
                    f,
                    "cannot split a span of {span} candidates across {workers} workers"
                )
            }
            SieveError::ArithmeticOverflow { max } => {
                write!(f, "upper bound {max} exceeds representable candidate indices")
            }
        }
    }
}

impl std::error::Error for SieveError {}
