/// Boolean array tracking surviving primality candidates in a bounded range.
///
/// Index `i` represents candidate `i + offset`; `true` means the candidate
/// has not yet been struck as composite. Each worker owns its array
/// exclusively for the duration of the sieve phase, which is what makes the
/// parallel strategies race-free without any locking.
#[derive(Debug, Clone)]
pub struct PresenceArray {
    offset: u64,
    bits: Vec<bool>,
}

impl PresenceArray {
    /// All candidates start out as potential primes.
    pub fn new(offset: u64, len: usize) -> Self {
        Self { offset, bits: vec![true; len] }
    }

    /// Rewrap a combined bit vector produced by the array merge.
    pub fn from_bits(offset: u64, bits: Vec<bool>) -> Self {
        Self { offset, bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Whether `candidate` is still unstruck. Out-of-range candidates are not.
    pub fn is_candidate(&self, candidate: u64) -> bool {
        candidate
            .checked_sub(self.offset)
            .and_then(|i| self.bits.get(i as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Record a trial-division verdict for one candidate.
    pub fn set(&mut self, candidate: u64, is_prime: bool) {
        let index = (candidate - self.offset) as usize;
        self.bits[index] = is_prime;
    }

    /// Strike every multiple of `prime` at or above the array offset,
    /// including `prime` itself when it falls inside the array.
    ///
    /// The domain strategy uses this form: seed primes struck here are
    /// re-added exactly once by the merge, which keeps sub-range outputs
    /// free of duplicated seeds.
    pub fn strike_multiples(&mut self, prime: u64) {
        let first = self.offset.div_ceil(prime) * prime;
        self.strike_from(prime, first);
    }

    /// Strike every proper multiple of `prime` (from `2 * prime` upward)
    /// that falls inside the array. The seed sieve and the functional
    /// strategy use this form so that the prime itself survives.
    pub fn strike_proper_multiples(&mut self, prime: u64) {
        let first = self.offset.div_ceil(prime) * prime;
        self.strike_from(prime, first.max(prime * 2));
    }

    fn strike_from(&mut self, prime: u64, first: u64) {
        debug_assert!(prime >= 2);
        let end = self.offset + self.bits.len() as u64;
        let mut multiple = first;
        while multiple < end {
            self.bits[(multiple - self.offset) as usize] = false;
            multiple += prime;
        }
    }

    /// Collect surviving candidates in increasing order.
    pub fn collect_primes(&self) -> Vec<u64> {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| i as u64 + self.offset)
            .collect()
    }

    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }
}
