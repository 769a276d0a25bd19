use super::types::{PartitionPlan, SieveError, SubRange};

/// Split `[min, max]` into `workers` contiguous, non-overlapping sub-ranges.
///
/// The first `workers - 1` sub-ranges each span `(max - min) / workers`
/// candidates; the last absorbs the remainder up to `max` and may be longer
/// than the others. The uneven last bucket keeps the arithmetic
/// integer-exact for any divisibility, so it must stay that way.
pub fn partition(min: u64, max: u64, workers: usize) -> Result<PartitionPlan, SieveError> {
    let span = max - min + 1;
    if workers == 0 || span < workers as u64 {
        return Err(SieveError::InvalidPartition { span, workers });
    }

    let step = (max - min) / workers as u64;
    let mut ranges = Vec::with_capacity(workers);

    let mut next = min;
    for _ in 0..workers - 1 {
        ranges.push(SubRange { lo: next, hi: next + step - 1 });
        next += step;
    }
    ranges.push(SubRange { lo: next, hi: max });

    Ok(ranges)
}
