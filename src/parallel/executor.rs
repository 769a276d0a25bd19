use anyhow::Result;
use crossbeam::channel::bounded;
use tracing::debug;

/// Fixed-size pool that runs exactly one task per work item.
///
/// Each spawned worker receives its explicit worker index and an owned work
/// item; the index is structural (the result slot it fills), never derived
/// from runtime thread identity. Workers never observe each other's state:
/// the only cross-worker traffic is the `(index, output)` pair each one
/// sends when it finishes.
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `task` once per work item on its own scoped thread and return the
    /// outputs in work-item order.
    ///
    /// The scope join is the phase barrier: no output is visible to the
    /// caller until every worker has finished. A panicking worker surfaces
    /// as an error, never as a partial result set.
    pub fn run<T, R, F>(&self, work_items: Vec<T>, task: F) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(usize, T) -> R + Send + Sync,
    {
        let work_count = work_items.len();
        if work_count == 0 {
            return Ok(Vec::new());
        }
        debug_assert_eq!(work_count, self.workers);

        let (result_tx, result_rx) = bounded(work_count);

        let mut indexed = crossbeam::thread::scope(|s| {
            for (worker_id, work_item) in work_items.into_iter().enumerate() {
                let result_tx = result_tx.clone();
                let task = &task;

                s.spawn(move |_| {
                    let output = task(worker_id, work_item);
                    debug!(worker_id, "worker finished");
                    // The collector outlives every worker, so this cannot fail
                    let _ = result_tx.send((worker_id, output));
                });
            }

            // Drop the original sender so the collector sees the channel close
            drop(result_tx);

            result_rx.iter().collect::<Vec<(usize, R)>>()
        })
        .map_err(|_| anyhow::anyhow!("worker thread panicked during parallel sieve"))?;

        // Channel arrival order depends on timing; restore worker order
        indexed.sort_by_key(|(worker_id, _)| *worker_id);

        Ok(indexed.into_iter().map(|(_, output)| output).collect())
    }
}
