//! Shared counters updated by concurrent file tasks.

use std::sync::atomic::{AtomicUsize, Ordering};

/// The run's only shared mutable state: an atomic counter pair created at
/// run start, incremented by worker tasks, and read once at run end.
#[derive(Debug, Default)]
pub struct RunTotals {
    processed: AtomicUsize,
    modified: AtomicUsize,
}

impl RunTotals {
    /// Records a file whose task completed without error.
    pub fn record_processed(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a file that was rewritten and written back.
    pub fn record_modified(&self) {
        self.modified.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of files processed so far.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Relaxed)
    }

    /// Number of files modified so far.
    #[must_use]
    pub fn modified(&self) -> usize {
        self.modified.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::RunTotals;

    #[test]
    fn counters_start_at_zero() {
        let totals = RunTotals::default();

        assert_eq!(totals.processed(), 0);
        assert_eq!(totals.modified(), 0);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let totals = RunTotals::default();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        totals.record_processed();
                        totals.record_modified();
                    }
                });
            }
        });

        assert_eq!(totals.processed(), 800);
        assert_eq!(totals.modified(), 800);
    }
}
