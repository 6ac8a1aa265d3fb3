use std::cell::Cell;

use thread_local::ThreadLocal;

/// Number of cells written by a fill.
///
/// Every worker thread accumulates into its own slot, so concurrent contributors never touch the
/// same memory. Slots are summed only after all contributors have joined.
#[derive(Debug, Default)]
pub struct VisitedCounter {
    partial: ThreadLocal<Cell<u64>>,
}

impl VisitedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&self, cells: u64) {
        let slot = self.partial.get_or_default();
        slot.set(slot.get() + cells);
    }

    pub fn total(&mut self) -> u64 {
        self.partial.iter_mut().map(|x| x.get()).sum()
    }

    pub fn into_total(mut self) -> u64 {
        self.total()
    }
}
