//! Process-wide holder for the most recent generated sample.

use std::sync::{Arc, RwLock};

use crate::generator::Sample;

/// Single-slot cache of the latest sample.
///
/// The slot starts empty and is unconditionally overwritten on every
/// scheduler firing; no history is kept in memory. Under overlapping
/// firings the slot is last-write-wins by completion order, which can
/// briefly hold a sample older than the newest persisted one. That race
/// is accepted; readers only need "a recent sample".
#[derive(Clone, Default)]
pub struct LatestSample {
    slot: Arc<RwLock<Option<Sample>>>,
}

impl LatestSample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the slot with `sample`.
    pub fn set(&self, sample: Sample) {
        let mut guard = self.slot.write().expect("latest-sample lock poisoned");
        *guard = Some(sample);
    }

    /// Returns a copy of the current slot value, or `None` if no sample has
    /// ever been generated.
    pub fn get(&self) -> Option<Sample> {
        self.slot
            .read()
            .expect("latest-sample lock poisoned")
            .clone()
    }
}
