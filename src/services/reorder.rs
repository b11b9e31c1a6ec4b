use std::collections::BTreeMap;

use crate::models::OutputRecord;

/// Restores input order for results that complete out of order.
///
/// Every dispatched index must eventually be resolved, with `None` for URLs
/// that produced no record, or later records stay parked.
#[derive(Debug, Default)]
pub struct ReorderBuffer {
    next_index: usize,
    pending: BTreeMap<usize, Option<OutputRecord>>,
}

impl ReorderBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `index` and return every record that is now in order
    pub fn push(&mut self, index: usize, record: Option<OutputRecord>) -> Vec<OutputRecord> {
        self.pending.insert(index, record);

        let mut ready = Vec::new();
        while let Some(record) = self.pending.remove(&self.next_index) {
            self.next_index += 1;
            ready.extend(record);
        }
        ready
    }

    /// Number of resolved results waiting on an earlier index
    pub fn parked(&self) -> usize {
        self.pending.len()
    }
}
