//! Session-local log of successful predictions.

use super::wire::PredictionResult;

/// Append-only (until cleared) list of results in chronological order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryLog {
    entries: Vec<PredictionResult>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `result` at the end. Duplicate request ids are kept.
    pub fn append(&mut self, result: PredictionResult) {
        self.entries.push(result);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PredictionResult] {
        &self.entries
    }

    /// Display number of the entry at `index`: the first entry carries the
    /// highest number.
    pub fn display_number(&self, index: usize) -> usize {
        self.entries.len().saturating_sub(index)
    }
}
