//! Task id allocation
//!
//! Each store owns its own counter.

use crate::task::TaskId;

/// Monotonic id counter
///
/// Starts at 0 and is advanced before each allocation, so the first id handed
/// out is 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: TaskId,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter and return the new id
    pub fn next_id(&mut self) -> TaskId {
        self.last += 1;
        self.last
    }

    /// Most recently allocated id, 0 if none
    pub fn last(&self) -> TaskId {
        self.last
    }

    /// Rewind to the initial state
    pub fn reset(&mut self) {
        self.last = 0;
    }
}
