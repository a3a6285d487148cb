//! Execution statistics across the whole store.

use serde::{Deserialize, Serialize};

/// Completion counters over every planned item (articles + custom actions).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanStats {
    /// Count of all planned items
    pub total: u32,
    /// Count of items with completed status
    pub done: u32,
    /// Completion percentage, 0.0 when there are no items
    pub percent: f64,
}

impl PlanStats {
    /// Builds stats from raw counters, guarding the empty-store division.
    pub fn new(total: u32, done: u32) -> Self {
        let percent = if total > 0 {
            f64::from(done) / f64::from(total) * 100.0
        } else {
            0.0
        };
        Self {
            total,
            done,
            percent,
        }
    }
}
