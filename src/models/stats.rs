use serde::{Deserialize, Serialize};

/// Status breakdown of a set of tasks. Never persisted, always recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub todo: usize,
    /// Percentage in `0.0..=100.0`; `0.0` when there are no tasks.
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}
