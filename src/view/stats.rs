use crate::models::{Priority, PriorityCounts, Task, TaskStats, TaskStatus};

pub fn count_by_priority(tasks: &[Task]) -> PriorityCounts {
    let mut counts = PriorityCounts::default();
    for t in tasks {
        match t.priority {
            Priority::Low => counts.low += 1,
            Priority::Medium => counts.medium += 1,
            Priority::High => counts.high += 1,
            Priority::Unknown => {}
        }
    }
    counts
}

/// Status counts over `tasks`. Unrecognized statuses count towards `total`
/// only.
pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    let (mut todo, mut in_progress, mut completed) = (0, 0, 0);
    for t in tasks {
        match t.status {
            TaskStatus::Todo => todo += 1,
            TaskStatus::InProgress => in_progress += 1,
            TaskStatus::Completed => completed += 1,
            TaskStatus::Unknown => {}
        }
    }
    let total = tasks.len();
    TaskStats {
        total,
        completed,
        in_progress,
        todo,
        completion_rate: completion_rate(completed, total),
    }
}

pub fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}
