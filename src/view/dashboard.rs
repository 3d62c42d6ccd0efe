use chrono::{DateTime, Utc};

use crate::models::{PriorityCounts, Task, TaskStats};

use super::{due, stats};

/// Everything the dashboard shows, derived from one task snapshot.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    pub stats: TaskStats,
    pub by_priority: PriorityCounts,
    pub due_soon: Vec<&'a Task>,
    pub overdue: Vec<&'a Task>,
}

impl<'a> Dashboard<'a> {
    pub fn build(tasks: &'a [Task], now: DateTime<Utc>) -> Self {
        Self {
            stats: stats::compute_stats(tasks),
            by_priority: stats::count_by_priority(tasks),
            due_soon: due::due_soon(tasks, now),
            overdue: due::overdue(tasks, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskStatus};
    use crate::view::test_support::{at, task};

    #[test]
    fn test_build_dashboard() {
        let mut a = task(1, TaskStatus::Todo, Priority::High);
        a.due_date = Some(at("2024-01-12"));
        let mut b = task(2, TaskStatus::InProgress, Priority::Low);
        b.due_date = Some(at("2024-01-05"));
        let mut c = task(3, TaskStatus::Completed, Priority::High);
        c.due_date = Some(at("2024-01-05"));
        let tasks = vec![a, b, c];

        let dash = Dashboard::build(&tasks, at("2024-01-10"));
        assert_eq!(dash.stats.total, 3);
        assert_eq!(dash.stats.completed, 1);
        assert_eq!(dash.by_priority, PriorityCounts { low: 1, medium: 0, high: 2 });
        assert_eq!(dash.due_soon.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(dash.overdue.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
    }
}
