use super::{Priority, Task, TaskStatus};

/// Server-side list filter (`GET /tasks?status=&priority=`). `matches`
/// applies the same rule locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.map_or(true, |s| task.status == s)
            && self.priority.map_or(true, |p| task.priority == p)
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_support::task;

    #[test]
    fn test_empty_filter_matches_everything() {
        let t = task(1, TaskStatus::Unknown, Priority::Unknown);
        assert!(TaskFilter::default().matches(&t));
        assert!(TaskFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn test_filter_by_status_and_priority() {
        let filter = TaskFilter {
            status: Some(TaskStatus::Todo),
            priority: Some(Priority::High),
        };
        assert!(filter.matches(&task(1, TaskStatus::Todo, Priority::High)));
        assert!(!filter.matches(&task(2, TaskStatus::Todo, Priority::Low)));
        assert!(!filter.matches(&task(3, TaskStatus::Completed, Priority::High)));
        assert_eq!(filter.query_pairs(), vec![("status", "todo"), ("priority", "high")]);
    }
}
