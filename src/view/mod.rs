//! Derived views over a task snapshot: status and priority breakdowns,
//! due-soon and overdue sets. Pure functions; the reference instant is always
//! passed in by the caller.

pub mod dashboard;
pub mod due;
pub mod stats;

pub use dashboard::Dashboard;
pub use due::{due_date_status, due_soon, is_due_soon, is_overdue, overdue, DueStatus};
pub use stats::{compute_stats, count_by_priority};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, Utc};

    use crate::models::{parse_datetime, Priority, Task, TaskStatus};

    pub fn at(s: &str) -> DateTime<Utc> {
        parse_datetime(s).expect("test date")
    }

    pub fn task(id: i64, status: TaskStatus, priority: Priority) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: None,
            priority,
            status,
            due_date: None,
            created_at: at("2024-01-01"),
            updated_at: at("2024-01-01"),
        }
    }
}
