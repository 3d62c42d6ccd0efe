use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::models::Task;

pub const DUE_SOON_DAYS: i64 = 7;

/// Due date passed and the task is not completed.
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    match task.due_date {
        Some(due) => due < now && !task.status.is_completed(),
        None => false,
    }
}

/// Due within `[now, now + 7 days]` and not completed. Both ends inclusive.
pub fn is_due_soon(task: &Task, now: DateTime<Utc>) -> bool {
    match task.due_date {
        Some(due) => {
            // Past the end of the calendar the window has no upper bound.
            let within = match now.checked_add_signed(Duration::days(DUE_SOON_DAYS)) {
                Some(end) => due <= end,
                None => true,
            };
            due >= now && within && !task.status.is_completed()
        }
        None => false,
    }
}

pub fn due_soon(tasks: &[Task], now: DateTime<Utc>) -> Vec<&Task> {
    tasks.iter().filter(|t| is_due_soon(t, now)).collect()
}

pub fn overdue(tasks: &[Task], now: DateTime<Utc>) -> Vec<&Task> {
    tasks.iter().filter(|t| is_overdue(t, now)).collect()
}

/// Human-readable position of a due date relative to `now`, counted in whole
/// days rounded towards the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    NoDueDate,
    Overdue(i64),
    DueToday,
    DueTomorrow,
    DueIn(i64),
}

pub fn due_date_status(due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DueStatus {
    let Some(due) = due_date else {
        return DueStatus::NoDueDate;
    };
    let days = (due - now).num_milliseconds().div_euclid(Duration::days(1).num_milliseconds());
    match days {
        d if d < 0 => DueStatus::Overdue(-d),
        0 => DueStatus::DueToday,
        1 => DueStatus::DueTomorrow,
        d => DueStatus::DueIn(d),
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDueDate => write!(f, "No due date set"),
            Self::Overdue(1) => write!(f, "⏰ 1 day overdue"),
            Self::Overdue(n) => write!(f, "⏰ {n} days overdue"),
            Self::DueToday => write!(f, "📅 Due today"),
            Self::DueTomorrow => write!(f, "📅 Due tomorrow"),
            Self::DueIn(n) => write!(f, "📅 Due in {n} days"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskStatus};
    use crate::view::test_support::{at, task};

    fn due(id: i64, status: TaskStatus, due_date: &str) -> Task {
        let mut t = task(id, status, Priority::Medium);
        t.due_date = Some(at(due_date));
        t
    }

    #[test]
    fn test_due_in_two_days_is_due_soon_not_overdue() {
        let now = at("2024-01-10");
        let t = due(1, TaskStatus::Todo, "2024-01-12");
        assert!(is_due_soon(&t, now));
        assert!(!is_overdue(&t, now));
    }

    #[test]
    fn test_past_due_is_overdue_not_due_soon() {
        let now = at("2024-01-10");
        let t = due(1, TaskStatus::Todo, "2024-01-05");
        assert!(is_overdue(&t, now));
        assert!(!is_due_soon(&t, now));
    }

    #[test]
    fn test_completed_is_never_flagged() {
        let now = at("2024-01-10");
        for date in ["2024-01-05", "2024-01-12"] {
            let t = due(1, TaskStatus::Completed, date);
            assert!(!is_overdue(&t, now));
            assert!(!is_due_soon(&t, now));
        }
    }

    #[test]
    fn test_no_due_date_is_never_flagged() {
        let now = at("2024-01-10");
        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Unknown] {
            let t = task(1, status, Priority::High);
            assert!(!is_overdue(&t, now));
            assert!(!is_due_soon(&t, now));
        }
    }

    #[test]
    fn test_due_soon_window_is_inclusive() {
        let now = at("2024-01-10T12:00:00");
        assert!(is_due_soon(&due(1, TaskStatus::Todo, "2024-01-10T12:00:00"), now));
        assert!(is_due_soon(&due(2, TaskStatus::Todo, "2024-01-17T12:00:00"), now));
        assert!(!is_due_soon(&due(3, TaskStatus::Todo, "2024-01-17T12:00:01"), now));
        // exactly `now` is due, not yet overdue
        assert!(!is_overdue(&due(4, TaskStatus::Todo, "2024-01-10T12:00:00"), now));
    }

    #[test]
    fn test_due_soon_near_max_datetime_does_not_overflow() {
        let now = DateTime::<Utc>::MAX_UTC - Duration::days(2);
        let mut t = task(1, TaskStatus::Todo, Priority::Low);
        t.due_date = Some(DateTime::<Utc>::MAX_UTC);
        assert!(is_due_soon(&t, now));
        assert!(!is_overdue(&t, now));
        assert_eq!(due_soon(std::slice::from_ref(&t), now).len(), 1);
    }

    #[test]
    fn test_filters_preserve_input_order() {
        let now = at("2024-01-10");
        let tasks = vec![
            due(1, TaskStatus::Todo, "2024-01-15"),
            due(2, TaskStatus::InProgress, "2024-01-01"),
            due(3, TaskStatus::Todo, "2024-01-11"),
            due(4, TaskStatus::Todo, "2024-01-09"),
            task(5, TaskStatus::Todo, Priority::Low),
        ];
        let soon: Vec<i64> = due_soon(&tasks, now).iter().map(|t| t.id).collect();
        let late: Vec<i64> = overdue(&tasks, now).iter().map(|t| t.id).collect();
        assert_eq!(soon, vec![1, 3]);
        assert_eq!(late, vec![2, 4]);
    }

    #[test]
    fn test_due_date_status_messages() {
        let now = at("2024-01-10T12:00:00");
        let status = |s: &str| due_date_status(Some(at(s)), now).to_string();
        assert_eq!(due_date_status(None, now).to_string(), "No due date set");
        assert_eq!(status("2024-01-10T18:00:00"), "📅 Due today");
        assert_eq!(status("2024-01-11T13:00:00"), "📅 Due tomorrow");
        assert_eq!(status("2024-01-15T12:00:00"), "📅 Due in 5 days");
        assert_eq!(status("2024-01-10T11:00:00"), "⏰ 1 day overdue");
        assert_eq!(status("2024-01-07T12:00:00"), "⏰ 3 days overdue");
    }
}
