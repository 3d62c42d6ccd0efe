use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::TaskboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    /// Anything the service sent that is not one of the above.
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Self::Todo),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// A task as owned by the task service. Read-only on this side: edits go
/// through the API and the returned record replaces the local one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "unknown_priority", deserialize_with = "lenient_priority")]
    pub priority: Priority,
    #[serde(default = "unknown_status", deserialize_with = "lenient_status")]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "service_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "service_datetime")]
    pub updated_at: DateTime<Utc>,
}

fn unknown_priority() -> Priority {
    Priority::Unknown
}

fn unknown_status() -> TaskStatus {
    TaskStatus::Unknown
}

/// Parse the date-time shapes the service and users produce: RFC 3339,
/// naive ISO-8601 (taken as UTC), or a bare date (midnight UTC).
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Optional date-times never fail decoding: anything unparseable is "no date".
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(parse_datetime))
}

/// `null`, numbers and unrecognized strings all decode as `Unknown`.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(Priority::from_str)
        .unwrap_or(Priority::Unknown))
}

fn lenient_status<'de, D>(deserializer: D) -> Result<TaskStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(TaskStatus::from_str)
        .unwrap_or(TaskStatus::Unknown))
}

fn service_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {raw}")))
}

/// Payload for `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::Medium,
            status: TaskStatus::Todo,
            due_date: None,
        }
    }

    /// Trim text fields and reject what the service should never see.
    pub fn validate(mut self) -> Result<Self, TaskboardError> {
        self.title = validate_title(&self.title)?;
        self.description = normalize_description(self.description);
        check_priority(self.priority)?;
        check_status(self.status)?;
        Ok(self)
    }
}

/// Payload for `PUT /tasks/{id}`. Only fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskUpdate {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }

    pub fn validate(mut self) -> Result<Self, TaskboardError> {
        if self.is_empty() {
            return Err(TaskboardError::validation("Nothing to update"));
        }
        if let Some(title) = self.title.take() {
            self.title = Some(validate_title(&title)?);
        }
        // An explicit empty description clears it on the service side.
        self.description = self.description.map(|d| d.trim().to_string());
        if let Some(priority) = self.priority {
            check_priority(priority)?;
        }
        if let Some(status) = self.status {
            check_status(status)?;
        }
        Ok(self)
    }
}

fn validate_title(title: &str) -> Result<String, TaskboardError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskboardError::validation("Title is required"));
    }
    Ok(trimmed.to_string())
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

fn check_priority(priority: Priority) -> Result<(), TaskboardError> {
    if priority == Priority::Unknown {
        return Err(TaskboardError::validation("Priority must be one of: low, medium, high"));
    }
    Ok(())
}

fn check_status(status: TaskStatus) -> Result<(), TaskboardError> {
    if status == TaskStatus::Unknown {
        return Err(TaskboardError::validation(
            "Status must be one of: todo, in_progress, completed",
        ));
    }
    Ok(())
}
