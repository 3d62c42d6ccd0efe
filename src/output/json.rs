use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::error::TaskboardError;
use crate::models::{PriorityCounts, Task, TaskStats, TaskWeather, WeatherReport};
use crate::view::{self, Dashboard};

use super::format_datetime;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskboardError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn stats_json(s: &TaskStats) -> Value {
    json!({
        "total": s.total,
        "completed": s.completed,
        "in_progress": s.in_progress,
        "todo": s.todo,
        "completion_rate": (s.completion_rate * 10.0).round() / 10.0
    })
}

pub fn priority_json(c: &PriorityCounts) -> Value {
    json!({
        "low": c.low,
        "medium": c.medium,
        "high": c.high
    })
}

pub fn task_summary(t: &Task) -> Value {
    json!({
        "id": t.id,
        "title": t.title,
        "status": t.status.as_str(),
        "priority": t.priority.as_str(),
        "due_date": t.due_date.as_ref().map(format_datetime)
    })
}

pub fn task_list(tasks: &[&Task], now: DateTime<Utc>) -> Value {
    Value::Array(
        tasks
            .iter()
            .map(|t| {
                let mut v = task_summary(t);
                v["overdue"] = json!(view::is_overdue(t, now));
                v
            })
            .collect(),
    )
}

pub fn task_detail(t: &Task, now: DateTime<Utc>) -> Value {
    json!({
        "id": t.id,
        "title": t.title,
        "description": t.description,
        "status": t.status.as_str(),
        "priority": t.priority.as_str(),
        "due_date": t.due_date.as_ref().map(format_datetime),
        "created_at": format_datetime(&t.created_at),
        "updated_at": format_datetime(&t.updated_at),
        "overdue": view::is_overdue(t, now),
        "due_status": view::due_date_status(t.due_date, now).to_string()
    })
}

pub fn dashboard_json(d: &Dashboard<'_>) -> Value {
    json!({
        "stats": stats_json(&d.stats),
        "by_priority": priority_json(&d.by_priority),
        "due_soon": d.due_soon.iter().map(|t| task_summary(t)).collect::<Vec<_>>(),
        "overdue": d.overdue.iter().map(|t| task_summary(t)).collect::<Vec<_>>()
    })
}

pub fn task_weather_json(w: &TaskWeather) -> Value {
    json!({
        "task_id": w.task_id,
        "due_date": w.due_date,
        "status": w.status,
        "description": w.description
    })
}

pub fn weather_json(w: &WeatherReport) -> Value {
    serde_json::to_value(w).unwrap_or(Value::Null)
}
