use chrono::{DateTime, Utc};

use crate::models::{PriorityCounts, Task, TaskStats, TaskWeather, WeatherReport};
use crate::view::{self, Dashboard};

pub fn print_task(t: &Task, now: DateTime<Utc>) {
    println!("Task #{}: {}", t.id, t.title);
    if let Some(ref desc) = t.description {
        if !desc.is_empty() {
            println!("  Description: {desc}");
        }
    }
    println!("  Status: {}", t.status.as_str());
    println!("  Priority: {}", t.priority.as_str());
    if let Some(due) = t.due_date {
        let marker = if view::is_overdue(t, now) { " OVERDUE" } else { "" };
        println!("  Due: {}{marker}", due.format("%Y-%m-%d %H:%M"));
    }
    println!("  {}", view::due_date_status(t.due_date, now));
    println!("  Created: {}", t.created_at.format("%Y-%m-%d %H:%M"));
    println!("  Updated: {}", t.updated_at.format("%Y-%m-%d %H:%M"));
}

pub fn print_task_line(t: &Task, now: DateTime<Utc>) {
    let due = match t.due_date {
        Some(d) if view::is_overdue(t, now) => format!(" due {} OVERDUE", d.format("%Y-%m-%d")),
        Some(d) => format!(" due {}", d.format("%Y-%m-%d")),
        None => String::new(),
    };
    println!(
        "  #{} [{}] {} p={}{}",
        t.id,
        t.status.as_str(),
        t.title,
        t.priority.as_str(),
        due
    );
}

pub fn print_task_list(tasks: &[&Task], now: DateTime<Utc>) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    let plural = if tasks.len() == 1 { "" } else { "s" };
    println!("Found {} task{plural}", tasks.len());
    for t in tasks {
        print_task_line(t, now);
    }
}

pub fn print_stats(s: &TaskStats) {
    println!("Completion: {:.1}% ({}/{})", s.completion_rate, s.completed, s.total);
    println!(
        "  todo={} in_progress={} completed={}",
        s.todo, s.in_progress, s.completed
    );
}

pub fn print_priority(c: &PriorityCounts) {
    println!("By priority: low={} medium={} high={}", c.low, c.medium, c.high);
}

pub fn print_dashboard(d: &Dashboard<'_>, now: DateTime<Utc>) {
    print_stats(&d.stats);
    print_priority(&d.by_priority);

    println!("\nDue this week:");
    if d.due_soon.is_empty() {
        println!("  No tasks due this week");
    }
    for t in &d.due_soon {
        print_task_line(t, now);
    }

    println!("\nOverdue:");
    if d.overdue.is_empty() {
        println!("  No overdue tasks");
    }
    for t in &d.overdue {
        print_task_line(t, now);
    }
}

pub fn print_task_weather(w: &TaskWeather) {
    println!("Task #{}: {}", w.task_id, w.status);
    if let Some(ref desc) = w.description {
        println!("  {desc}");
    }
}

pub fn print_weather(w: &WeatherReport) {
    if !w.available {
        let reason = w
            .status
            .as_deref()
            .or(w.message.as_deref())
            .unwrap_or("unavailable");
        println!("Weather unavailable: {reason}");
        if let (Some(status), Some(message)) = (&w.status, &w.message) {
            if status != message {
                println!("  {message}");
            }
        }
        return;
    }
    if let Some(ref location) = w.location {
        println!("Weather in {location}");
    }
    if let Some(ref desc) = w.description {
        println!("  {desc}");
    }
    if let Some(temp) = w.temperature {
        println!("  Temperature: {temp:.1}°C");
    }
    if let Some(humidity) = w.humidity {
        println!("  Humidity: {humidity}%");
    }
    if let Some(wind) = w.wind_speed {
        println!("  Wind: {wind} m/s");
    }
}
