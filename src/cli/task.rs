use serde_json::json;
use tracing::info;

use crate::cli::commands::TaskCommands;
use crate::cli::{finish, parse_due, parse_priority, parse_status, print_json, Globals};
use crate::error::TaskboardError;
use crate::models::{TaskFilter, TaskInput, TaskStatus, TaskUpdate};
use crate::output;
use crate::view;

pub async fn run(cmd: TaskCommands, globals: &Globals) -> i32 {
    let result = match cmd {
        TaskCommands::Add { title, description, priority, status, due } => {
            run_add(title, description, &priority, &status, due.as_deref(), globals).await
        }
        TaskCommands::List { status, priority, overdue, due_soon } => {
            run_list(status.as_deref(), priority.as_deref(), overdue, due_soon, globals).await
        }
        TaskCommands::Show { id } => run_show(id, globals).await,
        TaskCommands::Update { id, title, description, priority, status, due } => {
            run_edit(id, title, description, priority, status, due, globals).await
        }
        TaskCommands::Start { id } => {
            run_update(id, TaskUpdate::status(TaskStatus::InProgress), globals).await
        }
        TaskCommands::Done { id } => {
            run_update(id, TaskUpdate::status(TaskStatus::Completed), globals).await
        }
        TaskCommands::Delete { id } => run_delete(id, globals).await,
    };
    finish(result, globals.json)
}

async fn run_add(
    title: String,
    description: Option<String>,
    priority: &str,
    status: &str,
    due: Option<&str>,
    globals: &Globals,
) -> Result<i32, TaskboardError> {
    let input = TaskInput {
        title,
        description,
        priority: parse_priority(priority)?,
        status: parse_status(status)?,
        due_date: due.map(parse_due).transpose()?,
    };
    // Fail on bad input before touching the network.
    let input = input.validate()?;

    let client = globals.client()?;
    let task = client.create_task(input).await?;
    info!(id = task.id, "created task");

    if globals.json {
        print_json(&output::json::success(json!({
            "task": output::json::task_summary(&task)
        })));
    } else {
        println!("Added task #{}: {}", task.id, task.title);
    }
    Ok(0)
}

async fn run_list(
    status: Option<&str>,
    priority: Option<&str>,
    only_overdue: bool,
    only_due_soon: bool,
    globals: &Globals,
) -> Result<i32, TaskboardError> {
    let filter = TaskFilter {
        status: status.map(parse_status).transpose()?,
        priority: priority.map(parse_priority).transpose()?,
    };
    let now = globals.now()?;
    let client = globals.client()?;
    let mut tasks = client.list_tasks(&filter).await?;
    // The query string is advisory; re-apply it to what came back.
    tasks.retain(|t| filter.matches(t));

    let shown: Vec<_> = if only_overdue {
        view::overdue(&tasks, now)
    } else if only_due_soon {
        view::due_soon(&tasks, now)
    } else {
        tasks.iter().collect()
    };

    if globals.json {
        print_json(&output::json::success(json!({
            "count": shown.len(),
            "tasks": output::json::task_list(&shown, now)
        })));
    } else {
        output::text::print_task_list(&shown, now);
    }
    Ok(0)
}

async fn run_show(id: i64, globals: &Globals) -> Result<i32, TaskboardError> {
    let now = globals.now()?;
    let client = globals.client()?;
    let task = client.get_task(id).await?;

    if globals.json {
        print_json(&output::json::success(json!({
            "task": output::json::task_detail(&task, now)
        })));
    } else {
        output::text::print_task(&task, now);
    }
    Ok(0)
}

async fn run_edit(
    id: i64,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    status: Option<String>,
    due: Option<String>,
    globals: &Globals,
) -> Result<i32, TaskboardError> {
    let update = TaskUpdate {
        title,
        description,
        priority: priority.as_deref().map(parse_priority).transpose()?,
        status: status.as_deref().map(parse_status).transpose()?,
        due_date: due.as_deref().map(parse_due).transpose()?,
    };
    // Fail on bad input before touching the network.
    let update = update.validate()?;
    run_update(id, update, globals).await
}

/// `ApiClient::update_task` validates `update` again right before sending.
async fn run_update(id: i64, update: TaskUpdate, globals: &Globals) -> Result<i32, TaskboardError> {
    let client = globals.client()?;
    let task = client.update_task(id, update).await?;
    info!(id = task.id, status = task.status.as_str(), "updated task");

    if globals.json {
        print_json(&output::json::success(json!({
            "task": output::json::task_summary(&task)
        })));
    } else {
        println!("Task #{} → {} ({})", task.id, task.status.as_str(), task.title);
    }
    Ok(0)
}

async fn run_delete(id: i64, globals: &Globals) -> Result<i32, TaskboardError> {
    let client = globals.client()?;
    client.delete_task(id).await?;
    info!(id, "deleted task");

    if globals.json {
        print_json(&output::json::success(json!({ "deleted": id })));
    } else {
        println!("Deleted task #{id}");
    }
    Ok(0)
}
