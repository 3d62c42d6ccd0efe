use tracing::debug;

use crate::cli::{finish, print_json, Globals};
use crate::error::TaskboardError;
use crate::models::TaskFilter;
use crate::output;
use crate::view::Dashboard;

pub async fn run(globals: &Globals) -> i32 {
    finish(run_inner(globals).await, globals.json)
}

async fn run_inner(globals: &Globals) -> Result<i32, TaskboardError> {
    let now = globals.now()?;
    let client = globals.client()?;
    let tasks = client.list_tasks(&TaskFilter::default()).await?;
    let dashboard = Dashboard::build(&tasks, now);
    debug!(
        total = dashboard.stats.total,
        due_soon = dashboard.due_soon.len(),
        overdue = dashboard.overdue.len(),
        "built dashboard"
    );

    if globals.json {
        print_json(&output::json::success(output::json::dashboard_json(&dashboard)));
    } else {
        output::text::print_dashboard(&dashboard, now);
    }
    Ok(0)
}
