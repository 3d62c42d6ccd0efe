use serde_json::json;

use crate::cli::{finish, print_json, Globals};
use crate::error::TaskboardError;
use crate::models::TaskFilter;
use crate::output;
use crate::view;

pub async fn run(remote: bool, globals: &Globals) -> i32 {
    finish(run_inner(remote, globals).await, globals.json)
}

async fn run_inner(remote: bool, globals: &Globals) -> Result<i32, TaskboardError> {
    let client = globals.client()?;
    let (stats, by_priority) = if remote {
        (client.stats_summary().await?, None)
    } else {
        let tasks = client.list_tasks(&TaskFilter::default()).await?;
        (view::compute_stats(&tasks), Some(view::count_by_priority(&tasks)))
    };

    if globals.json {
        let source = if remote { "remote" } else { "local" };
        let mut data = json!({
            "source": source,
            "stats": output::json::stats_json(&stats)
        });
        if let Some(ref counts) = by_priority {
            data["by_priority"] = output::json::priority_json(counts);
        }
        print_json(&output::json::success(data));
    } else {
        output::text::print_stats(&stats);
        if let Some(ref counts) = by_priority {
            output::text::print_priority(counts);
        }
    }
    Ok(0)
}
