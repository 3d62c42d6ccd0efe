pub mod commands;
pub mod dashboard;
pub mod init;
pub mod stats;
pub mod task;
pub mod weather;

pub use commands::*;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::api::ApiClient;
use crate::config;
use crate::error::TaskboardError;
use crate::models::{parse_datetime, Priority, TaskStatus};
use crate::output;

/// Flags shared by every command.
pub struct Globals {
    pub json: bool,
    pub api_url: Option<String>,
    pub now: Option<String>,
}

impl Globals {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            api_url: cli.api_url.clone(),
            now: cli.now.clone(),
        }
    }

    pub fn client(&self) -> Result<ApiClient, TaskboardError> {
        let config = config::resolve(self.api_url.as_deref())?;
        ApiClient::new(&config)
    }

    /// The one place the wall clock is read.
    pub fn now(&self) -> Result<DateTime<Utc>, TaskboardError> {
        match self.now {
            Some(ref s) => parse_datetime(s)
                .ok_or_else(|| TaskboardError::validation(format!("Invalid --now value: {s}"))),
            None => Ok(Utc::now()),
        }
    }
}

/// Print the result of a command and turn it into an exit code.
pub fn finish(result: Result<i32, TaskboardError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(code = e.code.as_str(), "command failed");
            if json_output {
                print_json(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

pub fn parse_priority(s: &str) -> Result<Priority, TaskboardError> {
    Priority::from_str(s).ok_or_else(|| {
        TaskboardError::validation(format!("Invalid priority '{s}'. Use low, medium or high."))
    })
}

pub fn parse_status(s: &str) -> Result<TaskStatus, TaskboardError> {
    TaskStatus::from_str(s).ok_or_else(|| {
        TaskboardError::validation(format!(
            "Invalid status '{s}'. Use todo, in_progress or completed."
        ))
    })
}

pub fn parse_due(s: &str) -> Result<DateTime<Utc>, TaskboardError> {
    parse_datetime(s).ok_or_else(|| {
        TaskboardError::validation(format!(
            "Invalid date '{s}'. Use YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339."
        ))
    })
}
