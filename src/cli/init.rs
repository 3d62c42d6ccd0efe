use std::env;

use serde_json::json;
use tracing::info;

use crate::cli::{finish, print_json, Globals};
use crate::config::{self, Config, CONFIG_DIR, CONFIG_FILE};
use crate::error::TaskboardError;
use crate::output;

pub fn run(timeout: Option<u64>, globals: &Globals) -> i32 {
    finish(run_inner(timeout, globals), globals.json)
}

fn run_inner(timeout: Option<u64>, globals: &Globals) -> Result<i32, TaskboardError> {
    let cwd = env::current_dir().map_err(|e| TaskboardError::config(e.to_string()))?;
    let existing = cwd.join(CONFIG_DIR).join(CONFIG_FILE);

    // Re-running init keeps settings that are not given again.
    let mut cfg = if existing.is_file() {
        config::load_file(&existing)?
    } else {
        Config::default()
    };
    if let Some(ref url) = globals.api_url {
        cfg.api_url = url.clone();
    }
    cfg.api_url = config::normalize_api_url(&cfg.api_url)?;
    if let Some(secs) = timeout {
        if secs == 0 {
            return Err(TaskboardError::validation("Timeout must be at least 1 second"));
        }
        cfg.timeout_secs = secs;
    }

    let path = config::write_config(&cwd, &cfg)?;
    info!(path = %path.display(), api_url = %cfg.api_url, "wrote config");

    if globals.json {
        print_json(&output::json::success(json!({
            "path": path.to_string_lossy(),
            "api_url": cfg.api_url,
            "timeout_secs": cfg.timeout_secs
        })));
    } else {
        println!("Initialized taskboard at {}", path.display());
        println!("  API URL: {}", cfg.api_url);
    }
    Ok(0)
}
