use serde_json::json;

use crate::cli::{finish, parse_due, print_json, Globals};
use crate::error::TaskboardError;
use crate::models::WeatherQuery;
use crate::output;

pub async fn run(
    id: Option<i64>,
    lat: Option<f64>,
    lon: Option<f64>,
    date: Option<String>,
    globals: &Globals,
) -> i32 {
    let result = match id {
        Some(id) => run_task(id, globals).await,
        None => run_location(lat, lon, date.as_deref(), globals).await,
    };
    finish(result, globals.json)
}

async fn run_task(id: i64, globals: &Globals) -> Result<i32, TaskboardError> {
    let client = globals.client()?;
    let weather = client.task_weather(id).await?;

    if globals.json {
        print_json(&output::json::success(json!({
            "weather": output::json::task_weather_json(&weather)
        })));
    } else {
        output::text::print_task_weather(&weather);
    }
    Ok(0)
}

async fn run_location(
    lat: Option<f64>,
    lon: Option<f64>,
    date: Option<&str>,
    globals: &Globals,
) -> Result<i32, TaskboardError> {
    if lat.is_some() != lon.is_some() {
        return Err(TaskboardError::validation("--lat and --lon must be given together"));
    }
    let query = WeatherQuery {
        latitude: lat,
        longitude: lon,
        date: date.map(parse_due).transpose()?,
    };
    let client = globals.client()?;
    let report = client.weather(&query).await?;

    if globals.json {
        print_json(&output::json::success(json!({
            "weather": output::json::weather_json(&report)
        })));
    } else {
        output::text::print_weather(&report);
    }
    Ok(0)
}
