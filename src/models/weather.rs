use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Answer of `GET /tasks/{id}/weather`: the service's own due-date message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskWeather {
    pub task_id: i64,
    #[serde(default)]
    pub due_date: Option<String>,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Answer of `GET /weather`. Readings are only present when `available`;
/// otherwise `status` and/or `message` explain why.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date: Option<DateTime<Utc>>,
}
