//! HTTP client for the task service.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::TaskboardError;
use crate::models::{
    Task, TaskFilter, TaskInput, TaskStats, TaskUpdate, TaskWeather, WeatherQuery, WeatherReport,
};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, TaskboardError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("taskboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TaskboardError::http(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /tasks`, newest first as ordered by the service.
    #[instrument(skip(self))]
    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskboardError> {
        let request = self.http.get(self.url("/tasks")).query(&filter.query_pairs());
        self.send_json(request, None).await
    }

    #[instrument(skip(self))]
    pub async fn get_task(&self, id: i64) -> Result<Task, TaskboardError> {
        let request = self.http.get(self.url(&format!("/tasks/{id}")));
        self.send_json(request, Some(id)).await
    }

    /// Validates `input` before sending; nothing reaches the wire on failure.
    #[instrument(skip(self, input))]
    pub async fn create_task(&self, input: TaskInput) -> Result<Task, TaskboardError> {
        let input = input.validate()?;
        let request = self.http.post(self.url("/tasks")).json(&input);
        self.send_json(request, None).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_task(&self, id: i64, update: TaskUpdate) -> Result<Task, TaskboardError> {
        let update = update.validate()?;
        let request = self.http.put(self.url(&format!("/tasks/{id}"))).json(&update);
        self.send_json(request, Some(id)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: i64) -> Result<(), TaskboardError> {
        let request = self.http.delete(self.url(&format!("/tasks/{id}")));
        self.send(request, Some(id)).await?;
        Ok(())
    }

    /// Server-computed counterpart of `view::compute_stats`.
    #[instrument(skip(self))]
    pub async fn stats_summary(&self) -> Result<TaskStats, TaskboardError> {
        let request = self.http.get(self.url("/tasks/stats/summary"));
        self.send_json(request, None).await
    }

    #[instrument(skip(self))]
    pub async fn task_weather(&self, id: i64) -> Result<TaskWeather, TaskboardError> {
        let request = self.http.get(self.url(&format!("/tasks/{id}/weather")));
        self.send_json(request, Some(id)).await
    }

    #[instrument(skip(self))]
    pub async fn weather(&self, query: &WeatherQuery) -> Result<WeatherReport, TaskboardError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(lat) = query.latitude {
            params.push(("latitude", lat.to_string()));
        }
        if let Some(lon) = query.longitude {
            params.push(("longitude", lon.to_string()));
        }
        if let Some(date) = query.date {
            // The service parses dates with Python's `fromisoformat`: no `Z`.
            params.push(("date", date.format("%Y-%m-%dT%H:%M:%S").to_string()));
        }
        let request = self.http.get(self.url("/weather")).query(&params);
        self.send_json(request, None).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        task_id: Option<i64>,
    ) -> Result<T, TaskboardError> {
        let response = self.send(request, task_id).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        task_id: Option<i64>,
    ) -> Result<Response, TaskboardError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "task service responded");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "task service error");
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = task_id {
                return Err(TaskboardError::task_not_found(id));
            }
        }
        Err(TaskboardError::api(status.as_u16(), error_detail(&body).as_deref()))
    }
}

/// Pull the human message out of an error body. Handles `{"detail": "..."}`
/// and the list-of-errors form used for request validation failures.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
