use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ValidationError,
    TaskNotFound,
    ApiError,
    HttpError,
    InvalidResponse,
    ConfigError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::ApiError => "API_ERROR",
            Self::HttpError => "HTTP_ERROR",
            Self::InvalidResponse => "INVALID_RESPONSE",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TaskboardError {
    pub code: ErrorCode,
    pub message: String,
}

impl TaskboardError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn task_not_found(id: i64) -> Self {
        Self::new(ErrorCode::TaskNotFound, format!("Task not found: {id}"))
    }

    /// Non-2xx answer from the task service. `detail` is the service's own
    /// explanation when it sent one.
    pub fn api(status: u16, detail: Option<&str>) -> Self {
        let message = match detail {
            Some(detail) => format!("Task service returned {status}: {detail}"),
            None => format!("Task service returned {status}"),
        };
        Self::new(ErrorCode::ApiError, message)
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::HttpError, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidResponse, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl From<reqwest::Error> for TaskboardError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::invalid_response(format!("Failed to decode response: {e}"))
        } else {
            Self::http(format!("Request to task service failed: {e}"))
        }
    }
}

impl From<serde_json::Error> for TaskboardError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_response(e.to_string())
    }
}
