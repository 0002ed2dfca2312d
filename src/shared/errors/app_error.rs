use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Please enter at least 3 characters to search")]
    QueryTooShort,

    #[error("Too many requests. Please wait a moment before trying again")]
    RateLimited,

    #[error("Request failed with status {status}")]
    Transport { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to load one or more detail resources: {cause}")]
    AggregateFetchFailed { cause: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimited,
                404 => AppError::NotFound("External resource not found".to_string()),
                code => AppError::Transport { status: code },
            }
        } else if err.is_timeout() {
            AppError::Network("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::Network("Failed to connect to external service".to_string())
        } else {
            AppError::Api(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
