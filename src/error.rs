//! Error types for the MLB team stats CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Team not provided and {env_var} environment variable not set")]
    MissingTeam { env_var: String },

    #[error("Team not found in MLB team listing: {name}")]
    TeamNotFound { name: String },

    #[error("Failed to parse numeric argument: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("MLB API returned no data")]
    NoData,
}

impl From<Box<dyn std::error::Error + Send + Sync>> for StatsError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        StatsError::Cache {
            message: err.to_string(),
        }
    }
}
