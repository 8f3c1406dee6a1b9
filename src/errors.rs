// src/errors.rs

//! Crate-wide error types and helpers.

use thiserror::Error;

pub use crate::plan::validate::ValidationError;

#[derive(Error, Debug)]
pub enum TaskplanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON rendering error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskplanError>;
