// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Root directory '{0}' does not exist")]
    RootNotFound(PathBuf),

    #[error("Root path '{0}' is not a directory")]
    RootNotDirectory(PathBuf),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
