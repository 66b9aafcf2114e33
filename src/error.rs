use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("scene holds {count} {kind}, capacity is {max}")]
    Capacity {
        kind: &'static str,
        count: usize,
        max: usize,
    },

    #[error("sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("light {index}: {reason}")]
    InvalidLight { index: usize, reason: String },

    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),

    #[error("invalid render settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, Error>;
