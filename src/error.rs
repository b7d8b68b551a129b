//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and GDAL errors, and provides semantic variants for
//! argument validation and pipeline failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GDAL error: {0}")]
    Gdal(#[from] crate::io::GdalError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Raster too narrow to split into two tiles: {cols} column(s)")]
    TooNarrowToSplit { cols: usize },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pipeline error: {0}")]
    Pipeline(String),
}
