//! Error types for partscan

use thiserror::Error;

/// Main error type for partscan operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Raster size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch {
        er: usize,
        ec: usize,
        ar: usize,
        ac: usize,
    },

    #[error("Label capacity exhausted: cannot assign labels beyond {limit}")]
    LabelCapacity { limit: i32 },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for partscan operations
pub type Result<T> = std::result::Result<T, Error>;
