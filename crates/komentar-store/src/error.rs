use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dataset file not found: {0}")]
    DatasetNotFound(PathBuf),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: cannot parse timestamp {value:?}")]
    InvalidTimestamp { row: usize, value: String },

    #[error("row {row}: invalid sentiment label {value:?}")]
    InvalidLabel { row: usize, value: String },

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
