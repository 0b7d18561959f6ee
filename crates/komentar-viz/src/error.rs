use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Failure of a single chart. Recorded in the report; the batch continues.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("chart backend panicked: {0}")]
    Panicked(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing(e.to_string())
    }
}

/// Failure of a whole render call.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot clear previous charts in {path}: {source}")]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("render lock poisoned")]
    LockPoisoned,
}
