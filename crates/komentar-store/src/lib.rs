//! Storage layer: loads the annotated comment dataset and exposes read-only groupings.

mod dataset;
mod error;
mod loader;
mod timestamp;

pub use dataset::{Dataset, DatasetSummary, SentimentCounts};
pub use error::StoreError;
pub use loader::{read_csv, read_parquet};
pub use timestamp::parse_timestamp;
