//! Chart rendering: plans a fixed batch of charts from the dataset and writes them as PNG files.

mod charts;
mod error;
mod figure;
mod plan;
mod renderer;
pub mod wordcloud;

pub use charts::Palette;
pub use error::{ChartError, RenderError};
pub use plan::{BarSpec, ChartJob, ChartKind, LineSpec, WordCloudSpec, plan_charts};
pub use renderer::{ArtifactNamer, ChartArtifact, ChartFailure, ChartRenderer, RenderReport};
