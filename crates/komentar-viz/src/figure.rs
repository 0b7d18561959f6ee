//! Scoped drawing surface for one chart.
//!
//! Every chart is drawn inside [`with_figure`]: the bitmap backend is
//! acquired, filled white, handed to the drawing closure, presented to disk
//! and dropped before the function returns, whatever the outcome. A failed
//! figure leaves no file behind.

use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::ChartError;

/// Root drawing area of a figure.
pub(crate) type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Font family used for every caption and label.
pub(crate) const FONT: &str = "sans-serif";

/// Draw one figure of `size` pixels and write it to `path` as PNG.
pub(crate) fn with_figure<F>(path: &Path, size: (u32, u32), draw: F) -> Result<(), ChartError>
where
    F: FnOnce(&Canvas<'_>) -> Result<(), ChartError>,
{
    // The font stack can panic when no system fonts are available; keep that
    // contained to this figure.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<(), ChartError> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
        Ok(())
    }))
    .unwrap_or_else(|payload| Err(ChartError::Panicked(panic_message(payload.as_ref()))));

    if outcome.is_err() && path.exists() {
        // Dropping an unsaved backend flushes whatever was drawn so far.
        if let Err(e) = fs::remove_file(path) {
            debug!(path = %path.display(), error = %e, "could not remove partial chart");
        }
    }
    outcome
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
