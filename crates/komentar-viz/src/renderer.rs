//! Batch rendering of the planned charts into PNG artifacts.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{Local, NaiveDateTime};
use komentar_store::Dataset;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::charts::{draw_bar, draw_line};
use crate::figure::with_figure;
use crate::plan::{ChartJob, ChartKind, plan_charts};
use crate::wordcloud::draw_word_cloud;
use crate::{ChartError, RenderError};

/// A chart image written by a render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartArtifact {
    /// Semantic chart name, e.g. `sentimen` or `wordcloud_positif`.
    pub name: String,
    pub file_name: String,
    /// `<url_prefix>/<file_name>`, for embedding in a page.
    pub relative_path: String,
    pub generated_at: NaiveDateTime,
}

/// A chart that was planned but could not be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartFailure {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    pub artifacts: Vec<ChartArtifact>,
    pub failures: Vec<ChartFailure>,
}

impl RenderReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Hands out unique file names within one batch.
///
/// Names are `<name>_<YYYYmmddHHMMSS>.png`; a name seen again in the same
/// batch gets `_2`, `_3`, ... before the extension.
#[derive(Debug)]
pub struct ArtifactNamer {
    stamp: String,
    seen: HashMap<String, usize>,
}

impl ArtifactNamer {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            stamp: at.format("%Y%m%d%H%M%S").to_string(),
            seen: HashMap::new(),
        }
    }

    pub fn file_name(&mut self, name: &str) -> String {
        let n = self.seen.entry(name.to_string()).or_insert(0);
        *n += 1;
        if *n == 1 {
            format!("{name}_{}.png", self.stamp)
        } else {
            format!("{name}_{}_{n}.png", self.stamp)
        }
    }
}

/// Renders the chart batch for a dataset into an output directory.
///
/// Each call replaces the previous call's PNG files. Calls on the same
/// renderer are serialized.
#[derive(Debug)]
pub struct ChartRenderer {
    output_dir: PathBuf,
    url_prefix: String,
    lock: Mutex<()>,
}

impl ChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, url_prefix: &str) -> Result<Self, RenderError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| RenderError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self {
            output_dir,
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
            lock: Mutex::new(()),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    pub fn render_all(&self, dataset: &Dataset) -> Result<RenderReport, RenderError> {
        self.render_all_at(dataset, Local::now().naive_local())
    }

    /// Render with an explicit generation time, which stamps every file name.
    pub fn render_all_at(
        &self,
        dataset: &Dataset,
        at: NaiveDateTime,
    ) -> Result<RenderReport, RenderError> {
        let _guard = self.lock.lock().map_err(|_| RenderError::LockPoisoned)?;

        let removed = clear_png_files(&self.output_dir)?;
        debug!(dir = %self.output_dir.display(), removed, "cleared previous charts");

        let jobs = plan_charts(dataset);
        let mut namer = ArtifactNamer::new(at);
        let mut report = RenderReport::default();

        for job in &jobs {
            let file_name = namer.file_name(&job.name);
            let path = self.output_dir.join(&file_name);
            match draw_job(&path, job) {
                Ok(()) => {
                    debug!(chart = %job.name, file = %file_name, "chart written");
                    report.artifacts.push(ChartArtifact {
                        name: job.name.clone(),
                        relative_path: format!("{}/{file_name}", self.url_prefix),
                        file_name,
                        generated_at: at,
                    });
                }
                Err(e) => {
                    warn!(chart = %job.name, error = %e, "chart failed");
                    report.failures.push(ChartFailure {
                        name: job.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            planned = jobs.len(),
            written = report.artifacts.len(),
            failed = report.failures.len(),
            dir = %self.output_dir.display(),
            "render batch complete"
        );
        Ok(report)
    }
}

fn draw_job(path: &Path, job: &ChartJob) -> Result<(), ChartError> {
    with_figure(path, job.size, |root| match &job.kind {
        ChartKind::Bar(spec) => draw_bar(root, spec),
        ChartKind::Line(spec) => draw_line(root, spec),
        ChartKind::WordCloud(spec) => draw_word_cloud(root, spec),
    })
}

/// Delete every `*.png` file directly inside `dir`. Returns how many went.
fn clear_png_files(dir: &Path) -> Result<usize, RenderError> {
    let cleanup = |source| RenderError::Cleanup {
        path: dir.to_path_buf(),
        source,
    };
    let mut removed = 0;
    for entry in fs::read_dir(dir).map_err(cleanup)? {
        let path = entry.map_err(cleanup)?.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png && path.is_file() {
            fs::remove_file(&path).map_err(cleanup)?;
            removed += 1;
        }
    }
    Ok(removed)
}
