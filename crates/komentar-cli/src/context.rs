//! Process-wide state built once at startup.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use komentar_ai::KeywordClassifier;
use komentar_core::KeywordList;
use komentar_store::Dataset;
use komentar_viz::ChartRenderer;
use tracing::info;

use crate::Cli;

pub(crate) struct AppContext {
    pub dataset: Arc<Dataset>,
    pub classifier: KeywordClassifier,
    pub renderer: ChartRenderer,
}

impl AppContext {
    /// Load the dataset and keyword list, and prepare the output directory.
    /// Any failure here is fatal.
    pub fn build(cli: &Cli) -> Result<Self> {
        let dataset = Dataset::load(&cli.dataset)
            .with_context(|| format!("loading dataset {}", cli.dataset.display()))?;

        let keywords = match &cli.keywords {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading keyword file {}", path.display()))?;
                KeywordList::parse(&text)
            }
            None => KeywordList::default(),
        };
        info!(keywords = keywords.len(), records = dataset.len(), "context ready");

        let renderer = ChartRenderer::new(&cli.output_dir, &cli.url_prefix)
            .context("preparing chart output directory")?;

        Ok(Self {
            dataset: Arc::new(dataset),
            classifier: KeywordClassifier::new(keywords),
            renderer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use komentar_ai::Verdict;
    use tempfile::TempDir;

    const CSV: &str = "timestamp,label,komentar,emosi\n\
        2025-02-10 08:15:00,2,terima kasih pak,senang\n\
        2025-02-10 09:00:00,0,kecewa,marah\n";

    fn cli(dir: &TempDir, extra: &[&str]) -> Cli {
        let dataset = dir.path().join("data.csv");
        let out = dir.path().join("out");
        let mut args = vec![
            "komentar".to_string(),
            "--dataset".to_string(),
            dataset.display().to_string(),
            "--output-dir".to_string(),
            out.display().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        args.push("stats".to_string());
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn builds_from_csv_with_default_keywords() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.csv"), CSV).unwrap();

        let ctx = AppContext::build(&cli(&dir, &[])).unwrap();
        assert_eq!(ctx.dataset.len(), 2);
        assert_eq!(ctx.classifier.keywords(), &KeywordList::default());
        assert!(dir.path().join("out").is_dir());
    }

    #[test]
    fn keyword_file_replaces_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.csv"), CSV).unwrap();
        let kw = dir.path().join("kw.txt");
        fs::write(&kw, "# custom\nkecewa\n").unwrap();

        let ctx = AppContext::build(&cli(&dir, &["--keywords", kw.to_str().unwrap()])).unwrap();
        assert_eq!(ctx.classifier.keywords().len(), 1);
        assert_eq!(ctx.classifier.classify("Kecewa sekali").verdict, Verdict::Positive);
    }

    #[test]
    fn missing_dataset_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = AppContext::build(&cli(&dir, &[])).err().unwrap();
        assert!(format!("{err:#}").contains("loading dataset"));
    }
}
