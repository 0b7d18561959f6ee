mod context;
mod display;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use komentar_ai::Classification;
use tracing_subscriber::EnvFilter;

use crate::context::AppContext;

#[derive(Parser)]
#[command(name = "komentar", version)]
#[command(about = "Sentiment dashboard for annotated social-media comments", long_about = None)]
pub(crate) struct Cli {
    /// Annotated comment dataset (.csv or .parquet)
    #[arg(long, env = "KOMENTAR_DATASET", default_value = "dataset_dengan_emosi.csv")]
    dataset: PathBuf,

    /// Directory chart images are written to
    #[arg(long, env = "KOMENTAR_OUTPUT_DIR", default_value = "static/uploads")]
    output_dir: PathBuf,

    /// Prefix for artifact paths as served to a page
    #[arg(long, env = "KOMENTAR_URL_PREFIX", default_value = "uploads")]
    url_prefix: String,

    /// Positive keyword file, one phrase per line (# starts a comment)
    #[arg(long, env = "KOMENTAR_KEYWORDS")]
    keywords: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a comment as Positif or Negatif
    Classify {
        /// Comment text
        #[arg(long)]
        komentar: Option<String>,

        /// Classify every non-blank line of this file
        #[arg(long, conflicts_with = "komentar")]
        file: Option<PathBuf>,
    },

    /// Regenerate all chart images from the dataset
    Render,

    /// Show dataset summary and groupings
    Stats,

    /// Compare keyword verdicts against the dataset's labels
    Evaluate,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!("komentar v{}", env!("CARGO_PKG_VERSION"));

    let ctx = AppContext::build(&cli)?;

    match cli.command {
        Commands::Classify { komentar, file } => {
            let results = match file {
                Some(path) => classify_file(&ctx, &path)?,
                None => vec![
                    ctx.classifier
                        .classify_field(komentar.as_deref())
                        .context("bad request")?,
                ],
            };
            if cli.json {
                print_json(&results)?;
            } else {
                display::print_classifications(&results);
            }
        }
        Commands::Render => {
            let report = ctx
                .renderer
                .render_all(&ctx.dataset)
                .context("rendering charts")?;
            if cli.json {
                print_json(&report)?;
            } else {
                display::print_render_report(&report, ctx.renderer.output_dir());
            }
            if !report.is_complete() {
                anyhow::bail!("{} of the planned charts failed", report.failures.len());
            }
        }
        Commands::Stats => {
            let stats = display::DatasetStats::collect(&ctx.dataset);
            if cli.json {
                print_json(&stats)?;
            } else {
                display::print_stats(&stats);
            }
        }
        Commands::Evaluate => {
            let eval = ctx.classifier.evaluate(&ctx.dataset);
            if cli.json {
                print_json(&eval)?;
            } else {
                display::print_evaluation(&eval);
            }
        }
    }

    Ok(())
}

fn classify_file(ctx: &AppContext, path: &Path) -> Result<Vec<Classification>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading comments from {}", path.display()))?;
    let lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    Ok(ctx.classifier.classify_batch(lines))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["komentar", "render"]).unwrap();
        assert!(matches!(cli.command, Commands::Render));
        assert!(!cli.json);
        assert_eq!(cli.url_prefix, "uploads");
    }

    #[test]
    fn classify_args_parse() {
        let cli =
            Cli::try_parse_from(["komentar", "classify", "--komentar", "terima kasih", "--json"])
                .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Classify { komentar, file } => {
                assert_eq!(komentar.as_deref(), Some("terima kasih"));
                assert!(file.is_none());
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn classify_text_and_file_conflict() {
        let res = Cli::try_parse_from([
            "komentar",
            "classify",
            "--komentar",
            "x",
            "--file",
            "comments.txt",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["komentar"]).is_err());
    }
}
