//! Plain-text console output for each command.

use std::path::Path;

use komentar_ai::{Classification, Evaluation};
use komentar_store::{Dataset, DatasetSummary, SentimentCounts};
use komentar_viz::RenderReport;
use serde::Serialize;

const MAX_ROWS: usize = 24;

/// Everything `stats` shows, gathered in one pass so text and JSON agree.
#[derive(Debug, Serialize)]
pub struct DatasetStats {
    pub summary: DatasetSummary,
    pub sentiment: SentimentCounts,
    pub per_day: Vec<(String, usize)>,
    pub per_hour: Vec<(u32, usize)>,
    pub emotions: Vec<(String, usize)>,
    pub platforms: Option<Vec<(String, usize)>>,
}

impl DatasetStats {
    pub fn collect(dataset: &Dataset) -> Self {
        Self {
            summary: dataset.summary(),
            sentiment: dataset.sentiment_counts(),
            per_day: dataset
                .daily_counts()
                .into_iter()
                .map(|(d, n)| (d.format("%Y-%m-%d").to_string(), n))
                .collect(),
            per_hour: dataset.hourly_counts(),
            emotions: dataset.emotion_counts(),
            platforms: dataset.platform_counts(),
        }
    }
}

// ── Classification ──

pub fn print_classifications(results: &[Classification]) {
    for c in results {
        println!("{:<8} {}", c.verdict.as_str(), c.text);
        if !c.matched.is_empty() {
            println!("         matched: {}", c.matched.join(", "));
        }
    }
    if results.len() > 1 {
        let positive = results
            .iter()
            .filter(|c| c.verdict == komentar_ai::Verdict::Positive)
            .count();
        println!();
        println!(
            "{} comments: {} Positif, {} Negatif",
            results.len(),
            positive,
            results.len() - positive
        );
    }
}

// ── Render ──

pub fn print_render_report(report: &RenderReport, output_dir: &Path) {
    println!(
        "=== Charts ({} written to {}) ===",
        report.artifacts.len(),
        output_dir.display()
    );
    for a in &report.artifacts {
        println!("  {:<22} {}", a.name, a.relative_path);
    }
    if !report.failures.is_empty() {
        println!();
        println!("Failed ({}):", report.failures.len());
        for f in &report.failures {
            println!("  {:<22} {}", f.name, f.reason);
        }
    }
}

// ── Stats ──

pub fn print_stats(stats: &DatasetStats) {
    let s = &stats.summary;
    println!("=== Dataset ===");
    println!("  {:<22} {}", "records", s.records);
    println!("  {:<22} {}", "with text", s.with_text);
    if let (Some(first), Some(last)) = (s.first_date, s.last_date) {
        println!("  {:<22} {} .. {}", "dates", first, last);
    }
    println!("  {:<22} {}", "distinct labels", s.distinct_labels);
    println!("  {:<22} {}", "distinct emotions", s.distinct_emotions);
    match s.distinct_platforms {
        Some(n) => println!("  {:<22} {}", "distinct platforms", n),
        None => println!("  {:<22} (no column)", "platforms"),
    }
    println!();

    println!("Sentiment");
    for (sentiment, n) in stats.sentiment.iter() {
        println!("  {:<22} {}", sentiment.display_name(), n);
    }
    if stats.sentiment.unmapped > 0 {
        println!("  {:<22} {}", "(other labels)", stats.sentiment.unmapped);
    }
    println!();

    print_counts("Per day", &stats.per_day);
    let hours: Vec<(String, usize)> = stats
        .per_hour
        .iter()
        .map(|(h, n)| (format!("{h:02}:00"), *n))
        .collect();
    print_counts("Per hour", &hours);
    print_counts("Emotions", &stats.emotions);
    if let Some(platforms) = &stats.platforms {
        print_counts("Platforms", platforms);
    }
}

fn print_counts(header: &str, rows: &[(String, usize)]) {
    println!("{header}");
    if rows.is_empty() {
        println!("  (none)");
    }
    for (key, n) in rows.iter().take(MAX_ROWS) {
        println!("  {:<22} {}", key, n);
    }
    if rows.len() > MAX_ROWS {
        println!("  ... and {} more", rows.len() - MAX_ROWS);
    }
    println!();
}

// ── Evaluate ──

pub fn print_evaluation(eval: &Evaluation) {
    println!("=== Keyword rule vs labels ===");
    println!("  {:<22} {}", "classified", eval.classified);
    println!("  {:<22} {}", "confirmed", eval.confirmed);
    println!("  {:<22} {}", "conflict", eval.conflict);
    println!("  {:<22} {}", "unscored", eval.unscored);
    match eval.agreement_ratio() {
        Some(r) => println!("  {:<22} {:.1}%", "agreement", r * 100.0),
        None => println!("  {:<22} n/a", "agreement"),
    }
}
