//! The fixed chart batch, computed from the dataset before any drawing.
//!
//! Planning is pure: it decides which charts exist, in which order, and
//! what data each one shows. Drawing happens later, one figure at a time.

use komentar_core::Sentiment;
use komentar_store::Dataset;

use crate::Palette;

const COUNT_AXIS: &str = "Jumlah Komentar";

/// A bar chart over ordered categories.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub categories: Vec<String>,
    pub counts: Vec<usize>,
    pub palette: Palette,
}

/// A line chart over ordered, labelled points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub points: Vec<(String, usize)>,
}

/// A word cloud over a text corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCloudSpec {
    pub title: String,
    pub corpus: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    Bar(BarSpec),
    Line(LineSpec),
    WordCloud(WordCloudSpec),
}

/// One chart to render: semantic name, pixel size and content.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartJob {
    pub name: String,
    pub size: (u32, u32),
    pub kind: ChartKind,
}

/// Plan the render batch in its fixed order: sentiment, daily, hourly,
/// emotion, one word cloud per label with text, and platform when the
/// dataset has a platform column.
pub fn plan_charts(dataset: &Dataset) -> Vec<ChartJob> {
    let mut jobs = vec![
        sentiment_chart(dataset),
        daily_chart(dataset),
        hourly_chart(dataset),
        emotion_chart(dataset),
    ];

    for label in dataset.labels_in_order() {
        let corpus = dataset.corpus_for(label);
        if corpus.trim().is_empty() {
            continue;
        }
        let name = label.display_name();
        jobs.push(ChartJob {
            name: format!("wordcloud_{}", name.to_lowercase()),
            size: (1000, 500),
            kind: ChartKind::WordCloud(WordCloudSpec {
                title: format!("WordCloud Sentimen: {name}"),
                corpus,
            }),
        });
    }

    if let Some(platforms) = dataset.platform_counts() {
        let (categories, counts) = platforms.into_iter().unzip();
        jobs.push(ChartJob {
            name: "platform".to_string(),
            size: (600, 400),
            kind: ChartKind::Bar(BarSpec {
                title: "Distribusi Komentar per Platform".to_string(),
                x_desc: "Platform".to_string(),
                y_desc: COUNT_AXIS.to_string(),
                categories,
                counts,
                palette: Palette::Pastel,
            }),
        });
    }

    jobs
}

fn sentiment_chart(dataset: &Dataset) -> ChartJob {
    let counts = dataset.sentiment_counts();
    ChartJob {
        name: "sentimen".to_string(),
        size: (600, 400),
        kind: ChartKind::Bar(BarSpec {
            title: "Distribusi Sentimen".to_string(),
            x_desc: "Label Sentimen".to_string(),
            y_desc: COUNT_AXIS.to_string(),
            categories: Sentiment::ALL
                .iter()
                .map(|s| s.display_name().to_string())
                .collect(),
            counts: counts.iter().map(|(_, n)| n).collect(),
            palette: Palette::Set2,
        }),
    }
}

fn daily_chart(dataset: &Dataset) -> ChartJob {
    ChartJob {
        name: "per_hari".to_string(),
        size: (1200, 400),
        kind: ChartKind::Line(LineSpec {
            title: "Aktivitas Komentar per Hari".to_string(),
            x_desc: "Tanggal".to_string(),
            y_desc: COUNT_AXIS.to_string(),
            points: dataset
                .daily_counts()
                .into_iter()
                .map(|(d, n)| (d.format("%Y-%m-%d").to_string(), n))
                .collect(),
        }),
    }
}

fn hourly_chart(dataset: &Dataset) -> ChartJob {
    let (categories, counts) = dataset
        .hourly_counts()
        .into_iter()
        .map(|(h, n)| (h.to_string(), n))
        .unzip();
    ChartJob {
        name: "per_jam".to_string(),
        size: (800, 400),
        kind: ChartKind::Bar(BarSpec {
            title: "Distribusi Komentar per Jam".to_string(),
            x_desc: "Jam (0-23)".to_string(),
            y_desc: COUNT_AXIS.to_string(),
            categories,
            counts,
            palette: Palette::Viridis,
        }),
    }
}

fn emotion_chart(dataset: &Dataset) -> ChartJob {
    let (categories, counts) = dataset.emotion_counts().into_iter().unzip();
    ChartJob {
        name: "emosi".to_string(),
        size: (800, 500),
        kind: ChartKind::Bar(BarSpec {
            title: "Distribusi Emosi dalam Komentar".to_string(),
            x_desc: "Emosi".to_string(),
            y_desc: COUNT_AXIS.to_string(),
            categories,
            counts,
            palette: Palette::Set2,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use komentar_core::{CommentRecord, SentimentLabel};

    fn rec(ts: &str, label: i64, text: Option<&str>, platform: Option<&str>) -> CommentRecord {
        CommentRecord::new(
            text.map(String::from),
            NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            SentimentLabel(label),
            Some("senang".to_string()),
            platform.map(String::from),
        )
    }

    fn names(jobs: &[ChartJob]) -> Vec<&str> {
        jobs.iter().map(|j| j.name.as_str()).collect()
    }

    fn bar(job: &ChartJob) -> &BarSpec {
        match &job.kind {
            ChartKind::Bar(b) => b,
            other => panic!("expected bar chart, got {other:?}"),
        }
    }

    #[test]
    fn three_records_without_platform() {
        let ds = Dataset::new(
            vec![
                rec("2025-02-10 08:00:00", 0, Some("kecewa berat"), None),
                rec("2025-02-10 09:00:00", 2, Some("mantap"), None),
                rec("2025-02-11 09:30:00", 2, Some("semangat"), None),
            ],
            false,
        );
        let jobs = plan_charts(&ds);
        assert_eq!(
            names(&jobs),
            vec![
                "sentimen",
                "per_hari",
                "per_jam",
                "emosi",
                "wordcloud_negatif",
                "wordcloud_positif"
            ]
        );
    }

    #[test]
    fn sentiment_categories_fixed_regardless_of_data() {
        let ds = Dataset::new(
            vec![
                rec("2025-02-10 08:00:00", 2, None, None),
                rec("2025-02-10 08:00:00", 2, None, None),
                rec("2025-02-10 08:00:00", 1, None, None),
            ],
            false,
        );
        let jobs = plan_charts(&ds);
        let spec = bar(&jobs[0]);
        assert_eq!(spec.categories, vec!["Negatif", "Netral", "Positif"]);
        assert_eq!(spec.counts, vec![0, 1, 2]);
    }

    #[test]
    fn word_clouds_skip_labels_without_text() {
        let ds = Dataset::new(
            vec![
                rec("2025-02-10 08:00:00", 1, None, None),
                rec("2025-02-10 08:00:00", 0, Some("  "), None),
                rec("2025-02-10 08:00:00", 2, Some("bagus"), None),
                rec("2025-02-10 08:00:00", 9, Some("aneh"), None),
            ],
            false,
        );
        let jobs = plan_charts(&ds);
        assert_eq!(
            names(&jobs)[4..].to_vec(),
            vec!["wordcloud_positif", "wordcloud_9"]
        );
        match &jobs[5].kind {
            ChartKind::WordCloud(w) => assert_eq!(w.title, "WordCloud Sentimen: 9"),
            other => panic!("expected word cloud, got {other:?}"),
        }
    }

    #[test]
    fn platform_chart_last_when_column_present() {
        let ds = Dataset::new(
            vec![
                rec("2025-02-10 08:00:00", 0, None, Some("youtube")),
                rec("2025-02-10 08:00:00", 0, None, Some("tiktok")),
                rec("2025-02-10 08:00:00", 0, None, Some("youtube")),
            ],
            true,
        );
        let jobs = plan_charts(&ds);
        let last = jobs.last().unwrap();
        assert_eq!(last.name, "platform");
        let spec = bar(last);
        assert_eq!(spec.categories, vec!["youtube", "tiktok"]);
        assert_eq!(spec.counts, vec![2, 1]);
    }

    #[test]
    fn empty_dataset_still_plans_base_charts() {
        let jobs = plan_charts(&Dataset::default());
        assert_eq!(names(&jobs), vec!["sentimen", "per_hari", "per_jam", "emosi"]);
    }

    #[test]
    fn hourly_and_daily_are_ascending() {
        let ds = Dataset::new(
            vec![
                rec("2025-02-12 22:00:00", 0, None, None),
                rec("2025-02-10 03:00:00", 0, None, None),
                rec("2025-02-11 22:10:00", 0, None, None),
            ],
            false,
        );
        let jobs = plan_charts(&ds);
        match &jobs[1].kind {
            ChartKind::Line(l) => assert_eq!(
                l.points,
                vec![
                    ("2025-02-10".to_string(), 1),
                    ("2025-02-11".to_string(), 1),
                    ("2025-02-12".to_string(), 1)
                ]
            ),
            other => panic!("expected line chart, got {other:?}"),
        }
        let hourly = bar(&jobs[2]);
        assert_eq!(hourly.categories, vec!["3", "22"]);
        assert_eq!(hourly.counts, vec![1, 2]);
        assert_eq!(hourly.palette, Palette::Viridis);
    }
}
