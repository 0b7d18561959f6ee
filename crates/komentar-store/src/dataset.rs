//! The read-only comment dataset and its groupings.
//!
//! A `Dataset` is built once at startup and shared behind an `Arc`; nothing
//! here mutates it, so any number of readers can use it concurrently.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use komentar_core::{CommentRecord, Sentiment, SentimentLabel};
use serde::Serialize;

/// Annotated comments, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<CommentRecord>,
    has_platform: bool,
}

/// Record counts per sentiment in [`Sentiment::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub counts: [usize; 3],
    /// Records whose label is not 0, 1 or 2.
    pub unmapped: usize,
}

impl SentimentCounts {
    pub fn get(&self, sentiment: Sentiment) -> usize {
        self.counts[sentiment.index()]
    }

    /// `(sentiment, count)` pairs, always all three, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, usize)> + '_ {
        Sentiment::ALL.iter().map(|&s| (s, self.get(s)))
    }
}

/// Summary statistics for a Dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub with_text: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub distinct_labels: usize,
    pub distinct_emotions: usize,
    pub has_platform: bool,
    pub distinct_platforms: Option<usize>,
}

impl Dataset {
    /// `has_platform` records whether the source table had a platform column,
    /// independent of whether any record carries a value for it.
    pub fn new(records: Vec<CommentRecord>, has_platform: bool) -> Self {
        Self {
            records,
            has_platform,
        }
    }

    pub fn records(&self) -> &[CommentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_platform(&self) -> bool {
        self.has_platform
    }

    pub fn sentiment_counts(&self) -> SentimentCounts {
        let mut out = SentimentCounts::default();
        for r in &self.records {
            match r.label.sentiment() {
                Some(s) => out.counts[s.index()] += 1,
                None => out.unmapped += 1,
            }
        }
        out
    }

    /// Records per calendar date, ascending.
    pub fn daily_counts(&self) -> Vec<(NaiveDate, usize)> {
        let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for r in &self.records {
            *days.entry(r.date).or_default() += 1;
        }
        days.into_iter().collect()
    }

    /// Records per hour of day, ascending. Hours with no records are absent.
    pub fn hourly_counts(&self) -> Vec<(u32, usize)> {
        let mut hours: BTreeMap<u32, usize> = BTreeMap::new();
        for r in &self.records {
            *hours.entry(r.hour).or_default() += 1;
        }
        hours.into_iter().collect()
    }

    /// Records per emotion in order of first appearance.
    pub fn emotion_counts(&self) -> Vec<(String, usize)> {
        count_in_order(self.records.iter().filter_map(|r| r.emotion.as_deref()))
    }

    /// Records per platform in order of first appearance, or `None` when the
    /// dataset has no platform column.
    pub fn platform_counts(&self) -> Option<Vec<(String, usize)>> {
        if !self.has_platform {
            return None;
        }
        Some(count_in_order(
            self.records.iter().filter_map(|r| r.platform.as_deref()),
        ))
    }

    /// Distinct labels in order of first occurrence.
    pub fn labels_in_order(&self) -> Vec<SentimentLabel> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.label)
            .filter(|l| seen.insert(*l))
            .collect()
    }

    /// All non-empty comment texts of one label, joined with single spaces.
    pub fn corpus_for(&self, label: SentimentLabel) -> String {
        self.records
            .iter()
            .filter(|r| r.label == label)
            .filter_map(|r| r.text.as_deref())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn summary(&self) -> DatasetSummary {
        let distinct_emotions: HashSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.emotion.as_deref())
            .collect();
        let distinct_platforms = self.has_platform.then(|| {
            self.records
                .iter()
                .filter_map(|r| r.platform.as_deref())
                .collect::<HashSet<_>>()
                .len()
        });

        DatasetSummary {
            records: self.records.len(),
            with_text: self
                .records
                .iter()
                .filter(|r| r.non_empty_text().is_some())
                .count(),
            first_date: self.records.iter().map(|r| r.date).min(),
            last_date: self.records.iter().map(|r| r.date).max(),
            distinct_labels: self.labels_in_order().len(),
            distinct_emotions: distinct_emotions.len(),
            has_platform: self.has_platform,
            distinct_platforms,
        }
    }
}

/// Count values preserving the order in which each first appears.
fn count_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<(String, usize)> = Vec::new();
    for v in values {
        match index.get(v) {
            Some(&i) => out[i].1 += 1,
            None => {
                index.insert(v, out.len());
                out.push((v.to_string(), 1));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn rec(ts: &str, label: i64, text: Option<&str>, emotion: Option<&str>) -> CommentRecord {
        CommentRecord::new(
            text.map(String::from),
            NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            SentimentLabel(label),
            emotion.map(String::from),
            None,
        )
    }

    fn with_platform(mut r: CommentRecord, p: Option<&str>) -> CommentRecord {
        r.platform = p.map(String::from);
        r
    }

    fn sample() -> Dataset {
        Dataset::new(
            vec![
                rec("2025-02-11 20:10:00", 2, Some("mantap bang"), Some("senang")),
                rec("2025-02-10 08:00:00", 0, Some("kecewa"), Some("marah")),
                rec("2025-02-11 20:45:00", 2, Some("semangat terus"), Some("senang")),
                rec("2025-02-10 23:00:00", 0, None, Some("sedih")),
                rec("2025-02-12 08:30:00", 0, Some(""), None),
            ],
            false,
        )
    }

    #[test]
    fn sentiment_counts_fixed_order_with_absent_label() {
        let counts = sample().sentiment_counts();
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Sentiment::Negative, 3),
                (Sentiment::Neutral, 0),
                (Sentiment::Positive, 2)
            ]
        );
        assert_eq!(counts.unmapped, 0);
    }

    #[test]
    fn unmapped_labels_counted_separately() {
        let ds = Dataset::new(
            vec![
                rec("2025-02-10 08:00:00", 5, None, None),
                rec("2025-02-10 08:00:00", 1, None, None),
            ],
            false,
        );
        let counts = ds.sentiment_counts();
        assert_eq!(counts.get(Sentiment::Neutral), 1);
        assert_eq!(counts.unmapped, 1);
    }

    #[test]
    fn daily_counts_ascending() {
        let days = sample().daily_counts();
        let rendered: Vec<_> = days.iter().map(|(d, n)| (d.to_string(), *n)).collect();
        assert_eq!(
            rendered,
            vec![
                ("2025-02-10".to_string(), 2),
                ("2025-02-11".to_string(), 2),
                ("2025-02-12".to_string(), 1)
            ]
        );
    }

    #[test]
    fn hourly_counts_without_zero_fill() {
        assert_eq!(sample().hourly_counts(), vec![(8, 2), (20, 2), (23, 1)]);
    }

    #[test]
    fn emotion_counts_first_appearance_order() {
        assert_eq!(
            sample().emotion_counts(),
            vec![
                ("senang".to_string(), 2),
                ("marah".to_string(), 1),
                ("sedih".to_string(), 1)
            ]
        );
    }

    #[test]
    fn platform_counts_absent_without_column() {
        assert!(sample().platform_counts().is_none());
    }

    #[test]
    fn platform_counts_skip_nulls() {
        let ds = Dataset::new(
            vec![
                with_platform(rec("2025-02-10 08:00:00", 0, None, None), Some("tiktok")),
                with_platform(rec("2025-02-10 09:00:00", 0, None, None), None),
                with_platform(rec("2025-02-10 10:00:00", 2, None, None), Some("youtube")),
                with_platform(rec("2025-02-10 11:00:00", 2, None, None), Some("tiktok")),
            ],
            true,
        );
        assert_eq!(
            ds.platform_counts().unwrap(),
            vec![("tiktok".to_string(), 2), ("youtube".to_string(), 1)]
        );
    }

    #[test]
    fn labels_in_first_occurrence_order() {
        assert_eq!(
            sample().labels_in_order(),
            vec![SentimentLabel(2), SentimentLabel(0)]
        );
    }

    #[test]
    fn corpus_joins_non_empty_texts() {
        let ds = sample();
        assert_eq!(ds.corpus_for(SentimentLabel(2)), "mantap bang semangat terus");
        assert_eq!(ds.corpus_for(SentimentLabel(0)), "kecewa");
        assert_eq!(ds.corpus_for(SentimentLabel(1)), "");
    }

    #[test]
    fn summary_counts() {
        let s = sample().summary();
        assert_eq!(s.records, 5);
        assert_eq!(s.with_text, 3);
        assert_eq!(s.first_date.unwrap().to_string(), "2025-02-10");
        assert_eq!(s.last_date.unwrap().to_string(), "2025-02-12");
        assert_eq!(s.distinct_labels, 2);
        assert_eq!(s.distinct_emotions, 3);
        assert!(!s.has_platform);
        assert_eq!(s.distinct_platforms, None);
    }

    #[test]
    fn empty_dataset() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert!(ds.daily_counts().is_empty());
        assert_eq!(ds.sentiment_counts().counts, [0, 0, 0]);
        assert_eq!(ds.summary().first_date, None);
    }
}
