use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::label::SentimentLabel;

/// One annotated comment from the dataset.
///
/// `date` and `hour` are derived from `timestamp` at construction and kept
/// alongside it so groupings don't recompute them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentRecord {
    pub text: Option<String>,
    pub timestamp: NaiveDateTime,
    pub date: NaiveDate,
    pub hour: u32,
    pub label: SentimentLabel,
    pub emotion: Option<String>,
    pub platform: Option<String>,
}

impl CommentRecord {
    pub fn new(
        text: Option<String>,
        timestamp: NaiveDateTime,
        label: SentimentLabel,
        emotion: Option<String>,
        platform: Option<String>,
    ) -> Self {
        Self {
            text,
            date: timestamp.date(),
            hour: timestamp.hour(),
            timestamp,
            label,
            emotion,
            platform,
        }
    }

    /// Comment text, if present and not blank.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn derives_date_and_hour() {
        let r = CommentRecord::new(None, ts("2025-03-14 23:59:01"), SentimentLabel(1), None, None);
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(r.hour, 23);
    }

    #[test]
    fn blank_text_is_not_text() {
        let mut r = CommentRecord::new(
            Some("   ".into()),
            ts("2025-03-14 08:00:00"),
            SentimentLabel(0),
            None,
            None,
        );
        assert_eq!(r.non_empty_text(), None);
        r.text = Some("ok".into());
        assert_eq!(r.non_empty_text(), Some("ok"));
    }
}
