//! Agreement between keyword verdicts and the dataset's annotated labels.

use komentar_core::Sentiment;
use komentar_store::Dataset;
use serde::Serialize;
use tracing::info;

use crate::{KeywordClassifier, Verdict};

/// Agreement status between the keyword verdict and a record's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Agreement {
    /// Label is positive/negative and the verdict matches it.
    Confirmed,
    /// Label is positive/negative and the verdict is the opposite.
    Conflict,
    /// Label is neutral or unmapped; the two-way rule cannot agree or disagree.
    Unscored,
}

impl Agreement {
    pub fn of(verdict: Verdict, label: Option<Sentiment>) -> Self {
        match (verdict, label) {
            (Verdict::Positive, Some(Sentiment::Positive))
            | (Verdict::Negative, Some(Sentiment::Negative)) => Self::Confirmed,
            (Verdict::Positive, Some(Sentiment::Negative))
            | (Verdict::Negative, Some(Sentiment::Positive)) => Self::Conflict,
            _ => Self::Unscored,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Conflict => "conflict",
            Self::Unscored => "unscored",
        }
    }
}

/// Summary of classifying every labelled comment in a dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Evaluation {
    /// Records with non-empty text that were classified.
    pub classified: usize,
    pub confirmed: usize,
    pub conflict: usize,
    pub unscored: usize,
}

impl Evaluation {
    /// Share of scored records where the verdict matched the label.
    pub fn agreement_ratio(&self) -> Option<f64> {
        let scored = self.confirmed + self.conflict;
        (scored > 0).then(|| self.confirmed as f64 / scored as f64)
    }

    fn record(&mut self, agreement: Agreement) {
        self.classified += 1;
        match agreement {
            Agreement::Confirmed => self.confirmed += 1,
            Agreement::Conflict => self.conflict += 1,
            Agreement::Unscored => self.unscored += 1,
        }
    }
}

impl KeywordClassifier {
    /// Classify every record with text and compare against its label.
    pub fn evaluate(&self, dataset: &Dataset) -> Evaluation {
        let mut eval = Evaluation::default();
        for record in dataset.records() {
            let Some(text) = record.non_empty_text() else {
                continue;
            };
            let verdict = self.classify(text).verdict;
            eval.record(Agreement::of(verdict, record.label.sentiment()));
        }
        info!(
            classified = eval.classified,
            confirmed = eval.confirmed,
            conflict = eval.conflict,
            unscored = eval.unscored,
            "evaluated keyword classifier against dataset labels"
        );
        eval
    }
}
