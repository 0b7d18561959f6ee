//! Keyword-rule classifier for free-text comments.
//!
//! A comment is positive when it contains at least one phrase from the
//! keyword list (case-insensitive substring match) and negative otherwise.
//! There is no neutral verdict, no confidence score and no negation
//! handling: absence of a positive phrase is, by definition, negative.

use std::fmt;

use komentar_core::KeywordList;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Name of the submitted form field carrying the comment text.
pub const COMMENT_FIELD: &str = "komentar";

/// Keyword classifier over an injected keyword list.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    keywords: KeywordList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Positive,
    Negative,
}

impl Verdict {
    /// Label shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positif",
            Self::Negative => "Negatif",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result for a single comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub text: String,
    pub verdict: Verdict,
    /// Matched keywords, in keyword-list order.
    pub matched: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The caller did not submit the required field. Surfaced as a bad request.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

impl KeywordClassifier {
    pub fn new(keywords: KeywordList) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordList {
        &self.keywords
    }

    /// Classify one comment.
    pub fn classify(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();
        let matched: Vec<String> = self
            .keywords
            .iter()
            .filter(|kw| lowered.contains(kw))
            .map(str::to_string)
            .collect();

        let verdict = if matched.is_empty() {
            Verdict::Negative
        } else {
            Verdict::Positive
        };
        debug!(verdict = %verdict, matches = matched.len(), "classified comment");

        Classification {
            text: text.to_string(),
            verdict,
            matched,
        }
    }

    /// Classify a submitted `komentar` field.
    ///
    /// A missing field is a caller error; an empty one is a valid (negative)
    /// comment.
    pub fn classify_field(&self, field: Option<&str>) -> Result<Classification, ClassifyError> {
        field
            .map(|text| self.classify(text))
            .ok_or(ClassifyError::MissingField(COMMENT_FIELD))
    }

    /// Classify many comments, preserving input order.
    pub fn classify_batch<'a, I>(&self, texts: I) -> Vec<Classification>
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts.into_iter().map(|t| self.classify(t)).collect()
    }
}
