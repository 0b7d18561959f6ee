//! Classification layer: keyword-rule sentiment verdicts and their agreement with labelled data.

mod classifier;
mod evaluate;

pub use classifier::{Classification, ClassifyError, KeywordClassifier, Verdict, COMMENT_FIELD};
pub use evaluate::{Agreement, Evaluation};
