pub mod keywords;
pub mod label;
pub mod record;
pub mod schema;

pub use keywords::{DEFAULT_POSITIVE_KEYWORDS, KeywordList};
pub use label::{ParseLabelError, Sentiment, SentimentLabel};
pub use record::CommentRecord;
pub use schema::columns;
