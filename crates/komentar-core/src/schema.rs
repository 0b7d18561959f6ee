/// Column names of the annotated comment dataset.
///
/// Every column is read as text; timestamps arrive in mixed formats and
/// labels as integers or integral floats, so the loader parses both.
pub mod columns {
    pub const TIMESTAMP: &str = "timestamp";
    pub const LABEL: &str = "label";
    pub const TEXT: &str = "komentar";
    pub const EMOTION: &str = "emosi";
    pub const PLATFORM: &str = "platform";

    /// Accepted alternatives for the comment text column, in lookup order.
    pub const TEXT_ALIASES: &[&str] = &[TEXT, "text", "comment"];
    /// Accepted alternatives for the emotion column, in lookup order.
    pub const EMOTION_ALIASES: &[&str] = &[EMOTION, "emotion"];
}

#[cfg(test)]
mod tests {
    use super::columns;

    #[test]
    fn canonical_names_come_first_in_aliases() {
        assert_eq!(columns::TEXT_ALIASES[0], columns::TEXT);
        assert_eq!(columns::EMOTION_ALIASES[0], columns::EMOTION);
    }
}
