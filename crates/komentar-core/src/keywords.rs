//! Positive keyword list used by the keyword classifier.

/// Built-in positive phrases (Indonesian, with a few English loanwords).
///
/// Order matters: matched keywords are reported in this order.
pub const DEFAULT_POSITIVE_KEYWORDS: &[&str] = &[
    "niat baik",
    "tulus",
    "berbagi",
    "berderma",
    "peduli",
    "mulia",
    "hebat",
    "mantap",
    "inspiratif",
    "terima kasih",
    "bagus",
    "baik hati",
    "respect",
    "apresiasi",
    "support",
    "dukung",
    "semangat",
    "jangan menyerah",
    "tabah",
    "sabar",
    "pemaaf",
    "ikhlas",
    "niat mulia",
    "niat berbagi",
    "konten positif",
    "edukatif",
    "bermanfaat",
    "semoga sukses",
    "tetap berkarya",
    "jangan kapok",
    "berkah",
    "terharu",
    "bangga",
    "penuh cinta",
    "peaceful",
    "pengertian",
    "bijak",
    "adil",
    "gentle",
    "tenang",
    "tidak menyalahkan",
    "klarifikasi baik",
    "niat bagus",
    "positif thinking",
    "pemaafan",
    "rendah hati",
    "simpati",
    "empati",
    "damai",
    "terimakasih",
    "terimakasi",
    "maaf",
];

/// Ordered, lower-cased, de-duplicated keyword list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordList {
    keywords: Vec<String>,
}

impl KeywordList {
    /// Build from arbitrary phrases. Phrases are trimmed and lower-cased;
    /// blanks are dropped and duplicates keep their first position.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for p in phrases {
            let kw = p.as_ref().trim().to_lowercase();
            if !kw.is_empty() && !keywords.contains(&kw) {
                keywords.push(kw);
            }
        }
        Self { keywords }
    }

    /// Parse a keyword file: one phrase per line, `#` starts a comment line.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.starts_with('#')),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for KeywordList {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE_KEYWORDS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_keeps_order() {
        let list = KeywordList::default();
        assert_eq!(list.len(), DEFAULT_POSITIVE_KEYWORDS.len());
        assert_eq!(list.iter().next(), Some("niat baik"));
        assert_eq!(list.iter().last(), Some("maaf"));
    }

    #[test]
    fn normalises_and_dedups() {
        let list = KeywordList::new(["  Hebat ", "", "hebat", "MANTAP"]);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["hebat", "mantap"]);
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let list = KeywordList::parse("# positive words\nkeren\n\n  luar biasa\n#mantap\n");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["keren", "luar biasa"]);
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert!(KeywordList::parse("").is_empty());
    }
}
