//! Word clouds: token frequencies, spiral layout and drawing.
//!
//! Frequencies and layout are pure and deterministic; text extents are
//! estimated from the font size rather than measured, so the same corpus
//! always yields the same picture regardless of the fonts installed.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use plotters::prelude::*;
use regex::Regex;
use serde::Serialize;

use crate::figure::{Canvas, FONT};
use crate::plan::WordCloudSpec;
use crate::{ChartError, Palette};

/// Upper bound on distinct words drawn in one cloud.
pub const MAX_WORDS: usize = 200;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w[\w']+").unwrap());

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
        "during", "each", "else", "ever", "few", "for", "from", "further", "get", "had",
        "has", "have", "having", "he", "her", "here", "hers", "herself", "him", "himself",
        "his", "how", "however", "http", "i", "if", "in", "into", "is", "it", "its",
        "itself", "just", "like", "me", "more", "most", "my", "myself", "no", "nor", "not",
        "of", "off", "on", "once", "only", "or", "other", "otherwise", "ought", "our",
        "ours", "ourselves", "out", "over", "own", "same", "shall", "she", "should", "so",
        "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves",
        "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
        "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
        "while", "who", "whom", "why", "with", "would", "www", "you", "your", "yours",
        "yourself", "yourselves", "can't", "cannot", "don't", "doesn't", "didn't", "isn't",
        "aren't", "wasn't", "weren't", "won't", "wouldn't", "shouldn't", "couldn't",
        "i'm", "i've", "i'd", "i'll", "you're", "you've", "you'd", "you'll", "he's",
        "she's", "it's", "we're", "we've", "they're", "they've", "that's", "there's",
        "let's", "com", "r",
    ]
    .into_iter()
    .collect()
});

/// A word and how often it occurs in a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Count words in `text`, most frequent first, ties alphabetical, keeping at
/// most `max_words`.
pub fn word_frequencies(text: &str, max_words: usize) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for m in TOKEN.find_iter(text) {
        let lower = m.as_str().to_lowercase();
        if STOPWORDS.contains(lower.as_str()) {
            continue;
        }
        let word = lower.strip_suffix("'s").unwrap_or(&lower);
        if word.chars().count() < 2
            || word.chars().all(|c| c.is_numeric())
            || STOPWORDS.contains(word)
        {
            continue;
        }
        *counts.entry(word.to_string()).or_default() += 1;
    }

    let mut words: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words.truncate(max_words);
    words
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub min_font: u32,
    pub max_font: u32,
    /// Free pixels kept around every word.
    pub margin: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_font: 10,
            max_font: 72,
            margin: 2,
        }
    }
}

/// A word positioned on the canvas; `x`/`y` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub font_size: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PlacedWord {
    fn overlaps(&self, x: i32, y: i32, width: u32, height: u32, margin: u32) -> bool {
        let m = margin as i32;
        x < self.x + self.width as i32 + m
            && self.x < x + width as i32 + m
            && y < self.y + self.height as i32 + m
            && self.y < y + height as i32 + m
    }
}

fn font_size(count: usize, min_count: usize, max_count: usize, opts: &LayoutOptions) -> u32 {
    if max_count == min_count {
        return opts.max_font;
    }
    let t = (count - min_count) as f64 / (max_count - min_count) as f64;
    let span = opts.max_font.saturating_sub(opts.min_font) as f64;
    opts.min_font + (t * span).round() as u32
}

/// Approximate pixel extent of `word` at `size`.
fn text_extent(word: &str, size: u32) -> (u32, u32) {
    let chars = word.chars().count() as f64;
    ((chars * size as f64 * 0.6).ceil() as u32, size)
}

/// Place `words` (already sorted, most frequent first) on a canvas of
/// `canvas` pixels along an Archimedean spiral from the centre. Words that
/// do not fit anywhere without overlapping are skipped.
pub fn layout(words: &[WordCount], canvas: (u32, u32), opts: &LayoutOptions) -> Vec<PlacedWord> {
    let Some(max_count) = words.iter().map(|w| w.count).max() else {
        return Vec::new();
    };
    let min_count = words.iter().map(|w| w.count).min().unwrap_or(max_count);

    let (cw, ch) = (canvas.0 as f64, canvas.1 as f64);
    let (cx, cy) = (cw / 2.0, ch / 2.0);
    let aspect = if cw > 0.0 { ch / cw } else { 1.0 };
    let max_radius = (cw * cw + ch * ch).sqrt() / 2.0;

    let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());
    for w in words {
        let size = font_size(w.count, min_count, max_count, opts);
        let (width, height) = text_extent(&w.word, size);
        if width > canvas.0 || height > canvas.1 {
            continue;
        }

        let mut step = 0u32;
        loop {
            let theta = step as f64 * 0.1;
            let radius = 2.0 * theta;
            if radius > max_radius {
                break;
            }
            let x = (cx + radius * theta.cos() - width as f64 / 2.0).round() as i32;
            let y = (cy + radius * aspect * theta.sin() - height as f64 / 2.0).round() as i32;
            let inside = x >= 0
                && y >= 0
                && x + width as i32 <= canvas.0 as i32
                && y + height as i32 <= canvas.1 as i32;
            if inside
                && !placed
                    .iter()
                    .any(|p| p.overlaps(x, y, width, height, opts.margin))
            {
                placed.push(PlacedWord {
                    word: w.word.clone(),
                    font_size: size,
                    x,
                    y,
                    width,
                    height,
                });
                break;
            }
            step += 1;
        }
    }
    placed
}

pub(crate) fn draw_word_cloud(root: &Canvas<'_>, spec: &WordCloudSpec) -> Result<(), ChartError> {
    let area = root.titled(&spec.title, (FONT, 24))?;
    let words = word_frequencies(&spec.corpus, MAX_WORDS);
    let placed = layout(&words, area.dim_in_pixel(), &LayoutOptions::default());

    let n = placed.len();
    for (i, p) in placed.iter().enumerate() {
        let style = (FONT, p.font_size as f64)
            .into_font()
            .color(&Palette::Viridis.color(i, n));
        area.draw(&Text::new(p.word.clone(), (p.x, p.y), style))?;
    }
    Ok(())
}
