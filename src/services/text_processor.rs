// Text Processing Service
// Tokenization, sentence segmentation and input normalization shared by both engines

use crate::models::TextStatistics;
use regex::Regex;
use std::sync::OnceLock;

fn sentence_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence break regex"))
}

fn odd_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\u{3000}\u{00A0}\u{2007}\u{202F}]").expect("odd space regex"))
}

fn horizontal_ws_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t\x0C\x0B]+").expect("horizontal whitespace regex"))
}

/// Lowercase the text and split it into whitespace-delimited tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split text on runs of `.`, `!` or `?`, returning trimmed non-empty sentences.
pub fn segment(text: &str) -> Vec<&str> {
    sentence_break_re()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Number of non-empty whitespace-delimited substrings in the original text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Word count of each sentence.
pub fn sentence_word_counts(sentences: &[&str]) -> Vec<usize> {
    sentences.iter().map(|s| count_words(s)).collect()
}

pub fn text_statistics(text: &str) -> TextStatistics {
    let word_count = count_words(text);
    let sentence_count = segment(text).len();
    let avg_sentence_length = if sentence_count > 0 {
        let avg = word_count as f64 / sentence_count as f64;
        (avg * 100.0).round() / 100.0
    } else {
        0.0
    };

    TextStatistics {
        word_count,
        sentence_count,
        avg_sentence_length,
    }
}

/// Normalize punctuation and spacing of extracted document text
pub fn normalize_punctuation(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = text.to_string();

    // Replace smart quotes
    s = s.replace(['\u{201c}', '\u{201d}'], "\"")
         .replace(['\u{2018}', '\u{2019}'], "'");

    // Replace em/en dashes and ellipsis
    s = s.replace(['\u{2014}', '\u{2013}'], "-")
         .replace('\u{2026}', "...");

    s = odd_space_re().replace_all(&s, " ").to_string();

    // Normalize line endings
    s = s.replace("\r\n", "\n").replace('\r', "\n");

    s = horizontal_ws_re().replace_all(&s, " ").to_string();

    // Strip each line
    s = s.lines()
         .map(|ln| ln.trim())
         .collect::<Vec<_>>()
         .join("\n");

    s.trim().to_string()
}

/// Single-line preview for logs and CLI output
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}
