// Feature Extractor
// Computes the fixed set of lexical and structural signals used for scoring

use std::collections::HashSet;

use crate::models::{FeatureVector, SentenceLengthStats};
use crate::services::text_processor::sentence_word_counts;
use super::vocabulary::{
    count_in, CASUAL_TRANSITIONS, CONTRACTIONS, EMOTIONAL_WORDS, FORMAL_TRANSITIONS,
    FORMAL_WORDS, INFORMAL_WORDS, PERSONAL_PRONOUNS, STOCK_PHRASES,
};

/// Below this many tokens the text is too short to analyze reliably.
pub const MIN_TOKENS: usize = 10;

/// Sentence statistics need at least this many sentences plus one.
const MIN_SENTENCES_FOR_VARIANCE: usize = 2;

/// Mean and population variance of `values`. `None` for an empty slice.
pub fn mean_and_variance(values: &[usize]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    Some((mean, variance))
}

/// Number of stock phrases contained anywhere in the lowercased text (one hit per phrase).
pub fn count_stock_phrases(lowered_text: &str) -> usize {
    STOCK_PHRASES
        .iter()
        .filter(|phrase| lowered_text.contains(**phrase))
        .count()
}

/// `1 - distinct/total`; zero for an empty token list.
pub fn repetition_ratio(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    1.0 - unique.len() as f64 / tokens.len() as f64
}

/// Extract the feature vector.
///
/// Returns `None` when there are fewer than [`MIN_TOKENS`] tokens; callers
/// treat that as insufficient data and skip scoring.
pub fn extract_features(
    lowered_text: &str,
    tokens: &[String],
    sentences: &[&str],
) -> Option<FeatureVector> {
    let token_count = tokens.len();
    if token_count < MIN_TOKENS {
        return None;
    }
    let total = token_count as f64;
    let ratio = |vocab: &[&str]| count_in(tokens, vocab) as f64 / total;

    let sentence_lengths = if sentences.len() > MIN_SENTENCES_FOR_VARIANCE {
        mean_and_variance(&sentence_word_counts(sentences))
            .map(|(mean, variance)| SentenceLengthStats { mean, variance })
    } else {
        None
    };

    Some(FeatureVector {
        token_count,
        formal_transition_ratio: ratio(FORMAL_TRANSITIONS),
        casual_transition_ratio: ratio(CASUAL_TRANSITIONS),
        contraction_ratio: ratio(CONTRACTIONS),
        sentence_lengths,
        formal_vocab_ratio: ratio(FORMAL_WORDS),
        informal_word_hits: count_in(tokens, INFORMAL_WORDS),
        ai_phrase_hits: count_stock_phrases(lowered_text),
        personal_pronoun_ratio: ratio(PERSONAL_PRONOUNS),
        lexical_repetition_ratio: repetition_ratio(tokens),
        emotional_word_hits: count_in(tokens, EMOTIONAL_WORDS),
    })
}
