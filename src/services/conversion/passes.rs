// Transformation Passes
// Ordered text rewriting stages; each pass works on the previous pass's output

use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

use super::rules::{
    comparison_table, contraction_table, emotional_table, exclamation_table,
    insert_after_first_word, intensifier_table, personal_table, phrase_table, reaction_table,
    structure_table, vocabulary_table, BREAK_WORDS, FILLERS, LEAD_INS, PERSONAL_THOUGHTS,
};

const SENTENCE_DELIMITER: &str = ". ";
const MAX_SENTENCE_WORDS: usize = 15;
/// First word index where a break word may split a sentence.
const BREAK_SEARCH_START: usize = 7;
/// Break words in the last few words are ignored.
const BREAK_SEARCH_TAIL: usize = 3;

const FILLER_PROBABILITY: f64 = 0.2;
const LEAD_IN_PROBABILITY: f64 = 0.4;
const PERSONAL_THOUGHT_PROBABILITY: f64 = 0.3;

/// The conversion pipeline, in execution order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Pass {
    PhraseReplacement,
    VocabularySimplification,
    StructuralSimplification,
    ContractionInjection,
    SentenceSplitting,
    StylisticEmbellishment,
    PunctuationNormalization,
}

impl Pass {
    /// Later passes rely on earlier output; never reorder.
    pub const ORDER: [Pass; 7] = [
        Pass::PhraseReplacement,
        Pass::VocabularySimplification,
        Pass::StructuralSimplification,
        Pass::ContractionInjection,
        Pass::SentenceSplitting,
        Pass::StylisticEmbellishment,
        Pass::PunctuationNormalization,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pass::PhraseReplacement => "phrase_replacement",
            Pass::VocabularySimplification => "vocabulary_simplification",
            Pass::StructuralSimplification => "structural_simplification",
            Pass::ContractionInjection => "contraction_injection",
            Pass::SentenceSplitting => "sentence_splitting",
            Pass::StylisticEmbellishment => "stylistic_embellishment",
            Pass::PunctuationNormalization => "punctuation_normalization",
        }
    }

    /// Only stylistic embellishment draws from `rng`.
    pub fn apply<R: Rng>(&self, text: &str, rng: &mut R) -> String {
        match self {
            Pass::PhraseReplacement => replace_phrases(text),
            Pass::VocabularySimplification => simplify_vocabulary(text),
            Pass::StructuralSimplification => simplify_structures(text),
            Pass::ContractionInjection => inject_contractions(text),
            Pass::SentenceSplitting => split_long_sentences(text),
            Pass::StylisticEmbellishment => embellish(text, rng),
            Pass::PunctuationNormalization => simplify_punctuation(text),
        }
    }
}

pub fn replace_phrases(text: &str) -> String {
    phrase_table().apply(text)
}

pub fn simplify_vocabulary(text: &str) -> String {
    vocabulary_table().apply(text)
}

pub fn simplify_structures(text: &str) -> String {
    structure_table().apply(text)
}

pub fn inject_contractions(text: &str) -> String {
    contraction_table().apply(text)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn split_sentence(sentence: &str) -> String {
    let words: Vec<&str> = sentence.split(' ').collect();
    if words.len() <= MAX_SENTENCE_WORDS {
        return sentence.to_string();
    }

    let search_end = words.len() - BREAK_SEARCH_TAIL;
    for i in BREAK_SEARCH_START..search_end {
        if BREAK_WORDS.contains(&words[i].to_lowercase().as_str()) {
            // The break word itself is dropped.
            let first = words[..i].join(" ");
            let second = words[i + 1..].join(" ");
            if !second.is_empty() {
                return format!("{}{}{}", first, SENTENCE_DELIMITER, capitalize_first(&second));
            }
        }
    }

    let mid = words.len() / 2;
    let first = words[..mid].join(" ");
    let second = words[mid..].join(" ");
    format!("{}{}{}", first, SENTENCE_DELIMITER, capitalize_first(&second))
}

/// Split every `". "`-delimited chunk longer than 15 words once, at the
/// first break word in the eligible window or else at the midpoint.
pub fn split_long_sentences(text: &str) -> String {
    text.split(SENTENCE_DELIMITER)
        .map(split_sentence)
        .collect::<Vec<_>>()
        .join(SENTENCE_DELIMITER)
}

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

fn add_personal_touch<R: Rng>(text: &str, rng: &mut R) -> String {
    let framed = personal_table().apply(text);
    framed
        .split(SENTENCE_DELIMITER)
        .map(|sentence| {
            if rng.gen_bool(FILLER_PROBABILITY) {
                insert_after_first_word(sentence, pick(rng, FILLERS))
            } else {
                sentence.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(SENTENCE_DELIMITER)
}

fn add_emotional_expressions(text: &str) -> String {
    reaction_table().apply(&emotional_table().apply(text))
}

fn add_lead_ins<R: Rng>(text: &str, rng: &mut R) -> String {
    text.split(SENTENCE_DELIMITER)
        .enumerate()
        .map(|(index, sentence)| {
            if index == 0 {
                sentence.to_string()
            } else if rng.gen_bool(LEAD_IN_PROBABILITY) {
                format!("{}{}", pick(rng, LEAD_INS), sentence)
            } else if rng.gen_bool(PERSONAL_THOUGHT_PROBABILITY) {
                format!("{}{}", pick(rng, PERSONAL_THOUGHTS), sentence.to_lowercase())
            } else {
                sentence.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(SENTENCE_DELIMITER)
}

/// Intensifiers, exclamations, comparisons, personal framing with random
/// fillers, emotional words, then random lead-ins on every sentence but the first.
pub fn embellish<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut result = intensifier_table().apply(text);
    result = exclamation_table().apply(&result);
    result = comparison_table().apply(&result);
    result = add_personal_touch(&result, rng);
    result = add_emotional_expressions(&result);
    add_lead_ins(&result, rng)
}

fn repeated_periods_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\.+").expect("repeated periods regex"))
}

fn whitespace_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"))
}

pub fn simplify_punctuation(text: &str) -> String {
    let mut s = text.replace(';', ".");
    s = s.replace(": ", ". ");
    s = s.replace(", and ", " and ");
    s = repeated_periods_re().replace_all(&s, ".").into_owned();
    s = whitespace_run_re().replace_all(&s, " ").into_owned();
    s.trim().to_string()
}
