// ScribeCheck Data Models
// Request/response shapes shared by the engines, the api layer and the CLI

use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Labels ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Ai,
    Human,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Ai => "ai",
            Label::Human => "human",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which accumulator a fired signal feeds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Machine,
    Human,
}

// ============ Requests ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalyzeRequest {
    pub texts: Vec<String>,
}

// ============ Classification ============

/// Wire shape: `{ "prediction": "ai" | "human", "confidence": 0.93, "word_count": 42 }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "prediction")]
    pub label: Label,
    pub confidence: f64,
    pub word_count: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub label: Label,
    pub confidence: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScorePair {
    pub machine_score: f64,
    pub human_score: f64,
}

impl ScorePair {
    pub fn add(&mut self, side: Side, weight: f64) {
        match side {
            Side::Machine => self.machine_score += weight,
            Side::Human => self.human_score += weight,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.machine_score == 0.0 && self.human_score == 0.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceLengthStats {
    pub mean: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub token_count: usize,
    pub formal_transition_ratio: f64,
    pub casual_transition_ratio: f64,
    pub contraction_ratio: f64,
    /// Only computed when the text has more than two sentences.
    pub sentence_lengths: Option<SentenceLengthStats>,
    pub formal_vocab_ratio: f64,
    pub informal_word_hits: usize,
    pub ai_phrase_hits: usize,
    pub personal_pronoun_ratio: f64,
    pub lexical_repetition_ratio: f64,
    pub emotional_word_hits: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiredSignal {
    pub name: &'static str,
    pub side: Side,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
}

/// Classification plus everything that went into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub result: ClassificationResult,
    /// `None` when the text fell under the insufficient-data floor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
    pub scores: ScorePair,
    pub signals: Vec<FiredSignal>,
    pub statistics: TextStatistics,
}

// ============ Batch ============

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItemResult {
    pub index: usize,
    #[serde(flatten)]
    pub result: Option<ClassificationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchAnalyzeResponse {
    pub results: Vec<BatchItemResult>,
    pub total_processed: usize,
}

// ============ Conversion ============

/// Wire shape: `{ "original_text": "...", "converted_text": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub original_text: String,
    pub converted_text: String,
}
