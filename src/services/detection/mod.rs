// Detection Module
// Heuristic AI text detection organized into specialized submodules:
// - vocabulary: closed word lists the signals count against
// - features: builds the feature vector from tokens and sentences
// - scoring: weights fired signals and derives label + confidence
// - classifier: public analyze entry points

pub mod vocabulary;
pub mod features;
pub mod scoring;
pub mod classifier;

// Re-export commonly used functions
pub use features::{extract_features, MIN_TOKENS};
pub use scoring::{decide, score, ScoredSignals, DEFAULT_CONFIDENCE};
pub use classifier::{analyze, analyze_report};
