// Classification Engine
// analyze(text) -> { prediction, confidence, word_count }

use tracing::debug;

use crate::models::{AnalysisReport, ClassificationResult};
use crate::services::text_processor::{count_words, segment, text_statistics, tokenize};
use super::features::extract_features;
use super::scoring::{decide, insufficient_data_decision, score, ScoredSignals};

/// Classify text as machine-generated or human-written.
///
/// Total over any string; callers reject blank input before getting here.
pub fn analyze(text: &str) -> ClassificationResult {
    analyze_report(text).result
}

/// Classify text and keep the features, scores and fired signals.
pub fn analyze_report(text: &str) -> AnalysisReport {
    let lowered = text.to_lowercase();
    let tokens = tokenize(text);
    let sentences = segment(text);
    let word_count = count_words(text);

    let features = extract_features(&lowered, &tokens, &sentences);
    let (decision, scored) = match &features {
        Some(f) => {
            let scored = score(f);
            (decide(&scored.scores), scored)
        }
        None => {
            debug!(tokens = tokens.len(), "analysis.insufficient_data");
            (insufficient_data_decision(), ScoredSignals::default())
        }
    };

    debug!(
        tokens = tokens.len(),
        sentences = sentences.len(),
        machine_score = scored.scores.machine_score,
        human_score = scored.scores.human_score,
        label = %decision.label,
        confidence = decision.confidence,
        "analysis.decided"
    );

    AnalysisReport {
        result: ClassificationResult {
            label: decision.label,
            confidence: decision.confidence,
            word_count,
        },
        features,
        scores: scored.scores,
        signals: scored.signals,
        statistics: text_statistics(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;

    const MACHINE_TEXT: &str = "Furthermore, it is important to note that the comprehensive methodology will facilitate significant outcomes. Additionally, the implementation should utilize a substantial framework. In conclusion, the paradigm demonstrates considerable value for organizations.";

    const HUMAN_TEXT: &str = "Honestly I love this stuff so much, it's kinda weird but really cool! We went there yesterday and it was amazing. You should totally try it sometime, you know?";

    #[test]
    fn test_short_text_defaults_to_human() {
        for text in [
            "I think this is kinda cool, you know?",
            "Furthermore, in conclusion, additionally.",
            "x",
        ] {
            let result = analyze(text);
            assert_eq!(result.label, Label::Human);
            assert_eq!(result.confidence, 0.85);
        }
    }

    #[test]
    fn test_machine_text() {
        let report = analyze_report(MACHINE_TEXT);
        assert_eq!(report.result.label, Label::Ai);
        assert_eq!(report.result.confidence, 0.98);
        assert_eq!(report.result.word_count, 31);
        assert!((report.scores.machine_score - 11.2).abs() < 1e-9);
        assert_eq!(report.scores.human_score, 1.0);
        assert!(report.signals.iter().any(|s| s.name == "uniform_sentence_length"));
    }

    #[test]
    fn test_human_text() {
        let report = analyze_report(HUMAN_TEXT);
        assert_eq!(report.result.label, Label::Human);
        assert!(report.result.confidence >= 0.82);
        assert_eq!(report.scores.machine_score, 0.0);
        assert!((report.scores.human_score - 9.2).abs() < 1e-9);
    }

    #[test]
    fn test_no_signal_text() {
        let report = analyze_report("red cat sat on a mat near a red dog on mats");
        assert!(report.features.is_some());
        assert!(report.scores.is_zero());
        assert_eq!(report.result.label, Label::Human);
        assert_eq!(report.result.confidence, 0.85);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        for text in [MACHINE_TEXT, HUMAN_TEXT] {
            assert_eq!(analyze(text), analyze(text));
        }
    }

    #[test]
    fn test_word_count_uses_original_text() {
        let result = analyze("  The QUICK   brown\tfox\n jumps ");
        assert_eq!(result.word_count, 5);
    }

    #[test]
    fn test_insufficient_report_has_no_features() {
        let report = analyze_report("too short to judge");
        assert!(report.features.is_none());
        assert!(report.signals.is_empty());
        assert_eq!(report.statistics.word_count, 4);
    }
}
