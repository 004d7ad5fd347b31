// Scoring Engine
// Turns a feature vector into competing machine/human scores and a labelled decision
//
// Every signal adds a fixed weight to exactly one side when its threshold
// holds. Accumulation is plain addition, so signal order never changes totals.

use crate::models::{Decision, FeatureVector, FiredSignal, Label, ScorePair, Side};

/// Confidence used when nothing fired or the text was too short.
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

const FORMAL_TRANSITION_RATIO: f64 = 0.01;
const CASUAL_TRANSITION_RATIO: f64 = 0.015;
const CONTRACTION_RATIO: f64 = 0.008;
const NO_CONTRACTION_MIN_TOKENS: usize = 25;
const HIGH_VARIANCE: f64 = 30.0;
const LOW_VARIANCE: f64 = 8.0;
const UNIFORM_MEAN_MIN: f64 = 10.0;
const UNIFORM_MEAN_MAX: f64 = 25.0;
const FORMAL_VOCAB_RATIO: f64 = 0.01;
const PERSONAL_PRONOUN_RATIO: f64 = 0.015;
const HIGH_REPETITION: f64 = 0.3;
const LOW_REPETITION: f64 = 0.15;

const W_FORMAL_TRANSITIONS: f64 = 1.5;
const W_CASUAL_TRANSITIONS: f64 = 1.5;
const W_CONTRACTIONS: f64 = 2.0;
const W_NO_CONTRACTIONS: f64 = 1.2;
const W_HIGH_VARIANCE: f64 = 1.8;
const W_UNIFORM_SENTENCES: f64 = 1.5;
const W_FORMAL_VOCAB: f64 = 1.3;
const W_INFORMAL_WORDS: f64 = 1.7;
const W_STOCK_PHRASE: f64 = 1.8;
const W_PERSONAL_PRONOUNS: f64 = 1.6;
const W_HIGH_REPETITION: f64 = 1.2;
const W_LOW_REPETITION: f64 = 1.0;
const W_EMOTIONAL_WORDS: f64 = 1.4;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoredSignals {
    pub scores: ScorePair,
    pub signals: Vec<FiredSignal>,
}

impl ScoredSignals {
    fn fire(&mut self, name: &'static str, side: Side, weight: f64) {
        self.scores.add(side, weight);
        self.signals.push(FiredSignal { name, side, weight });
    }
}

/// Accumulate machine/human scores from the features.
pub fn score(features: &FeatureVector) -> ScoredSignals {
    let mut out = ScoredSignals::default();

    if features.formal_transition_ratio > FORMAL_TRANSITION_RATIO {
        out.fire("formal_transitions", Side::Machine, W_FORMAL_TRANSITIONS);
    } else if features.casual_transition_ratio > CASUAL_TRANSITION_RATIO {
        out.fire("casual_transitions", Side::Human, W_CASUAL_TRANSITIONS);
    }

    if features.contraction_ratio > CONTRACTION_RATIO {
        out.fire("contractions", Side::Human, W_CONTRACTIONS);
    } else if features.contraction_ratio == 0.0 && features.token_count > NO_CONTRACTION_MIN_TOKENS {
        out.fire("no_contractions", Side::Machine, W_NO_CONTRACTIONS);
    }

    if let Some(stats) = features.sentence_lengths {
        if stats.variance > HIGH_VARIANCE {
            out.fire("varied_sentence_length", Side::Human, W_HIGH_VARIANCE);
        } else if stats.variance < LOW_VARIANCE
            && stats.mean > UNIFORM_MEAN_MIN
            && stats.mean < UNIFORM_MEAN_MAX
        {
            out.fire("uniform_sentence_length", Side::Machine, W_UNIFORM_SENTENCES);
        }
    }

    if features.formal_vocab_ratio > FORMAL_VOCAB_RATIO {
        out.fire("formal_vocabulary", Side::Machine, W_FORMAL_VOCAB);
    }

    if features.informal_word_hits > 0 {
        out.fire("informal_words", Side::Human, W_INFORMAL_WORDS);
    }

    if features.ai_phrase_hits > 0 {
        out.fire(
            "stock_phrases",
            Side::Machine,
            W_STOCK_PHRASE * features.ai_phrase_hits as f64,
        );
    }

    if features.personal_pronoun_ratio > PERSONAL_PRONOUN_RATIO {
        out.fire("personal_pronouns", Side::Human, W_PERSONAL_PRONOUNS);
    }

    if features.lexical_repetition_ratio > HIGH_REPETITION {
        out.fire("high_repetition", Side::Machine, W_HIGH_REPETITION);
    } else if features.lexical_repetition_ratio < LOW_REPETITION {
        out.fire("low_repetition", Side::Human, W_LOW_REPETITION);
    }

    if features.emotional_word_hits > 0 {
        out.fire("emotional_words", Side::Human, W_EMOTIONAL_WORDS);
    }

    out
}

/// Derive label and confidence from the score pair.
///
/// Works in percent units and rounds to a whole percent before returning a
/// fraction, so confidences are always multiples of 0.01.
pub fn decide(scores: &ScorePair) -> Decision {
    if scores.is_zero() {
        return Decision {
            label: Label::Human,
            confidence: DEFAULT_CONFIDENCE,
        };
    }

    let machine = scores.machine_score;
    let human = scores.human_score;
    let label = if machine > human { Label::Ai } else { Label::Human };

    let diff = (machine - human).abs();
    let total = machine + human;

    let mut percent = if diff >= 2.0 {
        (92.0 + diff * 2.0).min(98.0)
    } else if diff >= 1.0 {
        (88.0 + diff * 3.0).min(91.0)
    } else if diff >= 0.5 {
        (82.0 + diff * 10.0).min(87.0)
    } else if total > 0.0 {
        (75.0 + diff * 20.0).max(70.0)
    } else {
        75.0
    };

    let dominant = machine.max(human);
    if dominant >= 3.0 {
        percent = (percent + 5.0).min(98.0);
    } else if dominant >= 2.5 {
        percent = (percent + 3.0).min(95.0);
    }

    Decision {
        label,
        confidence: percent.round() / 100.0,
    }
}

/// Decision for texts under the insufficient-data floor.
pub fn insufficient_data_decision() -> Decision {
    Decision {
        label: Label::Human,
        confidence: DEFAULT_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentenceLengthStats;

    fn pair(machine_score: f64, human_score: f64) -> ScorePair {
        ScorePair {
            machine_score,
            human_score,
        }
    }

    fn quiet_features() -> FeatureVector {
        FeatureVector {
            token_count: 12,
            formal_transition_ratio: 0.0,
            casual_transition_ratio: 0.0,
            contraction_ratio: 0.0,
            sentence_lengths: None,
            formal_vocab_ratio: 0.0,
            informal_word_hits: 0,
            ai_phrase_hits: 0,
            personal_pronoun_ratio: 0.0,
            lexical_repetition_ratio: 0.2,
            emotional_word_hits: 0,
        }
    }

    #[test]
    fn test_quiet_features_fire_nothing() {
        let scored = score(&quiet_features());
        assert!(scored.scores.is_zero());
        assert!(scored.signals.is_empty());
    }

    #[test]
    fn test_formal_checked_before_casual() {
        let mut f = quiet_features();
        f.formal_transition_ratio = 0.05;
        f.casual_transition_ratio = 0.05;
        let scored = score(&f);
        assert_eq!(scored.scores.machine_score, 1.5);
        assert_eq!(scored.scores.human_score, 0.0);
        assert_eq!(scored.signals[0].name, "formal_transitions");
    }

    #[test]
    fn test_missing_contractions_need_long_text() {
        let mut f = quiet_features();
        assert!(score(&f).scores.is_zero());
        f.token_count = 26;
        let scored = score(&f);
        assert_eq!(scored.scores.machine_score, 1.2);
    }

    #[test]
    fn test_uniform_sentences_need_mid_mean() {
        let mut f = quiet_features();
        f.sentence_lengths = Some(SentenceLengthStats { mean: 9.0, variance: 2.0 });
        assert!(score(&f).scores.is_zero());
        f.sentence_lengths = Some(SentenceLengthStats { mean: 14.0, variance: 2.0 });
        assert_eq!(score(&f).scores.machine_score, 1.5);
        f.sentence_lengths = Some(SentenceLengthStats { mean: 14.0, variance: 31.0 });
        assert_eq!(score(&f).scores.human_score, 1.8);
    }

    #[test]
    fn test_phrase_weight_scales_with_hits() {
        let mut f = quiet_features();
        f.ai_phrase_hits = 3;
        let scored = score(&f);
        assert!((scored.scores.machine_score - 5.4).abs() < 1e-9);
    }

    #[test]
    fn test_each_signal_feeds_one_side() {
        let f = FeatureVector {
            token_count: 40,
            formal_transition_ratio: 0.05,
            casual_transition_ratio: 0.0,
            contraction_ratio: 0.05,
            sentence_lengths: Some(SentenceLengthStats { mean: 12.0, variance: 40.0 }),
            formal_vocab_ratio: 0.05,
            informal_word_hits: 2,
            ai_phrase_hits: 1,
            personal_pronoun_ratio: 0.05,
            lexical_repetition_ratio: 0.4,
            emotional_word_hits: 1,
        };
        let scored = score(&f);
        let machine: f64 = scored
            .signals
            .iter()
            .filter(|s| s.side == Side::Machine)
            .map(|s| s.weight)
            .sum();
        let human: f64 = scored
            .signals
            .iter()
            .filter(|s| s.side == Side::Human)
            .map(|s| s.weight)
            .sum();
        assert!((scored.scores.machine_score - machine).abs() < 1e-9);
        assert!((scored.scores.human_score - human).abs() < 1e-9);
        // formal transitions, formal vocab, stock phrases, high repetition
        assert!((machine - (1.5 + 1.3 + 1.8 + 1.2)).abs() < 1e-9);
        // contractions, variance, informal, pronouns, emotional
        assert!((human - (2.0 + 1.8 + 1.7 + 1.6 + 1.4)).abs() < 1e-9);
    }

    #[test]
    fn test_decide_zero_scores() {
        let d = decide(&ScorePair::default());
        assert_eq!(d.label, Label::Human);
        assert_eq!(d.confidence, 0.85);
    }

    #[test]
    fn test_decide_bands() {
        // diff 1.5 -> min(91, 92.5)
        let d = decide(&pair(1.5, 0.0));
        assert_eq!(d.label, Label::Ai);
        assert_eq!(d.confidence, 0.91);

        // diff 2.0 -> 96, dominant below 2.5
        let d = decide(&pair(0.0, 2.0));
        assert_eq!(d.label, Label::Human);
        assert_eq!(d.confidence, 0.96);

        // diff 0.7 -> 87, dominant 2.7 -> +3
        let d = decide(&pair(2.7, 2.0));
        assert_eq!(d.label, Label::Ai);
        assert_eq!(d.confidence, 0.90);

        // diff 0.3 -> 81
        let d = decide(&pair(1.3, 1.0));
        assert_eq!(d.confidence, 0.81);
    }

    #[test]
    fn test_decide_tie_is_human() {
        let d = decide(&pair(1.5, 1.5));
        assert_eq!(d.label, Label::Human);
        assert_eq!(d.confidence, 0.75);
    }

    #[test]
    fn test_dominant_boost_caps() {
        assert_eq!(decide(&pair(3.0, 0.0)).confidence, 0.98);
        // 97 from the diff band, then capped at 95 by the 2.5 boost
        assert_eq!(decide(&pair(2.5, 0.0)).confidence, 0.95);
        assert_eq!(decide(&pair(11.2, 1.0)).confidence, 0.98);
    }

    #[test]
    fn test_confidence_range_for_nonzero_scores() {
        let weights = [0.0, 1.0, 1.2, 1.4, 1.5, 1.8, 2.0, 2.7, 3.3, 5.0, 9.1];
        for &m in &weights {
            for &h in &weights {
                let d = decide(&pair(m, h));
                if m == 0.0 && h == 0.0 {
                    assert_eq!(d.confidence, 0.85);
                } else {
                    assert!(
                        (0.70..=0.98).contains(&d.confidence),
                        "{} {} -> {}",
                        m,
                        h,
                        d.confidence
                    );
                }
            }
        }
    }
}
