// Transformation Engine
// convert(text) -> { original_text, converted_text }

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::models::ConversionResult;
use super::passes::Pass;

/// Runs the conversion pipeline with an optionally seeded random source.
///
/// Unseeded converters draw fresh entropy per call, so identical input can
/// convert differently each time. A seeded converter rebuilds its generator
/// from the seed on every call and is fully reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextConverter {
    seed: Option<u64>,
}

impl TextConverter {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn convert(&self, text: &str) -> ConversionResult {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        convert_with_rng(text, &mut rng)
    }
}

/// Convert with entropy-seeded randomness.
pub fn convert(text: &str) -> ConversionResult {
    TextConverter::default().convert(text)
}

/// Convert using the caller's random source for the embellishment pass.
pub fn convert_with_rng<R: Rng>(text: &str, rng: &mut R) -> ConversionResult {
    let mut converted = text.to_string();
    for pass in Pass::ORDER {
        converted = pass.apply(&converted, rng);
        trace!(pass = pass.name(), len = converted.len(), "conversion.pass");
    }

    debug!(
        input_len = text.len(),
        output_len = converted.len(),
        "conversion.done"
    );

    ConversionResult {
        original_text: text.to_string(),
        converted_text: converted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Furthermore, it is important to note that the comprehensive methodology will facilitate significant outcomes for numerous organizations and it is clear that the results are superior to previous approaches. Additionally, there are many benefits; the team do not utilize outdated tools. This is good. We found interesting results.";

    #[test]
    fn test_keeps_original_text() {
        let result = TextConverter::seeded(1).convert(SAMPLE);
        assert_eq!(result.original_text, SAMPLE);
        assert_ne!(result.converted_text, SAMPLE);
    }

    #[test]
    fn test_seeded_converter_is_reproducible() {
        let converter = TextConverter::seeded(99);
        assert_eq!(converter.convert(SAMPLE), converter.convert(SAMPLE));
    }

    #[test]
    fn test_deterministic_rewrites_survive_pipeline() {
        for seed in 0..16 {
            let out = TextConverter::seeded(seed).convert(SAMPLE).converted_text;
            assert!(out.contains("And,"), "seed {}: {}", seed, out);
            assert!(!out.contains("utilize"), "seed {}: {}", seed, out);
            assert!(!out.contains(';'), "seed {}: {}", seed, out);
            assert!(!out.contains("  "), "seed {}: {}", seed, out);
            assert!(out.contains("don't"), "seed {}: {}", seed, out);
            assert!(out.contains("better than"), "seed {}: {}", seed, out);
        }
    }

    #[test]
    fn test_output_never_empty() {
        for text in [".", "a", ";", "  x  ", "there is a", ": and", "...", "Ok"] {
            for seed in 0..8 {
                let out = TextConverter::seeded(seed).convert(text).converted_text;
                assert!(!out.is_empty(), "{:?} -> empty", text);
            }
        }
    }

    #[test]
    fn test_unseeded_convert_runs() {
        let result = convert("It is extremely important to utilize this.");
        assert!(result.converted_text.contains("use"));
    }

    #[test]
    fn test_non_ascii_input() {
        let text = "Über café naïve résumé — ça va? Très bien; merci: oui.";
        let out = TextConverter::seeded(3).convert(text).converted_text;
        assert!(!out.is_empty());
        assert!(!out.contains(';'));
    }
}
