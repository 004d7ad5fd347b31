// Conversion Module
// Rewrites machine-sounding text into casual prose:
// - rules: static rewrite tables and word lists
// - passes: the ordered rewriting stages
// - converter: pipeline entry point with injectable randomness

pub mod rules;
pub mod passes;
pub mod converter;

pub use converter::{convert, convert_with_rng, TextConverter};
pub use passes::{
    embellish,
    inject_contractions,
    replace_phrases,
    simplify_punctuation,
    simplify_structures,
    simplify_vocabulary,
    split_long_sentences,
    Pass,
};
pub use rules::RuleTable;
