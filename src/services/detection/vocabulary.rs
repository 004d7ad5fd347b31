// Classifier Vocabularies
// Closed word lists the feature extractor counts tokens against

pub const FORMAL_TRANSITIONS: &[&str] = &[
    "however",
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
    "therefore",
    "nevertheless",
    "subsequently",
    "accordingly",
];

pub const CASUAL_TRANSITIONS: &[&str] = &[
    "but", "so", "and", "also", "plus", "anyway", "well", "like", "just", "actually",
];

pub const CONTRACTIONS: &[&str] = &[
    "don't", "won't", "can't", "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't",
    "hadn't", "you're", "we're", "they're", "it's", "that's", "i'm", "he's", "she's",
];

pub const FORMAL_WORDS: &[&str] = &[
    "utilize",
    "demonstrate",
    "facilitate",
    "establish",
    "implement",
    "comprehensive",
    "significant",
    "substantial",
    "optimize",
    "leverage",
    "paradigm",
    "methodology",
];

pub const INFORMAL_WORDS: &[&str] = &[
    "yeah", "okay", "ok", "gonna", "wanna", "kinda", "sorta", "pretty", "really", "super",
    "totally", "awesome", "cool", "weird", "stuff", "things",
];

/// Matched by substring containment against the lowercased text, not per token.
pub const STOCK_PHRASES: &[&str] = &[
    "it is important to note",
    "in conclusion",
    "in summary",
    "as a result",
    "on the other hand",
    "it should be noted",
    "furthermore",
    "additionally",
];

pub const PERSONAL_PRONOUNS: &[&str] = &["i", "me", "my", "myself", "we", "us", "our", "you"];

pub const EMOTIONAL_WORDS: &[&str] = &[
    "love", "hate", "amazing", "terrible", "excited", "frustrated", "happy", "sad", "angry",
    "surprised", "wow", "omg",
];

/// Count tokens that appear verbatim in `vocab`.
pub fn count_in(tokens: &[String], vocab: &[&str]) -> usize {
    tokens.iter().filter(|t| vocab.contains(&t.as_str())).count()
}
