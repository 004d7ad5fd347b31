// Rule Tables
// Static rewrite tables for the conversion passes, compiled once per process

use regex::{NoExpand, Regex};
use std::sync::OnceLock;

/// How a table's source patterns are interpreted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum MatchKind {
    /// Case-insensitive literal text anywhere.
    Literal,
    /// Case-insensitive literal bounded by word boundaries.
    WholeWord,
    /// Case-insensitive regex; the replacement may reference groups as `${n}`.
    Pattern,
}

#[derive(Debug)]
struct Rule {
    pattern: Regex,
    replacement: &'static str,
    expand: bool,
}

/// Ordered list of rewrite rules, applied one after another.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    fn build(kind: MatchKind, entries: &[(&str, &'static str)]) -> Self {
        let rules = entries
            .iter()
            .map(|(source, replacement)| {
                let pattern = match kind {
                    MatchKind::Literal => format!("(?i){}", regex::escape(source)),
                    MatchKind::WholeWord => format!(r"(?i)\b{}\b", regex::escape(source)),
                    MatchKind::Pattern => format!("(?i){}", source),
                };
                Rule {
                    pattern: Regex::new(&pattern).expect("rule table regex"),
                    replacement: *replacement,
                    expand: kind == MatchKind::Pattern,
                }
            })
            .collect();
        Self { rules }
    }

    /// Apply every rule in order; each rule sees the previous rule's output.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            let replaced = if rule.expand {
                rule.pattern.replace_all(&out, rule.replacement)
            } else {
                rule.pattern.replace_all(&out, NoExpand(rule.replacement))
            };
            out = replaced.into_owned();
        }
        out
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ============ Table data ============

const FORMAL_PHRASES: &[(&str, &str)] = &[
    ("Furthermore,", "And,"),
    ("Moreover,", "Also,"),
    ("Additionally,", "Plus,"),
    ("Consequently,", "So,"),
    ("Therefore,", "So,"),
    ("Nevertheless,", "But,"),
    ("Nonetheless,", "But,"),
    ("However,", "But"),
    ("In conclusion,", "So,"),
    ("In summary,", "So,"),
    ("It is important to note that", "Remember that"),
    ("It should be mentioned that", "Also,"),
    ("It is worth noting that", "Also,"),
    ("As a result,", "So,"),
    ("On the other hand,", "But,"),
    ("In contrast,", "But,"),
];

// No replacement is itself a source word, so one pass reaches a fixed point.
const COMPLEX_WORDS: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("demonstrate", "show"),
    ("facilitate", "help"),
    ("establish", "make"),
    ("implement", "do"),
    ("comprehensive", "full"),
    ("significant", "big"),
    ("substantial", "big"),
    ("fundamental", "basic"),
    ("essential", "needed"),
    ("optimal", "best"),
    ("commence", "start"),
    ("terminate", "stop"),
    ("acquire", "get"),
    ("endeavor", "try"),
    ("magnificent", "great"),
    ("extraordinary", "amazing"),
    ("tremendous", "huge"),
    ("exceptional", "great"),
    ("sophisticated", "fancy"),
    ("elaborate", "detailed"),
    ("numerous", "many"),
    ("various", "different"),
    ("particular", "special"),
    ("specific", "exact"),
    ("individual", "single"),
    ("appropriate", "right"),
    ("sufficient", "enough"),
    ("necessary", "needed"),
    ("important", "big"),
    ("excellent", "great"),
    ("outstanding", "amazing"),
    ("remarkable", "cool"),
    ("incredible", "amazing"),
    ("fantastic", "great"),
    ("wonderful", "nice"),
    ("beautiful", "pretty"),
    ("gorgeous", "pretty"),
    ("delicious", "yummy"),
    ("enormous", "huge"),
    ("tiny", "small"),
    ("gigantic", "huge"),
    ("minuscule", "small"),
];

const STRUCTURES: &[(&str, &str)] = &[
    (r"is being (\w+)", "gets ${1}"),
    (r"was being (\w+)", "got ${1}"),
    (r"will be (\w+)", "will get ${1}"),
    (r"there are many", "lots of"),
    (r"there are several", "some"),
    (r"there is a", "a"),
    (r"in the event that", "if"),
    (r"provided that", "if"),
    (r"assuming that", "if"),
];

const EXPANDED_FORMS: &[(&str, &str)] = &[
    ("do not", "don't"),
    ("does not", "doesn't"),
    ("did not", "didn't"),
    ("will not", "won't"),
    ("would not", "wouldn't"),
    ("can not", "can't"),
    ("cannot", "can't"),
    ("could not", "couldn't"),
    ("should not", "shouldn't"),
    ("is not", "isn't"),
    ("are not", "aren't"),
    ("was not", "wasn't"),
    ("were not", "weren't"),
    ("have not", "haven't"),
    ("has not", "hasn't"),
    ("had not", "hadn't"),
    ("it is", "it's"),
    ("that is", "that's"),
    ("there is", "there's"),
    ("you are", "you're"),
    ("we are", "we're"),
    ("they are", "they're"),
];

const INTENSIFIERS: &[(&str, &str)] = &[
    ("is very", "is really"),
    ("extremely", "super"),
    ("incredibly", "really really"),
    ("exceptionally", "super"),
];

const EXCLAMATIONS: &[(&str, &str)] = &[
    (r"\. This is (\w+)", ". This is so ${1}!"),
    (r"\. It is (amazing|great|wonderful|fantastic)", ". It is so cool!"),
];

const COMPARISONS: &[(&str, &str)] = &[
    ("superior to", "better than"),
    ("inferior to", "worse than"),
    ("equivalent to", "the same as"),
];

const PERSONAL_FRAMING: &[(&str, &str)] = &[
    ("One can", "You can"),
    ("One should", "You should"),
    ("It can be seen that", "I can see that"),
    ("It is evident that", "I think that"),
    ("This demonstrates", "This shows me"),
];

const EMOTIONAL_WORDS: &[(&str, &str)] = &[
    ("good", "awesome"),
    ("bad", "terrible"),
    ("interesting", "fascinating"),
    ("nice", "amazing"),
];

const REACTIONS: &[(&str, &str)] = &[
    (r"\. (This|That) is", ". Wow, ${1} is"),
    (r"\. (I|We) (found|discovered)", ". OMG, ${1} ${2}"),
];

/// Exclamatory lead-ins prepended to a sentence.
pub const LEAD_INS: &[&str] = &["Wow! ", "Cool! ", "Nice! ", "Great! ", "Awesome! ", "Amazing! "];

/// First-person framing prepended to a lowercased sentence.
pub const PERSONAL_THOUGHTS: &[&str] = &["I think ", "I feel like ", "I believe ", "In my opinion, "];

/// Casual fillers inserted after a sentence's first word.
pub const FILLERS: &[&str] = &["you know, ", "like, ", "I mean, ", "actually, ", "honestly, "];

/// Coordinating words a long sentence may be split on.
pub const BREAK_WORDS: &[&str] = &["and", "but", "or", "so", "because", "when", "while", "that"];

// ============ Compiled tables ============

macro_rules! table {
    ($name:ident, $kind:expr, $data:expr) => {
        pub fn $name() -> &'static RuleTable {
            static TABLE: OnceLock<RuleTable> = OnceLock::new();
            TABLE.get_or_init(|| RuleTable::build($kind, $data))
        }
    };
}

table!(phrase_table, MatchKind::Literal, FORMAL_PHRASES);
table!(vocabulary_table, MatchKind::WholeWord, COMPLEX_WORDS);
table!(structure_table, MatchKind::Pattern, STRUCTURES);
table!(contraction_table, MatchKind::WholeWord, EXPANDED_FORMS);
table!(intensifier_table, MatchKind::WholeWord, INTENSIFIERS);
table!(exclamation_table, MatchKind::Pattern, EXCLAMATIONS);
table!(comparison_table, MatchKind::WholeWord, COMPARISONS);
table!(personal_table, MatchKind::WholeWord, PERSONAL_FRAMING);
table!(emotional_table, MatchKind::WholeWord, EMOTIONAL_WORDS);
table!(reaction_table, MatchKind::Pattern, REACTIONS);

fn leading_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w+").expect("leading word regex"))
}

/// Insert `filler` right after the first word of `sentence`: "Cats are" -> "Cats, like,  are".
/// The doubled space is collapsed by the punctuation pass.
pub fn insert_after_first_word(sentence: &str, filler: &str) -> String {
    match leading_word_re().find(sentence) {
        Some(m) => format!("{}, {}{}", m.as_str(), filler, &sentence[m.end()..]),
        None => sentence.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        assert_eq!(phrase_table().len(), FORMAL_PHRASES.len());
        assert_eq!(vocabulary_table().len(), COMPLEX_WORDS.len());
        assert_eq!(structure_table().len(), STRUCTURES.len());
        assert_eq!(contraction_table().len(), EXPANDED_FORMS.len());
        assert!(!reaction_table().is_empty());
    }

    #[test]
    fn test_vocabulary_targets_are_not_sources() {
        for (_, simple) in COMPLEX_WORDS {
            assert!(
                !COMPLEX_WORDS.iter().any(|(complex, _)| complex == simple),
                "{} is both a source and a target",
                simple
            );
        }
    }

    #[test]
    fn test_literal_is_case_insensitive() {
        assert_eq!(phrase_table().apply("MOREOVER, yes"), "Also, yes");
    }

    #[test]
    fn test_whole_word_respects_boundaries() {
        assert_eq!(vocabulary_table().apply("Utilize utilized utilize"), "use utilized use");
    }

    #[test]
    fn test_pattern_expands_groups() {
        assert_eq!(structure_table().apply("The code is being tested"), "The code gets tested");
        assert_eq!(reaction_table().apply("Fine. We found it"), "Fine. OMG, We found it");
    }

    #[test]
    fn test_insert_after_first_word() {
        assert_eq!(insert_after_first_word("Cats are cute", "like, "), "Cats, like,  are cute");
        assert_eq!(insert_after_first_word("Done", "like, "), "Done, like, ");
        assert_eq!(insert_after_first_word("  spaced", "like, "), "  spaced");
    }

    #[test]
    fn test_tables_are_shared() {
        assert!(std::ptr::eq(phrase_table(), phrase_table()));
    }
}
