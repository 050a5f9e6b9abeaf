//! Number Word Lexicon
//!
//! Metadata for every spoken number word the rewriter understands, plus the
//! word classes used while parsing. Built once and shared read-only.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// The joiner word ("three hundred and two")
pub const JOINER: &str = "and";

/// Scales above this flush the running value (thousand and up)
pub const FLUSH_SCALE: u128 = 100;

/// Metadata for a single number word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberWord {
    /// Multiplier applied to the running value, always a power of ten
    pub scale: u128,
    /// Added after scaling (0-99)
    pub increment: u128,
    /// Appended to the rendered digits, e.g. "st" or "'s"
    pub suffix: &'static str,
    /// Whether the word can end a number phrase (false only for the joiner)
    pub is_final: bool,
}

impl NumberWord {
    /// A bare cardinal digit (zero..nine) with no suffix
    pub fn is_bare_digit(&self) -> bool {
        self.is_final && self.scale == 1 && self.increment < 10 && self.suffix.is_empty()
    }
}

type Forms = [(&'static str, &'static str); 3];

/// Cardinal, plural and ordinal forms of 0-19
const UNITS: [Forms; 20] = [
    [("zero", ""), ("zeroes", "'s"), ("zeroth", "th")],
    [("one", ""), ("ones", "'s"), ("first", "st")],
    [("two", ""), ("twos", "'s"), ("second", "nd")],
    [("three", ""), ("threes", "'s"), ("third", "rd")],
    [("four", ""), ("fours", "'s"), ("fourth", "th")],
    [("five", ""), ("fives", "'s"), ("fifth", "th")],
    [("six", ""), ("sixes", "'s"), ("sixth", "th")],
    [("seven", ""), ("sevens", "'s"), ("seventh", "th")],
    [("eight", ""), ("eights", "'s"), ("eighth", "th")],
    [("nine", ""), ("nines", "'s"), ("ninth", "th")],
    [("ten", ""), ("tens", "'s"), ("tenth", "th")],
    [("eleven", ""), ("elevens", "'s"), ("eleventh", "th")],
    [("twelve", ""), ("twelves", "'s"), ("twelfth", "th")],
    [("thirteen", ""), ("thirteens", "'s"), ("thirteenth", "th")],
    [("fourteen", ""), ("fourteens", "'s"), ("fourteenth", "th")],
    [("fifteen", ""), ("fifteens", "'s"), ("fifteenth", "th")],
    [("sixteen", ""), ("sixteens", "'s"), ("sixteenth", "th")],
    [("seventeen", ""), ("seventeens", "'s"), ("seventeenth", "th")],
    [("eighteen", ""), ("eighteens", "'s"), ("eighteenth", "th")],
    [("nineteen", ""), ("nineteens", "'s"), ("nineteenth", "th")],
];

/// Tens 20-90; index 0 is twenty
const TENS: [Forms; 8] = [
    [("twenty", ""), ("twenties", "'s"), ("twentieth", "th")],
    [("thirty", ""), ("thirties", "'s"), ("thirtieth", "th")],
    [("forty", ""), ("forties", "'s"), ("fortieth", "th")],
    [("fifty", ""), ("fifties", "'s"), ("fiftieth", "th")],
    [("sixty", ""), ("sixties", "'s"), ("sixtieth", "th")],
    [("seventy", ""), ("seventies", "'s"), ("seventieth", "th")],
    [("eighty", ""), ("eighties", "'s"), ("eightieth", "th")],
    [("ninety", ""), ("nineties", "'s"), ("ninetieth", "th")],
];

/// Scale words with their power of ten
const SCALES: [(Forms, u32); 7] = [
    ([("hundred", ""), ("hundreds", "s"), ("hundredth", "th")], 2),
    ([("thousand", ""), ("thousands", "s"), ("thousandth", "th")], 3),
    ([("million", ""), ("millions", "s"), ("millionth", "th")], 6),
    ([("billion", ""), ("billions", "s"), ("billionth", "th")], 9),
    ([("trillion", ""), ("trillions", "s"), ("trillionth", "th")], 12),
    ([("quadrillion", ""), ("quadrillions", "s"), ("quadrillionth", "th")], 15),
    ([("quintillion", ""), ("quintillions", "s"), ("quintillionth", "th")], 18),
];

/// Word table and derived word classes
#[derive(Debug)]
pub struct Lexicon {
    words: HashMap<&'static str, NumberWord>,
    /// Words that may start a number phrase (everything but the joiner)
    digit_words: HashSet<&'static str>,
    /// Words below one hundred
    unit_words: HashSet<&'static str>,
    /// Hundred and above
    scale_words: HashSet<&'static str>,
}

lazy_static! {
    static ref LEXICON: Lexicon = Lexicon::build();
}

/// The process-wide lexicon
pub fn lexicon() -> &'static Lexicon {
    &LEXICON
}

impl Lexicon {
    fn build() -> Self {
        let mut words = HashMap::new();
        let mut unit_words = HashSet::new();
        let mut scale_words = HashSet::new();

        let units = UNITS.iter().enumerate();
        let tens = TENS
            .iter()
            .enumerate()
            .map(|(idx, forms)| ((idx + 2) * 10, forms));

        for (value, forms) in units.chain(tens) {
            for &(word, suffix) in forms {
                words.insert(
                    word,
                    NumberWord {
                        scale: 1,
                        increment: value as u128,
                        suffix,
                        is_final: true,
                    },
                );
                unit_words.insert(word);
            }
        }

        for (forms, power) in SCALES {
            for (word, suffix) in forms {
                words.insert(
                    word,
                    NumberWord {
                        scale: 10u128.pow(power),
                        increment: 0,
                        suffix,
                        is_final: true,
                    },
                );
                scale_words.insert(word);
            }
        }

        let digit_words = words.keys().copied().collect();

        words.insert(
            JOINER,
            NumberWord {
                scale: 1,
                increment: 0,
                suffix: "",
                is_final: false,
            },
        );

        Self {
            words,
            digit_words,
            unit_words,
            scale_words,
        }
    }

    /// Look up a word
    pub fn get(&self, word: &str) -> Option<&NumberWord> {
        self.words.get(word)
    }

    /// Whether the word can start a number phrase
    pub fn is_digit_word(&self, word: &str) -> bool {
        self.digit_words.contains(word)
    }

    pub fn is_unit_word(&self, word: &str) -> bool {
        self.unit_words.contains(word)
    }

    pub fn is_scale_word(&self, word: &str) -> bool {
        self.scale_words.contains(word)
    }

    /// Iterate over every word and its metadata
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &NumberWord)> {
        self.words.iter().map(|(word, info)| (*word, info))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_size() {
        let lex = lexicon();
        // 20 units + 8 tens + 7 scales, three forms each, plus the joiner
        assert_eq!(lex.len(), (20 + 8 + 7) * 3 + 1);
        assert_eq!(lex.digit_words.len(), lex.len() - 1);
        assert_eq!(lex.unit_words.len(), (20 + 8) * 3);
        assert_eq!(lex.scale_words.len(), 7 * 3);
    }

    #[test]
    fn test_word_metadata() {
        let lex = lexicon();
        assert_eq!(
            lex.get("seven"),
            Some(&NumberWord {
                scale: 1,
                increment: 7,
                suffix: "",
                is_final: true
            })
        );
        assert_eq!(lex.get("forties").map(|w| (w.increment, w.suffix)), Some((40, "'s")));
        assert_eq!(lex.get("third").map(|w| w.suffix), Some("rd"));
        assert_eq!(lex.get("millionth").map(|w| w.scale), Some(1_000_000));
        assert_eq!(
            lex.get("quintillions").map(|w| (w.scale, w.suffix)),
            Some((10u128.pow(18), "s"))
        );
        assert_eq!(lex.get("twentieth").map(|w| w.increment), Some(20));
    }

    #[test]
    fn test_joiner() {
        let lex = lexicon();
        let and = lex.get(JOINER).expect("joiner missing");
        assert!(!and.is_final);
        assert!(!lex.is_digit_word(JOINER));
        assert!(!lex.is_unit_word(JOINER));
        assert!(!lex.is_scale_word(JOINER));
    }

    #[test]
    fn test_word_classes() {
        let lex = lexicon();
        assert!(lex.is_unit_word("three"));
        assert!(lex.is_unit_word("ninetieth"));
        assert!(!lex.is_unit_word("hundred"));
        assert!(lex.is_scale_word("hundreds"));
        assert!(lex.is_scale_word("thousandth"));
        assert!(!lex.is_scale_word("ninety"));
        assert!(lex.is_digit_word("first"));
        assert!(!lex.is_digit_word("dozen"));
    }

    #[test]
    fn test_no_placeholder_words() {
        // Empty tokens come from doubled spaces and are never number words
        assert!(lexicon().get("").is_none());
        assert!(!lexicon().is_digit_word(""));
    }

    #[test]
    fn test_bare_digits() {
        let lex = lexicon();
        let bare: Vec<_> = lex
            .iter()
            .filter(|(_, info)| info.is_bare_digit())
            .map(|(word, _)| word)
            .collect();
        assert_eq!(bare.len(), 10);
        assert!(!lex.get("ten").map(|w| w.is_bare_digit()).unwrap_or(true));
        assert!(!lex.get("first").map(|w| w.is_bare_digit()).unwrap_or(true));
    }
}
