//! Spoken Numbers to Digits
//!
//! Turns number phrases in recognized speech into digit tokens:
//! "two hundred and three" -> "203", "two four six" -> "246",
//! "twenty first" -> "21st", "one plus two" -> "1 + 2".

pub mod accumulator;
pub mod lexicon;
pub mod rewriter;
pub mod series;

pub use accumulator::parse_number;
pub use lexicon::{lexicon, Lexicon, NumberWord};
pub use rewriter::rewrite_numbers;
pub use series::parse_series;

/// A number phrase matched in a token buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub value: u128,
    /// Ordinal or plural suffix of the last word
    pub suffix: &'static str,
    /// Index just past the consumed tokens
    pub next: usize,
}

impl ParsedNumber {
    /// Render as a single token
    pub fn render(&self, use_separator: bool) -> String {
        let digits = if use_separator {
            group_thousands(self.value)
        } else {
            self.value.to_string()
        };
        format!("{}{}", digits, self.suffix)
    }
}

/// Format with comma thousands separators ("1234567" -> "1,234,567")
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
