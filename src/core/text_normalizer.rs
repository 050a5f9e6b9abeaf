//! Text Normalization
//!
//! Post-processing applied to recognized speech before it is handed on.

use super::numbers::rewrite_numbers;
use crate::config::Config;

/// Flags controlling normalization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Convert spoken numbers to digits
    pub numbers_as_digits: bool,
    /// Group digits with thousands separators ("1,000")
    pub numbers_use_separator: bool,
}

impl From<&Config> for NormalizerOptions {
    fn from(config: &Config) -> Self {
        Self {
            numbers_as_digits: config.numbers_as_digits,
            numbers_use_separator: config.numbers_use_separator,
        }
    }
}

/// Normalize recognized text
///
/// Line breaks become spaces; the result is typed and must stay on one
/// line. Words that are not understood pass through untouched.
pub fn process_text(text: &str, options: NormalizerOptions) -> String {
    let text = text.replace(['\n', '\r'], " ");
    let mut words: Vec<String> = text.split(' ').map(String::from).collect();

    if options.numbers_as_digits {
        rewrite_numbers(&mut words, options.numbers_use_separator);
    }

    words.join(" ")
}

/// Normalizer bound to a fixed set of options
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    options: NormalizerOptions,
}

impl TextNormalizer {
    /// Create a new text normalizer
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.into())
    }

    pub fn options(&self) -> NormalizerOptions {
        self.options
    }

    /// Normalize recognized text
    pub fn normalize(&self, text: &str) -> String {
        process_text(text, self.options)
    }
}
