//! Scale Accumulator
//!
//! General number phrase parser. Composes unit, tens and scale words with
//! short-scale place value ("two thousand three hundred" = 2000 + 300),
//! honours ordinal/plural suffixes and accepts "and" only after a scale
//! word ("three hundred and two", never "three and two").

use super::lexicon::{lexicon, NumberWord, FLUSH_SCALE};
use super::series::parse_series;
use super::ParsedNumber;

/// Parse the number phrase starting at `start`
///
/// A digit recitation always wins over composition. With
/// `imply_single_unit`, a phrase opening with a bare scale word resolves to
/// that scale alone ("hundred" -> 100) and the scan ends there.
///
/// Returns `None` when no word that can end a phrase was consumed.
pub fn parse_number(
    words: &[String],
    start: usize,
    imply_single_unit: bool,
) -> Option<ParsedNumber> {
    if let Some(series) = parse_series(words, start) {
        return Some(series);
    }

    let lex = lexicon();
    let mut only_scale = imply_single_unit;
    let mut current: u128 = 0;
    let mut result: u128 = 0;
    // Position of the last word that can end a phrase
    let mut last_final: Option<usize> = None;
    let mut finalized: Option<ParsedNumber> = None;

    for (index, word) in words.iter().enumerate().skip(start) {
        let Some(info) = lex.get(word) else {
            break;
        };

        if !info.is_final {
            if let Some(prev) = last_final {
                if lex.is_unit_word(&words[prev]) {
                    break;
                }
            }
        }

        if only_scale {
            if !lex.is_scale_word(word) {
                only_scale = false;
            } else if current == 0 && result == 0 {
                return Some(ParsedNumber {
                    value: info.scale,
                    suffix: info.suffix,
                    next: index + 1,
                });
            }
        }

        let Some((next_result, next_current)) = compose(result, current, info) else {
            break;
        };
        result = next_result;
        current = next_current;

        if info.is_final {
            last_final = Some(index);
            finalized = Some(ParsedNumber {
                value: result + current,
                suffix: info.suffix,
                next: index + 1,
            });
        }

        if !info.suffix.is_empty() {
            break;
        }
    }

    // A trailing joiner is dropped by falling back to the last final word
    finalized
}

/// Apply one word to the running totals, `None` on overflow
fn compose(result: u128, current: u128, info: &NumberWord) -> Option<(u128, u128)> {
    let mut current = current.checked_mul(info.scale)?.checked_add(info.increment)?;
    let mut result = result;

    if info.scale > FLUSH_SCALE {
        result = result.checked_add(current)?;
        current = 0;
    }

    // The finalized total must fit as well
    result.checked_add(current)?;
    Some((result, current))
}
