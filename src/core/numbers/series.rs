//! Digit recitation ("two four six" -> 246)

use super::lexicon::lexicon;
use super::ParsedNumber;

/// Read a run of bare digit words starting at `start` as one number
///
/// Needs at least two digits; a single "five" is left to the accumulator.
/// The digits are read positionally, so "zero seven" is 7. A run too long
/// for the value type ends at the last digit that fits.
pub fn parse_series(words: &[String], start: usize) -> Option<ParsedNumber> {
    let lex = lexicon();
    let mut value: u128 = 0;
    let mut next = start;

    for word in words.iter().skip(start) {
        let Some(info) = lex.get(word).filter(|info| info.is_bare_digit()) else {
            break;
        };
        let Some(shifted) = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(info.increment))
        else {
            break;
        };
        value = shifted;
        next += 1;
    }

    if next - start < 2 {
        return None;
    }

    Some(ParsedNumber {
        value,
        suffix: "",
        next,
    })
}
