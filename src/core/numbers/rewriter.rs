//! Phrase Rewriter
//!
//! Replaces number phrases in a token buffer with digit tokens, then joins
//! neighbouring numbers linked by an arithmetic connector ("one plus two"
//! -> "1 + 2").

use super::accumulator::parse_number;
use super::lexicon::lexicon;
use tracing::trace;

/// Connector phrases and the operator they become
const CONNECTORS: &[(&[&str], &str)] = &[
    (&["point"], "."),
    (&["minus"], " - "),
    (&["plus"], " + "),
    (&["divided", "by"], " / "),
    (&["multiplied", "by"], " * "),
    (&["times"], " * "),
    (&["modulo"], " % "),
];

/// Operator for the words between two numbers, if they form a connector
fn connector_for(between: &[String]) -> Option<&'static str> {
    CONNECTORS
        .iter()
        .find(|(phrase, _)| {
            phrase.len() == between.len()
                && phrase.iter().zip(between).all(|(expected, word)| expected == word)
        })
        .map(|(_, operator)| *operator)
}

/// Rewrite every number phrase in `words` in place
///
/// After a merge the scan resumes at the merged token, so chains such as
/// "one plus two plus three" fold left to right into one token.
pub fn rewrite_numbers(words: &mut Vec<String>, use_separator: bool) {
    let lex = lexicon();
    let mut index = 0;
    // Position of the most recent number token
    let mut previous: Option<usize> = None;

    while index < words.len() {
        if !lex.is_digit_word(&words[index]) {
            index += 1;
            continue;
        }

        let Some(number) = parse_number(words, index, true) else {
            index += 1;
            continue;
        };

        let token = number.render(use_separator);
        trace!("'{}' -> '{}'", words[index..number.next].join(" "), token);
        words.splice(index..number.next, std::iter::once(token));

        if let Some(prev) = previous.filter(|prev| prev + 1 != index) {
            if let Some(operator) = connector_for(&words[prev + 1..index]) {
                let merged = format!("{}{}{}", words[prev], operator, words[index]);
                words.splice(prev..=index, std::iter::once(merged));
                index = prev;
            }
        }

        // The token at `index` is now digits, so the next pass moves past it
        previous = Some(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str, use_separator: bool) -> Vec<String> {
        let mut words: Vec<String> = text.split(' ').map(String::from).collect();
        rewrite_numbers(&mut words, use_separator);
        words
    }

    #[test]
    fn test_replaces_spans() {
        assert_eq!(
            rewrite("page two hundred and three please", false),
            vec!["page", "203", "please"]
        );
        assert_eq!(rewrite("one thousand", true), vec!["1,000"]);
    }

    #[test]
    fn test_connectors() {
        assert_eq!(rewrite("one plus two", false), vec!["1 + 2"]);
        assert_eq!(rewrite("ten divided by two", false), vec!["10 / 2"]);
        assert_eq!(rewrite("six multiplied by seven", false), vec!["6 * 7"]);
        assert_eq!(rewrite("six times seven", false), vec!["6 * 7"]);
        assert_eq!(rewrite("nine modulo four", false), vec!["9 % 4"]);
        assert_eq!(rewrite("five minus three", false), vec!["5 - 3"]);
        assert_eq!(rewrite("three point one four", false), vec!["3.14"]);
    }

    #[test]
    fn test_chained_connectors() {
        assert_eq!(rewrite("one plus two plus three", false), vec!["1 + 2 + 3"]);
        assert_eq!(
            rewrite("x is one plus two times three end", false),
            vec!["x", "is", "1 + 2 * 3", "end"]
        );
    }

    #[test]
    fn test_unknown_gap_is_left_alone() {
        assert_eq!(
            rewrite("one apple plus two", false),
            vec!["1", "apple", "plus", "2"]
        );
        assert_eq!(rewrite("one divided two", false), vec!["1", "divided", "2"]);
    }

    #[test]
    fn test_adjacent_numbers_do_not_merge() {
        // No gap between the two numbers
        assert_eq!(rewrite("first two", false), vec!["1st", "2"]);
    }

    #[test]
    fn test_joiner_between_units() {
        assert_eq!(rewrite("three and two", false), vec!["3", "and", "2"]);
    }

    #[test]
    fn test_connector_without_numbers() {
        assert_eq!(rewrite("plus times point", false), vec!["plus", "times", "point"]);
        assert_eq!(rewrite("plus one", false), vec!["plus", "1"]);
    }

    #[test]
    fn test_connector_words_are_case_sensitive() {
        assert_eq!(rewrite("one Plus two", false), vec!["1", "Plus", "2"]);
    }
}
