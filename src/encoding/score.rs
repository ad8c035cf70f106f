use serde::{Deserialize, Serialize};

/// Language hints used to rank decoded candidates.
///
/// The score of a text is
/// `letter_weight * distinct letters present`
/// `+ word_weight * vocabulary words present (case-insensitive)`
/// `- replacement_penalty * U+FFFD occurrences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Accented letters characteristic of the language.
    pub letters: Vec<char>,
    /// Words expected in statement narratives.
    pub words: Vec<String>,
    pub letter_weight: i64,
    pub word_weight: i64,
    pub replacement_penalty: i64,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::polish()
    }
}

impl Vocabulary {
    /// Polish diacritics and common banking terms.
    pub fn polish() -> Self {
        Self {
            letters: "ąćęłńóśźż".chars().collect(),
            words: vec!["płatność".into(), "przelew".into(), "kartą".into()],
            letter_weight: 10,
            word_weight: 5,
            replacement_penalty: 5,
        }
    }

    /// Score decoded text; higher means more plausible.
    pub fn score(&self, text: &str) -> i64 {
        let mut letters = self.letters.clone();
        letters.sort_unstable();
        letters.dedup();
        let letter_hits = letters.iter().filter(|&&c| text.contains(c)).count();

        let lowered = text.to_lowercase();
        let word_hits = self
            .words
            .iter()
            .filter(|word| !word.is_empty() && lowered.contains(&word.to_lowercase()))
            .count();

        let replacements = text
            .chars()
            .filter(|&c| c == char::REPLACEMENT_CHARACTER)
            .count();

        self.letter_weight * letter_hits as i64 + self.word_weight * word_hits as i64
            - self.replacement_penalty * replacements as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_scores_zero() {
        assert_eq!(Vocabulary::polish().score("zloty"), 0);
        assert_eq!(Vocabulary::polish().score(""), 0);
    }

    #[test]
    fn distinct_letters_count_once() {
        let v = Vocabulary::polish();
        assert_eq!(v.score("ł"), 10);
        assert_eq!(v.score("łłłł"), 10);
        assert_eq!(v.score("łą"), 20);
    }

    #[test]
    fn upper_case_letters_do_not_count() {
        assert_eq!(Vocabulary::polish().score("ŁĄ"), 0);
    }

    #[test]
    fn words_match_case_insensitively() {
        let v = Vocabulary::polish();
        // "PRZELEW" carries no diacritics
        assert_eq!(v.score("PRZELEW"), 5);
        // "PŁATNOŚĆ" upper case: no lower-case letters, one word
        assert_eq!(v.score("PŁATNOŚĆ"), 5);
        // ł, ś, ć plus the word
        assert_eq!(v.score("Płatność"), 35);
    }

    #[test]
    fn replacement_characters_penalize() {
        let v = Vocabulary::polish();
        assert_eq!(v.score("\u{FFFD}"), -5);
        assert_eq!(v.score("ł\u{FFFD}\u{FFFD}"), 0);
    }

    #[test]
    fn custom_weights() {
        let v = Vocabulary {
            letters: vec!['é'],
            words: vec!["virement".into()],
            letter_weight: 1,
            word_weight: 100,
            replacement_penalty: 0,
        };
        assert_eq!(v.score("Virement reçu é \u{FFFD}"), 101);
    }
}
