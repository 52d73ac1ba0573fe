use crate::error::{Result, SearchError};
use std::collections::HashSet;

lazy_static::lazy_static! {
    static ref DEFAULT_STOP_WORDS: HashSet<&'static str> = {
        [
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for",
            "if", "in", "into", "is", "it", "no", "not", "of", "on", "or",
            "such", "that", "the", "their", "then", "there", "these", "they",
            "this", "to", "was", "will", "with",
        ]
        .iter()
        .copied()
        .collect()
    };
}

/// Splits raw text into words and filters the configured stop words.
///
/// The stop-word set is fixed at construction; every stop word is validated
/// once, up front.
#[derive(Debug)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
}

impl Tokenizer {
    /// Build a tokenizer from a collection of stop words. Empty strings are
    /// dropped, anything with a control character is rejected.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !Self::is_valid_word(word) {
                return Err(SearchError::InvalidStopWord(word.to_string()));
            }
            set.insert(word.to_string());
        }
        Ok(Self { stop_words: set })
    }

    /// Build a tokenizer from a single space-delimited stop-word string.
    pub fn from_text(stop_words_text: &str) -> Result<Self> {
        Self::new(Self::split_into_words(stop_words_text))
    }

    /// Split text on spaces, discarding empty fragments and preserving order.
    pub fn split_into_words(text: &str) -> Vec<String> {
        text.split(' ')
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// A word is valid when it carries no control characters (anything
    /// below U+0020, the null character included).
    pub fn is_valid_word(word: &str) -> bool {
        !word.chars().any(|c| (c as u32) < 0x20)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Split text into validated, stop-word-free words. Any invalid word
    /// fails the whole call; nothing is dropped silently except stop words.
    pub fn split_into_words_no_stop(&self, text: &str) -> Result<Vec<String>> {
        let mut words = Vec::new();
        for word in Self::split_into_words(text) {
            if !Self::is_valid_word(&word) {
                return Err(SearchError::InvalidWord(word));
            }
            if !self.is_stop_word(&word) {
                words.push(word);
            }
        }
        Ok(words)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}
