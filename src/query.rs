use crate::error::{Result, SearchError};
use crate::tokenizer::Tokenizer;
use std::collections::HashSet;

/// A raw query string parsed into required and excluded term sets.
///
/// Both sets deduplicate; a term present in both is allowed and simply can
/// never match a document that contains it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub plus_words: HashSet<String>,
    pub minus_words: HashSet<String>,
}

struct QueryWord {
    data: String,
    is_minus: bool,
    is_stop: bool,
}

fn parse_query_word(text: &str, tokenizer: &Tokenizer) -> Result<QueryWord> {
    let (word, is_minus) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    if word.is_empty() || word.starts_with('-') || !Tokenizer::is_valid_word(word) {
        return Err(SearchError::InvalidQueryWord(text.to_string()));
    }
    Ok(QueryWord {
        data: word.to_string(),
        is_minus,
        is_stop: tokenizer.is_stop_word(word),
    })
}

/// Parse a raw query into plus/minus word sets.
///
/// Stop words never reach either set: a stop word is dropped silently even
/// when minus-prefixed. Malformed tokens (`-`, `--word`, control characters)
/// fail the whole query.
pub fn parse_query(text: &str, tokenizer: &Tokenizer) -> Result<ParsedQuery> {
    let mut query = ParsedQuery::default();
    for word in Tokenizer::split_into_words(text) {
        let query_word = parse_query_word(&word, tokenizer)?;
        if query_word.is_stop {
            continue;
        }
        if query_word.is_minus {
            query.minus_words.insert(query_word.data);
        } else {
            query.plus_words.insert(query_word.data);
        }
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::from_text("and in at").unwrap()
    }

    #[test]
    fn test_plus_and_minus_words() {
        let query = parse_query("curly -dog fancy", &tokenizer()).unwrap();
        assert_eq!(
            query.plus_words,
            HashSet::from(["curly".to_string(), "fancy".to_string()])
        );
        assert_eq!(query.minus_words, HashSet::from(["dog".to_string()]));
    }

    #[test]
    fn test_repeated_words_deduplicate() {
        let query = parse_query("cat cat -dog -dog", &tokenizer()).unwrap();
        assert_eq!(query.plus_words.len(), 1);
        assert_eq!(query.minus_words.len(), 1);
    }

    #[test]
    fn test_stop_words_dropped_silently() {
        let query = parse_query("curly and -in tail", &tokenizer()).unwrap();
        assert_eq!(
            query.plus_words,
            HashSet::from(["curly".to_string(), "tail".to_string()])
        );
        assert!(query.minus_words.is_empty());
    }

    #[test]
    fn test_same_word_required_and_excluded() {
        let query = parse_query("cat -cat", &tokenizer()).unwrap();
        assert!(query.plus_words.contains("cat"));
        assert!(query.minus_words.contains("cat"));
    }

    #[test]
    fn test_bare_minus_rejected() {
        let err = parse_query("cat -", &tokenizer()).unwrap_err();
        assert_eq!(err, SearchError::InvalidQueryWord("-".to_string()));
    }

    #[test]
    fn test_double_minus_rejected() {
        let err = parse_query("--cat", &tokenizer()).unwrap_err();
        assert_eq!(err, SearchError::InvalidQueryWord("--cat".to_string()));
    }

    #[test]
    fn test_control_character_rejected() {
        let err = parse_query("ca\x01t", &tokenizer()).unwrap_err();
        assert_eq!(err, SearchError::InvalidQueryWord("ca\x01t".to_string()));
    }

    #[test]
    fn test_empty_query() {
        let query = parse_query("", &tokenizer()).unwrap();
        assert!(query.plus_words.is_empty());
        assert!(query.minus_words.is_empty());
    }
}
