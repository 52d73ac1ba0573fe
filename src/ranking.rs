use crate::document::{DocId, Document, DocumentStatus};
use crate::index::InvertedIndex;
use crate::query::ParsedQuery;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Hard cap on the number of documents a search returns.
pub const MAX_RESULT_COUNT: usize = 5;

/// Relevances closer than this are tied and fall back to the rating.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// ln(total documents / documents containing the word).
///
/// Only meaningful for words present in the index; callers skip the rest.
pub fn inverse_document_freq(index: &InvertedIndex, word: &str) -> f64 {
    (index.document_count() as f64 / index.document_frequency(word) as f64).ln()
}

/// Score every document matching the query against the predicate.
///
/// Plus words accumulate tf-idf per document; minus words then remove any
/// document containing them, predicate or not. Words unknown to the index
/// contribute nothing. The result is unsorted.
pub fn find_all_documents<P>(
    index: &InvertedIndex,
    query: &ParsedQuery,
    predicate: P,
) -> Vec<Document>
where
    P: Fn(DocId, DocumentStatus, i32) -> bool,
{
    let mut document_to_relevance: HashMap<DocId, f64> = HashMap::new();
    for word in &query.plus_words {
        let postings = match index.postings(word) {
            Some(postings) => postings,
            None => continue,
        };
        let inverse_document_freq = inverse_document_freq(index, word);
        for (&document_id, &term_freq) in postings {
            if let Ok(data) = index.document_data(document_id) {
                if predicate(document_id, data.status, data.rating) {
                    *document_to_relevance.entry(document_id).or_insert(0.0) +=
                        term_freq * inverse_document_freq;
                }
            }
        }
    }

    for word in &query.minus_words {
        if let Some(postings) = index.postings(word) {
            for &document_id in postings.keys() {
                document_to_relevance.remove(&document_id);
            }
        }
    }

    document_to_relevance
        .into_iter()
        .map(|(document_id, relevance)| {
            let rating = index
                .document_data(document_id)
                .map(|data| data.rating)
                .unwrap_or_default();
            Document::new(document_id, relevance, rating)
        })
        .collect()
}

/// Sort by relevance descending, break near-ties by rating descending, and
/// truncate to the result cap.
pub fn select_top_documents(mut matched: Vec<Document>) -> Vec<Document> {
    matched.sort_by(|lhs, rhs| {
        if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
            rhs.rating.cmp(&lhs.rating)
        } else {
            rhs.relevance
                .partial_cmp(&lhs.relevance)
                .unwrap_or(Ordering::Equal)
        }
    });
    matched.truncate(MAX_RESULT_COUNT);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn words(text: &str) -> Vec<String> {
        text.split(' ').map(str::to_string).collect()
    }

    fn query(plus: &[&str], minus: &[&str]) -> ParsedQuery {
        ParsedQuery {
            plus_words: plus.iter().map(|w| w.to_string()).collect::<HashSet<_>>(),
            minus_words: minus.iter().map(|w| w.to_string()).collect::<HashSet<_>>(),
        }
    }

    fn accept_all(_: DocId, _: DocumentStatus, _: i32) -> bool {
        true
    }

    fn sample_index() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        // stop word "and" already removed from document 2
        index
            .add_document(1, &words("curly cat curly tail"), DocumentStatus::Actual, &[7, 2, 7])
            .unwrap();
        index
            .add_document(2, &words("curly dog fancy collar"), DocumentStatus::Actual, &[1, 2, 3])
            .unwrap();
        index
            .add_document(3, &words("big cat fancy collar"), DocumentStatus::Actual, &[1, 2, 8])
            .unwrap();
        index
            .add_document(4, &words("big dog sparrow Eugene"), DocumentStatus::Actual, &[1, 3, 2])
            .unwrap();
        index
    }

    #[test]
    fn test_minus_word_excludes_document() {
        let index = sample_index();
        let matched = find_all_documents(&index, &query(&["curly"], &["dog"]), accept_all);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
        // tf 0.5 for "curly" in document 1, idf = ln(4 / 2)
        let expected = 0.5 * (4.0f64 / 2.0).ln();
        assert!((matched[0].relevance - expected).abs() < 1e-9);
    }

    #[test]
    fn test_exclusion_overrides_perfect_match() {
        let index = sample_index();
        let matched = find_all_documents(
            &index,
            &query(&["curly", "cat", "tail"], &["tail"]),
            accept_all,
        );
        assert!(matched.iter().all(|doc| doc.id != 1));
    }

    #[test]
    fn test_unknown_words_contribute_nothing() {
        let index = sample_index();
        let matched = find_all_documents(&index, &query(&["walrus"], &["penguin"]), accept_all);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_no_plus_words_yields_nothing() {
        let index = sample_index();
        let matched = find_all_documents(&index, &query(&[], &["dog"]), accept_all);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_predicate_filters_during_accumulation() {
        let index = sample_index();
        let matched = find_all_documents(&index, &query(&["curly"], &[]), |id, _, _| id % 2 == 0);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 2);
    }

    #[test]
    fn test_select_top_caps_results() {
        let docs: Vec<Document> = (0..8)
            .map(|i| Document::new(i, f64::from(i) * 0.1, 0))
            .collect();
        let top = select_top_documents(docs);
        assert_eq!(top.len(), MAX_RESULT_COUNT);
        assert_eq!(top[0].id, 7);
    }

    #[test]
    fn test_near_ties_break_by_rating() {
        let docs = vec![
            Document::new(1, 0.5, 2),
            Document::new(2, 0.5 + RELEVANCE_EPSILON / 2.0, 9),
            Document::new(3, 0.9, 0),
        ];
        let top = select_top_documents(docs);
        let ids: Vec<DocId> = top.iter().map(|doc| doc.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
