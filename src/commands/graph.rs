//! Partial view of the word graph
//!
//! Shows the first few words of one length with a handful of their neighbors.

use crate::core::Word;
use crate::ladder::WordGraph;

/// Words shown by default
pub const DEFAULT_WORD_LIMIT: usize = 10;
/// Neighbors shown per word by default
pub const DEFAULT_NEIGHBOR_LIMIT: usize = 5;

/// One word and (some of) its neighbors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRow {
    pub word: Word,
    /// At most the neighbor limit, in generation order
    pub neighbors: Vec<Word>,
    /// Full neighbor count before truncation
    pub degree: usize,
}

/// First `word_limit` words of `length` letters with up to `neighbor_limit`
/// neighbors each
#[must_use]
pub fn graph_preview(
    graph: &WordGraph<'_>,
    length: usize,
    word_limit: usize,
    neighbor_limit: usize,
) -> Vec<GraphRow> {
    graph
        .words_of_length(length)
        .take(word_limit)
        .map(|word| {
            let mut neighbors = graph.neighbors(word);
            let degree = neighbors.len();
            neighbors.truncate(neighbor_limit);
            GraphRow {
                word: word.clone(),
                neighbors,
                degree,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExclusionFilter, Lexicon};

    fn lexicon() -> Lexicon {
        Lexicon::from_lines([
            "bat", "cat", "eat", "fat", "hat", "mat", "oat", "pat", "rat", "sat", "vat", "dog",
        ])
    }

    #[test]
    fn preview_limits_words_and_neighbors() {
        let lexicon = lexicon();
        let graph = WordGraph::new(&lexicon);
        let rows = graph_preview(&graph, 3, 3, 2);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].word.text(), "bat");
        assert_eq!(rows[0].degree, 10);
        let shown: Vec<&str> = rows[0].neighbors.iter().map(Word::text).collect();
        assert_eq!(shown, ["cat", "eat"]);
    }

    #[test]
    fn preview_reports_isolated_words() {
        let lexicon = lexicon();
        let graph = WordGraph::new(&lexicon);
        let rows = graph_preview(&graph, 3, 20, 5);

        assert_eq!(rows.len(), 12);
        let dog = rows.iter().find(|row| row.word.text() == "dog").unwrap();
        assert_eq!(dog.degree, 0);
        assert!(dog.neighbors.is_empty());
    }

    #[test]
    fn preview_respects_filter() {
        let lexicon = lexicon();
        let filter = ExclusionFilter::new(Vec::<&str>::new(), ['b', 'c']);
        let graph = WordGraph::filtered(&lexicon, &filter);
        let rows = graph_preview(&graph, 3, 1, 5);

        assert_eq!(rows[0].word.text(), "dog");
        let rows = graph_preview(&graph, 3, 2, 5);
        assert_eq!(rows[1].word.text(), "eat");
        assert_eq!(rows[1].degree, 8);
    }

    #[test]
    fn preview_of_missing_length_is_empty() {
        let lexicon = lexicon();
        let graph = WordGraph::new(&lexicon);
        assert!(graph_preview(&graph, 5, 10, 5).is_empty());
    }
}
