//! Connectivity analysis command
//!
//! Summarizes how well connected the word graph is at one word length.

use crate::core::Word;
use crate::ladder::{WordGraph, reachable_from};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Result of analyzing one word length
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivityReport {
    pub length: usize,
    pub words: usize,
    /// Undirected edges
    pub edges: usize,
    /// Words with no neighbors at all
    pub isolated: usize,
    pub mean_degree: f64,
    /// Best-connected word and its degree; first in sorted order on ties
    pub max_degree: Option<(Word, usize)>,
    pub components: usize,
    pub largest_component: usize,
}

/// Analyze the graph's words of `length` letters
///
/// # Errors
///
/// Returns an error if the graph has no words of that length.
pub fn analyze_length(graph: &WordGraph<'_>, length: usize) -> Result<ConnectivityReport, String> {
    let words: Vec<&Word> = graph.words_of_length(length).collect();
    if words.is_empty() {
        return Err(format!("No {length}-letter words in dictionary"));
    }

    let degrees: Vec<usize> = words
        .par_iter()
        .map(|word| graph.neighbors(word).len())
        .collect();

    let degree_sum: usize = degrees.iter().sum();
    let isolated = degrees.iter().filter(|&&d| d == 0).count();
    let max_degree = words
        .iter()
        .zip(&degrees)
        .fold(None::<(&Word, usize)>, |best, (&word, &degree)| match best {
            Some((_, top)) if top >= degree => best,
            _ => Some((word, degree)),
        })
        .map(|(word, degree)| (word.clone(), degree));

    let (components, largest_component) = component_sizes(graph, &words);

    Ok(ConnectivityReport {
        length,
        words: words.len(),
        edges: degree_sum / 2,
        isolated,
        mean_degree: degree_sum as f64 / words.len() as f64,
        max_degree,
        components,
        largest_component,
    })
}

/// Number of connected components and the size of the largest
fn component_sizes(graph: &WordGraph<'_>, words: &[&Word]) -> (usize, usize) {
    let mut assigned: FxHashSet<Word> = FxHashSet::default();
    let mut components = 0;
    let mut largest = 0;

    for &word in words {
        if assigned.contains(word) {
            continue;
        }
        let component = reachable_from(graph, word);
        components += 1;
        largest = largest.max(component.len());
        assigned.extend(component);
    }

    (components, largest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExclusionFilter, Lexicon};

    fn lexicon() -> Lexicon {
        Lexicon::from_lines(["cat", "bat", "bad", "bid", "big", "dog", "dot", "fox", "cold"])
    }

    #[test]
    fn analyze_counts_structure() {
        let lexicon = lexicon();
        let graph = WordGraph::new(&lexicon);
        let report = analyze_length(&graph, 3).unwrap();

        assert_eq!(report.words, 8);
        // cat-bat, bat-bad, bad-bid, bid-big, dog-dot
        assert_eq!(report.edges, 5);
        assert_eq!(report.isolated, 1);
        assert!((report.mean_degree - 10.0 / 8.0).abs() < 1e-9);
        assert_eq!(report.components, 3);
        assert_eq!(report.largest_component, 5);
    }

    #[test]
    fn analyze_max_degree_prefers_first_word() {
        let lexicon = lexicon();
        let graph = WordGraph::new(&lexicon);
        let report = analyze_length(&graph, 3).unwrap();

        let (word, degree) = report.max_degree.unwrap();
        assert_eq!(word.text(), "bad");
        assert_eq!(degree, 2);
    }

    #[test]
    fn analyze_single_word_length() {
        let lexicon = lexicon();
        let graph = WordGraph::new(&lexicon);
        let report = analyze_length(&graph, 4).unwrap();

        assert_eq!(report.words, 1);
        assert_eq!(report.edges, 0);
        assert_eq!(report.isolated, 1);
        assert_eq!(report.components, 1);
    }

    #[test]
    fn analyze_applies_filter() {
        let lexicon = lexicon();
        let filter = ExclusionFilter::new(["bad"], []);
        let graph = WordGraph::filtered(&lexicon, &filter);
        let report = analyze_length(&graph, 3).unwrap();

        assert_eq!(report.words, 7);
        assert_eq!(report.edges, 3);
        assert_eq!(report.components, 4);
    }

    #[test]
    fn analyze_missing_length_errors() {
        let lexicon = lexicon();
        let graph = WordGraph::new(&lexicon);
        assert!(analyze_length(&graph, 6).is_err());
    }
}
