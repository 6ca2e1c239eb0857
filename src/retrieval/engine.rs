//! Top-k chunk retrieval

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::retrieval::chunker::{self, ChunkingParams};
use crate::retrieval::scorer;

/// Search parameters for retrieval
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchParams {
    /// Maximum number of chunks to return
    pub top_k: usize,
    /// Window size and overlap used to chunk the document
    pub chunking: ChunkingParams,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            top_k: 5,
            chunking: ChunkingParams::new(10, 5),
        }
    }
}

/// A chunk paired with its score and original position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub text: String,
    pub score: f64,
    /// Position in chunking order; equal scores keep this order
    pub index: usize,
}

/// Selects the highest-scoring document chunks for a query.
///
/// Holds no state between calls: each retrieval re-chunks the document and
/// scores every chunk from scratch.
pub struct RetrievalEngine {
    params: SearchParams,
}

impl RetrievalEngine {
    /// Create a new engine with default parameters
    pub fn new() -> Self {
        Self {
            params: SearchParams::default(),
        }
    }

    /// Create with custom parameters
    pub fn with_params(params: SearchParams) -> Self {
        Self { params }
    }

    /// Retrieve the top-k chunk texts for `query`, best first.
    pub fn retrieve(&self, document: &str, query: &str) -> Result<Vec<String>> {
        Ok(self
            .retrieve_scored(document, query)?
            .into_iter()
            .map(|c| c.text)
            .collect())
    }

    /// Retrieve with scores and original chunk positions attached.
    ///
    /// Chunks are sorted descending by score with a stable tie-break on
    /// chunking order. A whitespace-only query returns no chunks rather
    /// than surfacing the first k chunks on all-zero ties.
    pub fn retrieve_scored(&self, document: &str, query: &str) -> Result<Vec<ScoredChunk>> {
        // Validate even for inputs that short-circuit below, so a bad
        // configuration surfaces on the first call instead of a later one.
        self.params.chunking.validate()?;

        if query.split_whitespace().next().is_none() {
            return Ok(Vec::new());
        }

        let chunks = chunker::chunk(document, &self.params.chunking)?;
        let mut scored: Vec<ScoredChunk> = chunks
            .into_iter()
            .enumerate()
            .map(|(index, text)| ScoredChunk {
                score: scorer::score(&text, query),
                text,
                index,
            })
            .collect();

        // sort_by is stable, so equal scores preserve chunking order.
        // Scores are always finite in [0, 1]; the Equal fallback is never hit.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(self.params.top_k);

        Ok(scored)
    }

    /// Get current search parameters
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Update the number of chunks returned per query
    pub fn set_top_k(&mut self, top_k: usize) {
        self.params.top_k = top_k;
    }
}

impl Default for RetrievalEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "The sun is bright and hot. Bananas are yellow. The red car speeds by.";
    const QUERY: &str = "How hot is the sun?";

    fn engine(top_k: usize, max_words: usize, overlap: usize) -> RetrievalEngine {
        RetrievalEngine::with_params(SearchParams {
            top_k,
            chunking: ChunkingParams::new(max_words, overlap),
        })
    }

    #[test]
    fn test_retrieve_best_chunk() {
        let results = engine(1, 10, 5).retrieve(DOC, QUERY).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].contains("The sun is bright and hot."));
    }

    #[test]
    fn test_retrieve_sorted_descending() {
        let scored = engine(10, 10, 5).retrieve_scored(DOC, QUERY).unwrap();
        for pair in scored.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_retrieve_at_most_k() {
        let results = engine(2, 5, 2).retrieve(DOC, QUERY).unwrap();
        assert!(results.len() <= 2);

        // Fewer chunks than k returns them all.
        let results = engine(100, 10, 5).retrieve(DOC, QUERY).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_retrieve_k_zero() {
        let results = engine(0, 10, 5).retrieve(DOC, QUERY).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_retrieve_empty_document() {
        let results = engine(5, 10, 5).retrieve("", QUERY).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_retrieve_empty_query() {
        let results = engine(5, 10, 5).retrieve(DOC, "").unwrap();
        assert!(results.is_empty());

        let results = engine(5, 10, 5).retrieve(DOC, "  \t ").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_retrieve_stable_on_ties() {
        // No token of the query appears in the document: every chunk scores
        // 0.0 and the original chunking order must be preserved.
        let scored = engine(10, 2, 0)
            .retrieve_scored("alpha beta gamma delta", "zzz")
            .unwrap();
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].text, "alpha beta");
        assert_eq!(scored[1].text, "gamma delta");
        assert_eq!(scored[0].index, 0);
        assert_eq!(scored[1].index, 1);
    }

    #[test]
    fn test_retrieve_idempotent() {
        let eng = engine(3, 5, 2);
        let first = eng.retrieve(DOC, QUERY).unwrap();
        let second = eng.retrieve(DOC, QUERY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_chunking_rejected_before_retrieval() {
        let eng = engine(5, 3, 3);
        assert!(eng.retrieve(DOC, QUERY).is_err());
        // Rejected even when the query would short-circuit.
        assert!(eng.retrieve(DOC, "").is_err());
    }

    #[test]
    fn test_set_top_k() {
        let mut eng = engine(1, 10, 5);
        eng.set_top_k(3);
        assert_eq!(eng.params().top_k, 3);
        assert_eq!(eng.retrieve(DOC, QUERY).unwrap().len(), 3);
    }

    #[test]
    fn test_default_params() {
        let params = SearchParams::default();
        assert_eq!(params.top_k, 5);
        assert_eq!(params.chunking.max_words, 10);
        assert_eq!(params.chunking.overlap, 5);
    }
}
