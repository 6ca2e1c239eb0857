//! Prompt assembly for retrieval-augmented questions

use serde::{Deserialize, Serialize};

use crate::retrieval::engine::ScoredChunk;

/// Context assembly configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Words of the document opening included as a summary
    pub excerpt_words: usize,
    /// Include per-passage scores in the prompt
    pub show_scores: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            excerpt_words: 60,
            show_scores: false,
        }
    }
}

/// Builds the augmented user message sent to the model
pub struct ContextBuilder {
    config: ContextConfig,
}

impl ContextBuilder {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ContextConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: ContextConfig) -> Self {
        Self { config }
    }

    /// Short opening excerpt of the document, used as a cheap summary.
    pub fn excerpt(&self, document: &str) -> String {
        document
            .split_whitespace()
            .take(self.config.excerpt_words)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Assemble one user message: document excerpt, numbered passages, then
    /// the question. With no retrieved passages the question is still asked
    /// against the excerpt alone.
    pub fn augment(&self, document: &str, chunks: &[ScoredChunk], question: &str) -> String {
        let mut prompt = String::new();

        let excerpt = self.excerpt(document);
        if !excerpt.is_empty() {
            prompt.push_str("Document opening:\n");
            prompt.push_str(&excerpt);
            prompt.push_str("\n\n");
        }

        if !chunks.is_empty() {
            prompt.push_str(&format!("Relevant passages ({}):\n", chunks.len()));
            for (i, chunk) in chunks.iter().enumerate() {
                if self.config.show_scores {
                    prompt.push_str(&format!(
                        "{}. (score: {:.2}) {}\n",
                        i + 1,
                        chunk.score,
                        chunk.text
                    ));
                } else {
                    prompt.push_str(&format!("{}. {}\n", i + 1, chunk.text));
                }
            }
            prompt.push('\n');
        }

        prompt.push_str("Question: ");
        prompt.push_str(question);
        prompt
    }

    /// Get current configuration
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(text: &str, score: f64, index: usize) -> ScoredChunk {
        ScoredChunk {
            text: text.to_string(),
            score,
            index,
        }
    }

    #[test]
    fn test_excerpt_truncates_by_words() {
        let builder = ContextBuilder::with_config(ContextConfig {
            excerpt_words: 3,
            show_scores: false,
        });
        assert_eq!(builder.excerpt("one two three four five"), "one two three");
    }

    #[test]
    fn test_augment_contains_passages_and_question() {
        let builder = ContextBuilder::new();
        let chunks = vec![
            scored("The sun is bright and hot.", 0.22, 0),
            scored("The red car speeds by.", 0.08, 2),
        ];

        let prompt = builder.augment("The sun is bright.", &chunks, "How hot is the sun?");
        assert!(prompt.contains("1. The sun is bright and hot."));
        assert!(prompt.contains("2. The red car speeds by."));
        assert!(prompt.contains("Question: How hot is the sun?"));
    }

    #[test]
    fn test_augment_without_chunks() {
        let builder = ContextBuilder::new();
        let prompt = builder.augment("Some document text.", &[], "What is this?");
        assert!(!prompt.contains("Relevant passages"));
        assert!(prompt.contains("Document opening:"));
        assert!(prompt.ends_with("Question: What is this?"));
    }

    #[test]
    fn test_augment_shows_scores_when_configured() {
        let builder = ContextBuilder::with_config(ContextConfig {
            excerpt_words: 10,
            show_scores: true,
        });
        let prompt = builder.augment("doc", &[scored("a chunk", 0.5, 0)], "q?");
        assert!(prompt.contains("(score: 0.50)"));
    }
}
