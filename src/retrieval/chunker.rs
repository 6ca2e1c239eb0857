//! Overlapping word-window chunker
//!
//! Splits a document into fixed-size windows of whitespace-delimited words.
//! Window boundaries always fall between words, never inside one.

use serde::{Deserialize, Serialize};

use crate::errors::{DocChatError, Result};

/// Window size and overlap for chunking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingParams {
    /// Maximum words per chunk
    pub max_words: usize,
    /// Words shared between consecutive chunks
    pub overlap: usize,
}

impl Default for ChunkingParams {
    fn default() -> Self {
        Self {
            max_words: 100,
            overlap: 50,
        }
    }
}

impl ChunkingParams {
    pub fn new(max_words: usize, overlap: usize) -> Self {
        Self { max_words, overlap }
    }

    /// Reject configurations that would never terminate.
    ///
    /// The window must advance by at least one word per step, which requires
    /// `max_words > 0` and `overlap < max_words`. Bad values are rejected,
    /// never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.max_words == 0 || self.overlap >= self.max_words {
            return Err(DocChatError::InvalidChunking {
                max_words: self.max_words,
                overlap: self.overlap,
            });
        }
        Ok(())
    }

    /// Words the window advances between consecutive chunks
    pub fn stride(&self) -> usize {
        self.max_words - self.overlap
    }
}

/// Split `text` into overlapping chunks by word count.
///
/// Words are whitespace-delimited with punctuation left attached. Each chunk
/// is the next `max_words` words (fewer at the end) rejoined with single
/// spaces, and the window advances by `max_words - overlap` words. Original
/// inter-word whitespace is not preserved. Empty text yields no chunks.
pub fn chunk(text: &str, params: &ChunkingParams) -> Result<Vec<String>> {
    params.validate()?;

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < words.len() {
        let end = (start + params.max_words).min(words.len());
        chunks.push(words[start..end].join(" "));
        start += params.stride();
    }

    Ok(chunks)
}
