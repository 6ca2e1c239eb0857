//! Language identification and query translation
//!
//! Optional step in front of retrieval: when enabled, the user's question is
//! translated into the document's detected language so lexical overlap has a
//! chance against non-English documents. The scorer itself stays
//! language-agnostic; only the literal query string changes.

use crate::errors::Result;
use crate::llm::{ChatMessage, OllamaChatClient};

/// Words of document sampled for language identification
const DETECT_SAMPLE_WORDS: usize = 120;

/// Detects a document's language and translates queries into it
pub struct LanguageRouter<'a> {
    client: &'a OllamaChatClient,
}

impl<'a> LanguageRouter<'a> {
    pub fn new(client: &'a OllamaChatClient) -> Self {
        Self { client }
    }

    /// Identify the language of `text`, returned as one lowercase word.
    pub async fn detect(&self, text: &str) -> Result<String> {
        let sample: String = text
            .split_whitespace()
            .take(DETECT_SAMPLE_WORDS)
            .collect::<Vec<_>>()
            .join(" ");

        let messages = vec![
            ChatMessage::system(
                "You identify languages. Reply with the language name as a single \
                 lowercase English word and nothing else.",
            ),
            ChatMessage::user(sample),
        ];

        let reply = self.client.complete(&messages).await?;
        Ok(reply
            .split_whitespace()
            .next()
            .unwrap_or("english")
            .to_lowercase())
    }

    /// Translate `query` into the `target` language.
    ///
    /// An empty model reply falls back to the original query so retrieval
    /// always has something to work with.
    pub async fn translate(&self, query: &str, target: &str) -> Result<String> {
        let messages = vec![
            ChatMessage::system(format!(
                "You are a translator. Translate the user's message into {}. \
                 Reply with the translation only, no commentary.",
                target
            )),
            ChatMessage::user(query),
        ];

        let reply = self.client.complete(&messages).await?;
        let translated = reply.trim();
        if translated.is_empty() {
            Ok(query.to_string())
        } else {
            Ok(translated.to_string())
        }
    }
}
