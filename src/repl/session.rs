//! Conversation state for the REPL

use crate::llm::{ChatMessage, Role};
use crate::retrieval::ScoredChunk;

/// System prompt seeding every conversation
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant answering questions about a \
document. Base your answers on the passages provided with each question; when the passages \
do not contain the answer, say so instead of guessing. Keep answers concise.";

/// One completed question/answer exchange
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub question: String,
    pub answer: String,
    pub chunks_used: usize,
    pub duration_ms: u64,
}

/// Conversation state owned by the REPL loop.
///
/// The message list is what the model sees on every call. The loop owns and
/// mutates it; the retrieval core never touches it.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    turns: Vec<TurnRecord>,
    last_retrieved: Vec<ScoredChunk>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::system(SYSTEM_PROMPT)],
            turns: Vec::new(),
            last_retrieved: Vec::new(),
        }
    }

    /// Messages for the next model call: history plus the pending question.
    pub fn messages_with(&self, pending: ChatMessage) -> Vec<ChatMessage> {
        let mut out = self.messages.clone();
        out.push(pending);
        out
    }

    /// Record one completed turn and fold it into the history the model sees.
    pub fn record_turn(
        &mut self,
        augmented_question: String,
        record: TurnRecord,
        retrieved: Vec<ScoredChunk>,
    ) {
        self.messages.push(ChatMessage::user(augmented_question));
        self.messages.push(ChatMessage::assistant(record.answer.clone()));
        self.last_retrieved = retrieved;
        self.turns.push(record);
    }

    /// Drop everything except the system prompt.
    pub fn reset(&mut self) {
        self.messages.truncate(1);
        self.turns.clear();
        self.last_retrieved.clear();
    }

    /// Last `limit` turns, oldest first
    pub fn history(&self, limit: usize) -> &[TurnRecord] {
        let start = self.turns.len().saturating_sub(limit);
        &self.turns[start..]
    }

    /// Chunks retrieved for the most recent question
    pub fn last_retrieved(&self) -> &[ScoredChunk] {
        &self.last_retrieved
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Non-system messages currently in the model's context
    pub fn context_len(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role != Role::System)
            .count()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
