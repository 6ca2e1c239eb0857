//! Interactive REPL for chatting with a document
//!
//! The loop reads a question, retrieves the passages most similar to it,
//! folds them into the prompt, and sends the whole conversation to the
//! model. Slash commands inspect or adjust the session without touching
//! the conversation itself.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

pub use commands::{Command, CommandHandler};
pub use display::DisplayManager;
pub use input::InputHandler;
pub use session::{ChatSession, TurnRecord};

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use colored::*;

use crate::language::LanguageRouter;
use crate::llm::{ChatMessage, OllamaChatClient};
use crate::loader::Document;
use crate::retrieval::{ContextBuilder, ContextConfig, RetrievalEngine};

/// The interactive chat loop over one document
pub struct ReplSession {
    input: InputHandler,
    commands: CommandHandler,
    display: DisplayManager,
    session: ChatSession,
    engine: RetrievalEngine,
    builder: ContextBuilder,
    client: OllamaChatClient,
    document: Document,
    translate_to: Option<String>,
}

impl ReplSession {
    pub fn new(
        document: Document,
        engine: RetrievalEngine,
        client: OllamaChatClient,
        translate_to: Option<String>,
        history_file: Option<PathBuf>,
        verbose: bool,
    ) -> Result<Self> {
        let input = match history_file {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };
        let mut commands = CommandHandler::new(document.source.clone(), document.word_count());
        commands.set_verbose(verbose);

        // Verbose mode also surfaces scores inside the prompt itself
        let builder = ContextBuilder::with_config(ContextConfig {
            show_scores: verbose,
            ..ContextConfig::default()
        });

        Ok(ReplSession {
            input,
            commands,
            display: DisplayManager::new(),
            session: ChatSession::new(),
            engine,
            builder,
            client,
            document,
            translate_to,
        })
    }

    /// Run the loop until the user exits
    pub async fn run(&mut self) -> Result<()> {
        self.display.show_banner(
            env!("CARGO_PKG_VERSION"),
            self.client.model(),
            &self.document.source,
            self.document.word_count(),
        );

        loop {
            let line = match self.input.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    println!("\n{}", "Goodbye!".green());
                    break;
                }
                Err(err) => {
                    self.display.show_error(&err.to_string());
                    break;
                }
            };

            if line.is_empty() {
                continue;
            }

            if commands::is_command(&line) {
                let command = self.commands.parse(&line);
                let keep_going =
                    self.commands
                        .execute(command, &mut self.session, &mut self.engine)?;
                if !keep_going {
                    break;
                }
                continue;
            }

            if let Err(err) = self.answer(&line).await {
                self.display.show_error(&err.to_string());
            }
        }

        self.input.save_history()?;
        Ok(())
    }

    /// Answer one question: retrieve, augment, complete, record.
    async fn answer(&mut self, question: &str) -> Result<()> {
        let started = Instant::now();

        let query = match &self.translate_to {
            Some(target) => {
                let router = LanguageRouter::new(&self.client);
                let translated = router.translate(question, target).await?;
                if self.commands.is_verbose() && translated != question {
                    self.display
                        .show_info(&format!("Query translated to: {}", translated));
                }
                translated
            }
            None => question.to_string(),
        };

        let retrieved = self
            .engine
            .retrieve_scored(&self.document.text, &query)?;

        if self.commands.is_verbose() {
            self.display.show_retrieved(&retrieved);
        }

        let augmented = self
            .builder
            .augment(&self.document.text, &retrieved, question);

        let spinner = self.display.start_thinking();
        let messages = self.session.messages_with(ChatMessage::user(augmented.clone()));
        let result = self.client.complete(&messages).await;
        self.display.finish_thinking(spinner);

        let answer = result?;
        self.display.show_answer(&answer);

        let record = TurnRecord {
            question: question.to_string(),
            answer,
            chunks_used: retrieved.len(),
            duration_ms: started.elapsed().as_millis() as u64,
        };
        self.session.record_turn(augmented, record, retrieved);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmConfig;

    fn repl(verbose: bool) -> ReplSession {
        let document = Document {
            source: "notes.txt".to_string(),
            text: "The sun is bright and hot.".to_string(),
        };
        let client = OllamaChatClient::new(LlmConfig::default()).unwrap();
        ReplSession::new(document, RetrievalEngine::new(), client, None, None, verbose).unwrap()
    }

    #[test]
    fn test_verbose_flows_into_prompt_builder() {
        assert!(repl(true).builder.config().show_scores);
        assert!(!repl(false).builder.config().show_scores);
    }

    #[test]
    fn test_verbose_flows_into_command_handler() {
        assert!(repl(true).commands.is_verbose());
        assert!(!repl(false).commands.is_verbose());
    }
}
