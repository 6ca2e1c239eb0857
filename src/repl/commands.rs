//! Slash commands for the REPL

use anyhow::Result;
use colored::*;

use crate::repl::session::ChatSession;
use crate::retrieval::RetrievalEngine;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Reset,
    History { limit: Option<usize> },
    Status,
    TopK { k: Option<usize> },
    Chunks,
    Verbose { enable: bool },
    Clear,
    Unknown { input: String },
}

/// Check if input should be parsed as a command
pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with('/')
}

/// Parses and executes REPL commands
pub struct CommandHandler {
    doc_source: String,
    doc_words: usize,
    verbose: bool,
}

impl CommandHandler {
    pub fn new(doc_source: String, doc_words: usize) -> Self {
        CommandHandler {
            doc_source,
            doc_words,
            verbose: false,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, enable: bool) {
        self.verbose = enable;
    }

    /// Parse input into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();
        if !trimmed.starts_with('/') {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "reset" => Command::Reset,
            "history" => {
                let limit = parts.get(1).and_then(|s| s.parse().ok());
                Command::History { limit }
            }
            "status" => Command::Status,
            "topk" => {
                let k = parts.get(1).and_then(|s| s.parse().ok());
                Command::TopK { k }
            }
            "chunks" => Command::Chunks,
            "verbose" => {
                let enable = parts
                    .get(1)
                    .map(|s| s.to_lowercase() == "on" || s == &"1" || s == &"true")
                    .unwrap_or(true);
                Command::Verbose { enable }
            }
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Execute a command.
    ///
    /// Returns true if the REPL should continue, false to exit.
    pub fn execute(
        &mut self,
        command: Command,
        session: &mut ChatSession,
        engine: &mut RetrievalEngine,
    ) -> Result<bool> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(true)
            }
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                Ok(false)
            }
            Command::Reset => {
                session.reset();
                println!("{}", "Conversation reset.".yellow());
                Ok(true)
            }
            Command::History { limit } => {
                self.show_history(session, limit.unwrap_or(10));
                Ok(true)
            }
            Command::Status => {
                self.show_status(session, engine);
                Ok(true)
            }
            Command::TopK { k } => {
                match k {
                    Some(k) => {
                        engine.set_top_k(k);
                        println!("{}", format!("Retrieving top {} chunks per question.", k).cyan());
                    }
                    None => println!(
                        "{}",
                        format!("top_k is {}. Usage: /topk <n>", engine.params().top_k).yellow()
                    ),
                }
                Ok(true)
            }
            Command::Chunks => {
                self.show_chunks(session);
                Ok(true)
            }
            Command::Verbose { enable } => {
                self.verbose = enable;
                let status = if enable { "enabled" } else { "disabled" };
                println!("{}", format!("Verbose mode {}", status).cyan());
                Ok(true)
            }
            Command::Clear => {
                print!("\x1B[2J\x1B[1;1H"); // ANSI escape codes to clear screen
                Ok(true)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                Ok(true)
            }
        }
    }

    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = vec![
            ("/help, /h", "Show this help message"),
            ("/history [n]", "Show last n turns (default: 10)"),
            ("/status", "Show document and retrieval settings"),
            ("/chunks", "Show chunks retrieved for the last question"),
            ("/topk <n>", "Set how many chunks are retrieved"),
            ("/reset", "Clear the conversation history"),
            ("/verbose [on|off]", "Toggle retrieval score output"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit docchat"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Usage:".bold());
        println!("  - Type a question about the document directly (no / prefix)");
        println!("  - Press {} or type {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    fn show_history(&self, session: &ChatSession, limit: usize) {
        let history = session.history(limit);

        if history.is_empty() {
            println!("{}", "No questions asked yet.".yellow());
            return;
        }

        println!(
            "\n{}",
            format!("History (last {}):", history.len()).bold().cyan()
        );
        println!("{}", "=".repeat(60).cyan());

        for (i, turn) in history.iter().enumerate() {
            let duration = format!("({}ms)", turn.duration_ms).dimmed();
            println!("  {}. {} {}", (i + 1).to_string().cyan(), turn.question, duration);
            if self.verbose {
                println!("     {}", turn.answer.dimmed());
            }
        }
        println!();
    }

    fn show_status(&self, session: &ChatSession, engine: &RetrievalEngine) {
        let params = engine.params();
        println!("\n{}", "Status:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());
        println!("  Document:   {} ({} words)", self.doc_source, self.doc_words);
        println!(
            "  Chunking:   max_words={}, overlap={}",
            params.chunking.max_words, params.chunking.overlap
        );
        println!("  Retrieval:  top_k={}", params.top_k);
        println!("  Turns:      {}", session.turn_count());
        println!();
    }

    fn show_chunks(&self, session: &ChatSession) {
        let chunks = session.last_retrieved();

        if chunks.is_empty() {
            println!("{}", "Nothing retrieved yet. Ask a question first.".yellow());
            return;
        }

        println!("\n{}", "Last retrieved chunks:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());
        for chunk in chunks {
            println!(
                "  {} {}",
                format!("[{:.3}]", chunk.score).green(),
                chunk.text
            );
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::{ChunkingParams, SearchParams};

    fn handler() -> CommandHandler {
        CommandHandler::new("notes.txt".to_string(), 100)
    }

    fn engine() -> RetrievalEngine {
        RetrievalEngine::with_params(SearchParams {
            top_k: 5,
            chunking: ChunkingParams::new(10, 5),
        })
    }

    #[test]
    fn test_is_command() {
        assert!(is_command("/help"));
        assert!(is_command("  /exit"));
        assert!(!is_command("what is the sun?"));
        assert!(!is_command(""));
    }

    #[test]
    fn test_parse_commands() {
        let h = handler();
        assert_eq!(h.parse("/help"), Command::Help);
        assert_eq!(h.parse("/h"), Command::Help);
        assert_eq!(h.parse("/exit"), Command::Exit);
        assert_eq!(h.parse("/quit"), Command::Exit);
        assert_eq!(h.parse("/reset"), Command::Reset);
        assert_eq!(h.parse("/status"), Command::Status);
        assert_eq!(h.parse("/chunks"), Command::Chunks);
        assert_eq!(h.parse("/history 5"), Command::History { limit: Some(5) });
        assert_eq!(h.parse("/history"), Command::History { limit: None });
        assert_eq!(h.parse("/topk 3"), Command::TopK { k: Some(3) });
        assert_eq!(h.parse("/verbose off"), Command::Verbose { enable: false });
        assert_eq!(h.parse("/verbose"), Command::Verbose { enable: true });
    }

    #[test]
    fn test_parse_unknown() {
        let h = handler();
        assert!(matches!(h.parse("/nope"), Command::Unknown { .. }));
        assert!(matches!(h.parse("plain text"), Command::Unknown { .. }));
        assert!(matches!(h.parse("/"), Command::Unknown { .. }));
    }

    #[test]
    fn test_execute_exit_stops_loop() {
        let mut h = handler();
        let mut session = ChatSession::new();
        let mut eng = engine();
        assert!(!h.execute(Command::Exit, &mut session, &mut eng).unwrap());
        assert!(h.execute(Command::Help, &mut session, &mut eng).unwrap());
    }

    #[test]
    fn test_execute_topk_updates_engine() {
        let mut h = handler();
        let mut session = ChatSession::new();
        let mut eng = engine();
        h.execute(Command::TopK { k: Some(2) }, &mut session, &mut eng)
            .unwrap();
        assert_eq!(eng.params().top_k, 2);
    }

    #[test]
    fn test_execute_verbose_toggle() {
        let mut h = handler();
        let mut session = ChatSession::new();
        let mut eng = engine();

        assert!(!h.is_verbose());
        h.execute(Command::Verbose { enable: true }, &mut session, &mut eng)
            .unwrap();
        assert!(h.is_verbose());
    }
}
