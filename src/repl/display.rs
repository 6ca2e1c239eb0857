//! Terminal output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Handles formatted terminal output for the REPL
pub struct DisplayManager;

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager
    }

    /// Show the startup banner
    pub fn show_banner(&self, version: &str, model: &str, source: &str, words: usize) {
        println!("\n{}", "=".repeat(60).cyan());
        println!("{}", format!("  docchat v{}", version).bold().cyan());
        println!("{}", "  Chat with any document from your terminal".dimmed());
        println!("{}", "=".repeat(60).cyan());
        println!("  Document: {} ({} words)", source.green(), words);
        println!("  Model:    {}", model.green());
        println!("  Type {} for commands, {} to quit\n", "/help".cyan(), "Ctrl-D".cyan());
    }

    /// Show an answer from the model
    pub fn show_answer(&self, answer: &str) {
        println!("\n{}\n", answer);
    }

    /// Show an error message
    pub fn show_error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Show an informational message
    pub fn show_info(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    /// Show retrieved chunks with their scores
    pub fn show_retrieved(&self, chunks: &[crate::retrieval::ScoredChunk]) {
        for chunk in chunks {
            println!(
                "  {} {}",
                format!("[{:.3}]", chunk.score).green().dimmed(),
                chunk.text.dimmed()
            );
        }
    }

    /// Start a thinking spinner while waiting for the model
    pub fn start_thinking(&self) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Thinking...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Stop the spinner and clear its line
    pub fn finish_thinking(&self, spinner: ProgressBar) {
        spinner.finish_and_clear();
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        DisplayManager::new()
    }
}
