//! Command-line argument parsing for docchat
//!
//! Provides clap-based CLI with verbosity control.

use clap::Parser;
use std::path::PathBuf;

/// docchat - Chat with any document from your terminal
#[derive(Parser, Debug)]
#[command(name = "docchat")]
#[command(version)]
#[command(about = "Chat with any document from your terminal", long_about = None)]
pub struct Args {
    /// Document to chat with (file path or URL)
    #[arg(value_name = "DOCUMENT")]
    pub document: String,

    /// Ollama model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama host (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Ollama port (overrides the config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// How many chunks to retrieve per question
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Maximum words per chunk
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Words of overlap between consecutive chunks
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Sampling temperature for the model
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Translate questions to the document's language before retrieval
    #[arg(long)]
    pub translate: bool,

    /// Readline history file path
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress banners and progress output)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

impl Verbosity {
    /// Check if retrieval scores should be shown
    pub fn show_scores(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}
