//! docchat - Main CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use docchat::cli::{Args, Config, Verbosity};
use docchat::language::LanguageRouter;
use docchat::llm::{LlmConfig, OllamaChatClient, DEFAULT_MODEL};
use docchat::loader;
use docchat::repl::ReplSession;
use docchat::retrieval::{ChunkingParams, RetrievalEngine, SearchParams};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = args.verbosity();

    let config = Config::load(args.config.clone())
        .context("Failed to load configuration")?;

    // CLI flags win over config file values
    let chunking = ChunkingParams::new(
        args.max_words.unwrap_or(config.retrieval.max_words),
        args.overlap.unwrap_or(config.retrieval.overlap),
    );
    chunking
        .validate()
        .context("Invalid chunking parameters")?;

    let search = SearchParams {
        top_k: args.top_k.unwrap_or(config.retrieval.top_k),
        chunking,
    };
    let engine = RetrievalEngine::with_params(search);

    let model = args
        .model
        .clone()
        .or_else(|| {
            if config.ollama.default_model.is_empty() {
                None
            } else {
                Some(config.ollama.default_model.clone())
            }
        })
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let base_url = config.ollama_url_with(args.host.as_deref(), args.port);

    let llm_config = LlmConfig {
        base_url,
        model,
        temperature: args.temperature.unwrap_or(config.ollama.temperature),
    };
    let client = OllamaChatClient::new(llm_config)?;

    if !client.health_check().await {
        eprintln!(
            "{} Cannot reach Ollama at {}. Start it with: ollama serve",
            "Error:".red().bold(),
            client.config().base_url
        );
        std::process::exit(1);
    }

    if verbosity != Verbosity::Quiet {
        println!("{}", format!("Loading {}...", args.document).dimmed());
    }
    let document = loader::load(&args.document)
        .await
        .with_context(|| format!("Failed to load document: {}", args.document))?;

    // With --translate, questions are translated into the document's
    // language before retrieval so lexical overlap has a chance to match.
    let translate_to = if args.translate {
        let router = LanguageRouter::new(&client);
        let language = router.detect(&document.text).await?;
        if verbosity != Verbosity::Quiet {
            println!(
                "{}",
                format!("Document language: {}", language).dimmed()
            );
        }
        Some(language)
    } else {
        None
    };

    let history_file = args.history_file.clone().or_else(Config::history_path);

    let mut repl = ReplSession::new(
        document,
        engine,
        client,
        translate_to,
        history_file,
        verbosity.show_scores(),
    )?;

    repl.run().await
}
