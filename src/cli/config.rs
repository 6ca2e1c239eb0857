//! Configuration management for docchat
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.docchat/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::{DocChatError, Result};

/// Complete configuration for docchat
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ollama: OllamaConfig,
    pub retrieval: RetrievalConfig,
}

/// Ollama connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    pub host: String,
    pub port: u16,
    pub default_model: String,
    pub temperature: f64,
}

/// Retrieval tuning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_k: usize,
    pub max_words: usize,
    pub overlap: usize,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 11434,
            default_model: crate::llm::DEFAULT_MODEL.to_string(),
            temperature: 0.2,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            max_words: 10,
            overlap: 5,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DocChatError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| DocChatError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".docchat").join("config.toml");
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.retrieval.max_words == 0 {
            return Err(DocChatError::Config(
                "max_words must be greater than 0".to_string(),
            ));
        }

        if self.retrieval.overlap >= self.retrieval.max_words {
            return Err(DocChatError::Config(
                "overlap must be less than max_words".to_string(),
            ));
        }

        if self.ollama.temperature < 0.0 || self.ollama.temperature > 2.0 {
            return Err(DocChatError::Config(
                "temperature must be between 0.0 and 2.0".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &PathBuf) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| DocChatError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DocChatError::Config(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DocChatError::Config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Ollama base URL with explicit overrides applied over the file values.
    /// An override is an override even when it equals the built-in default.
    pub fn ollama_url_with(&self, host: Option<&str>, port: Option<u16>) -> String {
        format!(
            "http://{}:{}",
            host.unwrap_or(&self.ollama.host),
            port.unwrap_or(self.ollama.port)
        )
    }

    /// Default readline history location
    pub fn history_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".docchat").join("history"))
    }
}
