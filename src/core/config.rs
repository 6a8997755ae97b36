//! Configuration management for Codeclass
//!
//! Supports environment variables, config files, and runtime overrides.
//! Defaults reproduce the classroom handout's greeting exactly.
//!
//! Config file location: ~/.config/codeclass/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{CodeclassError, Result};

/// Main configuration for Codeclass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Greeting configuration
    pub greeting: GreetingConfig,
    /// Terminal UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

/// Greeting text configuration
///
/// The greeting printed for a name is `<salutation>, <name><punctuation>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// Salutation word (default: Hello)
    pub salutation: String,
    /// Question shown before reading a name from an interactive terminal
    pub prompt: String,
    /// Trailing punctuation (default: !)
    pub punctuation: String,
}

/// Terminal UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Whether to show the prompt when stdin is a terminal
    pub show_prompt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: GreetingConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            salutation: env::var("CODECLASS_SALUTATION").unwrap_or_else(|_| "Hello".to_string()),
            prompt: env::var("CODECLASS_PROMPT")
                .unwrap_or_else(|_| "What is your name? ".to_string()),
            punctuation: "!".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_prompt: env::var("CODECLASS_SHOW_PROMPT")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("codeclass")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Try to load from config file
        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(CodeclassError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| CodeclassError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CodeclassError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| CodeclassError::config(format!("Failed to create config dir: {}", e)))?;
        }

        // Serialize to TOML
        let content = toml::to_string_pretty(self)
            .map_err(|e| CodeclassError::config(format!("Failed to serialize config: {}", e)))?;

        // Write to file
        fs::write(&config_path, content)
            .map_err(|e| CodeclassError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Save configuration and return the path
    pub fn save_and_get_path(&self) -> Result<PathBuf> {
        self.save()?;
        Ok(Self::config_file())
    }

    /// Check if a config file exists
    pub fn config_exists() -> bool {
        Self::config_file().exists()
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config)
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}
