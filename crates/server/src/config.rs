//! # Application Configuration
//!
//! Loads the server configuration from an optional `config.yml` plus
//! environment variables. Top-level keys are overridden by plain variables
//! (`PORT`, `DATA_DIR`, `JWT_SECRET`, `CORS_ORIGIN`), nested keys by
//! `APEX_`-prefixed variables (e.g. `APEX_AI__API_URL_BASE`). The Gemini key
//! is read from `GEMINI_API_KEY` last, so it works without any config file.

use apex::fallback::GenericTemplateThresholds;
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// The value shipped in `.env` templates; treated the same as no key at all.
const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key_here";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    General(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the JSON collection files. Loaded from `DATA_DIR`.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// The allowed CORS origin, or `*` for permissive.
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
    /// Secret for signing JWTs. Loaded from `JWT_SECRET`.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// AI collaborator configuration.
    #[serde(default)]
    pub ai: AiConfig,
    /// Thresholds for the generic-template judgment.
    #[serde(default)]
    pub generic_template: GenericTemplateConfig,
}

fn default_port() -> u16 {
    5000
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_jwt_secret() -> String {
    "a-secure-secret-key".to_string()
}

/// Configuration for the Gemini collaborator.
#[derive(Debug, Deserialize, Clone)]
pub struct AiConfig {
    /// API key; absent (or the placeholder) disables live generation.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL; one `<model>:generateContent` endpoint is derived per model.
    #[serde(default = "default_api_url_base")]
    pub api_url_base: String,
    /// Models tried in order; the first successful response wins.
    #[serde(default = "default_models")]
    pub models: Vec<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url_base: default_api_url_base(),
            models: default_models(),
        }
    }
}

fn default_api_url_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_models() -> Vec<String> {
    vec![
        "gemini-1.5-flash".to_string(),
        "gemini-1.5-pro".to_string(),
        "gemini-pro".to_string(),
    ]
}

/// Tuning constants for the generic-template judgment. Arbitrary thresholds,
/// kept configurable rather than hardcoded.
#[derive(Debug, Deserialize, Clone)]
pub struct GenericTemplateConfig {
    #[serde(default = "default_min_section_chars")]
    pub min_section_chars: usize,
    #[serde(default = "default_min_summary_chars")]
    pub min_summary_chars: usize,
    #[serde(default = "default_max_generic_title_chars")]
    pub max_generic_title_chars: usize,
}

impl Default for GenericTemplateConfig {
    fn default() -> Self {
        Self {
            min_section_chars: default_min_section_chars(),
            min_summary_chars: default_min_summary_chars(),
            max_generic_title_chars: default_max_generic_title_chars(),
        }
    }
}

fn default_min_section_chars() -> usize {
    500
}

fn default_min_summary_chars() -> usize {
    100
}

fn default_max_generic_title_chars() -> usize {
    40
}

impl GenericTemplateConfig {
    pub fn thresholds(&self) -> GenericTemplateThresholds {
        GenericTemplateThresholds {
            min_section_chars: self.min_section_chars,
            min_summary_chars: self.min_summary_chars,
            max_generic_title_chars: self.max_generic_title_chars,
        }
    }
}

impl AppConfig {
    /// Whether a usable Gemini key is present.
    pub fn gemini_configured(&self) -> bool {
        self.ai.api_key.is_some()
    }
}

// Helper to read a file, substitute ${VAR} references from the environment,
// and return its content. Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").unwrap();
    let expanded = re.replace_all(&content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    });

    Ok(Some(expanded.to_string()))
}

/// Loads the application configuration.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let config_path = config_path_override.unwrap_or("config.yml");
    if let Some(content) = read_and_substitute(config_path)? {
        info!("Loading configuration from '{config_path}'.");
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        // Plain environment variables for top-level keys like PORT.
        .add_source(Environment::default())
        // Prefixed environment variables for nested overrides.
        .add_source(
            Environment::with_prefix("APEX")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // The Gemini key commonly arrives via its own variable rather than the
    // config file; check it last so either source works.
    if config.ai.api_key.is_none() {
        if let Ok(key) = env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.ai.api_key = Some(key);
            }
        }
    }
    if config
        .ai
        .api_key
        .as_deref()
        .is_some_and(|k| k == PLACEHOLDER_API_KEY)
    {
        config.ai.api_key = None;
    }

    Ok(config)
}
