//! Config management use case

use crate::domain::{Language, OutputMode};
use crate::error::{Result, TtxmlError};
use crate::infrastructure::config::CONFIG_FILE_NAME;
use crate::infrastructure::Config;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Keys accepted by `get` and `set`
pub const CONFIG_KEYS: &[&str] = &[
    "language",
    "mode",
    "english.tokenizer",
    "english.lemmatize",
    "japanese.dictionary",
    "japanese.pos_field",
    "japanese.lemma_field",
];

/// Service for reading and editing a config file
pub struct ConfigService {
    path: Option<PathBuf>,
}

impl ConfigService {
    /// `path` is the located config file; `None` means built-in defaults
    pub fn new(path: Option<PathBuf>) -> Self {
        ConfigService { path }
    }

    fn load(&self) -> Result<Config> {
        match &self.path {
            Some(path) => Config::load_from_file(path),
            None => Ok(Config::default()),
        }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;
        config_values(&config)
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| unknown_key(key))
    }

    /// Set a config value and save the file.
    ///
    /// Other values are written back as they were read, relative paths included.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self
            .path
            .clone()
            .ok_or_else(|| TtxmlError::ConfigNotFound(PathBuf::from(CONFIG_FILE_NAME)))?;
        let mut config = Config::read_from_file(&path)?;

        match key {
            "language" => config.language = Language::from_str(value)?,
            "mode" => config.mode = OutputMode::from_str(value)?,
            "english.tokenizer" => config.english.tokenizer = optional_path(value),
            "english.lemmatize" => config.english.lemmatize = parse_bool(key, value)?,
            "japanese.dictionary" => config.japanese.dictionary = optional_path(value),
            "japanese.pos_field" => config.japanese.pos_field = parse_index(key, value)?,
            "japanese.lemma_field" => config.japanese.lemma_field = parse_index(key, value)?,
            _ => return Err(unknown_key(key)),
        }

        config.save_to_file(&path)
    }

    /// All config values as (key, value) pairs, in `CONFIG_KEYS` order
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        Ok(config_values(&self.load()?))
    }
}

fn config_values(config: &Config) -> Vec<(&'static str, String)> {
    vec![
        ("language", config.language.code().to_string()),
        ("mode", config.mode.to_string()),
        ("english.tokenizer", display_path(config.english.tokenizer.as_deref())),
        ("english.lemmatize", config.english.lemmatize.to_string()),
        (
            "japanese.dictionary",
            display_path(config.japanese.dictionary.as_deref()),
        ),
        ("japanese.pos_field", config.japanese.pos_field.to_string()),
        ("japanese.lemma_field", config.japanese.lemma_field.to_string()),
    ]
}

fn unknown_key(key: &str) -> TtxmlError {
    TtxmlError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn optional_path(value: &str) -> Option<PathBuf> {
    match value.trim() {
        "" | "none" => None,
        path => Some(PathBuf::from(path)),
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "none".to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(TtxmlError::Config(format!(
            "Invalid value for {}: {} (expected true or false)",
            key, value
        ))),
    }
}

fn parse_index(key: &str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| {
        TtxmlError::Config(format!(
            "Invalid value for {}: {} (expected a column number)",
            key, value
        ))
    })
}
