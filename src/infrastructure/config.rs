//! Configuration management

use crate::domain::{Language, OutputMode};
use crate::error::{Result, TtxmlError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "ttxml.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "TTXML_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub mode: OutputMode,
    pub english: EnglishConfig,
    pub japanese: JapaneseConfig,
}

/// English tagger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnglishConfig {
    /// nlprule tokenizer binary (`en_tokenizer.bin`), zstd-compressed if it ends in `.zst`
    pub tokenizer: Option<PathBuf>,
    /// Write nlprule's lemma instead of echoing the token
    pub lemmatize: bool,
}

/// Japanese tagger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JapaneseConfig {
    /// Compiled vibrato system dictionary, zstd-compressed if it ends in `.zst`
    pub dictionary: Option<PathBuf>,
    /// Feature column holding the part of speech
    pub pos_field: usize,
    /// Feature column holding the lemma (6 for IPADIC)
    pub lemma_field: usize,
}

impl Default for JapaneseConfig {
    fn default() -> Self {
        JapaneseConfig {
            dictionary: None,
            pos_field: 0,
            lemma_field: 6,
        }
    }
}

impl Config {
    /// Load config from a TOML file, resolving relative paths against its directory
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::read_from_file(path)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Load config from a TOML file with paths exactly as written
    pub fn read_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TtxmlError::ConfigNotFound(path.to_path_buf())
            } else {
                TtxmlError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Find the config file to use.
    ///
    /// Order: explicit path, `TTXML_CONFIG`, `./ttxml.toml`. Returns `None`
    /// when nothing was given and no file exists in the current directory.
    pub fn locate(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            return Ok(Some(path.to_path_buf()));
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            return Ok(Some(PathBuf::from(env_path)));
        }

        let local = std::env::current_dir()?.join(CONFIG_FILE_NAME);
        Ok(local.is_file().then_some(local))
    }

    /// Load the config found by [`Config::locate`], or the defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit)? {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.english.tokenizer, &mut self.japanese.dictionary]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
