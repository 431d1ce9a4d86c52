//! Initialize config use case

use crate::domain::Language;
use crate::error::{Result, TtxmlError};
use crate::infrastructure::config::CONFIG_FILE_NAME;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a default `ttxml.toml` into `dir`, returning its path.
pub fn init(dir: &Path, language: Language) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(TtxmlError::Config(format!(
            "Config file already exists: {}",
            path.display()
        )));
    }

    let config = Config {
        language,
        ..Config::default()
    };
    config.save_to_file(&path)?;

    Ok(path)
}
