//! Error types for ttxml

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ttxml application
#[derive(Debug, Error)]
pub enum TtxmlError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Tagger unavailable: {0}")]
    TaggerUnavailable(String),

    #[error("Tagging failed: {0}")]
    Tagging(String),

    #[error("Malformed markup: {0}")]
    Markup(String),

    #[error("File is not valid UTF-8: {0}")]
    Decode(String),

    #[error("No valid text files were successfully processed")]
    NoOutput,

    #[error("Dictionary error: {0}")]
    Dictionary(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TtxmlError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TtxmlError::NoOutput => 2,
            TtxmlError::UnsupportedLanguage(_) => 3,
            TtxmlError::ConfigNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TtxmlError::UnsupportedLanguage(lang) => {
                format!(
                    "The '{}' tokenizer is not yet implemented.\n\n\
                    Supported languages:\n\
                    • JP (Japanese)\n\
                    • EN (English)\n\n\
                    Example:\n\
                    ttxml tag --lang EN notes.txt",
                    lang
                )
            }
            TtxmlError::NoOutput => {
                "No valid text files were successfully processed.\n\n\
                Suggestions:\n\
                • Check that your files are encoded in UTF-8\n\
                • Make sure the files contain text in the selected language\n\
                • Check that the tagger dictionary is configured: ttxml config --list"
                    .to_string()
            }
            TtxmlError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'ttxml init' to create a default ttxml.toml\n\
                    • Set TTXML_CONFIG environment variable to your config path",
                    path.display()
                )
            }
            TtxmlError::Dictionary(msg) => {
                format!(
                    "Dictionary error: {}\n\n\
                    Suggestions:\n\
                    • Japanese: point japanese.dictionary at a compiled vibrato system.dic(.zst)\n\
                    • English: point english.tokenizer at an nlprule en_tokenizer.bin\n\
                    • Configure it: ttxml config japanese.dictionary path/to/system.dic.zst",
                    msg
                )
            }
            TtxmlError::Config(msg) => {
                if msg.contains("Invalid mode") {
                    format!(
                        "{}\n\n\
                        Valid modes: structure, corpus\n\
                        Example: ttxml config mode corpus",
                        msg
                    )
                } else if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: language, mode, english.tokenizer, english.lemmatize,\n\
                        japanese.dictionary, japanese.pos_field, japanese.lemma_field",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TtxmlError
pub type Result<T> = std::result::Result<T, TtxmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_suggestions() {
        let err = TtxmlError::UnsupportedLanguage("FR".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'FR'"));
        assert!(msg.contains("JP (Japanese)"));
        assert!(msg.contains("ttxml tag --lang EN"));
    }

    #[test]
    fn test_no_output_suggestions() {
        let msg = TtxmlError::NoOutput.display_with_suggestions();
        assert!(msg.contains("UTF-8"));
        assert!(msg.contains("ttxml config --list"));
    }

    #[test]
    fn test_config_invalid_mode_suggestions() {
        let err = TtxmlError::Config("Invalid mode: flat".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("structure, corpus"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(TtxmlError::NoOutput.exit_code(), 2);
        assert_eq!(
            TtxmlError::UnsupportedLanguage("FR".to_string()).exit_code(),
            3
        );
        assert_eq!(TtxmlError::Markup("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TtxmlError::Tagging("boom".to_string());
        assert_eq!(err.display_with_suggestions(), "Tagging failed: boom");
    }
}
