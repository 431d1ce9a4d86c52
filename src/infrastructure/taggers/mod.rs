//! Concrete tagging providers and their construction from config

pub mod english;
pub mod japanese;

pub use english::NlpruleTagger;
pub use japanese::VibratoTagger;

use crate::domain::{Language, TaggingProvider};
use crate::error::{Result, TtxmlError};
use crate::infrastructure::Config;

/// Build the provider for `language` once, at startup.
pub fn build_provider(language: Language, config: &Config) -> Result<Box<dyn TaggingProvider>> {
    match language {
        Language::English => {
            let path = config.english.tokenizer.as_deref().ok_or_else(|| {
                TtxmlError::Dictionary("no English tokenizer binary configured".to_string())
            })?;
            Ok(Box::new(NlpruleTagger::from_path(
                path,
                config.english.lemmatize,
            )?))
        }
        Language::Japanese => {
            let path = config.japanese.dictionary.as_deref().ok_or_else(|| {
                TtxmlError::Dictionary("no Japanese dictionary configured".to_string())
            })?;
            Ok(Box::new(VibratoTagger::from_path(
                path,
                config.japanese.pos_field,
                config.japanese.lemma_field,
            )?))
        }
        Language::French => Err(TtxmlError::UnsupportedLanguage(
            language.code().to_string(),
        )),
    }
}
