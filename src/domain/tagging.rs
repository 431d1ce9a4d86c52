//! Tagging provider abstraction

use crate::domain::TaggedToken;
use crate::error::{Result, TtxmlError};
use log::warn;

/// Turns text into an ordered sequence of tagged tokens.
///
/// Implementations are built once and shared read-only; `tag` must not rely
/// on mutable state between calls.
pub trait TaggingProvider {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Tag `text`, returning tokens in left-to-right order
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;
}

/// Tag `text`, treating a provider failure as "no tokens".
pub fn tag_or_empty(provider: &dyn TaggingProvider, text: &str) -> Vec<TaggedToken> {
    match provider.tag(text) {
        Ok(tokens) => tokens,
        Err(e) => {
            warn!("{} tagger failed: {}", provider.name(), e);
            Vec::new()
        }
    }
}

/// Provider standing in for a tagger whose model could not be loaded
#[derive(Debug, Clone)]
pub struct UnavailableTagger {
    reason: String,
}

impl UnavailableTagger {
    pub fn new(reason: impl Into<String>) -> Self {
        UnavailableTagger {
            reason: reason.into(),
        }
    }
}

impl TaggingProvider for UnavailableTagger {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn tag(&self, _text: &str) -> Result<Vec<TaggedToken>> {
        Err(TtxmlError::TaggerUnavailable(self.reason.clone()))
    }
}
