//! English tagging with the nlprule tokenizer

use crate::domain::{TaggedToken, TaggingProvider};
use crate::error::{Result, TtxmlError};
use log::info;
use nlprule::Tokenizer;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Sentence boundary markers nlprule adds next to real part-of-speech tags
const BOUNDARY_TAGS: &[&str] = &["SENT_START", "SENT_END"];

/// POS written when nlprule has no reading for a token
const UNKNOWN_POS: &str = "*";

/// nlprule tokenizer with its built-in disambiguated POS tags.
///
/// Without `lemmatize` every token is its own lemma; with it the lemma of
/// the chosen reading is written.
pub struct NlpruleTagger {
    tokenizer: Tokenizer,
    lemmatize: bool,
}

impl NlpruleTagger {
    /// Load a tokenizer binary, decompressing it first when it ends in `.zst`
    pub fn from_path(path: &Path, lemmatize: bool) -> Result<Self> {
        info!("Loading English tokenizer from {}", path.display());
        let file = File::open(path).map_err(|e| {
            TtxmlError::Dictionary(format!("cannot open {}: {}", path.display(), e))
        })?;

        let tokenizer = if path.extension().is_some_and(|ext| ext == "zst") {
            Tokenizer::from_reader(zstd::Decoder::new(file)?)
        } else {
            Tokenizer::from_reader(BufReader::new(file))
        }
        .map_err(|e| TtxmlError::Dictionary(format!("{}: {}", path.display(), e)))?;

        Ok(Self::new(tokenizer, lemmatize))
    }

    pub fn new(tokenizer: Tokenizer, lemmatize: bool) -> Self {
        NlpruleTagger {
            tokenizer,
            lemmatize,
        }
    }
}

impl TaggingProvider for NlpruleTagger {
    fn name(&self) -> &str {
        "nlprule"
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let mut tokens = Vec::new();

        for sentence in self.tokenizer.pipe(text) {
            for token in sentence.tokens() {
                let word = token.word();
                let surface = word.text().as_str();
                if surface.trim().is_empty() {
                    continue;
                }

                let readings = word
                    .tags()
                    .iter()
                    .map(|data| (data.pos().as_str(), data.lemma().as_str()));
                tokens.push(choose_reading(surface, readings, self.lemmatize));
            }
        }

        Ok(tokens)
    }
}

/// Pick the first real `(pos, lemma)` reading of a token.
///
/// Sentence markers and empty tags are skipped. With no reading left the POS
/// is `*`; an empty lemma, or `lemmatize` off, falls back to the surface.
pub fn choose_reading<'a>(
    surface: &str,
    readings: impl IntoIterator<Item = (&'a str, &'a str)>,
    lemmatize: bool,
) -> TaggedToken {
    let reading = readings
        .into_iter()
        .find(|(pos, _)| !pos.is_empty() && !BOUNDARY_TAGS.contains(pos));

    match reading {
        Some((pos, lemma)) if lemmatize && !lemma.is_empty() => {
            TaggedToken::new(surface, pos, lemma)
        }
        Some((pos, _)) => TaggedToken::new(surface, pos, surface),
        None => TaggedToken::new(surface, UNKNOWN_POS, surface),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reading_wins() {
        let readings = vec![("VBZ", "run"), ("NNS", "run")];
        assert_eq!(
            choose_reading("runs", readings, true),
            TaggedToken::new("runs", "VBZ", "run")
        );
    }

    #[test]
    fn test_lemma_echoes_token_by_default() {
        let readings = vec![("NNS", "dog")];
        assert_eq!(
            choose_reading("dogs", readings, false),
            TaggedToken::new("dogs", "NNS", "dogs")
        );
    }

    #[test]
    fn test_boundary_markers_skipped() {
        let readings = vec![("SENT_END", ""), ("", ""), ("PCT", ".")];
        assert_eq!(
            choose_reading(".", readings, true),
            TaggedToken::new(".", "PCT", ".")
        );
    }

    #[test]
    fn test_empty_lemma_falls_back_to_surface() {
        let readings = vec![("NNP", "")];
        assert_eq!(
            choose_reading("Kyoto", readings, true),
            TaggedToken::new("Kyoto", "NNP", "Kyoto")
        );
    }

    #[test]
    fn test_no_reading() {
        assert_eq!(
            choose_reading("zxq", Vec::new(), true),
            TaggedToken::new("zxq", "*", "zxq")
        );
        assert_eq!(
            choose_reading("!", vec![("SENT_END", "!")], false),
            TaggedToken::new("!", "*", "!")
        );
    }

    #[test]
    fn test_missing_tokenizer_fails() {
        let result = NlpruleTagger::from_path(Path::new("/nonexistent/en_tokenizer.bin"), false);
        assert!(matches!(result, Err(TtxmlError::Dictionary(_))));
    }
}
