//! Japanese tagging with the vibrato morphological analyzer

use crate::domain::{TaggedToken, TaggingProvider};
use crate::error::{Result, TtxmlError};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use vibrato::{Dictionary, Tokenizer};

/// Longest piece of text handed to the analyzer in one call
const MAX_CHUNK_CHARS: usize = 4096;

/// MeCab-style analyzer over a compiled vibrato system dictionary.
///
/// POS and lemma are read from feature columns; with IPADIC the defaults
/// (0 and 6) give the coarse part of speech and the base form.
pub struct VibratoTagger {
    tokenizer: Tokenizer,
    pos_field: usize,
    lemma_field: usize,
}

impl VibratoTagger {
    /// Load a dictionary file, decompressing it first when it ends in `.zst`
    pub fn from_path(path: &Path, pos_field: usize, lemma_field: usize) -> Result<Self> {
        info!("Loading Japanese dictionary from {}", path.display());
        let file = File::open(path).map_err(|e| {
            TtxmlError::Dictionary(format!("cannot open {}: {}", path.display(), e))
        })?;

        let dict = if path.extension().is_some_and(|ext| ext == "zst") {
            Dictionary::read(zstd::Decoder::new(file)?)
        } else {
            Dictionary::read(BufReader::new(file))
        }
        .map_err(|e| TtxmlError::Dictionary(e.to_string()))?;

        Self::from_dictionary(dict, pos_field, lemma_field)
    }

    pub fn from_dictionary(dict: Dictionary, pos_field: usize, lemma_field: usize) -> Result<Self> {
        let tokenizer = Tokenizer::new(dict)
            .ignore_space(true)
            .map_err(|e| TtxmlError::Dictionary(e.to_string()))?;

        Ok(VibratoTagger {
            tokenizer,
            pos_field,
            lemma_field,
        })
    }
}

impl TaggingProvider for VibratoTagger {
    fn name(&self) -> &str {
        "japanese"
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let mut worker = self.tokenizer.new_worker();
        let mut tokens = Vec::new();

        for chunk in chunks(text) {
            worker.reset_sentence(chunk);
            worker.tokenize();
            tokens.extend(worker.token_iter().filter_map(|token| {
                let surface = token.surface();
                if surface.trim().is_empty() {
                    return None;
                }
                Some(token_from_feature(
                    surface,
                    token.feature(),
                    self.pos_field,
                    self.lemma_field,
                ))
            }));
        }

        Ok(tokens)
    }
}

/// Build a token from a surface form and its comma-separated feature string.
///
/// A missing POS column becomes `*`; a missing or `*` lemma falls back to
/// the surface form.
pub fn token_from_feature(
    surface: &str,
    feature: &str,
    pos_field: usize,
    lemma_field: usize,
) -> TaggedToken {
    let columns: Vec<&str> = feature.split(',').collect();
    let pos = columns.get(pos_field).copied().unwrap_or("*");
    let lemma = columns
        .get(lemma_field)
        .copied()
        .filter(|lemma| !lemma.is_empty() && *lemma != "*")
        .unwrap_or(surface);

    TaggedToken::new(surface, pos, lemma)
}

/// Split text into analyzer-sized pieces: per line, then after `。`, then by length
fn chunks(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();

    for sentence in text.lines().flat_map(|line| line.split_inclusive('。')) {
        if sentence.trim().is_empty() {
            continue;
        }

        let mut rest = sentence;
        while rest.chars().count() > MAX_CHUNK_CHARS {
            let split_at = rest
                .char_indices()
                .nth(MAX_CHUNK_CHARS)
                .map(|(idx, _)| idx)
                .unwrap_or(rest.len());
            let (head, tail) = rest.split_at(split_at);
            pieces.push(head);
            rest = tail;
        }
        pieces.push(rest);
    }

    pieces
}
