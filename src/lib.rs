//! ttxml - TreeTagger-style XML tagging
//!
//! Tokenizes, POS-tags and lemmatizes Japanese or English text files,
//! writes the result as `token<TAB>pos<TAB>lemma` lines inside the input's
//! own XML structure, and packs the documents into one zip archive.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TtxmlError;
