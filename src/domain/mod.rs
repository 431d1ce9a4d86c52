//! Domain layer - Tagging model, markup retagging and naming rules

pub mod filename;
pub mod language;
pub mod markup;
pub mod tagging;
pub mod token;

pub use filename::{output_name, sanitize_id};
pub use language::{Language, OutputMode};
pub use markup::{corpus_document, retag_document, DocumentNode, RetagResult};
pub use tagging::{tag_or_empty, TaggingProvider, UnavailableTagger};
pub use token::{format_block, format_line, TaggedToken};
