//! Markup fragments: parsing, retagging and serialization

pub mod node;
pub mod parser;
pub mod retag;
pub mod serializer;

pub use node::DocumentNode;
pub use parser::{parse_document, parse_fragment};
pub use retag::{corpus_document, retag_document, RetagResult};
pub use serializer::content_to_markup;
