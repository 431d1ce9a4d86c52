//! Infrastructure layer - Config, file input, taggers and archive output

pub mod archive;
pub mod config;
pub mod input;
pub mod taggers;

pub use archive::{build_archive, Archive, ArchiveEntry, NameCollision};
pub use config::Config;
pub use input::{collect_inputs, InputFile};
pub use taggers::build_provider;
