//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod tag_batch;

pub use manage_config::ConfigService;
pub use tag_batch::{BatchReport, FileOutcome, FileReport, TagBatchService};
