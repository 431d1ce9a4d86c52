//! Output formatting utilities

use crate::application::{FileOutcome, FileReport};
use crate::infrastructure::NameCollision;

/// One progress line for a processed file
pub fn format_file_report(idx: usize, total: usize, report: &FileReport) -> String {
    let status = match &report.outcome {
        FileOutcome::Processed { tokens } => {
            format!("Processed: {} ({} tokens)", report.name, tokens)
        }
        FileOutcome::Empty => format!("Warning: No tokens found in {}.", report.name),
        FileOutcome::Failed(reason) => format!("Failed to process {}: {}", report.name, reason),
    };
    format!("[{}/{}] {}", idx, total, status)
}

/// Warnings for inputs that overwrote each other in the archive
pub fn format_collisions(collisions: &[NameCollision]) -> String {
    let mut output = String::new();
    for collision in collisions {
        output.push_str(&format!(
            "Warning: {} and {} both map to {}; only {} was kept\n",
            collision.replaced, collision.kept, collision.member, collision.kept
        ));
    }
    output
}

/// `key = value` lines for `config --list`
pub fn format_config_list(values: &[(&str, String)]) -> String {
    let mut output = String::new();
    for (key, value) in values {
        output.push_str(&format!("{} = {}\n", key, value));
    }
    output
}
