//! Zip packing of tagged documents

use crate::domain::output_name;
use crate::error::Result;
use log::{debug, warn};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Declaration written at the top of every archive member
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// A processed document waiting to be packed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Original input file name; the member name is derived from it
    pub name: String,
    pub content: String,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        ArchiveEntry {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Two inputs that mapped to the same member name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    pub member: String,
    /// Input whose content was dropped
    pub replaced: String,
    /// Input whose content was kept
    pub kept: String,
}

/// An in-memory zip archive and what went into it
#[derive(Debug, Clone)]
pub struct Archive {
    pub bytes: Vec<u8>,
    /// Member names in write order
    pub members: Vec<String>,
    pub collisions: Vec<NameCollision>,
}

/// Pack entries into a deflate-compressed zip, one `<id>_tagged.xml` per entry.
///
/// When two entries sanitize to the same member name the later one wins,
/// keeping the earlier one's position. Each collision is logged and returned.
pub fn build_archive(entries: &[ArchiveEntry]) -> Result<Archive> {
    let mut slots: Vec<(String, &ArchiveEntry)> = Vec::with_capacity(entries.len());
    let mut collisions = Vec::new();

    for entry in entries {
        let member = output_name(&entry.name);
        match slots.iter().position(|(name, _)| *name == member) {
            Some(idx) => {
                let slot = &mut slots[idx];
                warn!(
                    "'{}' and '{}' both map to {}; keeping '{}'",
                    slot.1.name, entry.name, member, entry.name
                );
                collisions.push(NameCollision {
                    member,
                    replaced: slot.1.name.clone(),
                    kept: entry.name.clone(),
                });
                slot.1 = entry;
            }
            None => slots.push((member, entry)),
        }
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (member, entry) in &slots {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file(member.as_str(), options)?;
        zip.write_all(XML_DECLARATION.as_bytes())?;
        zip.write_all(entry.content.as_bytes())?;
        debug!("Packed {} ({} bytes)", member, entry.content.len());
    }
    let bytes = zip.finish()?.into_inner();

    Ok(Archive {
        bytes,
        members: slots.into_iter().map(|(member, _)| member).collect(),
        collisions,
    })
}
