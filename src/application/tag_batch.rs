//! Tag batch use case
//!
//! Processes input files one after another and packs the successful ones
//! into a single archive.

use crate::domain::{
    corpus_document, retag_document, sanitize_id, Language, OutputMode, RetagResult,
    TaggingProvider,
};
use crate::error::{Result, TtxmlError};
use crate::infrastructure::{build_archive, Archive, ArchiveEntry, InputFile};
use log::{info, warn};

/// What happened to one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Tagged and added to the archive
    Processed { tokens: usize },
    /// Decoded fine but produced no tokens; left out of the archive
    Empty,
    /// Could not be read or decoded; left out of the archive
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub name: String,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub archive: Archive,
}

impl BatchReport {
    pub fn processed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Processed { .. }))
            .count()
    }
}

/// Service for tagging a batch of files with one provider
pub struct TagBatchService<'a> {
    provider: &'a dyn TaggingProvider,
    language: Language,
    mode: OutputMode,
}

impl<'a> TagBatchService<'a> {
    pub fn new(provider: &'a dyn TaggingProvider, language: Language, mode: OutputMode) -> Self {
        TagBatchService {
            provider,
            language,
            mode,
        }
    }

    /// Process every input and build the archive.
    ///
    /// # Errors
    ///
    /// Returns `NoOutput` if no file produced any tokens, or an archive error
    /// if packing fails. Per-file problems never abort the batch.
    pub fn execute(&self, inputs: &[InputFile]) -> Result<BatchReport> {
        self.execute_with_progress(inputs, |_, _, _| {})
    }

    /// Like [`execute`](Self::execute), calling `on_file(index, total, report)`
    /// after each file.
    pub fn execute_with_progress<F>(&self, inputs: &[InputFile], mut on_file: F) -> Result<BatchReport>
    where
        F: FnMut(usize, usize, &FileReport),
    {
        let mut files = Vec::with_capacity(inputs.len());
        let mut entries = Vec::new();

        for (idx, input) in inputs.iter().enumerate() {
            let outcome = match self.process_file(input) {
                Ok(result) if result.tokens == 0 => {
                    warn!("No tokens found in {}", input.name);
                    FileOutcome::Empty
                }
                Ok(result) => {
                    info!("Processed {} ({} tokens)", input.name, result.tokens);
                    entries.push(ArchiveEntry::new(input.name.clone(), result.content));
                    FileOutcome::Processed {
                        tokens: result.tokens,
                    }
                }
                Err(e) => {
                    warn!("Failed to process {}: {}", input.name, e);
                    FileOutcome::Failed(e.to_string())
                }
            };

            let report = FileReport {
                name: input.name.clone(),
                outcome,
            };
            on_file(idx + 1, inputs.len(), &report);
            files.push(report);
        }

        if entries.is_empty() {
            return Err(TtxmlError::NoOutput);
        }

        let archive = build_archive(&entries)?;
        Ok(BatchReport { files, archive })
    }

    /// Read, decode and tag a single input
    pub fn process_file(&self, input: &InputFile) -> Result<RetagResult> {
        let text = decode(input.read()?)?;

        Ok(match self.mode {
            OutputMode::Structure => retag_document(&text, self.provider, self.language),
            OutputMode::Corpus => {
                corpus_document(&text, self.provider, self.language, &sanitize_id(&input.name))
            }
        })
    }
}

/// Decode file bytes as UTF-8, dropping a leading byte order mark
pub fn decode(bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|e| TtxmlError::Decode(e.to_string()))?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaggedToken;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    struct Words;

    impl TaggingProvider for Words {
        fn name(&self) -> &str {
            "words"
        }

        fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
            Ok(text
                .split_whitespace()
                .map(|w| TaggedToken::new(w, "W", w))
                .collect())
        }
    }

    fn member(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(matches!(
            decode(vec![0xff, 0xfe, 0x41]),
            Err(TtxmlError::Decode(_))
        ));
        assert_eq!(decode(b"\xef\xbb\xbfhi".to_vec()).unwrap(), "hi");
    }

    #[test]
    fn test_failed_decode_is_skipped() {
        let inputs = vec![
            InputFile::from_bytes("one.txt", "first file"),
            InputFile::from_bytes("two.txt", vec![0xff, 0xfe]),
            InputFile::from_bytes("three.xml", "<p>third</p>"),
        ];
        let service = TagBatchService::new(&Words, Language::English, OutputMode::Structure);
        let report = service.execute(&inputs).unwrap();

        assert_eq!(report.archive.members, vec!["one_tagged.xml", "three_tagged.xml"]);
        assert_eq!(report.processed_count(), 2);
        assert!(matches!(report.files[1].outcome, FileOutcome::Failed(_)));
        assert_eq!(
            member(&report.archive.bytes, "three_tagged.xml"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<p>\nthird\tW\tthird\n</p>"
        );
    }

    #[test]
    fn test_empty_file_is_warned_and_excluded() {
        let inputs = vec![
            InputFile::from_bytes("blank.txt", "   \n"),
            InputFile::from_bytes("full.txt", "words here"),
        ];
        let service = TagBatchService::new(&Words, Language::English, OutputMode::Structure);
        let report = service.execute(&inputs).unwrap();

        assert_eq!(report.files[0].outcome, FileOutcome::Empty);
        assert_eq!(report.files[1].outcome, FileOutcome::Processed { tokens: 2 });
        assert_eq!(report.archive.members, vec!["full_tagged.xml"]);
    }

    #[test]
    fn test_nothing_processed_is_an_error() {
        let inputs = vec![InputFile::from_bytes("bad.txt", vec![0xc3])];
        let service = TagBatchService::new(&Words, Language::English, OutputMode::Structure);
        assert!(matches!(service.execute(&inputs), Err(TtxmlError::NoOutput)));
        assert!(matches!(service.execute(&[]), Err(TtxmlError::NoOutput)));
    }

    #[test]
    fn test_corpus_mode_uses_sanitized_id() {
        let inputs = vec![InputFile::from_bytes("My Notes (3).txt", "a b")];
        let service = TagBatchService::new(&Words, Language::Japanese, OutputMode::Corpus);
        let report = service.execute(&inputs).unwrap();

        assert_eq!(
            member(&report.archive.bytes, "My Notes_tagged.xml"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <corpus lang=\"JP\" id=\"My Notes\">\na\tW\ta\nb\tW\tb\n</corpus>"
        );
    }

    #[test]
    fn test_progress_reported_per_file() {
        let inputs = vec![
            InputFile::from_bytes("a.txt", "x"),
            InputFile::from_bytes("b.txt", "y"),
        ];
        let service = TagBatchService::new(&Words, Language::English, OutputMode::Structure);
        let mut seen = Vec::new();
        service
            .execute_with_progress(&inputs, |idx, total, report| {
                seen.push((idx, total, report.name.clone()))
            })
            .unwrap();

        assert_eq!(
            seen,
            vec![(1, 2, "a.txt".to_string()), (2, 2, "b.txt".to_string())]
        );
    }
}
