//! Input file discovery and reading

use crate::error::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions picked up when scanning directories
pub const INPUT_EXTENSIONS: &[&str] = &["txt", "xml"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputSource {
    Memory(Vec<u8>),
    File(PathBuf),
}

/// One file to tag; file contents are read only when the batch reaches it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub name: String,
    source: InputSource,
}

impl InputFile {
    /// An input whose bytes are already in memory
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        InputFile {
            name: name.into(),
            source: InputSource::Memory(bytes.into()),
        }
    }

    /// An input read from disk, named after its file name
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        InputFile {
            name,
            source: InputSource::File(path.to_path_buf()),
        }
    }

    /// Raw bytes of the input
    pub fn read(&self) -> Result<Vec<u8>> {
        match &self.source {
            InputSource::Memory(bytes) => Ok(bytes.clone()),
            InputSource::File(path) => Ok(fs::read(path)?),
        }
    }
}

/// Expand command-line paths into input files.
///
/// Files are taken as given, in argument order. Directories contribute their
/// `.txt`/`.xml` files sorted by path; with `recursive` subdirectories are
/// scanned too, skipping dot-directories.
pub fn collect_inputs(paths: &[PathBuf], recursive: bool) -> Vec<InputFile> {
    let mut inputs = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = scan_dir(path, recursive);
            found.sort();
            debug!("Found {} input file(s) in {}", found.len(), path.display());
            inputs.extend(found.iter().map(|p| InputFile::from_path(p)));
        } else {
            inputs.push(InputFile::from_path(path));
        }
    }

    inputs
}

fn scan_dir(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(dir)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

    walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_input_extension(path))
        .collect()
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(inputs: &[InputFile]) -> Vec<&str> {
        inputs.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_files_taken_in_argument_order() {
        let temp = TempDir::new().unwrap();
        let b = temp.path().join("b.txt");
        let a = temp.path().join("a.md");
        fs::write(&b, "b").unwrap();
        fs::write(&a, "a").unwrap();

        let inputs = collect_inputs(&[b, a], false);
        assert_eq!(names(&inputs), vec!["b.txt", "a.md"]);
    }

    #[test]
    fn test_directory_scan_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("z.txt"), "z").unwrap();
        fs::write(temp.path().join("a.XML"), "<a/>").unwrap();
        fs::write(temp.path().join("skip.md"), "no").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/inner.txt"), "inner").unwrap();

        let inputs = collect_inputs(&[temp.path().to_path_buf()], false);
        assert_eq!(names(&inputs), vec!["a.XML", "z.txt"]);
    }

    #[test]
    fn test_recursive_scan_skips_dot_dirs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sub")).unwrap();
        fs::create_dir_all(temp.path().join(".hidden")).unwrap();
        fs::write(temp.path().join("sub/inner.txt"), "inner").unwrap();
        fs::write(temp.path().join(".hidden/secret.txt"), "secret").unwrap();

        let inputs = collect_inputs(&[temp.path().to_path_buf()], true);
        assert_eq!(names(&inputs), vec!["inner.txt"]);
    }

    #[test]
    fn test_missing_file_fails_on_read() {
        let temp = TempDir::new().unwrap();
        let inputs = collect_inputs(&[temp.path().join("missing.txt")], false);
        assert_eq!(inputs.len(), 1);
        assert!(inputs[0].read().is_err());
    }

    #[test]
    fn test_memory_input() {
        let input = InputFile::from_bytes("mem.txt", b"hello".to_vec());
        assert_eq!(input.read().unwrap(), b"hello");
    }
}
