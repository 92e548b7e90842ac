//! Line source abstraction so the decoders never touch `std::fs` directly.
//!
//! The [`LineSource`] trait abstracts how an input file becomes lines. The
//! default [`FileSystemSource`] reads from disk; [`InMemorySource`] serves
//! tests and callers that already hold the text.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// How empty lines are treated when splitting text into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// Keep every line, including empty ones. Used by the args/env input,
    /// where an empty argument or environment value is a real token.
    All,
    /// Drop empty lines. Used by the transitive preview references input.
    NonEmpty,
}

/// Split `text` into lines. `\n` and `\r\n` terminate a line; a final
/// terminator does not start an extra empty line.
pub fn split_lines(text: &str, mode: LineMode) -> Vec<String> {
    let lines = text.lines().map(str::to_owned);
    match mode {
        LineMode::All => lines.collect(),
        LineMode::NonEmpty => lines.filter(|line| !line.is_empty()).collect(),
    }
}

/// Trait that abstracts reading an input file as lines.
pub trait LineSource {
    fn read_lines(&self, path: &Path, mode: LineMode) -> Result<Vec<String>, std::io::Error>;
}

/// Default filesystem-backed line source.
pub struct FileSystemSource;

impl LineSource for FileSystemSource {
    fn read_lines(&self, path: &Path, mode: LineMode) -> Result<Vec<String>, std::io::Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(split_lines(&text, mode))
    }
}

/// In-memory line source for testing.
pub struct InMemorySource {
    files: HashMap<PathBuf, String>,
}

impl InMemorySource {
    pub fn new(files: HashMap<PathBuf, String>) -> Self {
        Self { files }
    }
}

impl LineSource for InMemorySource {
    fn read_lines(&self, path: &Path, mode: LineMode) -> Result<Vec<String>, std::io::Error> {
        self.files
            .get(path)
            .map(|text| split_lines(text, mode))
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("file not found: {}", path.display()),
                )
            })
    }
}
