//! Code snippet directory and the unbounded snippet stream.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::SimpleRng;
use crate::error::ContentError;
use crate::types::PLACEHOLDER;

/// Every non-directory entry of `dir`, sorted by path.
///
/// An unreadable directory yields an empty list.
pub fn list_snippets(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "snippet directory not readable");
            return Vec::new();
        }
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| {
            let e = e.ok()?;
            let is_dir = e.file_type().ok()?.is_dir();
            (!is_dir).then(|| e.path())
        })
        .collect();
    // read_dir order is platform dependent; sort so a fixed seed is reproducible.
    files.sort();
    files
}

/// Replace every `$$$` in `snippet` with `line`.
///
/// ```
/// use hello_world_content::fill_placeholder;
///
/// assert_eq!(fill_placeholder("print(\"$$$\")", "Hello"), "print(\"Hello\")");
/// ```
pub fn fill_placeholder(snippet: &str, line: &str) -> String {
    snippet.replace(PLACEHOLDER, line)
}

/// Endless stream of snippet texts picked uniformly at random.
#[derive(Debug, Clone)]
pub struct SnippetStream {
    files: Vec<PathBuf>,
    rng: SimpleRng,
}

impl SnippetStream {
    /// Open `dir`, failing when it holds no snippet files.
    pub fn open(dir: &Path, rng: SimpleRng) -> Result<Self, ContentError> {
        Self::from_files(list_snippets(dir), rng).ok_or_else(|| ContentError::NoSnippets {
            dir: dir.to_path_buf(),
        })
    }

    /// Build from an explicit file list; None when the list is empty.
    pub fn from_files(files: Vec<PathBuf>, rng: SimpleRng) -> Option<Self> {
        if files.is_empty() {
            return None;
        }
        debug!(count = files.len(), "snippet stream ready");
        Some(Self { files, rng })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Path of the next snippet.
    pub fn next_path(&mut self) -> &Path {
        let i = self.rng.pick_index(self.files.len()).unwrap_or_default();
        &self.files[i]
    }
}

impl Iterator for SnippetStream {
    type Item = String;

    /// Never returns None. An unreadable file yields empty text for that cycle.
    fn next(&mut self) -> Option<String> {
        let path = self.next_path().to_path_buf();
        let text = fs::read_to_string(&path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "snippet not readable");
            String::new()
        });
        debug!(path = %path.display(), bytes = text.len(), "picked snippet");
        Some(text)
    }
}
