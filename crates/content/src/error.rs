//! Error types for content loading.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("No snippet files found in {dir}")]
    NoSnippets { dir: PathBuf },
}
