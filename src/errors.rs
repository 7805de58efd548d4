use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IncludeGraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Recoverable per-file condition: the file exists but its content could not
/// be read. The traversal keeps the node and continues without its includes.
#[derive(Debug, Error)]
#[error("cannot read {}: {source}", path.display())]
pub struct UnreadableFile {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
