use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("file '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// The input exists but its bytes could not be read.
    #[error("error reading file '{}': {}", .0.display(), .1)]
    Read(PathBuf, #[source] std::io::Error),

    #[error("error parsing JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("error generating output: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("template error: {0}")]
    Template(String),

    #[error("unsupported output type: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
