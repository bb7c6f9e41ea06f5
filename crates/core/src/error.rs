use std::io;
use std::path::PathBuf;

/// Errors that can occur while configuring the TypeScript extension
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: invalid value for directive {key:?}: {value}: {reason}", .file.display())]
    InvalidDirective {
        file: PathBuf,
        key: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TypeScript configuration tree has no root record")]
    MissingRoot,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid glob: {0}")]
    GlobError(#[from] globset::Error),
}

/// Result type alias for TypeScript extension operations
pub type Result<T> = std::result::Result<T, Error>;
