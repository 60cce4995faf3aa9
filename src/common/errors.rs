use std::path::PathBuf;

use thiserror::Error;

/// Error types for phototidy operations.
/// We use `anyhow` at the top level for CLI error handling,
/// but these typed errors allow modules to be precise about failures.
#[derive(Debug, Error)]
pub enum PhotoError {
    /// A configured root directory is missing or not a directory
    #[error("Path does not exist or is not a directory: '{}'", path.display())]
    MissingDirectory { path: PathBuf },

    /// Directory traversal failed part-way through a scan
    #[error("Failed to walk '{}': {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// File system operation failed
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The platform trash refused the file
    #[error("Failed to move '{}' to trash: {message}", path.display())]
    Trash { path: PathBuf, message: String },

    /// A move would replace a file that is already there
    #[error("Destination already exists (won't overwrite): '{}'", path.display())]
    DestinationExists { path: PathBuf },

    /// A file was handed to the namer from outside the flatten root
    #[error("'{}' is not inside '{}'", dir.display(), root.display())]
    OutsideRoot { root: PathBuf, dir: PathBuf },

    /// Configuration values are unusable
    #[error("Config error: {message}")]
    Config { message: String },
}

impl PhotoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PhotoError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PhotoError>;
