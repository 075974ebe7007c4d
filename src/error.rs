//! Error types for directory inspection.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while probing, listing, or displaying entries.
#[derive(Debug, Error)]
pub enum DifoError {
    /// A directory could not be listed or a file could not be read.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path does not exist.
    #[error("cannot access '{path}': No such file or directory")]
    NotFound { path: PathBuf },

    /// A directory was required.
    #[error("{path}: Not a directory")]
    NotADirectory { path: PathBuf },

    /// A regular file was required.
    #[error("cannot open: '{path}' is not a file")]
    NotAFile { path: PathBuf },

    /// A file passed the regular-file check but could not be opened or read.
    #[error("cannot open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl DifoError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Process exit status for this error.
    ///
    /// 2 for access failures, 3 for a file that cannot be opened, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PermissionDenied { .. } | Self::NotFound { .. } | Self::NotADirectory { .. } => 2,
            Self::NotAFile { .. } | Self::Open { .. } => 3,
            Self::Io { .. } | Self::Other { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DifoError>;
