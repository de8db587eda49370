// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirwatchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Directory or file not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot read {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DirwatchError {
    /// Errors that only affect the current poll; the loop keeps going.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DirwatchError::DirectoryNotFound(_)
                | DirwatchError::NotADirectory(_)
                | DirwatchError::FileUnreadable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DirwatchError>;
