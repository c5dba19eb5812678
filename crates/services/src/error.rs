//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted while loading a lesson document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("lesson request failed with status {status}")]
    HttpStatus { status: u16 },
    #[error("lesson document could not be parsed: {0}")]
    Parse(String),
    #[error("lesson could not be fetched: {0}")]
    Network(String),
}

impl LoadError {
    /// Status code for `HttpStatus` failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<StorageError> for LoadError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => LoadError::HttpStatus { status: 404 },
            StorageError::HttpStatus { status } => LoadError::HttpStatus { status },
            StorageError::Parse(msg) => LoadError::Parse(msg),
            other => LoadError::Network(other.to_string()),
        }
    }
}

/// Errors emitted by the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("no lesson loaded")]
    NoLesson,
    #[error("lesson can only be completed from its last section")]
    NotAtLastSection,
    #[error("all lessons already completed")]
    AlreadyFinished,
}
