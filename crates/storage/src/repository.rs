use async_trait::async_trait;
use lesson_core::model::{Lesson, LessonId};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::fs::DirLessonSource;
use crate::http::HttpLessonSource;

/// Errors surfaced by lesson sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("server returned status {status}")]
    HttpStatus { status: u16 },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Source of lesson documents, addressed by `LessonId`.
#[async_trait]
pub trait LessonSource: Send + Sync {
    /// Fetch and decode one lesson document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` / `StorageError::HttpStatus` when the
    /// document is missing, `StorageError::Parse` when it cannot be decoded,
    /// or a transport error.
    async fn fetch_lesson(&self, id: &LessonId) -> Result<Lesson, StorageError>;

    /// Human-readable location of the document, for diagnostics.
    fn describe(&self, id: &LessonId) -> String {
        id.resource_path()
    }
}

pub(crate) fn parse_document(raw: &str) -> Result<Lesson, StorageError> {
    Lesson::from_json(raw).map_err(|e| StorageError::Parse(e.to_string()))
}

/// In-memory lesson documents for testing and prototyping.
///
/// Documents are stored raw so malformed bodies exercise the same decoding
/// path as real sources.
#[derive(Clone, Default)]
pub struct InMemoryLessonSource {
    documents: Arc<Mutex<HashMap<LessonId, String>>>,
    fetches: Arc<AtomicUsize>,
}

impl InMemoryLessonSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store (or replace) the raw document for `id`.
    pub fn insert_document(&self, id: LessonId, raw: impl Into<String>) {
        if let Ok(mut guard) = self.documents.lock() {
            guard.insert(id, raw.into());
        }
    }

    /// Number of fetches attempted so far, including failed ones.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LessonSource for InMemoryLessonSource {
    async fn fetch_lesson(&self, id: &LessonId) -> Result<Lesson, StorageError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let raw = {
            let guard = self
                .documents
                .lock()
                .map_err(|e| StorageError::Connection(e.to_string()))?;
            guard.get(id).cloned().ok_or(StorageError::NotFound)?
        };
        parse_document(&raw)
    }

    fn describe(&self, id: &LessonId) -> String {
        format!("memory:{}", id.resource_path())
    }
}

/// Holds the lesson source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub lessons: Arc<dyn LessonSource>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            lessons: Arc::new(InMemoryLessonSource::new()),
        }
    }

    #[must_use]
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self {
            lessons: Arc::new(DirLessonSource::new(root)),
        }
    }

    /// Build an HTTP-backed storage rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the URL is invalid.
    pub fn http(base_url: &str) -> Result<Self, StorageError> {
        Ok(Self {
            lessons: Arc::new(HttpLessonSource::new(base_url)?),
        })
    }

    /// Pick a backend from a location string: `http(s)://` URLs use HTTP,
    /// anything else is treated as a directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` for invalid URLs.
    pub fn from_location(location: &str) -> Result<Self, StorageError> {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::http(location)
        } else {
            Ok(Self::directory(location))
        }
    }
}
