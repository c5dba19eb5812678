use async_trait::async_trait;
use lesson_core::model::{LESSONS_DIR, Lesson, LessonId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::repository::{LessonSource, StorageError, parse_document};

/// Reads lesson documents from `<root>/lessons/<file>.json`.
#[derive(Debug, Clone)]
pub struct DirLessonSource {
    root: PathBuf,
}

impl DirLessonSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn lesson_path(&self, id: &LessonId) -> PathBuf {
        self.root.join(LESSONS_DIR).join(id.file_name())
    }
}

#[async_trait]
impl LessonSource for DirLessonSource {
    async fn fetch_lesson(&self, id: &LessonId) -> Result<Lesson, StorageError> {
        let path = self.lesson_path(id);
        tracing::debug!(path = %path.display(), "reading lesson document");

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::NotFound,
                ErrorKind::InvalidData => StorageError::Parse(e.to_string()),
                _ => StorageError::Io(e.to_string()),
            })?;

        parse_document(&raw)
    }

    fn describe(&self, id: &LessonId) -> String {
        self.lesson_path(id).display().to_string()
    }
}
