use std::sync::Arc;

use lesson_core::model::{Lesson, LessonId};
use storage::LessonSource;

use crate::error::LoadError;
use crate::viewer::LessonStore;

/// Fetches lesson documents and installs them into a `LessonStore`.
///
/// Loads are not de-duplicated or cancelled: a slow response for an older
/// request can still replace a newer lesson.
#[derive(Clone)]
pub struct LessonLoader {
    source: Arc<dyn LessonSource>,
}

impl LessonLoader {
    #[must_use]
    pub fn new(source: Arc<dyn LessonSource>) -> Self {
        Self { source }
    }

    /// Fetch and parse one lesson.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::HttpStatus` for missing documents or non-success
    /// responses, `LoadError::Parse` for malformed bodies and
    /// `LoadError::Network` for transport failures.
    pub async fn load(&self, id: &LessonId) -> Result<Lesson, LoadError> {
        let location = self.source.describe(id);
        tracing::info!(lesson = %id, %location, "loading lesson");

        match self.source.fetch_lesson(id).await {
            Ok(lesson) => {
                tracing::info!(
                    lesson = %id,
                    title = lesson.title(),
                    sections = lesson.section_count(),
                    "lesson loaded"
                );
                Ok(lesson)
            }
            Err(err) => {
                let err = LoadError::from(err);
                tracing::warn!(lesson = %id, %location, error = %err, "lesson load failed");
                Err(err)
            }
        }
    }

    /// Load `id` and, on success, install it into `store`.
    ///
    /// On failure the store is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates `LoadError` from [`LessonLoader::load`].
    pub async fn load_into(&self, store: &mut LessonStore, id: LessonId) -> Result<(), LoadError> {
        let lesson = self.load(&id).await?;
        store.install(id, lesson);
        Ok(())
    }
}
