use async_trait::async_trait;
use lesson_core::model::{LESSONS_DIR, Lesson, LessonId};
use url::Url;

use crate::repository::{LessonSource, StorageError, parse_document};

/// Fetches lesson documents from `<base>/lessons/<file>.json` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLessonSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpLessonSource {
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if `base_url` is not a valid base URL
    /// or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, StorageError> {
        let base = Url::parse(base_url).map_err(|e| StorageError::Connection(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(StorageError::Connection(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(Self { client, base })
    }

    /// The file name is appended as a single percent-encoded path segment.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the base URL cannot take path segments.
    pub fn lesson_url(&self, id: &LessonId) -> Result<Url, StorageError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                StorageError::Connection(format!("{} cannot be used as a base URL", self.base))
            })?
            .pop_if_empty()
            .push(LESSONS_DIR)
            .push(&id.file_name());
        Ok(url)
    }
}

#[async_trait]
impl LessonSource for HttpLessonSource {
    async fn fetch_lesson(&self, id: &LessonId) -> Result<Lesson, StorageError> {
        let url = self.lesson_url(id)?;
        tracing::debug!(%url, "fetching lesson document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        parse_document(&body)
    }

    fn describe(&self, id: &LessonId) -> String {
        self.lesson_url(id)
            .map_or_else(|_| id.resource_path(), |url| url.to_string())
    }
}
