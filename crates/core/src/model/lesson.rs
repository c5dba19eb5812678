use serde::Deserialize;
use thiserror::Error;

use crate::model::Section;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonParseError {
    #[error("lesson document is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("lesson has no sections")]
    NoSections,
}

/// A lesson document: a title and an ordered, non-empty list of sections.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lesson {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    sections: Vec<Section>,
}

impl Lesson {
    /// Build a lesson in memory.
    ///
    /// # Errors
    ///
    /// Returns `LessonParseError::NoSections` if `sections` is empty.
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Result<Self, LessonParseError> {
        if sections.is_empty() {
            return Err(LessonParseError::NoSections);
        }
        Ok(Self {
            id: None,
            title: title.into(),
            sections,
        })
    }

    /// Decode a lesson document.
    ///
    /// # Errors
    ///
    /// Returns `LessonParseError::Json` for malformed documents and
    /// `LessonParseError::NoSections` when the section list is empty.
    pub fn from_json(raw: &str) -> Result<Self, LessonParseError> {
        let lesson: Lesson = serde_json::from_str(raw)?;
        if lesson.sections.is_empty() {
            return Err(LessonParseError::NoSections);
        }
        Ok(lesson)
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
