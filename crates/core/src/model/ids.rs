use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Directory that holds every lesson document.
pub const LESSONS_DIR: &str = "lessons";

/// Identifies a lesson document.
///
/// Numbered lessons live at `lessons/lesson<N>.json`, named lessons at
/// `lessons/<name>.json`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonId {
    Number(u32),
    Name(String),
}

impl LessonId {
    /// Creates a numbered `LessonId`
    #[must_use]
    pub fn number(n: u32) -> Self {
        Self::Number(n)
    }

    /// Returns the lesson number for numbered lessons.
    #[must_use]
    pub fn as_number(&self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Name(_) => None,
        }
    }

    /// File name of the lesson document, without the directory.
    #[must_use]
    pub fn file_name(&self) -> String {
        match self {
            Self::Number(n) => format!("lesson{n}.json"),
            Self::Name(name) => format!("{name}.json"),
        }
    }

    /// Relative resource path, e.g. `lessons/lesson3.json`.
    #[must_use]
    pub fn resource_path(&self) -> String {
        format!("{LESSONS_DIR}/{}", self.file_name())
    }
}

impl Default for LessonId {
    fn default() -> Self {
        Self::Number(1)
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "LessonId({n})"),
            Self::Name(name) => write!(f, "LessonId({name:?})"),
        }
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Error type for parsing a `LessonId` from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse LessonId from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for LessonId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseIdError { raw: s.to_string() };

        if trimmed.is_empty() || trimmed.contains(['/', '\\']) || trimmed.starts_with('.') {
            return Err(err());
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return match trimmed.parse::<u32>() {
                Ok(0) | Err(_) => Err(err()),
                Ok(n) => Ok(Self::Number(n)),
            };
        }

        Ok(Self::Name(trimmed.to_string()))
    }
}
