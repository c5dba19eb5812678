use lesson_core::model::LessonId;

/// Number of lessons in the course unless configured otherwise.
pub const DEFAULT_TOTAL_LESSONS: u32 = 30;

/// Language name used in share messages unless configured otherwise.
pub const DEFAULT_COURSE_NAME: &str = "Dholuo";

/// Viewer-wide settings resolved by the composition root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Lesson opened at startup and by the error panel's retry action.
    pub default_lesson: LessonId,
    pub total_lessons: u32,
    pub course_name: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_lesson: LessonId::default(),
            total_lessons: DEFAULT_TOTAL_LESSONS,
            course_name: DEFAULT_COURSE_NAME.to_string(),
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn with_default_lesson(mut self, id: LessonId) -> Self {
        self.default_lesson = id;
        self
    }

    /// Zero is clamped to one so the cursor always has a valid lesson range.
    #[must_use]
    pub fn with_total_lessons(mut self, total: u32) -> Self {
        self.total_lessons = total.max(1);
        self
    }

    /// Numbered lessons must fall in `1..=total_lessons`; named lessons always do.
    #[must_use]
    pub fn lesson_in_range(&self, id: &LessonId) -> bool {
        id.as_number()
            .is_none_or(|n| (1..=self.total_lessons).contains(&n))
    }

    #[must_use]
    pub fn with_course_name(mut self, name: impl Into<String>) -> Self {
        self.course_name = name.into();
        self
    }
}
