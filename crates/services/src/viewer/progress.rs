use super::store::LessonStore;

/// Progress through the current lesson, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub lesson_number: u32,
    /// One-based section number.
    pub section_number: usize,
    pub total_sections: usize,
    /// `section_number / total_sections` as a percentage.
    pub percent: f64,
}

impl Progress {
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Lesson {} — Section {} of {}",
            self.lesson_number, self.section_number, self.total_sections
        )
    }

    /// CSS width for the progress fill, e.g. `"25%"`.
    #[must_use]
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }
}

impl LessonStore {
    /// `None` until a lesson is loaded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> Option<Progress> {
        if !self.is_loaded() {
            return None;
        }
        let cursor = self.cursor();
        let total = cursor.total_sections();
        let section_number = cursor.section_index() + 1;
        Some(Progress {
            lesson_number: cursor.lesson_number(),
            section_number,
            total_sections: total,
            percent: section_number as f64 / total as f64 * 100.0,
        })
    }
}
