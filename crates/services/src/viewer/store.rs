use std::fmt;

use lesson_core::model::{Lesson, LessonId, Section};

//
// ─── CURSOR ────────────────────────────────────────────────────────────────────
//

/// Viewing position: which lesson, and which section inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    lesson_number: u32,
    section_index: usize,
    total_sections: usize,
    total_lessons: u32,
}

impl Cursor {
    #[must_use]
    pub fn new(total_lessons: u32) -> Self {
        Self {
            lesson_number: 1,
            section_index: 0,
            total_sections: 0,
            total_lessons: total_lessons.max(1),
        }
    }

    #[must_use]
    pub fn lesson_number(&self) -> u32 {
        self.lesson_number
    }

    #[must_use]
    pub fn section_index(&self) -> usize {
        self.section_index
    }

    #[must_use]
    pub fn total_sections(&self) -> usize {
        self.total_sections
    }

    #[must_use]
    pub fn total_lessons(&self) -> u32 {
        self.total_lessons
    }

    #[must_use]
    pub fn is_first_section(&self) -> bool {
        self.section_index == 0
    }

    #[must_use]
    pub fn is_last_section(&self) -> bool {
        self.section_index + 1 >= self.total_sections
    }

    #[must_use]
    pub fn is_last_lesson(&self) -> bool {
        self.lesson_number >= self.total_lessons
    }

    pub(crate) fn set_section_index(&mut self, index: usize) {
        self.section_index = index;
    }
}

//
// ─── STORE ─────────────────────────────────────────────────────────────────────
//

/// Owns the loaded lesson and the cursor into it.
///
/// Invariant: while a lesson is loaded, `section_index < total_sections`.
#[derive(Clone, PartialEq)]
pub struct LessonStore {
    lesson: Option<Lesson>,
    lesson_id: Option<LessonId>,
    cursor: Cursor,
    pub(crate) finished: bool,
}

impl LessonStore {
    #[must_use]
    pub fn new(total_lessons: u32) -> Self {
        Self {
            lesson: None,
            lesson_id: None,
            cursor: Cursor::new(total_lessons),
            finished: false,
        }
    }

    /// Replace the current lesson with a freshly loaded one.
    ///
    /// Resets the section index to 0. Numbered ids also move the lesson
    /// number; named lessons keep the current one.
    pub fn install(&mut self, id: LessonId, lesson: Lesson) {
        if let Some(number) = id.as_number() {
            self.cursor.lesson_number = number;
        }
        self.cursor.total_sections = lesson.section_count();
        self.cursor.section_index = 0;
        self.lesson = Some(lesson);
        self.lesson_id = Some(id);
        self.finished = false;
    }

    #[must_use]
    pub fn lesson(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    #[must_use]
    pub fn lesson_id(&self) -> Option<&LessonId> {
        self.lesson_id.as_ref()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.lesson.is_some()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Section under the cursor, if a lesson is loaded.
    #[must_use]
    pub fn current_section(&self) -> Option<&Section> {
        self.lesson
            .as_ref()
            .and_then(|lesson| lesson.section(self.cursor.section_index))
    }
}

impl fmt::Debug for LessonStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonStore")
            .field("lesson_id", &self.lesson_id)
            .field("title", &self.lesson.as_ref().map(Lesson::title))
            .field("cursor", &self.cursor)
            .field("finished", &self.finished)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
