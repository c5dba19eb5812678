use lesson_core::model::LessonId;

use super::store::LessonStore;
use crate::error::NavigationError;

/// Where the viewer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    NoLesson,
    Viewing(usize),
    /// The final section of the final lesson has been completed.
    ReachedLast,
}

/// What the caller must do after a lesson is completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionStep {
    /// Acknowledge the completion, then load this lesson.
    LoadNext(LessonId),
    /// Every configured lesson is done; nothing more to fetch.
    AllLessonsComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceAction {
    Next,
    Complete,
}

impl AdvanceAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AdvanceAction::Next => "Next Section",
            AdvanceAction::Complete => "Complete Lesson",
        }
    }
}

/// Button state for the navigation bar under a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub previous_disabled: bool,
    pub advance: AdvanceAction,
}

impl LessonStore {
    #[must_use]
    pub fn state(&self) -> NavState {
        if self.finished {
            NavState::ReachedLast
        } else if self.is_loaded() {
            NavState::Viewing(self.cursor().section_index())
        } else {
            NavState::NoLesson
        }
    }

    /// Move to the next section. Returns `false` at the last section.
    pub fn next(&mut self) -> bool {
        let NavState::Viewing(index) = self.state() else {
            return false;
        };
        if self.cursor().is_last_section() {
            return false;
        }
        self.cursor_mut().set_section_index(index + 1);
        true
    }

    /// Move to the previous section. Returns `false` at the first section.
    pub fn previous(&mut self) -> bool {
        let NavState::Viewing(index) = self.state() else {
            return false;
        };
        if index == 0 {
            return false;
        }
        self.cursor_mut().set_section_index(index - 1);
        true
    }

    /// Complete the current lesson from its last section.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::NoLesson` without a loaded lesson,
    /// `NavigationError::NotAtLastSection` before the final section, and
    /// `NavigationError::AlreadyFinished` once every lesson is done.
    pub fn complete(&mut self) -> Result<CompletionStep, NavigationError> {
        match self.state() {
            NavState::NoLesson => return Err(NavigationError::NoLesson),
            NavState::ReachedLast => return Err(NavigationError::AlreadyFinished),
            NavState::Viewing(_) => {}
        }

        let cursor = self.cursor();
        if !cursor.is_last_section() {
            return Err(NavigationError::NotAtLastSection);
        }

        if cursor.is_last_lesson() {
            self.finished = true;
            tracing::info!(
                lesson = cursor.lesson_number(),
                "final lesson completed"
            );
            return Ok(CompletionStep::AllLessonsComplete);
        }

        let next = LessonId::number(cursor.lesson_number() + 1);
        tracing::info!(
            lesson = cursor.lesson_number(),
            next = %next,
            "lesson completed"
        );
        Ok(CompletionStep::LoadNext(next))
    }

    /// Navigation bar state for the current section.
    #[must_use]
    pub fn nav_buttons(&self) -> NavButtons {
        let cursor = self.cursor();
        NavButtons {
            previous_disabled: cursor.is_first_section(),
            advance: if cursor.is_last_section() {
                AdvanceAction::Complete
            } else {
                AdvanceAction::Next
            },
        }
    }
}
