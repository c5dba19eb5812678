mod navigation;
mod progress;
mod store;

// Public API of the viewer state machine.
pub use navigation::{AdvanceAction, CompletionStep, NavButtons, NavState};
pub use progress::Progress;
pub use store::{Cursor, LessonStore};
