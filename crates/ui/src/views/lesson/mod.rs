mod scripts;
mod sections;
mod view;
mod widgets;

pub use sections::render_section;
pub use view::LessonView;
#[cfg(test)]
pub(crate) use view::{LessonViewer, render_lesson_viewer, use_lesson_viewer};
#[cfg(test)]
pub(crate) use widgets::{ReplayCounter, render_audio_player, use_replay_counter};
