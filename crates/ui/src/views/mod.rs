mod home;
mod lesson;
mod state;

#[cfg(test)]
mod view_smoke;

pub use home::{HomeView, LessonPage};
pub use lesson::{LessonView, render_section};
pub use state::{ViewError, ViewState, view_state_from_resource};
