#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod loader;
pub mod viewer;

pub use config::ViewerConfig;
pub use error::{LoadError, NavigationError};
pub use loader::LessonLoader;
pub use viewer::{
    AdvanceAction, CompletionStep, Cursor, LessonStore, NavButtons, NavState, Progress,
};
