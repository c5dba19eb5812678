#![forbid(unsafe_code)]

pub mod fs;
pub mod http;
pub mod repository;

pub use fs::DirLessonSource;
pub use http::HttpLessonSource;
pub use repository::{InMemoryLessonSource, LessonSource, Storage, StorageError};
