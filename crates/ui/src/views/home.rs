use dioxus::prelude::*;

use super::lesson::LessonView;

/// Opens the configured default lesson.
#[component]
pub fn HomeView() -> Element {
    rsx! { LessonView {} }
}

/// Opens a lesson by identifier, e.g. `/lesson/3` or `/lesson/market`.
#[component]
pub fn LessonPage(lesson: String) -> Element {
    rsx! {
        LessonView { key: "{lesson}", requested: lesson.clone() }
    }
}
