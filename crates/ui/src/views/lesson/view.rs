use dioxus::prelude::*;
use lesson_core::model::{LessonId, Section};
use services::{AdvanceAction, CompletionStep, LessonStore, NavButtons, NavState};

use super::sections::render_section;
use super::widgets::{ErrorPanel, NavigationBar, ProgressBar};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

const LESSON_COMPLETED_MESSAGE: &str = "Lesson completed! 🎉";
const ALL_LESSONS_COMPLETE_MESSAGE: &str = "Congratulations! You've completed all lessons! 🎉";

/// Shows one lesson section at a time, with progress and navigation.
///
/// `requested` is a raw lesson identifier; `None` opens the configured
/// default lesson.
#[component]
pub fn LessonView(requested: Option<String>) -> Element {
    let viewer = use_lesson_viewer(requested);
    render_lesson_viewer(viewer)
}

/// Viewer state and the handlers wired into its panels.
#[derive(Clone, Copy)]
pub(crate) struct LessonViewer {
    store: Signal<LessonStore>,
    notice: Signal<Option<&'static str>>,
    resource: Resource<Result<(), ViewError>>,
    pub(crate) on_retry: Callback<()>,
    pub(crate) on_previous: Callback<()>,
    pub(crate) on_advance: Callback<AdvanceAction>,
}

pub(crate) fn use_lesson_viewer(requested: Option<String>) -> LessonViewer {
    let ctx = use_context::<AppContext>();
    let default_lesson = ctx.config().default_lesson.clone();
    let total_lessons = ctx.config().total_lessons;
    let config = ctx.config().clone();
    let loader = ctx.loader();

    let mut store = use_signal(|| LessonStore::new(total_lessons));
    let mut notice = use_signal(|| None::<&'static str>);
    let mut target = {
        let default_lesson = default_lesson.clone();
        use_signal(move || match requested.as_deref() {
            None => Ok(default_lesson),
            Some(raw) => raw
                .parse::<LessonId>()
                .ok()
                .filter(|id| config.lesson_in_range(id))
                .ok_or_else(|| raw.to_string()),
        })
    };

    let resource = use_resource(move || {
        let loader = loader.clone();
        let target = target();
        let mut store = store;

        async move {
            let id = target.map_err(ViewError::InvalidLessonId)?;
            let lesson = loader.load(&id).await?;
            store.write().install(id, lesson);
            Ok::<_, ViewError>(())
        }
    });

    let on_retry = use_callback(move |()| {
        let mut resource = resource;
        let already_default = matches!(&*target.peek(), Ok(id) if *id == default_lesson);
        if already_default {
            resource.restart();
        } else {
            target.set(Ok(default_lesson.clone()));
        }
    });

    let on_previous = use_callback(move |()| {
        notice.set(None);
        store.write().previous();
    });

    let on_advance = use_callback(move |action: AdvanceAction| match action {
        AdvanceAction::Next => {
            notice.set(None);
            store.write().next();
        }
        AdvanceAction::Complete => {
            let step = store.write().complete();
            match step {
                Ok(CompletionStep::LoadNext(next)) => {
                    notice.set(Some(LESSON_COMPLETED_MESSAGE));
                    target.set(Ok(next));
                }
                Ok(CompletionStep::AllLessonsComplete) => {
                    notice.set(Some(LESSON_COMPLETED_MESSAGE));
                }
                Err(err) => tracing::debug!(%err, "completion ignored"),
            }
        }
    });

    LessonViewer {
        store,
        notice,
        resource,
        on_retry,
        on_previous,
        on_advance,
    }
}

pub(crate) fn render_lesson_viewer(viewer: LessonViewer) -> Element {
    let LessonViewer {
        store,
        notice,
        resource,
        on_retry,
        on_previous,
        on_advance,
    } = viewer;

    let state = view_state_from_resource(resource);
    let store_read = store.read();
    let progress = store_read.progress();
    let finished = store_read.state() == NavState::ReachedLast;
    let buttons = store_read.nav_buttons();
    let current = store_read.current_section().cloned().map(|section| {
        let lesson = store_read
            .lesson_id()
            .map(ToString::to_string)
            .unwrap_or_default();
        (format!("{lesson}-{}", store_read.cursor().section_index()), section)
    });
    drop(store_read);

    rsx! {
        div { class: "lesson-viewer",
            ProgressBar { progress }
            if let Some(message) = notice() {
                div { class: "completion-notice", "{message}" }
            }
            div { id: "lessonContainer",
                match state {
                    ViewState::Error(err) => rsx! {
                        ErrorPanel { message: err.message(), on_retry }
                    },
                    _ if finished => rsx! {
                        div { class: "lesson-card",
                            div { class: "all-complete",
                                h2 { "{ALL_LESSONS_COMPLETE_MESSAGE}" }
                            }
                        }
                    },
                    _ if current.is_none() => rsx! {
                        div { class: "lesson-card loading",
                            p { "Loading lesson…" }
                        }
                    },
                    _ => rsx! {
                        for (key, section) in current {
                            SectionCard { key: "{key}", section, buttons, on_previous, on_advance }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn SectionCard(
    section: Section,
    buttons: NavButtons,
    on_previous: Callback<()>,
    on_advance: Callback<AdvanceAction>,
) -> Element {
    rsx! {
        div { class: "lesson-card",
            {render_section(&section)}
            NavigationBar { buttons, on_previous, on_advance }
        }
    }
}
