use dioxus::prelude::*;
use lesson_core::model::MultipleChoice;
use services::{AdvanceAction, NavButtons, Progress};

use super::scripts::write_clipboard;
use crate::context::AppContext;
use crate::vm::{
    ChoiceVm, NO_REPLAYS_MESSAGE, ReplayVm, SHARE_COPIED_MESSAGE, SHARE_FAILED_MESSAGE,
    WritingVm,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum QuestionStyle {
    /// `Question: <text>`, used by practice exercises.
    Labelled,
    /// Bold question text, used by audio and quiz questions.
    Bold,
}

#[component]
pub(super) fn ChoiceExercise(heading: String, question: MultipleChoice, style: QuestionStyle) -> Element {
    let mut vm = use_signal(|| ChoiceVm::new(&question));

    let vm_read = vm.read();
    let option_classes = (0..question.options.len())
        .map(|index| vm_read.option_class(index))
        .collect::<Vec<_>>();
    let (feedback_class, feedback_text) = vm_read.feedback().map_or_else(
        || ("feedback hidden", String::new()),
        |feedback| (feedback.class(), feedback.message()),
    );
    drop(vm_read);

    rsx! {
        div { class: "exercise-type",
            div { class: "exercise-title", "{heading}" }
            div { class: "exercise-question",
                match style {
                    QuestionStyle::Labelled => rsx! {
                        p {
                            strong { "Question:" }
                            " {question.question}"
                        }
                    },
                    QuestionStyle::Bold => rsx! {
                        p { strong { "{question.question}" } }
                    },
                }
                div { class: "options",
                    for (index, option) in question.options.iter().enumerate() {
                        button {
                            key: "{index}",
                            r#type: "button",
                            class: option_classes[index],
                            onclick: move |_| {
                                vm.write().select(index);
                            },
                            "{option}"
                        }
                    }
                }
                div { class: feedback_class, "{feedback_text}" }
            }
        }
    }
}

#[component]
pub(super) fn WritingArea(char_limit: usize, sharing: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.config().course_name.clone();
    let mut writing = use_signal(|| WritingVm::new(char_limit));
    let mut share_status = use_signal(|| None::<String>);

    let on_share = move |_| {
        let text = match writing.read().share_text(&course) {
            Ok(text) => text,
            Err(err) => {
                share_status.set(Some(err.message().to_string()));
                return;
            }
        };
        spawn(async move {
            let mut share_status = share_status;
            let message = if write_clipboard(&text).await {
                SHARE_COPIED_MESSAGE
            } else {
                tracing::warn!("clipboard write rejected");
                SHARE_FAILED_MESSAGE
            };
            share_status.set(Some(message.to_string()));
        });
    };

    let writing_read = writing.read();
    let text = writing_read.text().to_string();
    let count = writing_read.count();
    drop(writing_read);

    rsx! {
        div { class: "writing-area",
            textarea {
                id: "proseText",
                placeholder: "Write your introduction here...",
                maxlength: "{char_limit}",
                rows: "4",
                value: "{text}",
                oninput: move |evt| writing.write().set_text(&evt.value()),
            }
            div { class: "word-count",
                span { id: "wordCount", "{count}" }
                "/{char_limit} characters"
            }
        }
        if sharing {
            div { class: "share-section",
                button { class: "share-button", r#type: "button", onclick: on_share,
                    "📱 Share Your Introduction"
                }
                if let Some(status) = share_status() {
                    div { class: "share-status", "{status}" }
                }
            }
        }
    }
}

#[component]
pub(super) fn AudioPlayer(audio_file: String, max_replays: u32) -> Element {
    let counter = use_replay_counter(max_replays);
    render_audio_player(&audio_file, counter)
}

#[derive(Clone, Copy)]
pub(crate) struct ReplayCounter {
    replays: Signal<ReplayVm>,
    pub(crate) on_ended: Callback<()>,
}

pub(crate) fn use_replay_counter(max_replays: u32) -> ReplayCounter {
    let mut replays = use_signal(|| ReplayVm::new(max_replays));
    let on_ended = use_callback(move |()| {
        let left = replays.write().record_playback();
        tracing::debug!(left, "audio playback ended");
    });
    ReplayCounter { replays, on_ended }
}

pub(crate) fn render_audio_player(audio_file: &str, counter: ReplayCounter) -> Element {
    let current = *counter.replays.read();
    let on_ended = counter.on_ended;

    rsx! {
        div { class: "audio-player",
            if current.is_exhausted() {
                div { class: "replay-info",
                    em { "{NO_REPLAYS_MESSAGE}" }
                }
            } else {
                audio {
                    id: "comprehensionAudio",
                    controls: true,
                    onended: move |_| on_ended.call(()),
                    source { src: "{audio_file}", r#type: "audio/mpeg" }
                    "Your browser does not support the audio element."
                }
                div { class: "replay-info",
                    "Replays remaining: "
                    span { id: "replaysLeft", "{current.remaining()}" }
                }
            }
        }
    }
}

#[component]
pub(super) fn NavigationBar(
    buttons: NavButtons,
    on_previous: Callback<()>,
    on_advance: Callback<AdvanceAction>,
) -> Element {
    let advance = buttons.advance;

    rsx! {
        div { class: "navigation",
            button {
                class: "nav-button",
                r#type: "button",
                disabled: buttons.previous_disabled,
                onclick: move |_| on_previous.call(()),
                "Previous"
            }
            button {
                class: "nav-button",
                r#type: "button",
                onclick: move |_| on_advance.call(advance),
                "{advance.label()}"
            }
        }
    }
}

#[component]
pub(super) fn ProgressBar(progress: Option<Progress>) -> Element {
    let (width, label) = progress.map_or_else(
        || ("0%".to_string(), String::new()),
        |progress| (progress.width(), progress.label()),
    );

    rsx! {
        div { class: "progress-container",
            div { class: "progress-bar",
                div { id: "progressFill", class: "progress-fill", style: "width: {width}" }
            }
            div { id: "progressText", class: "progress-text", "{label}" }
        }
    }
}

#[component]
pub(super) fn ErrorPanel(message: &'static str, on_retry: Callback<()>) -> Element {
    rsx! {
        div { class: "lesson-card",
            div { class: "error load-error",
                h3 { "Error" }
                p { "{message}" }
                button {
                    class: "nav-button",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Try Again"
                }
            }
        }
    }
}
