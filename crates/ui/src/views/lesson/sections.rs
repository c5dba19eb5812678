use dioxus::prelude::*;
use lesson_core::model::{
    AudioComprehension, Completion, Conversation, DialogueLine, Exercise, Practice,
    ProseWriting, Quiz, Section, SectionBody, Theory, Vocabulary,
};

use super::widgets::{AudioPlayer, ChoiceExercise, QuestionStyle, WritingArea};
use crate::vm::{LabelPlacement, TextSegment, highlight_segments, label_placement, speaker_class};

/// Render one section. Pure dispatch over the section kind.
#[must_use]
pub fn render_section(section: &Section) -> Element {
    let title = section.title().to_string();
    match section.body() {
        SectionBody::Theory(content) => rsx! {
            TheorySection { title, content: content.clone() }
        },
        SectionBody::Conversation(content) => rsx! {
            ConversationSection { title, content: content.clone() }
        },
        SectionBody::Vocabulary(content) => rsx! {
            VocabularySection { title, content: content.clone() }
        },
        SectionBody::Practice(content) => rsx! {
            PracticeSection { title, content: content.clone() }
        },
        SectionBody::ProseWriting(content) => rsx! {
            ProseWritingSection { title, content: content.clone() }
        },
        SectionBody::AudioComprehension(content) => rsx! {
            AudioComprehensionSection { title, content: content.clone() }
        },
        SectionBody::Completion(content) => rsx! {
            CompletionSection { title, content: content.clone() }
        },
        SectionBody::Quiz(content) => rsx! {
            QuizSection { title, content: content.clone() }
        },
        SectionBody::Unknown { kind } => rsx! {
            UnknownSection { kind: kind.clone() }
        },
    }
}

#[component]
fn TheorySection(title: String, content: Theory) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
        div { class: "theory-section",
            p { "{content.introduction}" }
            for (index, phrase) in content.phrases.iter().enumerate() {
                div { key: "{index}", class: "phrase-box",
                    div { class: "source-text", "{phrase.source}" }
                    div { class: "literal-translation", "Literal: \"{phrase.literal}\"" }
                    div { class: "english-translation", "English: {phrase.translation}" }
                    if let Some(note) = phrase.note.as_deref() {
                        div { class: "phrase-note", "{note}" }
                    }
                }
            }
            if let Some(note) = content.grammar_note.as_deref() {
                p { class: "grammar-note",
                    strong { "Grammar Note:" }
                    " {note}"
                }
            }
        }
    }
}

#[component]
fn ConversationSection(title: String, content: Conversation) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
        div { class: "conversation-section",
            div { class: "conversation-title", "💬 Conversation Practice" }
            for (index, line) in content.dialogue.iter().enumerate() {
                DialogueRow { key: "{index}", line: line.clone() }
            }
            if let Some(note) = content.note.as_deref() {
                div { class: "conversation-note",
                    strong { "Notice:" }
                    " {note}"
                }
            }
        }
    }
}

#[component]
fn DialogueRow(line: DialogueLine) -> Element {
    let speaker = speaker_class(&line.speaker_type);
    let placement = label_placement(&line.speaker_type);
    let source = line.source.clone();
    let term = line.highlighted_term.clone();
    let segments = use_memo(use_reactive!(|source, term| {
        highlight_segments(&source, term.as_deref())
    }));
    let segments = segments.read();

    rsx! {
        div { class: "conversation-line person-{speaker}",
            if placement == LabelPlacement::Before {
                div { class: "speaker-label", "{line.speaker}" }
            }
            div { class: "speech-bubble person-{speaker}",
                div { class: "source-text",
                    for (index, segment) in segments.iter().enumerate() {
                        match segment {
                            TextSegment::Plain(text) => rsx! { span { key: "{index}", "{text}" } },
                            TextSegment::Highlight(text) => rsx! {
                                span { key: "{index}", class: "highlight", "{text}" }
                            },
                        }
                    }
                }
                div { class: "literal-breakdown", "Literal: \"{line.literal}\"" }
                div { class: "literal-translation", "\"{line.translation}\"" }
            }
            if placement == LabelPlacement::After {
                div { class: "speaker-label", "{line.speaker}" }
            }
        }
    }
}

#[component]
fn VocabularySection(title: String, content: Vocabulary) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
        div { class: "vocabulary-card",
            div { class: "vocabulary-title", "📚 Vocabulary from the Conversation" }
            div { class: "vocabulary-grid",
                for (index, word) in content.words.iter().enumerate() {
                    div { key: "{index}", class: "vocab-item",
                        div { class: "vocab-type", "{word.word_type}" }
                        div { class: "vocab-source", "{word.source}" }
                        div { class: "vocab-meaning", "{word.meaning}" }
                        if !word.note.is_empty() {
                            div { class: "vocab-note", "{word.note}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PracticeSection(title: String, content: Practice) -> Element {
    let has_pronunciation = content.pronunciation.is_some();
    let pronunciation = content.pronunciation.unwrap_or_default();
    let exercises = content.exercises.unwrap_or_default();

    rsx! {
        h2 { class: "section-title", "{title}" }
        div { class: "practice-section",
            if has_pronunciation {
                div { class: "exercise-type",
                    div { class: "exercise-title", "🔊 Pronunciation Guide" }
                    for (index, item) in pronunciation.iter().enumerate() {
                        div { key: "{index}", class: "pronunciation-guide",
                            strong { "{item.source}" }
                            " - {item.phonetic}"
                            if !item.tip.is_empty() {
                                div { class: "pronunciation-tip", "Tips: {item.tip}" }
                            }
                        }
                    }
                }
            }
            for (index, exercise) in exercises.iter().enumerate() {
                match exercise {
                    Exercise::MultipleChoice(question) => rsx! {
                        ChoiceExercise {
                            key: "{index}",
                            heading: format!("📝 Exercise {}", index + 1),
                            question: question.clone(),
                            style: QuestionStyle::Labelled,
                        }
                    },
                    Exercise::Unsupported => rsx! {},
                }
            }
        }
    }
}

#[component]
fn ProseWritingSection(title: String, content: ProseWriting) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
        div { class: "prose-writing-section",
            p { "{content.instructions}" }
            div { class: "writing-prompts",
                h4 { "💡 Helpful prompts:" }
                ul {
                    for (index, prompt) in content.prompts.iter().enumerate() {
                        li { key: "{index}", "{prompt}" }
                    }
                }
            }
            if !content.example.is_empty() {
                div { class: "example-box",
                    strong { "Example:" }
                    " {content.example}"
                }
            }
            WritingArea { char_limit: content.char_limit, sharing: content.sharing.enabled }
        }
    }
}

#[component]
fn AudioComprehensionSection(title: String, content: AudioComprehension) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
        div { class: "audio-comprehension-section",
            p { "{content.instructions}" }
            AudioPlayer { audio_file: content.audio_file.clone(), max_replays: content.max_replays }
            div { class: "audio-questions",
                for (index, question) in content.questions.iter().enumerate() {
                    ChoiceExercise {
                        key: "{index}",
                        heading: format!("Question {}", index + 1),
                        question: question.clone(),
                        style: QuestionStyle::Bold,
                    }
                }
            }
        }
    }
}

#[component]
fn CompletionSection(title: String, content: Completion) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
        div { class: "completion-section",
            div { class: "congratulations",
                h3 { "🎉 {content.congratulations}" }
            }
            div { class: "chapter-summary",
                h4 { "📚 What you learned:" }
                p { "{content.summary}" }
            }
            div { class: "achievements",
                h4 { "🏆 Achievements unlocked:" }
                div { class: "achievement-list",
                    for (index, achievement) in content.achievements.iter().enumerate() {
                        div { key: "{index}", class: "achievement-badge", "✨ {achievement}" }
                    }
                }
            }
            div { class: "next-steps",
                h4 { "🚀 What's next:" }
                p { "{content.next_steps}" }
            }
        }
    }
}

#[component]
fn QuizSection(title: String, content: Quiz) -> Element {
    rsx! {
        h2 { class: "section-title", "{title}" }
        div { class: "quiz-section",
            if let Some(instructions) = content.instructions.as_deref() {
                p { "{instructions}" }
            }
            for (index, question) in content.questions.iter().enumerate() {
                ChoiceExercise {
                    key: "{index}",
                    heading: format!("Question {}", index + 1),
                    question: question.clone(),
                    style: QuestionStyle::Bold,
                }
            }
        }
    }
}

#[component]
fn UnknownSection(kind: String) -> Element {
    tracing::warn!(kind = %kind, "unknown section type");
    rsx! {
        div { class: "error", "Unknown section type" }
    }
}
