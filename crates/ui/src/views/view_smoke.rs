use lesson_core::model::{Lesson, LessonId, Section};
use services::AdvanceAction;
use storage::InMemoryLessonSource;

use super::test_harness::{
    lesson_source, render_section_html, setup_audio_harness, setup_view_harness,
};
use crate::vm::NO_REPLAYS_MESSAGE;

const ONE_SECTION: &str = r#"{"title": "Numbers", "sections": [
    {"type": "completion", "title": "Wrap up", "content": {"congratulations": "All counted"}}
]}"#;

const THREE_SECTIONS: &str = r#"{"title": "Greetings", "sections": [
    {"type": "theory", "title": "Saying hello", "content": {"introduction": "Greetings matter."}},
    {"type": "vocabulary", "title": "Words", "content": {"words": []}},
    {"type": "completion", "title": "Done", "content": {"congratulations": "Well done"}}
]}"#;

fn section(raw: &str) -> Section {
    let lesson = Lesson::from_json(&format!(r#"{{"title": "T", "sections": [{raw}]}}"#))
        .expect("fixture parses");
    lesson.sections()[0].clone()
}

#[tokio::test(flavor = "current_thread")]
async fn default_lesson_renders_first_section() {
    let mut harness = setup_view_harness(None, lesson_source(&[(1, THREE_SECTIONS)]), 30);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("lessonContainer"), "missing container in {html}");
    assert!(html.contains("Saying hello"), "missing first section in {html}");
    assert!(!html.contains(">Words<"), "second section rendered early in {html}");
    assert!(html.contains("Lesson 1 — Section 1 of 3"), "missing progress in {html}");
    assert!(html.contains("Previous"), "missing previous button in {html}");
    assert!(html.contains("Next Section"), "missing advance button in {html}");
    assert_eq!(harness.source.fetch_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn missing_lesson_shows_error_panel() {
    let mut harness = setup_view_harness(Some("99"), lesson_source(&[(1, THREE_SECTIONS)]), 30);
    harness.settle().await;
    let html = harness.render();

    assert!(
        html.contains("Could not load lesson. Please try again."),
        "missing error text in {html}"
    );
    assert!(html.contains("Try Again"), "missing retry button in {html}");
    assert!(!html.contains("Section 1 of"), "progress shown without lesson in {html}");
    assert_eq!(harness.source.fetch_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_identifier_skips_fetch() {
    let mut harness =
        setup_view_harness(Some("../secret"), lesson_source(&[(1, THREE_SECTIONS)]), 30);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Try Again"), "missing retry button in {html}");
    assert_eq!(harness.source.fetch_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn named_lesson_keeps_lesson_number() {
    let source = InMemoryLessonSource::new();
    source.insert_document(
        LessonId::Name("market".into()),
        r#"{"title": "Market", "sections": [
            {"type": "theory", "title": "At the market", "content": {"introduction": "Prices."}}
        ]}"#,
    );
    let mut harness = setup_view_harness(Some("market"), source, 30);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("At the market"), "missing section in {html}");
    assert!(html.contains("Lesson 1 — Section 1 of 1"), "missing progress in {html}");
    assert!(html.contains("Complete Lesson"), "missing complete button in {html}");
    assert!(!html.contains("Next Section"), "unexpected next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_section_does_not_break_lesson() {
    let raw = r#"{"title": "Mixed", "sections": [
        {"type": "flashcards", "title": "Cards", "content": {"cards": []}},
        {"type": "theory", "title": "Intro", "content": {"introduction": "Hi"}}
    ]}"#;
    let mut harness = setup_view_harness(None, lesson_source(&[(1, raw)]), 30);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Unknown section type"), "missing placeholder in {html}");
    assert!(html.contains("Next Section"), "navigation missing in {html}");
    assert!(html.contains("Section 1 of 2"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_beyond_course_shows_error_without_fetch() {
    let mut harness = setup_view_harness(Some("45"), lesson_source(&[(1, THREE_SECTIONS)]), 30);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Try Again"), "missing retry button in {html}");
    assert!(!html.contains("Lesson 45"), "out-of-range lesson shown in {html}");
    assert_eq!(harness.source.fetch_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn retry_loads_default_lesson() {
    let mut harness = setup_view_harness(Some("99"), lesson_source(&[(1, THREE_SECTIONS)]), 30);
    harness.settle().await;
    assert!(harness.render().contains("Try Again"));

    harness.retry();
    harness.finish_loads().await;
    let html = harness.render();

    assert!(html.contains("Saying hello"), "default lesson not shown in {html}");
    assert!(html.contains("Lesson 1 — Section 1 of 3"), "missing progress in {html}");
    assert!(!html.contains("Try Again"), "error panel still shown in {html}");
    assert_eq!(harness.source.fetch_count(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn retry_refetches_failed_default_lesson() {
    let source = InMemoryLessonSource::new();
    let mut harness = setup_view_harness(None, source.clone(), 30);
    harness.settle().await;
    assert!(harness.render().contains("Try Again"));
    assert_eq!(harness.source.fetch_count(), 1);

    source.insert_document(LessonId::number(1), THREE_SECTIONS);
    harness.retry();
    harness.finish_loads().await;
    let html = harness.render();

    assert!(html.contains("Saying hello"), "lesson not shown after retry in {html}");
    assert_eq!(harness.source.fetch_count(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn navigation_moves_between_sections() {
    let mut harness = setup_view_harness(None, lesson_source(&[(1, THREE_SECTIONS)]), 30);
    harness.settle().await;

    harness.advance(AdvanceAction::Next);
    let html = harness.render();
    assert!(html.contains("Lesson 1 — Section 2 of 3"), "missing progress in {html}");
    assert!(!html.contains("Saying hello"), "first section still shown in {html}");

    harness.previous();
    let html = harness.render();
    assert!(html.contains("Saying hello"), "first section not restored in {html}");
    assert_eq!(harness.source.fetch_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn completing_lesson_acknowledges_and_loads_next() {
    let mut harness = setup_view_harness(
        None,
        lesson_source(&[(1, ONE_SECTION), (2, THREE_SECTIONS)]),
        30,
    );
    harness.settle().await;

    harness.advance(AdvanceAction::Complete);
    harness.finish_loads().await;
    let html = harness.render();

    assert!(html.contains("Lesson completed! 🎉"), "missing acknowledgment in {html}");
    assert!(html.contains("Lesson 2 — Section 1 of 3"), "next lesson not loaded in {html}");
    assert!(html.contains("Saying hello"), "missing next lesson section in {html}");
    assert_eq!(harness.source.fetch_count(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn completing_final_lesson_shows_terminal_congratulation() {
    let mut harness = setup_view_harness(Some("2"), lesson_source(&[(2, ONE_SECTION)]), 2);
    harness.settle().await;
    assert!(harness.render().contains("Complete Lesson"));

    harness.advance(AdvanceAction::Complete);
    harness.finish_loads().await;
    let html = harness.render();

    assert!(html.contains("Lesson completed! 🎉"), "missing acknowledgment in {html}");
    assert!(
        html.contains("Congratulations! You&#39;ve completed all lessons! 🎉")
            || html.contains("Congratulations! You've completed all lessons! 🎉"),
        "missing terminal panel in {html}"
    );
    assert!(!html.contains("All counted"), "section still shown in {html}");
    assert_eq!(harness.source.fetch_count(), 1);
}

#[test]
fn audio_player_hides_after_last_replay() {
    let mut harness = setup_audio_harness(2);
    let html = harness.render();
    assert!(html.contains("comprehensionAudio"), "missing player in {html}");
    assert!(html.contains("Replays remaining: "), "missing counter in {html}");
    assert!(html.contains(">2<"), "wrong starting count in {html}");

    harness.finish_playback();
    let html = harness.render();
    assert!(html.contains(">1<"), "count not decremented in {html}");
    assert!(!html.contains(NO_REPLAYS_MESSAGE), "notice shown early in {html}");

    harness.finish_playback();
    let html = harness.render();
    assert!(html.contains(NO_REPLAYS_MESSAGE), "missing notice in {html}");
    assert!(!html.contains("comprehensionAudio"), "player still shown in {html}");
}

#[test]
fn theory_renders_phrases_and_grammar_note() {
    let html = render_section_html(section(
        r#"{"type": "theory", "title": "Pronouns", "content": {
            "introduction": "Pronouns come first.",
            "phrases": [
                {"dholuo": "Oyawore", "literal": "morning", "english": "Good morning", "notes": "Used until noon"}
            ],
            "grammar_note": "Pronouns are short."
        }}"#,
    ));

    assert!(html.contains("Pronouns come first."), "missing intro in {html}");
    assert!(html.contains("Oyawore"), "missing phrase in {html}");
    assert!(html.contains("English: Good morning"), "missing translation in {html}");
    assert!(html.contains("Used until noon"), "missing phrase note in {html}");
    assert!(html.contains("Grammar Note:"), "missing grammar note in {html}");
}

#[test]
fn theory_omits_missing_optional_blocks() {
    let html = render_section_html(section(
        r#"{"type": "theory", "title": "Bare", "content": {"introduction": "Only this."}}"#,
    ));
    assert!(!html.contains("phrase-box"), "unexpected phrase in {html}");
    assert!(!html.contains("Grammar Note:"), "unexpected grammar note in {html}");
}

#[test]
fn conversation_places_labels_by_speaker() {
    let html = render_section_html(section(
        r#"{"type": "conversation", "title": "Meeting", "content": {
            "dialogue": [
                {"speaker": "Otieno", "speaker_type": "A", "dholuo": "An an jalupo",
                 "highlighted_pronoun": "An", "literal": "I am fisherman", "english": "I am a fisherman"},
                {"speaker": "Akinyi", "speaker_type": "b", "dholuo": "In bende",
                 "literal": "You also", "english": "You too"}
            ],
            "note": "Pronouns lead the sentence."
        }}"#,
    ));

    assert!(html.contains("💬 Conversation Practice"), "missing heading in {html}");
    assert!(html.contains("conversation-line person-a"), "speaker class not lowercased in {html}");

    let bubble_a = html.find("speech-bubble person-a").unwrap();
    let label_a = html.find(">Otieno<").unwrap();
    assert!(bubble_a < label_a, "first speaker label should trail bubble: {html}");

    let bubble_b = html.find("speech-bubble person-b").unwrap();
    let label_b = html.find(">Akinyi<").unwrap();
    assert!(label_b < bubble_b, "second speaker label should lead bubble: {html}");

    assert!(html.contains("Notice:"), "missing note in {html}");
}

#[test]
fn conversation_highlights_whole_word_only() {
    let html = render_section_html(section(
        r#"{"type": "conversation", "title": "Meeting", "content": {"dialogue": [
            {"speaker": "Otieno", "speaker_type": "a", "dholuo": "An an jalupo",
             "highlighted_pronoun": "An", "literal": "I am fisherman", "english": "I am a fisherman"}
        ]}}"#,
    ));

    assert!(
        html.contains(r#"<span class="highlight">An</span>"#),
        "missing highlight in {html}"
    );
    assert_eq!(html.matches(r#"class="highlight""#).count(), 1, "{html}");
}

#[test]
fn vocabulary_renders_grid() {
    let html = render_section_html(section(
        r#"{"type": "vocabulary", "title": "Words", "content": {"words": [
            {"type": "noun", "dholuo": "Nyathi", "english": "child", "notes": "plural: nyithindo"},
            {"type": "verb", "dholuo": "Wuoth", "english": "walk"}
        ]}}"#,
    ));

    assert!(html.contains("📚 Vocabulary from the Conversation"), "missing heading in {html}");
    assert_eq!(html.matches("vocab-item").count(), 2, "{html}");
    assert!(html.contains("Nyathi"), "missing word in {html}");
    assert!(html.contains("plural: nyithindo"), "missing note in {html}");
}

#[test]
fn practice_renders_guide_and_supported_exercises() {
    let html = render_section_html(section(
        r#"{"type": "practice", "title": "Practice", "content": {
            "pronunciation": [{"dholuo": "An", "phonetic": "ahn", "tips": "Short vowel"}],
            "exercises": [
                {"type": "multiple_choice", "question": "Which means I?",
                 "options": ["An", "In", "En"], "correct_answer": 0, "explanation": "An is I."},
                {"type": "matching", "pairs": []}
            ]
        }}"#,
    ));

    assert!(html.contains("🔊 Pronunciation Guide"), "missing guide in {html}");
    assert!(html.contains("Tips: Short vowel"), "missing tip in {html}");
    assert!(html.contains("📝 Exercise 1"), "missing exercise in {html}");
    assert!(!html.contains("📝 Exercise 2"), "unsupported exercise rendered in {html}");
    assert!(html.contains("Question:"), "missing question label in {html}");
    assert_eq!(html.matches(r#"class="option-button""#).count(), 3, "{html}");
    assert!(html.contains("feedback hidden"), "feedback should start hidden in {html}");
}

#[test]
fn practice_without_pronunciation_skips_guide() {
    let html = render_section_html(section(
        r#"{"type": "practice", "title": "Practice", "content": {}}"#,
    ));
    assert!(!html.contains("Pronunciation Guide"), "{html}");
    assert!(!html.contains("Exercise"), "{html}");
}

#[test]
fn prose_writing_renders_bounded_input() {
    let html = render_section_html(section(
        r#"{"type": "prose_writing", "title": "Introduce yourself", "content": {
            "instructions": "Write a short introduction.",
            "prompts": ["Your name", "Where you live"],
            "example": "Nyinga en Akinyi.",
            "word_limit": 120,
            "sharing": {"enabled": true}
        }}"#,
    ));

    assert!(html.contains("💡 Helpful prompts:"), "missing prompts in {html}");
    assert!(html.contains("Where you live"), "missing prompt in {html}");
    assert!(html.contains(r#"maxlength="120""#), "missing limit in {html}");
    assert!(html.contains("/120 characters"), "missing counter in {html}");
    assert!(html.contains("Share Your Introduction"), "missing share button in {html}");
}

#[test]
fn prose_writing_hides_share_when_disabled() {
    let html = render_section_html(section(
        r#"{"type": "prose_writing", "title": "Write", "content": {
            "instructions": "Write.", "char_limit": 50
        }}"#,
    ));
    assert!(html.contains("/50 characters"), "missing counter in {html}");
    assert!(!html.contains("Share Your Introduction"), "unexpected share in {html}");
}

#[test]
fn audio_comprehension_renders_player_and_questions() {
    let html = render_section_html(section(
        r#"{"type": "audio_comprehension", "title": "Listen", "content": {
            "instructions": "Listen carefully.",
            "audio_file": "audio/lesson1.mp3",
            "max_replays": 2,
            "questions": [
                {"question": "Who speaks first?", "options": ["Otieno", "Akinyi"], "correct_answer": 0}
            ]
        }}"#,
    ));

    assert!(html.contains(r#"src="audio/lesson1.mp3""#), "missing audio source in {html}");
    assert!(html.contains("audio/mpeg"), "missing audio type in {html}");
    assert!(html.contains("Replays remaining: "), "missing replay counter in {html}");
    assert!(html.contains(r#"<span id="replaysLeft">2</span>"#), "wrong replay count in {html}");
    assert!(html.contains("Question 1"), "missing question in {html}");
    assert!(!html.contains("No more replays available"), "{html}");
}

#[test]
fn completion_renders_achievements() {
    let html = render_section_html(section(
        r#"{"type": "completion", "title": "Finished", "content": {
            "congratulations": "Well done",
            "summary": "You met pronouns.",
            "achievements": ["Greetings", "Pronouns"],
            "next_steps": "Numbers"
        }}"#,
    ));

    assert!(html.contains("🎉 Well done"), "missing congratulations in {html}");
    assert!(html.contains("📚 What you learned:"), "missing summary heading in {html}");
    assert!(html.contains("🏆 Achievements unlocked:"), "missing achievements in {html}");
    assert_eq!(html.matches("achievement-badge").count(), 2, "{html}");
    assert!(html.contains("✨ Pronouns"), "missing badge in {html}");
}

#[test]
fn quiz_numbers_questions() {
    let html = render_section_html(section(
        r#"{"type": "quiz", "title": "Quiz", "content": {
            "instructions": "Pick one.",
            "questions": [
                {"question": "One?", "options": ["a", "b"], "correct_answer": 1},
                {"question": "Two?", "options": ["c", "d"], "correct_answer": 0}
            ]
        }}"#,
    ));

    assert!(html.contains("Pick one."), "missing instructions in {html}");
    assert!(html.contains("Question 1"), "{html}");
    assert!(html.contains("Question 2"), "{html}");
}

#[test]
fn unknown_section_renders_placeholder() {
    let html = render_section_html(section(
        r#"{"type": "flashcards", "title": "Cards", "content": {}}"#,
    ));
    assert!(html.contains("Unknown section type"), "{html}");
}
