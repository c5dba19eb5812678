//! Kind-specific section payloads.
//!
//! Field names follow the lesson documents on disk; the older
//! language-specific keys (`dholuo`, `english`, `notes`, ...) are accepted as
//! aliases.

use serde::Deserialize;

//
// ─── THEORY ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theory {
    pub introduction: String,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub grammar_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Phrase {
    #[serde(alias = "dholuo")]
    pub source: String,
    pub literal: String,
    #[serde(alias = "english")]
    pub translation: String,
    #[serde(default, alias = "notes")]
    pub note: Option<String>,
}

//
// ─── CONVERSATION ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Conversation {
    pub dialogue: Vec<DialogueLine>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    /// Styling tag; `a` marks the first speaker.
    pub speaker_type: String,
    #[serde(alias = "dholuo")]
    pub source: String,
    #[serde(default, alias = "highlighted_pronoun")]
    pub highlighted_term: Option<String>,
    pub literal: String,
    #[serde(alias = "english")]
    pub translation: String,
}

//
// ─── VOCABULARY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vocabulary {
    pub words: Vec<VocabItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VocabItem {
    #[serde(rename = "type")]
    pub word_type: String,
    #[serde(alias = "dholuo")]
    pub source: String,
    #[serde(alias = "english")]
    pub meaning: String,
    #[serde(default, alias = "notes")]
    pub note: String,
}

//
// ─── PRACTICE ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Practice {
    #[serde(default)]
    pub pronunciation: Option<Vec<PronunciationItem>>,
    #[serde(default)]
    pub exercises: Option<Vec<Exercise>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PronunciationItem {
    #[serde(alias = "dholuo")]
    pub source: String,
    pub phonetic: String,
    #[serde(default, alias = "tips")]
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Exercise {
    MultipleChoice(MultipleChoice),
    /// Exercise types this viewer does not know how to present.
    #[serde(other)]
    Unsupported,
}

/// A multiple-choice prompt with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MultipleChoice {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
}

impl MultipleChoice {
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}

//
// ─── PROSE WRITING ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProseWriting {
    pub instructions: String,
    #[serde(default)]
    pub prompts: Vec<String>,
    #[serde(default)]
    pub example: String,
    /// Maximum number of characters the learner may type.
    #[serde(alias = "word_limit")]
    pub char_limit: usize,
    #[serde(default)]
    pub sharing: Sharing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Sharing {
    #[serde(default)]
    pub enabled: bool,
}

//
// ─── AUDIO COMPREHENSION ───────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AudioComprehension {
    pub instructions: String,
    pub audio_file: String,
    pub max_replays: u32,
    #[serde(default)]
    pub questions: Vec<MultipleChoice>,
}

//
// ─── COMPLETION / QUIZ ─────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Completion {
    pub congratulations: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub next_steps: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub instructions: Option<String>,
    pub questions: Vec<MultipleChoice>,
}
