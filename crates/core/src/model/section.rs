use serde::Deserialize;
use std::fmt;

use crate::model::content::{
    AudioComprehension, Completion, Conversation, Practice, ProseWriting, Quiz, Theory,
    Vocabulary,
};

/// The closed set of section kinds the viewer can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Theory,
    Conversation,
    Vocabulary,
    Practice,
    ProseWriting,
    AudioComprehension,
    Completion,
    Quiz,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Theory,
        SectionKind::Conversation,
        SectionKind::Vocabulary,
        SectionKind::Practice,
        SectionKind::ProseWriting,
        SectionKind::AudioComprehension,
        SectionKind::Completion,
        SectionKind::Quiz,
    ];

    /// Wire name used in the `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionKind::Theory => "theory",
            SectionKind::Conversation => "conversation",
            SectionKind::Vocabulary => "vocabulary",
            SectionKind::Practice => "practice",
            SectionKind::ProseWriting => "prose_writing",
            SectionKind::AudioComprehension => "audio_comprehension",
            SectionKind::Completion => "completion",
            SectionKind::Quiz => "quiz",
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-tagged payload of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Theory(Theory),
    Conversation(Conversation),
    Vocabulary(Vocabulary),
    Practice(Practice),
    ProseWriting(ProseWriting),
    AudioComprehension(AudioComprehension),
    Completion(Completion),
    Quiz(Quiz),
    /// A `type` this viewer does not recognise. Rendered as a placeholder.
    Unknown { kind: String },
}

impl SectionBody {
    /// `None` for unknown kinds.
    #[must_use]
    pub fn kind(&self) -> Option<SectionKind> {
        match self {
            SectionBody::Theory(_) => Some(SectionKind::Theory),
            SectionBody::Conversation(_) => Some(SectionKind::Conversation),
            SectionBody::Vocabulary(_) => Some(SectionKind::Vocabulary),
            SectionBody::Practice(_) => Some(SectionKind::Practice),
            SectionBody::ProseWriting(_) => Some(SectionKind::ProseWriting),
            SectionBody::AudioComprehension(_) => Some(SectionKind::AudioComprehension),
            SectionBody::Completion(_) => Some(SectionKind::Completion),
            SectionBody::Quiz(_) => Some(SectionKind::Quiz),
            SectionBody::Unknown { .. } => None,
        }
    }
}

/// One instructional block of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSection")]
pub struct Section {
    title: String,
    body: SectionBody,
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>, body: SectionBody) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &SectionBody {
        &self.body
    }

    #[must_use]
    pub fn kind(&self) -> Option<SectionKind> {
        self.body.kind()
    }

    /// Wire name of the section's kind, including unrecognised ones.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match &self.body {
            SectionBody::Unknown { kind } => kind,
            body => body.kind().map_or("", SectionKind::as_str),
        }
    }
}

#[derive(Deserialize)]
struct RawSection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: serde_json::Value,
}

impl TryFrom<RawSection> for Section {
    type Error = serde_json::Error;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        let content = raw.content;
        let body = match SectionKind::from_wire(&raw.kind) {
            Some(SectionKind::Theory) => SectionBody::Theory(serde_json::from_value(content)?),
            Some(SectionKind::Conversation) => {
                SectionBody::Conversation(serde_json::from_value(content)?)
            }
            Some(SectionKind::Vocabulary) => {
                SectionBody::Vocabulary(serde_json::from_value(content)?)
            }
            Some(SectionKind::Practice) => SectionBody::Practice(serde_json::from_value(content)?),
            Some(SectionKind::ProseWriting) => {
                SectionBody::ProseWriting(serde_json::from_value(content)?)
            }
            Some(SectionKind::AudioComprehension) => {
                SectionBody::AudioComprehension(serde_json::from_value(content)?)
            }
            Some(SectionKind::Completion) => {
                SectionBody::Completion(serde_json::from_value(content)?)
            }
            Some(SectionKind::Quiz) => SectionBody::Quiz(serde_json::from_value(content)?),
            None => SectionBody::Unknown { kind: raw.kind },
        };

        Ok(Section {
            title: raw.title,
            body,
        })
    }
}
