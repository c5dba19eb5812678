pub mod content;
mod ids;
mod lesson;
mod section;

pub use content::{
    AudioComprehension, Completion, Conversation, DialogueLine, Exercise, MultipleChoice,
    Phrase, Practice, PronunciationItem, ProseWriting, Quiz, Sharing, Theory, VocabItem,
    Vocabulary,
};
pub use ids::{LESSONS_DIR, LessonId, ParseIdError};
pub use lesson::{Lesson, LessonParseError};
pub use section::{Section, SectionBody, SectionKind};
