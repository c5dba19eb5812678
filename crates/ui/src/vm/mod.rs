mod choice_vm;
mod dialogue_vm;
mod replay_vm;
mod writing_vm;

pub use choice_vm::{ChoiceFeedback, ChoiceVm, OptionMark};
pub use dialogue_vm::{LabelPlacement, TextSegment, highlight_segments, label_placement, speaker_class};
pub use replay_vm::{NO_REPLAYS_MESSAGE, ReplayVm};
pub use writing_vm::{SHARE_COPIED_MESSAGE, SHARE_FAILED_MESSAGE, ShareError, WritingVm, share_text};
