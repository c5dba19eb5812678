use lesson_core::model::MultipleChoice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Unmarked,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChoiceFeedback {
    Correct { explanation: String },
    Incorrect,
}

impl ChoiceFeedback {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ChoiceFeedback::Correct { explanation } if explanation.is_empty() => {
                "Correct!".to_string()
            }
            ChoiceFeedback::Correct { explanation } => format!("Correct! {explanation}"),
            ChoiceFeedback::Incorrect => "Not quite right. Try again!".to_string(),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            ChoiceFeedback::Correct { .. } => "feedback correct",
            ChoiceFeedback::Incorrect => "feedback incorrect",
        }
    }
}

/// Selection state for one multiple-choice question.
///
/// Only the latest selection carries a mark; attempts are unlimited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    option_count: usize,
    correct_answer: usize,
    explanation: String,
    selected: Option<usize>,
}

impl ChoiceVm {
    #[must_use]
    pub fn new(question: &MultipleChoice) -> Self {
        Self {
            option_count: question.options.len(),
            correct_answer: question.correct_answer,
            explanation: question.explanation.clone(),
            selected: None,
        }
    }

    /// Select `option`, replacing any previous mark. Out-of-range options are ignored.
    pub fn select(&mut self, option: usize) -> bool {
        if option >= self.option_count {
            return false;
        }
        self.selected = Some(option);
        true
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn mark(&self, option: usize) -> OptionMark {
        match self.selected {
            Some(selected) if selected == option && option == self.correct_answer => {
                OptionMark::Correct
            }
            Some(selected) if selected == option => OptionMark::Incorrect,
            _ => OptionMark::Unmarked,
        }
    }

    #[must_use]
    pub fn option_class(&self, option: usize) -> &'static str {
        match self.mark(option) {
            OptionMark::Unmarked => "option-button",
            OptionMark::Correct => "option-button correct",
            OptionMark::Incorrect => "option-button incorrect",
        }
    }

    #[must_use]
    pub fn feedback(&self) -> Option<ChoiceFeedback> {
        let selected = self.selected?;
        Some(if selected == self.correct_answer {
            ChoiceFeedback::Correct {
                explanation: self.explanation.clone(),
            }
        } else {
            ChoiceFeedback::Incorrect
        })
    }
}
