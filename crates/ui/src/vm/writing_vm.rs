pub const SHARE_COPIED_MESSAGE: &str =
    "Introduction copied to clipboard! You can now paste it on social media.";
pub const SHARE_FAILED_MESSAGE: &str = "Could not copy to the clipboard.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareError {
    EmptyText,
}

impl ShareError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ShareError::EmptyText => "Please write your introduction first!",
        }
    }
}

/// Free-text answer bounded by a character limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WritingVm {
    text: String,
    limit: usize,
}

impl WritingVm {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            limit,
        }
    }

    /// Replace the text, keeping at most `limit` characters.
    pub fn set_text(&mut self, raw: &str) {
        self.text = raw.chars().take(self.limit).collect();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{}/{} characters", self.count(), self.limit)
    }

    /// # Errors
    ///
    /// Returns `ShareError::EmptyText` when nothing but whitespace was written.
    pub fn share_text(&self, course: &str) -> Result<String, ShareError> {
        share_text(&self.text, course)
    }
}

/// Announcement copied to the clipboard by the share button.
///
/// # Errors
///
/// Returns `ShareError::EmptyText` for empty or whitespace-only text.
pub fn share_text(text: &str, course: &str) -> Result<String, ShareError> {
    if text.trim().is_empty() {
        return Err(ShareError::EmptyText);
    }
    Ok(format!(
        "Just wrote my first introduction in #{course}! 🇰🇪\n\n{text}\n\nLearning with Learn{course} 📚"
    ))
}
