use regex::Regex;

/// Where the speaker label sits relative to the speech bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPlacement {
    Before,
    After,
}

/// CSS suffix for a speaker, e.g. `person-a`.
#[must_use]
pub fn speaker_class(speaker_type: &str) -> String {
    speaker_type.to_lowercase()
}

/// The first speaker (`a`) is drawn on the right with the label trailing.
#[must_use]
pub fn label_placement(speaker_type: &str) -> LabelPlacement {
    if speaker_class(speaker_type) == "a" {
        LabelPlacement::After
    } else {
        LabelPlacement::Before
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSegment {
    Plain(String),
    Highlight(String),
}

/// Split `text` around every whole-word, case-sensitive occurrence of `term`.
#[must_use]
pub fn highlight_segments(text: &str, term: Option<&str>) -> Vec<TextSegment> {
    let Some(term) = term.filter(|term| !term.is_empty()) else {
        return vec![TextSegment::Plain(text.to_string())];
    };
    let pattern = format!(r"\b{}\b", regex::escape(term));
    let Ok(matcher) = Regex::new(&pattern) else {
        tracing::warn!(term, "highlight pattern rejected");
        return vec![TextSegment::Plain(text.to_string())];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in matcher.find_iter(text) {
        if found.start() > last {
            segments.push(TextSegment::Plain(text[last..found.start()].to_string()));
        }
        segments.push(TextSegment::Highlight(found.as_str().to_string()));
        last = found.end();
    }
    if last < text.len() || segments.is_empty() {
        segments.push(TextSegment::Plain(text[last..].to_string()));
    }
    segments
}
