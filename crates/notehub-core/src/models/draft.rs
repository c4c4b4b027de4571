//! Note creation draft and its validation rules

use std::fmt;

use serde::Serialize;

use super::NoteTag;

/// Minimum title length, in characters, after trimming
pub const TITLE_MIN_LEN: usize = 3;
/// Maximum title length, in characters, after trimming
pub const TITLE_MAX_LEN: usize = 50;
/// Maximum content length, in characters
pub const CONTENT_MAX_LEN: usize = 500;

/// Form state for a note that has not been submitted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

/// Validated payload for the gateway create operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

/// Per-field validation messages for a [`NoteDraft`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl DraftErrors {
    /// True when no field has an error
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

impl fmt::Display for DraftErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [self.title.as_deref(), self.content.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for DraftErrors {}

impl NoteDraft {
    /// Check the draft against the form rules and build the create payload.
    ///
    /// The title is trimmed before it is measured and sent; content is sent
    /// as typed, minus surrounding whitespace.
    pub fn validate(&self) -> Result<NewNote, DraftErrors> {
        let title = self.title.trim();
        let content = self.content.trim();
        let title_len = title.chars().count();

        let mut errors = DraftErrors::default();
        if title.is_empty() {
            errors.title = Some("Title is required".to_string());
        } else if title_len < TITLE_MIN_LEN {
            errors.title = Some(format!(
                "Title must be at least {TITLE_MIN_LEN} characters"
            ));
        } else if title_len > TITLE_MAX_LEN {
            errors.title = Some(format!("Title must be at most {TITLE_MAX_LEN} characters"));
        }
        if content.chars().count() > CONTENT_MAX_LEN {
            errors.content = Some(format!(
                "Content must be at most {CONTENT_MAX_LEN} characters"
            ));
        }

        if errors.is_empty() {
            Ok(NewNote {
                title: title.to_string(),
                content: content.to_string(),
                tag: self.tag,
            })
        } else {
            Err(errors)
        }
    }
}
