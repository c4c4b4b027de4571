//! Note model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a note by the remote gateway.
///
/// Opaque to the client; only compared and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap a gateway-issued identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category a note can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NoteTag {
    #[default]
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    /// Every tag, in the order the form offers them
    pub const ALL: [Self; 5] = [
        Self::Todo,
        Self::Work,
        Self::Personal,
        Self::Meeting,
        Self::Shopping,
    ];

    /// Wire and display name of the tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Meeting => "Meeting",
            Self::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for NoteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown note tag: {s}"))
    }
}

/// A note as returned by the remote gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Gateway-issued identifier
    pub id: NoteId,
    /// Note title
    pub title: String,
    /// Plain text body
    #[serde(default)]
    pub content: String,
    /// Optional category
    #[serde(default)]
    pub tag: Option<NoteTag>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, when the gateway reports one
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Content truncated to `max_len` characters, with an ellipsis when cut
    #[must_use]
    pub fn content_preview(&self, max_len: usize) -> String {
        let trimmed = self.content.trim();
        if trimmed.chars().count() <= max_len {
            return trimmed.to_string();
        }
        let mut preview: String = trimmed.chars().take(max_len).collect();
        preview.push('…');
        preview
    }

    /// Creation date formatted for cards
    #[must_use]
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}
