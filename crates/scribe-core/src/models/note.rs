//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned to a note by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap a backend-issued identifier
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

/// A note as returned by the notes API
///
/// The backend owns notes; the client only ever holds transient copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Backend-assigned identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: NoteId,
    /// Display title
    pub title: String,
    /// Free-text body
    #[serde(default)]
    pub content: String,
    /// Tags in the order the backend stores them
    #[serde(default)]
    pub tags: Vec<String>,
    /// Visual emphasis flag
    #[serde(default)]
    pub pinned: bool,
    /// Last update timestamp, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Creation timestamp, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Note {
    /// Tags rendered the way the form's tags input displays them
    #[must_use]
    pub fn tags_input(&self) -> String {
        self.tags.join(", ")
    }
}

/// JSON body sent on create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub pinned: bool,
}
