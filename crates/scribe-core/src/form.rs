//! Create/edit form state.
//!
//! The form has two modes. It starts in [`FormMode::Create`], switches to
//! [`FormMode::Edit`] when a fetched note is loaded into it, and returns to
//! Create on [`FormState::reset`].

use crate::models::{Note, NoteId, NotePayload};

/// Which kind of submission the form will perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    /// Label of the submit control
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Edit => "Update",
        }
    }

    /// Heading of the form section
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Create => "Create Note",
            Self::Edit => "Edit Note",
        }
    }
}

/// Raw input values of the note form.
///
/// These five fields fully determine the payload produced by
/// [`FormState::serialize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub content: String,
    /// Comma-separated tags exactly as typed
    pub tags: String,
    pub pinned: bool,
    pub editing_id: Option<NoteId>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit mode iff a note id is being tracked.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        if self.editing_id.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
    }

    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }

    /// Build the request body from the current inputs.
    #[must_use]
    pub fn serialize(&self) -> NotePayload {
        NotePayload {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            tags: split_tags(&self.tags),
            pinned: self.pinned,
        }
    }

    /// Load a fetched note into the form and start tracking its id.
    pub fn enter_edit_mode(&mut self, note: &Note) {
        self.title.clone_from(&note.title);
        self.content.clone_from(&note.content);
        self.tags = note.tags_input();
        self.pinned = note.pinned;
        self.editing_id = Some(note.id.clone());
    }

    /// Clear every input and return to Create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Split a comma-separated tags input, trimming each segment.
///
/// An empty input yields no tags. Blank segments are kept, so `"a,,b"`
/// yields `["a", "", "b"]`.
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}
