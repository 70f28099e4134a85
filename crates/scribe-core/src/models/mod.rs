//! Data models for Scribe

mod note;

pub use note::{Note, NoteId, NotePayload};
