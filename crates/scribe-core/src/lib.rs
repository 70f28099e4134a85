//! scribe-core - Core library for Scribe
//!
//! This crate contains the note model, the HTTP API client, and the
//! form/list/orchestration state used by the Scribe terminal client.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod util;

pub use api::{HttpNotesApi, NotesApi};
pub use app::{App, Frontend, SearchBox};
pub use error::{Error, Result, TransportError};
pub use form::{FormMode, FormState};
pub use models::{Note, NoteId, NotePayload};
pub use render::{render, ListView, NoteCard};
