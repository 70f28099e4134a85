//! Orchestration of user actions.
//!
//! [`App`] owns the form state, the search box and the current list view,
//! and drives a [`NotesApi`] and a [`Frontend`]. Every mutation is followed
//! by a full reload from the backend; nothing is cached client-side.
//!
//! Reset and reload only run after a mutation succeeds. When a call fails
//! the error is returned, the form keeps its inputs and the list is left as
//! it was.

use crate::api::NotesApi;
use crate::error::Result;
use crate::form::FormState;
use crate::models::NoteId;
use crate::render::{render, ListView};

/// Prompt shown before deleting a note
pub const DELETE_PROMPT: &str = "Delete this note?";

/// UI binding layer driven by the orchestrator.
pub trait Frontend {
    /// Ask the user a yes/no question.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Present the current form inputs and labels.
    fn show_form(&mut self, form: &FormState);

    /// Present a freshly rendered list.
    fn show_list(&mut self, list: &ListView);

    /// Bring the form into view.
    fn scroll_to_top(&mut self);
}

/// Raw text of the search input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    text: String,
}

impl SearchBox {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.text
    }

    /// Search term as sent to the backend
    #[must_use]
    pub fn query(&self) -> &str {
        self.text.trim()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Wires user actions to the API client and the list renderer.
pub struct App<A, F> {
    api: A,
    frontend: F,
    form: FormState,
    search: SearchBox,
    list: ListView,
}

impl<A, F> App<A, F>
where
    A: NotesApi,
    F: Frontend,
{
    pub fn new(api: A, frontend: F) -> Self {
        Self {
            api,
            frontend,
            form: FormState::new(),
            search: SearchBox::default(),
            list: ListView::default(),
        }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    pub const fn form(&self) -> &FormState {
        &self.form
    }

    /// Direct access to the form inputs, for the binding layer.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub const fn search(&self) -> &SearchBox {
        &self.search
    }

    pub const fn list(&self) -> &ListView {
        &self.list
    }

    /// Fetch notes for the current search text and replace the list view.
    pub async fn on_load(&mut self) -> Result<()> {
        let query = self.search.query().to_string();
        let notes = self.api.list_or_search(&query).await.inspect_err(|error| {
            tracing::warn!("Failed to load notes: {}", error);
        })?;
        tracing::debug!("Loaded {} notes (query: {:?})", notes.len(), query);

        self.list = render(&notes);
        self.frontend.show_list(&self.list);
        Ok(())
    }

    /// Create or update depending on the form mode, then reset and reload.
    pub async fn on_submit(&mut self) -> Result<()> {
        let payload = self.form.serialize();

        let outcome = match self.form.editing_id.clone() {
            Some(id) => self.api.update(&id, &payload).await.map(|()| {
                tracing::info!("Updated note {}", id);
            }),
            None => self.api.create(&payload).await.map(|()| {
                tracing::info!("Created note '{}'", payload.title);
            }),
        };
        outcome.inspect_err(|error| {
            tracing::warn!("Failed to submit note: {}", error);
        })?;

        self.on_reset();
        self.on_load().await
    }

    /// Clear the form back to Create mode.
    pub fn on_reset(&mut self) {
        self.form.reset();
        self.frontend.show_form(&self.form);
    }

    /// Replace the search text and reload.
    pub async fn on_search(&mut self, text: impl Into<String>) -> Result<()> {
        self.search.set(text);
        self.on_load().await
    }

    /// Empty the search box and reload the full list.
    pub async fn on_clear(&mut self) -> Result<()> {
        self.search.clear();
        self.on_load().await
    }

    /// Fetch a note and load it into the form for editing.
    pub async fn on_edit_click(&mut self, id: &NoteId) -> Result<()> {
        let note = self.api.get_one(id).await.inspect_err(|error| {
            tracing::warn!("Failed to fetch note {}: {}", id, error);
        })?;

        self.form.enter_edit_mode(&note);
        self.frontend.scroll_to_top();
        self.frontend.show_form(&self.form);
        Ok(())
    }

    /// Delete a note after confirmation, then reload.
    ///
    /// Returns `false` when the user declined.
    pub async fn on_delete_click(&mut self, id: &NoteId) -> Result<bool> {
        if !self.frontend.confirm(DELETE_PROMPT) {
            tracing::debug!("Delete of note {} declined", id);
            return Ok(false);
        }

        self.api.delete(id).await.inspect_err(|error| {
            tracing::warn!("Failed to delete note {}: {}", id, error);
        })?;
        tracing::info!("Deleted note {}", id);

        self.on_load().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::TransportError;
    use crate::form::FormMode;
    use crate::models::{Note, NotePayload};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ApiCall {
        ListOrSearch(String),
        GetOne(String),
        Create(NotePayload),
        Update(String, NotePayload),
        Delete(String),
    }

    #[derive(Default)]
    struct RecordingApi {
        notes: Vec<Note>,
        fail_mutations: bool,
        fail_loads: AtomicBool,
        calls: Mutex<Vec<ApiCall>>,
    }

    impl RecordingApi {
        fn with_notes(notes: Vec<Note>) -> Self {
            Self {
                notes,
                ..Self::default()
            }
        }

        fn record(&self, call: ApiCall) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<ApiCall> {
            self.calls.lock().unwrap().clone()
        }

        fn mutation_result(&self) -> Result<()> {
            if self.fail_mutations {
                return Err(TransportError::Status {
                    status: 500,
                    body: "boom".to_string(),
                }
                .into());
            }
            Ok(())
        }
    }

    #[async_trait]
    impl NotesApi for RecordingApi {
        async fn list_or_search(&self, query: &str) -> Result<Vec<Note>> {
            self.record(ApiCall::ListOrSearch(query.to_string()));
            if self.fail_loads.load(Ordering::SeqCst) {
                return Err(TransportError::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                }
                .into());
            }
            Ok(self.notes.clone())
        }

        async fn get_one(&self, id: &NoteId) -> Result<Note> {
            self.record(ApiCall::GetOne(id.to_string()));
            self.notes
                .iter()
                .find(|note| &note.id == id)
                .cloned()
                .ok_or_else(|| {
                    TransportError::Status {
                        status: 404,
                        body: "not found".to_string(),
                    }
                    .into()
                })
        }

        async fn create(&self, payload: &NotePayload) -> Result<()> {
            self.record(ApiCall::Create(payload.clone()));
            self.mutation_result()
        }

        async fn update(&self, id: &NoteId, payload: &NotePayload) -> Result<()> {
            self.record(ApiCall::Update(id.to_string(), payload.clone()));
            self.mutation_result()
        }

        async fn delete(&self, id: &NoteId) -> Result<()> {
            self.record(ApiCall::Delete(id.to_string()));
            self.mutation_result()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum FrontendEvent {
        Confirm(String),
        ShowForm(FormMode),
        ShowList(ListView),
        ScrollToTop,
    }

    #[derive(Default)]
    struct ScriptedFrontend {
        accept: bool,
        events: Vec<FrontendEvent>,
    }

    impl Frontend for ScriptedFrontend {
        fn confirm(&mut self, prompt: &str) -> bool {
            self.events.push(FrontendEvent::Confirm(prompt.to_string()));
            self.accept
        }

        fn show_form(&mut self, form: &FormState) {
            self.events.push(FrontendEvent::ShowForm(form.mode()));
        }

        fn show_list(&mut self, list: &ListView) {
            self.events.push(FrontendEvent::ShowList(list.clone()));
        }

        fn scroll_to_top(&mut self) {
            self.events.push(FrontendEvent::ScrollToTop);
        }
    }

    fn note(id: &str) -> Note {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "title": "T",
            "content": "C",
            "tags": ["a", "b"],
            "pinned": true,
            "updatedAt": "2024-06-04T11:30:00.000Z"
        }))
        .unwrap()
    }

    fn app(api: RecordingApi, accept: bool) -> App<RecordingApi, ScriptedFrontend> {
        App::new(
            api,
            ScriptedFrontend {
                accept,
                events: Vec::new(),
            },
        )
    }

    #[tokio::test]
    async fn load_with_empty_search_lists_everything() {
        let mut app = app(RecordingApi::with_notes(vec![note("1")]), true);
        app.on_load().await.unwrap();

        assert_eq!(app.api().calls(), vec![ApiCall::ListOrSearch(String::new())]);
        assert_eq!(app.list().cards().len(), 1);
    }

    #[tokio::test]
    async fn load_with_no_results_shows_placeholder() {
        let mut app = app(RecordingApi::default(), true);
        app.on_load().await.unwrap();

        assert_eq!(app.list(), &ListView::Empty);
        assert_eq!(
            app.frontend().events,
            vec![FrontendEvent::ShowList(ListView::Empty)]
        );
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_list() {
        let mut app = app(RecordingApi::with_notes(vec![note("1")]), true);
        app.on_load().await.unwrap();
        app.api().fail_loads.store(true, Ordering::SeqCst);

        let error = app.on_search("rust").await.unwrap_err();
        assert!(error.to_string().contains("HTTP 503"));
        assert_eq!(app.search().raw(), "rust");
        assert_eq!(app.list().cards().len(), 1);
        assert_eq!(app.frontend().events.len(), 1);
    }

    #[tokio::test]
    async fn search_passes_trimmed_query_verbatim() {
        let mut app = app(RecordingApi::default(), true);
        app.on_search("  Weekly Plan #2 ").await.unwrap();

        assert_eq!(app.search().raw(), "  Weekly Plan #2 ");
        assert_eq!(
            app.api().calls(),
            vec![ApiCall::ListOrSearch("Weekly Plan #2".to_string())]
        );
    }

    #[tokio::test]
    async fn clear_empties_search_and_reloads() {
        let mut app = app(RecordingApi::default(), true);
        app.on_search("rust").await.unwrap();
        app.on_clear().await.unwrap();

        assert_eq!(app.search().raw(), "");
        assert_eq!(
            app.api().calls(),
            vec![
                ApiCall::ListOrSearch("rust".to_string()),
                ApiCall::ListOrSearch(String::new())
            ]
        );
    }

    #[tokio::test]
    async fn submit_without_editing_id_creates_then_reloads() {
        let mut app = app(RecordingApi::default(), true);
        app.form_mut().set_title(" Hello ");
        app.form_mut().set_tags("x, y");
        app.on_submit().await.unwrap();

        assert_eq!(
            app.api().calls(),
            vec![
                ApiCall::Create(NotePayload {
                    title: "Hello".to_string(),
                    content: String::new(),
                    tags: vec!["x".to_string(), "y".to_string()],
                    pinned: false,
                }),
                ApiCall::ListOrSearch(String::new()),
            ]
        );
        assert_eq!(app.form(), &FormState::default());
    }

    #[tokio::test]
    async fn submit_while_editing_updates_then_resets() {
        let mut app = app(RecordingApi::with_notes(vec![note("42")]), true);
        app.on_edit_click(&NoteId::new("42")).await.unwrap();
        app.form_mut().set_content("changed");
        app.on_submit().await.unwrap();

        let calls = app.api().calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(
            calls[1],
            ApiCall::Update(
                "42".to_string(),
                NotePayload {
                    title: "T".to_string(),
                    content: "changed".to_string(),
                    tags: vec!["a".to_string(), "b".to_string()],
                    pinned: true,
                }
            )
        );
        assert_eq!(calls[2], ApiCall::ListOrSearch(String::new()));
        assert_eq!(app.form().mode(), FormMode::Create);
    }

    #[tokio::test]
    async fn submit_reloads_with_current_search() {
        let mut app = app(RecordingApi::default(), true);
        app.on_search("todo").await.unwrap();
        app.form_mut().set_title("todo: ship");
        app.on_submit().await.unwrap();

        assert_eq!(
            app.api().calls().last(),
            Some(&ApiCall::ListOrSearch("todo".to_string()))
        );
    }

    #[tokio::test]
    async fn failed_submit_keeps_form_and_skips_reload() {
        let api = RecordingApi {
            fail_mutations: true,
            ..RecordingApi::default()
        };
        let mut app = app(api, true);
        app.form_mut().set_title("Draft");

        let error = app.on_submit().await.unwrap_err();
        assert!(error.to_string().contains("HTTP 500"));
        assert_eq!(app.form().title, "Draft");
        assert_eq!(app.api().calls().len(), 1);
        assert!(app.frontend().events.is_empty());
    }

    #[tokio::test]
    async fn edit_click_loads_note_into_form() {
        let mut app = app(RecordingApi::with_notes(vec![note("42")]), true);
        app.on_edit_click(&NoteId::new("42")).await.unwrap();

        let form = app.form();
        assert_eq!(form.title, "T");
        assert_eq!(form.content, "C");
        assert_eq!(form.tags, "a, b");
        assert!(form.pinned);
        assert_eq!(form.editing_id, Some(NoteId::new("42")));
        assert_eq!(form.mode().submit_label(), "Update");
        assert_eq!(
            app.frontend().events,
            vec![
                FrontendEvent::ScrollToTop,
                FrontendEvent::ShowForm(FormMode::Edit)
            ]
        );
    }

    #[tokio::test]
    async fn edit_click_on_missing_note_leaves_form_alone() {
        let mut app = app(RecordingApi::default(), true);
        assert!(app.on_edit_click(&NoteId::new("nope")).await.is_err());
        assert_eq!(app.form(), &FormState::default());
    }

    #[tokio::test]
    async fn delete_declined_does_nothing() {
        let mut app = app(RecordingApi::with_notes(vec![note("7")]), false);
        let deleted = app.on_delete_click(&NoteId::new("7")).await.unwrap();

        assert!(!deleted);
        assert!(app.api().calls().is_empty());
        assert_eq!(
            app.frontend().events,
            vec![FrontendEvent::Confirm(DELETE_PROMPT.to_string())]
        );
    }

    #[tokio::test]
    async fn delete_accepted_deletes_then_reloads() {
        let mut app = app(RecordingApi::with_notes(vec![note("7")]), true);
        let deleted = app.on_delete_click(&NoteId::new("7")).await.unwrap();

        assert!(deleted);
        assert_eq!(
            app.api().calls(),
            vec![
                ApiCall::Delete("7".to_string()),
                ApiCall::ListOrSearch(String::new())
            ]
        );
    }

    #[tokio::test]
    async fn failed_delete_skips_reload() {
        let api = RecordingApi {
            fail_mutations: true,
            ..RecordingApi::with_notes(vec![note("7")])
        };
        let mut app = app(api, true);

        assert!(app.on_delete_click(&NoteId::new("7")).await.is_err());
        assert_eq!(app.api().calls(), vec![ApiCall::Delete("7".to_string())]);
    }

    #[tokio::test]
    async fn reset_returns_form_to_create_mode() {
        let mut app = app(RecordingApi::with_notes(vec![note("42")]), true);
        app.on_edit_click(&NoteId::new("42")).await.unwrap();
        app.on_reset();

        assert_eq!(app.form(), &FormState::default());
        assert_eq!(
            app.frontend().events.last(),
            Some(&FrontendEvent::ShowForm(FormMode::Create))
        );
    }
}
