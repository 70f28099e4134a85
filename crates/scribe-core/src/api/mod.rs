//! HTTP client for the notes API.
//!
//! Every operation is a single request/response round trip against
//! `{base}` or `{base}/{id}`. There are no retries and no timeouts; any
//! failure surfaces as a [`TransportError`].

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{Error, Result, TransportError};
use crate::models::{Note, NoteId, NotePayload};
use crate::util::compact_text;

/// Operations the client performs against the notes backend.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// `GET {base}`, or `GET {base}?q={query}` when the query is non-empty.
    async fn list_or_search(&self, query: &str) -> Result<Vec<Note>>;

    /// `GET {base}/{id}`
    async fn get_one(&self, id: &NoteId) -> Result<Note>;

    /// `POST {base}`; the response body is ignored.
    async fn create(&self, payload: &NotePayload) -> Result<()>;

    /// `PUT {base}/{id}`; the response body is ignored.
    async fn update(&self, id: &NoteId, payload: &NotePayload) -> Result<()>;

    /// `DELETE {base}/{id}`
    async fn delete(&self, id: &NoteId) -> Result<()>;
}

/// [`NotesApi`] implementation backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNotesApi {
    /// Builds a client for an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        let client = reqwest::Client::builder().build().map_err(|error| {
            Error::InvalidConfiguration(format!("Failed to construct HTTP client: {error}"))
        })?;
        Ok(Self { base_url, client })
    }

    /// Builds a client from resolved configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api_base.clone())
    }

    /// URL for listing, or searching when `query` is non-empty after trimming.
    pub fn collection_url(&self, query: &str) -> String {
        let query = query.trim();
        if query.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}?q={}", self.base_url, urlencoding::encode(query))
        }
    }

    /// URL addressing a single note.
    pub fn note_url(&self, id: &NoteId) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id.as_str()))
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn list_or_search(&self, query: &str) -> Result<Vec<Note>> {
        let url = self.collection_url(query);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        read_json(response).await
    }

    async fn get_one(&self, id: &NoteId) -> Result<Note> {
        let url = self.note_url(id);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        read_json(response).await
    }

    async fn create(&self, payload: &NotePayload) -> Result<()> {
        tracing::debug!("POST {}", self.base_url);

        let response = self.client.post(&self.base_url).json(payload).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update(&self, id: &NoteId, payload: &NotePayload) -> Result<()> {
        let url = self.note_url(id);
        tracing::debug!("PUT {}", url);

        let response = self.client.put(&url).json(payload).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        let url = self.note_url(id);
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(TransportError::Status {
        status,
        body: compact_text(&body),
    }
    .into())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = ensure_success(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
