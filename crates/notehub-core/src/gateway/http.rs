//! HTTP implementation of the notes gateway.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{GatewayError, ListParams, NotesGateway, NotesPage};
use crate::config::ClientConfig;
use crate::models::{NewNote, Note};

const REQUEST_TIMEOUT_SECS: u64 = 15;
/// Longest server text carried into an error message
const ERROR_EXCERPT_CHARS: usize = 180;

/// Notes gateway backed by the NoteHub REST API
#[derive(Debug, Clone)]
pub struct HttpNotesGateway {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpNotesGateway {
    /// Builds a gateway from client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|error| {
                GatewayError::Transport(format!("Failed to construct HTTP client: {error}"))
            })?;
        if config.api_token.is_none() {
            tracing::warn!("NOTEHUB_TOKEN is not set; requests will be unauthenticated");
        }
        Ok(Self {
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
            client,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_body(response: reqwest::Response) -> Result<String, GatewayError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| GatewayError::Transport(format!("Failed to read response: {error}")))?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(status_error(status.as_u16(), &body))
        }
    }
}

#[async_trait(?Send)]
impl NotesGateway for HttpNotesGateway {
    async fn list_notes(&self, params: &ListParams) -> Result<NotesPage, GatewayError> {
        let url = list_url(&self.base_url, params);
        tracing::debug!(%url, "Fetching notes page");

        let request = self.client.get(url).header("Accept", "application/json");
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|error| GatewayError::Transport(error.to_string()))?;
        let body = Self::read_body(response).await?;
        decode_page(&body)
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note, GatewayError> {
        let url = format!("{}/notes", self.base_url);
        tracing::debug!(%url, title = %note.title, "Creating note");

        let request = self.client.post(url).json(note);
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|error| GatewayError::Transport(error.to_string()))?;
        let body = Self::read_body(response).await?;
        decode_note(&body)
    }
}

/// Build the list URL for the given parameters.
///
/// An empty search term is omitted from the query string. The term is sent
/// as committed; trimming happens when the search is committed.
pub fn list_url(base_url: &str, params: &ListParams) -> String {
    let mut url = format!(
        "{}/notes?page={}&perPage={}",
        base_url, params.page, params.per_page
    );
    if !params.search.is_empty() {
        url.push_str("&search=");
        url.push_str(&urlencoding::encode(&params.search));
    }
    url
}

/// Parse a list response body.
pub fn decode_page(body: &str) -> Result<NotesPage, GatewayError> {
    serde_json::from_str(body).map_err(|error| GatewayError::Decode(error.to_string()))
}

/// Parse a create response body.
pub fn decode_note(body: &str) -> Result<Note, GatewayError> {
    serde_json::from_str(body).map_err(|error| GatewayError::Decode(error.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn excerpt(text: &str) -> String {
    text.trim().chars().take(ERROR_EXCERPT_CHARS).collect()
}

/// Error for a non-success response, preferring the server's `message` field
fn status_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .map(|message| excerpt(&message))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            let compact = excerpt(body);
            if compact.is_empty() {
                format!("Request failed with HTTP {status}")
            } else {
                format!("Request failed with HTTP {status}: {compact}")
            }
        });
    GatewayError::Status { status, message }
}
