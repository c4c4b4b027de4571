//! Remote notes gateway
//!
//! The gateway is the only way the client reaches note storage. It exposes
//! two operations: list one page of notes matching a search term, and
//! create a note. The trait is object safe so the UI can hold any
//! implementation behind an `Rc<dyn NotesGateway>`.

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{NewNote, Note, NoteDraft};

pub use http::{decode_note, decode_page, list_url, HttpNotesGateway};

/// Parameters of a single "list notes" request, in wire terms.
///
/// `page` is 1-based here; the browsing state keeps a 0-based index and
/// converts when building these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
}

/// One page of notes plus the total page count for the current filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesPage {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub total_pages: u32,
}

/// Failures surfaced by a gateway. `Display` is the human-readable message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request could not be sent or its response could not be read
    #[error("{0}")]
    Transport(String),

    /// The gateway answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Operations the remote notes service offers
#[async_trait(?Send)]
pub trait NotesGateway {
    /// Fetch one page of notes
    async fn list_notes(&self, params: &ListParams) -> Result<NotesPage, GatewayError>;

    /// Create a note and return the stored record
    async fn create_note(&self, note: &NewNote) -> Result<Note, GatewayError>;
}

/// Validate `draft` and create it through `gateway`.
///
/// Drafts that fail validation never reach the gateway.
pub async fn create_from_draft<G>(gateway: &G, draft: &NoteDraft) -> crate::Result<Note>
where
    G: NotesGateway + ?Sized,
{
    let note = draft.validate()?;
    let created = gateway.create_note(&note).await?;
    tracing::info!("Created note: {}", created.id);
    Ok(created)
}

#[cfg(any(test, feature = "test-support"))]
pub mod fake {
    //! In-memory gateway for state and UI tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::{GatewayError, ListParams, NotesGateway, NotesPage};
    use crate::models::{NewNote, Note, NoteId};

    /// Records every call and answers from a queue of canned list results
    #[derive(Debug, Default)]
    pub struct FakeGateway {
        pub list_calls: RefCell<Vec<ListParams>>,
        pub created: RefCell<Vec<NewNote>>,
        pub list_responses: RefCell<VecDeque<Result<NotesPage, GatewayError>>>,
        pub fail_create: Option<GatewayError>,
    }

    impl FakeGateway {
        /// Queue the result of the next list call. Unqueued calls return an
        /// empty page.
        pub fn respond(&self, result: Result<NotesPage, GatewayError>) {
            self.list_responses.borrow_mut().push_back(result);
        }

        /// Search terms of every list call so far, in order
        pub fn searched(&self) -> Vec<(u32, String)> {
            self.list_calls
                .borrow()
                .iter()
                .map(|params| (params.page, params.search.clone()))
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl NotesGateway for FakeGateway {
        async fn list_notes(&self, params: &ListParams) -> Result<NotesPage, GatewayError> {
            self.list_calls.borrow_mut().push(params.clone());
            self.list_responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(NotesPage::default()))
        }

        async fn create_note(&self, note: &NewNote) -> Result<Note, GatewayError> {
            if let Some(error) = &self.fail_create {
                return Err(error.clone());
            }
            self.created.borrow_mut().push(note.clone());
            Ok(Note {
                id: NoteId::new(format!("note-{}", self.created.borrow().len())),
                title: note.title.clone(),
                content: note.content.clone(),
                tag: Some(note.tag),
                created_at: Utc::now(),
                updated_at: None,
            })
        }
    }

    pub fn notes(count: usize) -> Vec<Note> {
        (0..count)
            .map(|i| Note {
                id: NoteId::new(format!("n{i}")),
                title: format!("Note {i}"),
                content: String::new(),
                tag: None,
                created_at: Utc::now(),
                updated_at: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeGateway;
    use super::*;
    use crate::models::NoteTag;
    use crate::Error;

    fn draft(title: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            content: "Agenda".to_string(),
            tag: NoteTag::Meeting,
        }
    }

    #[tokio::test]
    async fn valid_draft_is_sent_trimmed() {
        let gateway = FakeGateway::default();
        let note = create_from_draft(&gateway, &draft(" Weekly sync "))
            .await
            .unwrap();
        assert_eq!(note.title, "Weekly sync");
        assert_eq!(note.tag, Some(NoteTag::Meeting));

        let created = gateway.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].title, "Weekly sync");
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_gateway() {
        let gateway = FakeGateway::default();
        let error = create_from_draft(&gateway, &draft("ab")).await.unwrap_err();

        match error {
            Error::InvalidNote(errors) => assert!(errors.title.is_some()),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(gateway.created.borrow().is_empty());
    }

    #[tokio::test]
    async fn gateway_rejection_keeps_server_message() {
        let gateway = FakeGateway {
            fail_create: Some(GatewayError::Status {
                status: 400,
                message: "title is too short".to_string(),
            }),
            ..FakeGateway::default()
        };
        let error = create_from_draft(&gateway, &draft("Errand")).await.unwrap_err();

        assert!(matches!(error, Error::Gateway(GatewayError::Status { status: 400, .. })));
        assert_eq!(error.to_string(), "title is too short");
    }
}
