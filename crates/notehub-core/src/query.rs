//! Notes query state: query keys, the one-entry result cache, and the
//! stale-response discipline for in-flight fetches.
//!
//! A fetch is only issued when the key changes or the current key is
//! invalidated. Each fetch carries a [`FetchTicket`]; completions for any
//! ticket other than the newest are reported as [`Resolution::Stale`] and
//! leave the state untouched. While a new key is loading, the last good page
//! stays available as placeholder data.

use crate::gateway::{GatewayError, ListParams, NotesGateway, NotesPage};
use crate::models::Note;
use crate::pagination::PageIndex;

/// Identity of a notes request: page and the debounced search term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryKey {
    pub page: PageIndex,
    pub search: String,
}

impl QueryKey {
    #[must_use]
    pub fn new(page: PageIndex, search: impl Into<String>) -> Self {
        Self {
            page,
            search: search.into(),
        }
    }

    /// Wire parameters for this key
    #[must_use]
    pub fn to_params(&self, per_page: u32) -> ListParams {
        ListParams {
            page: self.page.api_page(),
            per_page,
            search: self.search.clone(),
        }
    }
}

/// Last known good result, kept for the most recent key only
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entry: Option<(QueryKey, NotesPage)>,
}

impl QueryCache {
    /// Most recent result regardless of key
    #[must_use]
    pub fn latest(&self) -> Option<(&QueryKey, &NotesPage)> {
        self.entry.as_ref().map(|(key, page)| (key, page))
    }

    /// Replace the cached entry
    pub fn store(&mut self, key: QueryKey, page: NotesPage) {
        self.entry = Some((key, page));
    }
}

/// Handle identifying one issued fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    key: QueryKey,
}

impl FetchTicket {
    #[must_use]
    pub const fn key(&self) -> &QueryKey {
        &self.key
    }
}

/// Outcome of handing a fetch result back to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The result belongs to an abandoned fetch and was ignored
    Stale,
    /// A page was stored for the current key
    Loaded,
    /// The current fetch failed; reported once per failed fetch
    Failed(GatewayError),
}

/// Which parts of the main area should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListView<'a> {
    /// A fetch is in flight
    pub loading: bool,
    /// Message of the current failure
    pub error: Option<&'a GatewayError>,
    /// Notes to render, possibly placeholder data from the previous key
    pub notes: Option<&'a [Note]>,
    /// Nothing is loading, nothing failed, and the result is empty
    pub empty: bool,
}

/// Fetch bookkeeping for the notes list
#[derive(Debug, Default)]
pub struct NotesQueryState {
    current: Option<QueryKey>,
    generation: u64,
    in_flight: bool,
    invalidated: bool,
    error: Option<GatewayError>,
    cache: QueryCache,
}

impl NotesQueryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `key` unless it is already current and valid.
    pub fn request(&mut self, key: QueryKey) -> Option<FetchTicket> {
        if self.current.as_ref() == Some(&key) && !self.invalidated {
            return None;
        }
        self.generation += 1;
        self.current = Some(key.clone());
        self.in_flight = true;
        self.invalidated = false;
        self.error = None;
        tracing::debug!(
            page = key.page.api_page(),
            search = %key.search,
            generation = self.generation,
            "Notes fetch issued"
        );
        Some(FetchTicket {
            generation: self.generation,
            key,
        })
    }

    /// Mark the current key as needing a refetch, e.g. after a note was
    /// created. The next [`Self::request`] for that key fetches again.
    /// Returns false when nothing has been requested yet.
    pub fn invalidate(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.invalidated = true;
        true
    }

    /// Hand a fetch result back.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: Result<NotesPage, GatewayError>,
    ) -> Resolution {
        if !self.in_flight || ticket.generation != self.generation {
            tracing::debug!(
                page = ticket.key.page.api_page(),
                search = %ticket.key.search,
                "Ignoring stale notes response"
            );
            return Resolution::Stale;
        }
        self.in_flight = false;
        match result {
            Ok(page) => {
                tracing::debug!(
                    notes = page.notes.len(),
                    total_pages = page.total_pages,
                    "Notes page loaded"
                );
                self.cache.store(ticket.key.clone(), page);
                self.error = None;
                Resolution::Loaded
            }
            Err(error) => {
                tracing::warn!("Failed to load notes: {}", error);
                self.error = Some(error.clone());
                Resolution::Failed(error)
            }
        }
    }

    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub const fn error(&self) -> Option<&GatewayError> {
        self.error.as_ref()
    }

    /// Page for the current key, or the previous key's page as placeholder
    #[must_use]
    pub fn data(&self) -> Option<&NotesPage> {
        self.cache.latest().map(|(_, page)| page)
    }

    /// True when [`Self::data`] belongs to a different key than the current one
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        match (self.cache.latest(), &self.current) {
            (Some((cached, _)), Some(current)) => cached != current,
            _ => false,
        }
    }

    /// Total pages of the displayed data, 0 when nothing has loaded
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.data().map_or(0, |page| page.total_pages)
    }

    /// Decide what the main area shows
    #[must_use]
    pub fn view(&self) -> ListView<'_> {
        let notes = self.data().map_or(&[][..], |page| page.notes.as_slice());
        let failed = self.error.is_some();
        ListView {
            loading: self.in_flight,
            error: self.error.as_ref(),
            notes: (!notes.is_empty() && !failed).then_some(notes),
            empty: !self.in_flight && !failed && notes.is_empty(),
        }
    }
}

/// Run the fetch for `ticket` against `gateway`.
pub async fn run_fetch<G: NotesGateway + ?Sized>(
    gateway: &G,
    ticket: &FetchTicket,
    per_page: u32,
) -> Result<NotesPage, GatewayError> {
    gateway.list_notes(&ticket.key.to_params(per_page)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::fake::{notes, FakeGateway};
    use pretty_assertions::assert_eq;

    fn key(page: u32, search: &str) -> QueryKey {
        QueryKey::new(PageIndex::new(page), search)
    }

    fn page(count: usize, total_pages: u32) -> NotesPage {
        NotesPage {
            notes: notes(count),
            total_pages,
        }
    }

    #[test]
    fn same_key_is_not_refetched() {
        let mut state = NotesQueryState::new();
        assert!(state.request(key(0, "")).is_some());
        assert!(state.request(key(0, "")).is_none());
        assert!(state.request(key(1, "")).is_some());
        assert!(state.request(key(1, "milk")).is_some());
    }

    #[test]
    fn stale_response_does_not_overwrite_current_key() {
        let mut state = NotesQueryState::new();
        let old = state.request(key(0, "rec")).unwrap();
        let new = state.request(key(0, "recipes")).unwrap();

        assert_eq!(state.resolve(&new, Ok(page(2, 1))), Resolution::Loaded);
        assert_eq!(state.resolve(&old, Ok(page(9, 3))), Resolution::Stale);

        assert_eq!(state.data().unwrap().notes.len(), 2);
        assert_eq!(state.total_pages(), 1);
        assert!(!state.is_placeholder());
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut state = NotesQueryState::new();
        let old = state.request(key(0, "")).unwrap();
        let _new = state.request(key(1, "")).unwrap();
        let stale = state.resolve(&old, Err(GatewayError::Transport("boom".to_string())));
        assert_eq!(stale, Resolution::Stale);
        assert!(state.error().is_none());
        assert!(state.is_fetching());
    }

    #[test]
    fn previous_page_is_kept_as_placeholder() {
        let mut state = NotesQueryState::new();
        let first = state.request(key(0, "")).unwrap();
        state.resolve(&first, Ok(page(12, 5)));

        state.request(key(1, "")).unwrap();
        assert!(state.is_placeholder());
        let view = state.view();
        assert!(view.loading);
        assert_eq!(view.notes.map(<[Note]>::len), Some(12));
        assert!(!view.empty);
        assert_eq!(state.total_pages(), 5);
    }

    #[test]
    fn empty_result_shows_empty_state_not_loader() {
        let mut state = NotesQueryState::new();
        let ticket = state.request(key(0, "nothing")).unwrap();
        state.resolve(&ticket, Ok(page(0, 0)));

        let view = state.view();
        assert!(!view.loading);
        assert!(view.empty);
        assert!(view.notes.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn failure_hides_list_and_is_reported_once() {
        let mut state = NotesQueryState::new();
        let first = state.request(key(0, "")).unwrap();
        state.resolve(&first, Ok(page(3, 1)));

        let second = state.request(key(0, "x")).unwrap();
        let error = GatewayError::Transport("Network error".to_string());
        assert_eq!(
            state.resolve(&second, Err(error.clone())),
            Resolution::Failed(error.clone())
        );
        assert_eq!(state.resolve(&second, Err(error)), Resolution::Stale);

        let view = state.view();
        assert_eq!(view.error.map(ToString::to_string).as_deref(), Some("Network error"));
        assert!(view.notes.is_none());
        assert!(!view.empty);
        assert!(!view.loading);
    }

    #[test]
    fn invalidate_refetches_current_key() {
        let mut state = NotesQueryState::new();
        assert!(!state.invalidate());

        let ticket = state.request(key(2, "work")).unwrap();
        state.resolve(&ticket, Ok(page(1, 3)));
        assert!(state.request(key(2, "work")).is_none());

        assert!(state.invalidate());
        let refetch = state.request(key(2, "work")).unwrap();
        assert_eq!(refetch.key(), &key(2, "work"));
        assert!(state.request(key(2, "work")).is_none());
    }

    #[test]
    fn cache_holds_most_recent_key_only() {
        let mut cache = QueryCache::default();
        assert!(cache.latest().is_none());
        cache.store(key(0, ""), page(1, 1));
        cache.store(key(1, ""), page(2, 2));
        let (cached_key, cached) = cache.latest().unwrap();
        assert_eq!(cached_key, &key(1, ""));
        assert_eq!(cached.notes.len(), 2);
    }

    #[tokio::test]
    async fn first_page_fetch_uses_one_based_params() {
        let gateway = FakeGateway::default();
        gateway.respond(Ok(page(12, 5)));

        let mut state = NotesQueryState::new();
        let ticket = state.request(key(0, "")).unwrap();
        let result = run_fetch(&gateway, &ticket, 12).await;
        assert_eq!(state.resolve(&ticket, result), Resolution::Loaded);

        assert_eq!(
            *gateway.list_calls.borrow(),
            vec![ListParams {
                page: 1,
                per_page: 12,
                search: String::new(),
            }]
        );
        assert_eq!(state.view().notes.map(<[Note]>::len), Some(12));
        assert_eq!(state.total_pages(), 5);
    }
}
