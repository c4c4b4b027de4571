//! Browsing state owned by the root view

use crate::pagination::PageIndex;
use crate::query::QueryKey;

/// Page, search and modal state for one mount of the notes view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    page: PageIndex,
    search: String,
    debounced_search: String,
    modal_open: bool,
}

impl BrowseState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page(&self) -> PageIndex {
        self.page
    }

    /// Search text as typed
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Search text that has survived the debounce window
    #[must_use]
    pub fn debounced_search(&self) -> &str {
        &self.debounced_search
    }

    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Record a keystroke. The query key is untouched until the term is
    /// committed.
    pub fn set_search(&mut self, value: impl Into<String>) {
        self.search = value.into();
    }

    /// Commit a debounced search term, trimmed. Returns whether the term
    /// changed; a changed term moves back to the first page in the same step.
    pub fn commit_search(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value == self.debounced_search {
            return false;
        }
        self.debounced_search = value.to_string();
        self.page = PageIndex::FIRST;
        true
    }

    pub fn set_page(&mut self, page: PageIndex) {
        self.page = page;
    }

    /// Opening an already open modal is a no-op.
    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Key for the notes request this state asks for
    #[must_use]
    pub fn query_key(&self) -> QueryKey {
        QueryKey::new(self.page, self.debounced_search.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::NotesQueryState;

    #[test]
    fn starts_on_first_page_without_filter() {
        let state = BrowseState::new();
        assert_eq!(state.query_key(), QueryKey::new(PageIndex::FIRST, ""));
        assert!(!state.is_modal_open());
    }

    #[test]
    fn committed_search_resets_page() {
        let mut state = BrowseState::new();
        state.set_page(PageIndex::new(2));
        state.set_search("recipes");
        assert_eq!(state.page(), PageIndex::new(2));

        assert!(state.commit_search("recipes"));
        assert_eq!(state.query_key(), QueryKey::new(PageIndex::FIRST, "recipes"));
    }

    #[test]
    fn burst_from_later_page_issues_one_fetch() {
        let mut state = BrowseState::new();
        let mut query = NotesQueryState::new();
        state.set_page(PageIndex::new(2));
        assert!(query.request(state.query_key()).is_some());

        let mut issued = Vec::new();
        state.set_search("recipe");
        issued.extend(query.request(state.query_key()));
        state.set_search("recipes");
        issued.extend(query.request(state.query_key()));
        state.commit_search("recipes");
        issued.extend(query.request(state.query_key()));

        let keys: Vec<_> = issued.iter().map(|ticket| ticket.key().clone()).collect();
        assert_eq!(keys, vec![QueryKey::new(PageIndex::FIRST, "recipes")]);
    }

    #[test]
    fn surrounding_whitespace_is_not_a_new_term() {
        let mut state = BrowseState::new();
        assert!(state.commit_search("milk "));
        assert_eq!(state.debounced_search(), "milk");

        state.set_page(PageIndex::new(1));
        assert!(!state.commit_search(" milk"));
        assert_eq!(state.query_key(), QueryKey::new(PageIndex::new(1), "milk"));
    }

    #[test]
    fn keystrokes_do_not_change_key_until_committed() {
        let mut state = BrowseState::new();
        let before = state.query_key();
        state.set_search("r");
        state.set_search("re");
        state.set_search("recipe");
        assert_eq!(state.query_key(), before);
        assert_eq!(state.search(), "recipe");
        assert_eq!(state.debounced_search(), "");
    }

    #[test]
    fn committing_same_term_keeps_page() {
        let mut state = BrowseState::new();
        state.commit_search("milk");
        state.set_page(PageIndex::new(1));
        assert!(!state.commit_search("milk"));
        assert_eq!(state.page(), PageIndex::new(1));
    }

    #[test]
    fn page_change_changes_key() {
        let mut state = BrowseState::new();
        let before = state.query_key();
        state.set_page(PageIndex::new(1));
        assert_ne!(state.query_key(), before);
    }

    #[test]
    fn modal_flag_is_boolean() {
        let mut state = BrowseState::new();
        state.open_modal();
        state.open_modal();
        assert!(state.is_modal_open());
        state.close_modal();
        assert!(!state.is_modal_open());
    }
}
