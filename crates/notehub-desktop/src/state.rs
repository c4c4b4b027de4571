//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::rc::Rc;

use dioxus::prelude::*;

use notehub_core::browse::BrowseState;
use notehub_core::config::ClientConfig;
use notehub_core::debounce::Debouncer;
use notehub_core::gateway::{GatewayError, NotesGateway};
use notehub_core::pagination::PageIndex;
use notehub_core::query::{run_fetch, NotesQueryState, Resolution};
use notehub_core::toast::{fetch_error_message, ToastQueue};

use crate::theme::ResolvedTheme;

/// Gateway shared by every component
pub type SharedGateway = Rc<dyn NotesGateway>;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Page, search and modal flags
    pub browse: Signal<BrowseState>,
    /// Fetch bookkeeping and the cached notes page
    pub query: Signal<NotesQueryState>,
    /// Raw search input waiting for the debounce window
    pub search_debouncer: Signal<Debouncer<String>>,
    /// Timer task of the pending search commit
    pub search_commit_task: Signal<Option<Task>>,
    /// Bumped whenever the notes query is invalidated
    pub refresh_epoch: Signal<u64>,
    /// Notifications on screen
    pub toasts: Signal<ToastQueue>,
    /// Resolved theme
    pub theme: Signal<ResolvedTheme>,
    /// Notes gateway, absent when the client could not be built
    pub gateway: Signal<Option<SharedGateway>>,
    /// Page size sent to the gateway
    pub per_page: u32,
}

/// Create the root signals and provide [`AppState`] to the tree.
///
/// `gateway` is only called on the first render.
pub fn use_app_state(
    config: &ClientConfig,
    gateway: impl FnOnce() -> Option<SharedGateway>,
) -> AppState {
    let debounce = config.search_debounce;
    let theme_mode = config.theme;
    let per_page = config.per_page;

    let browse = use_signal(BrowseState::new);
    let query = use_signal(NotesQueryState::new);
    let search_debouncer = use_signal(move || Debouncer::new(debounce));
    let search_commit_task = use_signal(|| None);
    let refresh_epoch = use_signal(|| 0_u64);
    let toasts = use_signal(ToastQueue::new);
    let theme = use_signal(move || ResolvedTheme::from(theme_mode));
    let gateway = use_signal(gateway);

    use_context_provider(|| AppState {
        browse,
        query,
        search_debouncer,
        search_commit_task,
        refresh_epoch,
        toasts,
        theme,
        gateway,
        per_page,
    })
}

/// Fetch whenever the query key changes or the notes query is invalidated.
///
/// Call from the root so fetches outlive the components that caused them.
pub fn use_notes_sync(state: AppState) {
    use_effect(move || {
        let _key = state.browse.read().query_key();
        let _epoch = (state.refresh_epoch)();
        state.sync_query();
    });
}

impl AppState {
    /// Request the notes for the current browse state, if not already loaded.
    pub fn sync_query(self) {
        let key = self.browse.peek().query_key();
        let mut query = self.query;
        let Some(ticket) = query.write().request(key) else {
            return;
        };

        let gateway = self.gateway.peek().clone();
        let per_page = self.per_page;
        spawn(async move {
            let result = match gateway {
                Some(gateway) => run_fetch(gateway.as_ref(), &ticket, per_page).await,
                None => Err(GatewayError::Transport(
                    "Notes service is not configured".to_string(),
                )),
            };
            let resolution = query.write().resolve(&ticket, result);
            if let Resolution::Failed(error) = resolution {
                self.notify_error(fetch_error_message(&error));
            }
        });
    }

    /// Record a keystroke in the search box and restart the debounce timer.
    pub fn type_search(mut self, value: String) {
        self.browse.write().set_search(value.clone());

        let ticket = self.search_debouncer.write().push(value);
        let delay = self.search_debouncer.peek().delay();
        if let Some(previous) = self.search_commit_task.take() {
            previous.cancel();
        }

        let mut debouncer = self.search_debouncer;
        let mut browse = self.browse;
        let task = spawn(async move {
            tokio::time::sleep(delay).await;
            let settled = debouncer.write().settle(ticket);
            if let Some(term) = settled {
                tracing::debug!(search = %term, "Search term committed");
                browse.write().commit_search(&term);
            }
        });
        self.search_commit_task.set(Some(task));
    }

    /// Select a page in the pagination control
    pub fn select_page(mut self, page: PageIndex) {
        tracing::debug!(page = page.api_page(), "Page selected");
        self.browse.write().set_page(page);
    }

    pub fn open_modal(mut self) {
        self.browse.write().open_modal();
    }

    pub fn close_modal(mut self) {
        self.browse.write().close_modal();
    }

    /// Mark the notes query stale; the root refetches on the next render.
    pub fn invalidate_notes(mut self) {
        tracing::debug!("Invalidating notes query");
        if self.query.write().invalidate() {
            self.refresh_epoch += 1;
        }
    }

    pub fn notify_error(mut self, message: impl Into<String>) {
        self.toasts.write().error(message);
    }

    pub fn notify_success(mut self, message: impl Into<String>) {
        self.toasts.write().success(message);
    }
}

/// Headless app root for exercising state and components against a
/// [`FakeGateway`](notehub_core::gateway::fake::FakeGateway).
#[cfg(test)]
pub(crate) mod harness {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::prelude::*;
    use notehub_core::config::ClientConfig;
    use notehub_core::gateway::fake::FakeGateway;

    use super::{use_app_state, use_notes_sync, AppState, SharedGateway};

    #[derive(Clone)]
    struct Shared {
        gateway: Rc<FakeGateway>,
        state: Rc<Cell<Option<AppState>>>,
    }

    #[component]
    fn HarnessRoot() -> Element {
        let shared = use_context::<Shared>();
        let gateway: SharedGateway = shared.gateway.clone();
        let state = use_app_state(&ClientConfig::default(), move || Some(gateway));
        use_notes_sync(state);
        shared.state.set(Some(state));
        rsx! {}
    }

    pub struct Harness {
        dom: VirtualDom,
        pub gateway: Rc<FakeGateway>,
        state: Rc<Cell<Option<AppState>>>,
    }

    impl Harness {
        /// Mount the root and let the first fetch settle
        pub async fn mount(gateway: FakeGateway) -> Self {
            let gateway = Rc::new(gateway);
            let state = Rc::new(Cell::new(None));
            let mut dom = VirtualDom::new(HarnessRoot).with_root_context(Shared {
                gateway: Rc::clone(&gateway),
                state: Rc::clone(&state),
            });
            dom.rebuild_in_place();

            let mut harness = Self {
                dom,
                gateway,
                state,
            };
            harness.run_for(Duration::from_millis(10)).await;
            harness
        }

        pub fn state(&self) -> AppState {
            self.state.get().expect("harness root rendered")
        }

        /// Run `f` inside the root scope, where it may spawn tasks and
        /// create signals.
        pub fn act<T>(&self, f: impl FnOnce(AppState) -> T) -> T {
            let state = self.state();
            self.dom.in_runtime(|| ScopeId::ROOT.in_runtime(|| f(state)))
        }

        /// Drive renders, effects and tasks for `duration` of (paused) time
        pub async fn run_for(&mut self, duration: Duration) {
            let deadline = tokio::time::Instant::now() + duration;
            loop {
                tokio::select! {
                    () = self.dom.wait_for_work() => {}
                    () = tokio::time::sleep_until(deadline) => break,
                }
                let _ = self.dom.render_immediate_to_vec();
            }
            let _ = self.dom.render_immediate_to_vec();
        }
    }
}
