//! Page-level side effects executed in the webview.

use std::rc::Rc;

use dioxus::document::{self, Document, Eval};
use notehub_core::overlay::{KeyRouter, PageEffects};

const LOCK_SCROLL_JS: &str = r"
if (window.__notehubScrollRestore === undefined) {
    window.__notehubScrollRestore = document.body.style.overflow;
}
document.body.style.overflow = 'hidden';
";

const RESTORE_SCROLL_JS: &str = r"
if (window.__notehubScrollRestore !== undefined) {
    document.body.style.overflow = window.__notehubScrollRestore;
    delete window.__notehubScrollRestore;
}
";

const INSTALL_KEY_LISTENER_JS: &str = r"
if (window.__notehubKeyHandler) {
    window.removeEventListener('keydown', window.__notehubKeyHandler);
}
window.__notehubKeyHandler = (event) => {
    if (event.key === 'Escape') {
        dioxus.send(event.key);
    }
};
window.addEventListener('keydown', window.__notehubKeyHandler);
";

const REMOVE_KEY_LISTENER_JS: &str = r"
if (window.__notehubKeyHandler) {
    window.removeEventListener('keydown', window.__notehubKeyHandler);
    delete window.__notehubKeyHandler;
}
";

/// Scroll control for `document.body`.
///
/// Holds the document handle so the restore still runs when the owning
/// component is torn down.
#[derive(Clone)]
pub struct DocumentEffects {
    document: Rc<dyn Document>,
}

impl DocumentEffects {
    /// Effects bound to the current window's document
    pub fn current() -> Self {
        Self {
            document: document::document(),
        }
    }

    fn run(&self, js: &str) -> Eval {
        self.document.eval(js.to_string())
    }
}

impl PageEffects for DocumentEffects {
    fn lock_scroll(&self) {
        let _ = self.run(LOCK_SCROLL_JS);
    }

    fn restore_scroll(&self) {
        let _ = self.run(RESTORE_SCROLL_JS);
    }
}

/// Install the window-level key listener and forward presses to `router`
/// until the listener goes away.
pub async fn forward_global_keys(router: KeyRouter) {
    let mut listener = document::eval(INSTALL_KEY_LISTENER_JS);
    tracing::debug!("Global key listener installed");
    loop {
        match listener.recv::<String>().await {
            Ok(key) => {
                let delivered = router.dispatch(&key);
                tracing::debug!(%key, delivered, "Global key press");
            }
            Err(error) => {
                tracing::warn!("Global key listener stopped: {:?}", error);
                break;
            }
        }
    }
}

/// Detach the window-level key listener
pub fn remove_global_key_listener() {
    let _ = document::eval(REMOVE_KEY_LISTENER_JS);
    tracing::debug!("Global key listener removed");
}
