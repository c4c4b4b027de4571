//! Scoped resources held by the modal overlay.
//!
//! While a modal is mounted it owns two pieces of process-wide state: the
//! page scroll lock and a subscription to global key presses. Both are
//! guards; dropping them releases the resource, so an unmount on any path
//! restores scrolling and detaches the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Key name delivered for the Escape key
pub const ESCAPE_KEY: &str = "Escape";

/// Side effects on the host page
pub trait PageEffects {
    /// Stop the underlying page from scrolling
    fn lock_scroll(&self);

    /// Put back whatever scrolling behavior was in place before the lock
    fn restore_scroll(&self);
}

/// Holds the page scroll lock until dropped
pub struct ScrollLock<E: PageEffects> {
    effects: E,
}

impl<E: PageEffects> ScrollLock<E> {
    pub fn acquire(effects: E) -> Self {
        effects.lock_scroll();
        tracing::debug!("Page scroll locked");
        Self { effects }
    }
}

impl<E: PageEffects> Drop for ScrollLock<E> {
    fn drop(&mut self) {
        self.effects.restore_scroll();
        tracing::debug!("Page scroll restored");
    }
}

/// Decides whether a click on the backdrop dismisses the modal.
///
/// A click only dismisses when the press also began on the backdrop, so
/// selecting text in the dialog and releasing outside it keeps it open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BackdropPress {
    started_on_backdrop: bool,
}

impl BackdropPress {
    /// A press began directly on the backdrop
    pub fn press_on_backdrop(&mut self) {
        self.started_on_backdrop = true;
    }

    /// A press began inside the dialog body
    pub fn press_in_dialog(&mut self) {
        self.started_on_backdrop = false;
    }

    /// A click reached the backdrop. Returns whether it dismisses.
    pub fn click(&mut self) -> bool {
        std::mem::take(&mut self.started_on_backdrop)
    }
}

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct RouterInner {
    next_id: u64,
    escape_listeners: Vec<(u64, Listener)>,
}

/// Routes key presses from the single window-level listener to the
/// components currently subscribed.
#[derive(Clone, Default)]
pub struct KeyRouter {
    inner: Rc<RefCell<RouterInner>>,
}

impl KeyRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` on every Escape press until the subscription drops
    pub fn on_escape(&self, callback: impl Fn() + 'static) -> KeySubscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.escape_listeners.push((id, Rc::new(callback)));
        KeySubscription {
            id,
            router: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver a key press. Returns how many listeners were called.
    pub fn dispatch(&self, key: &str) -> usize {
        if key != ESCAPE_KEY {
            return 0;
        }
        // Listeners may drop their own subscription while running.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .escape_listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in &listeners {
            listener();
        }
        listeners.len()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().escape_listeners.len()
    }
}

/// Detaches its listener from the [`KeyRouter`] when dropped
pub struct KeySubscription {
    id: u64,
    router: Weak<RefCell<RouterInner>>,
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.router.upgrade() {
            inner
                .borrow_mut()
                .escape_listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
