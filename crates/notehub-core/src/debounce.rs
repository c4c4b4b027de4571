//! Last-write-wins debouncing.
//!
//! The debouncer itself does no timing. Every [`Debouncer::push`] hands out
//! a ticket; whoever owns the timer sleeps for [`Debouncer::delay`] and then
//! calls [`Debouncer::settle`]. Only the newest ticket yields the value, so
//! timers started for earlier pushes settle to nothing.

use std::time::Duration;

/// Handle for one pushed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Collapses bursts of values into the last one
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Quiet period a value must survive before it settles
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value. Earlier tickets become stale.
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Take the pending value if `ticket` is still the newest one.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.generation {
            self.pending.take()
        } else {
            None
        }
    }
}
