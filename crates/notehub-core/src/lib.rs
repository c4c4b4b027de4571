//! notehub-core - Core library for NoteHub
//!
//! This crate contains the note models, the remote notes gateway, and the
//! UI-independent state used by the NoteHub interface: query keys, search
//! debouncing, the one-entry query cache, pagination, toasts, and the scoped
//! resources held by the modal overlay.

pub mod browse;
pub mod config;
pub mod debounce;
pub mod error;
pub mod gateway;
pub mod models;
pub mod overlay;
pub mod pagination;
pub mod query;
pub mod toast;

pub use error::{Error, Result};
pub use models::{Note, NoteId, NoteTag};
