//! Data models for NoteHub

mod draft;
mod note;

pub use draft::{DraftErrors, NewNote, NoteDraft, CONTENT_MAX_LEN, TITLE_MAX_LEN, TITLE_MIN_LEN};
pub use note::{Note, NoteId, NoteTag};
