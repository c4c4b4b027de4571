//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod error_message;
mod loader;
mod modal;
mod note_card;
mod note_form;
mod note_list;
mod pagination;
mod search_box;
mod toaster;

pub use button::{Button, ButtonVariant};
pub use error_message::ErrorMessage;
pub use loader::Loader;
pub use modal::Modal;
pub use note_card::NoteCard;
pub use note_form::NoteForm;
pub use note_list::NoteList;
pub use pagination::Pagination;
pub use search_box::SearchBox;
pub use toaster::Toaster;
