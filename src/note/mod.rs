//! Note terms and note lookup

mod data;
pub mod loader;

pub use data::{NoteId, NoteTerms, NoteRecord};
pub use loader::{load_note_records, load_note_terms, find_note_terms};
