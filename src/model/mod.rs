//! Data models for the notebook.
//!
//! - [`Note`]: a single note
//! - [`NoteRecord`]: the stored shape of a note
//! - [`Priority`]: low, medium, high
//! - [`Status`]: active, done, archived

mod note;
mod record;
mod types;

pub use note::{CREATED_AT_FORMAT, Note, normalize_tags};
pub use record::NoteRecord;
pub use types::{Priority, Status};
