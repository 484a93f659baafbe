//! File-based storage layer for notes.
//!
//! All notes live in one JSON file (`notes.json` by default):
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Buy milk",
//!     "content": "2% organic",
//!     "priority": "high",
//!     "status": "active",
//!     "tags": ["shopping"],
//!     "created_at": "2024-01-15T10:30:00.123456"
//!   }
//! ]
//! ```
//!
//! [`NoteRepository`] reads the whole file on every call and replaces it
//! atomically on every change.

mod repository;

pub use repository::NoteRepository;
