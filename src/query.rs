//! Filtering and keyword search over loaded notes.
//!
//! Both the command line and the interactive form go through these helpers
//! so that `list`, `search` and the live search box agree on what matches.

use crate::model::{Note, Priority, Status};

/// Number of content characters shown in search results.
pub const EXCERPT_LENGTH: usize = 60;

/// Field filters for listing notes. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    /// Substring of `created_at`, usually a full or partial date like `2024-03`.
    pub date: Option<String>,
    pub tag: Option<String>,
}

impl NoteFilter {
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.trim().to_lowercase());
        self
    }

    pub fn matches(&self, note: &Note) -> bool {
        if self.priority.is_some_and(|p| note.priority != p) {
            return false;
        }
        if self.status.is_some_and(|s| note.status != s) {
            return false;
        }
        if self
            .date
            .as_deref()
            .is_some_and(|d| !note.created_at.contains(d))
        {
            return false;
        }
        if self.tag.as_ref().is_some_and(|t| !note.tags.contains(t)) {
            return false;
        }
        true
    }

    /// Keeps the matching notes, preserving their order.
    pub fn apply(&self, mut notes: Vec<Note>) -> Vec<Note> {
        notes.retain(|n| self.matches(n));
        notes
    }
}

/// Case-insensitive substring match on title or content.
pub fn matches_keyword(note: &Note, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    note.title.to_lowercase().contains(&keyword) || note.content.to_lowercase().contains(&keyword)
}

/// Notes whose title or content contains `keyword`, in their original order.
pub fn search(notes: Vec<Note>, keyword: &str) -> Vec<Note> {
    notes
        .into_iter()
        .filter(|n| matches_keyword(n, keyword))
        .collect()
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
