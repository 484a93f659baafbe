use super::record::NoteRecord;
use super::types::{Priority, Status};
use crate::error::{NotebookError, Result};
use chrono::Local;
use serde::Serialize;

/// Timestamp layout used for `created_at`, e.g. `2024-01-15T10:30:00.123456`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// Assigned by the repository on first save.
    pub id: Option<u64>,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub status: Status,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl Note {
    /// Builds an unsaved note. Title and content are trimmed and must not be blank.
    pub fn new(title: &str, content: &str) -> Result<Self> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() {
            return Err(NotebookError::Validation("Title cannot be empty".to_string()));
        }
        if content.is_empty() {
            return Err(NotebookError::Validation(
                "Content cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: None,
            title: title.to_string(),
            content: content.to_string(),
            priority: Priority::default(),
            status: Status::default(),
            tags: Vec::new(),
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        })
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags);
        self
    }

    /// Calendar date part of `created_at`.
    pub fn date(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }

    pub fn to_record(&self) -> NoteRecord {
        NoteRecord {
            id: self.id,
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            priority: Some(self.priority.to_string()),
            status: Some(self.status.to_string()),
            tags: Some(self.tags.clone()),
            created_at: Some(self.created_at.clone()),
        }
    }

    /// Rebuilds a stored note. `id` and `created_at` are kept verbatim, the
    /// remaining fields go through the same normalization as [`Note::new`].
    pub fn from_record(record: NoteRecord) -> Result<Self> {
        let id = record.id.ok_or(NotebookError::MissingField("id"))?;
        let title = record.title.ok_or(NotebookError::MissingField("title"))?;
        let content = record
            .content
            .ok_or(NotebookError::MissingField("content"))?;
        let priority: Priority = record
            .priority
            .ok_or(NotebookError::MissingField("priority"))?
            .parse()?;
        let status: Status = record
            .status
            .ok_or(NotebookError::MissingField("status"))?
            .parse()?;
        let created_at = record
            .created_at
            .ok_or(NotebookError::MissingField("created_at"))?;

        let mut note = Note::new(&title, &content)?
            .with_priority(priority)
            .with_status(status)
            .with_tags(record.tags.unwrap_or_default());
        note.id = Some(id);
        note.created_at = created_at;
        Ok(note)
    }
}

/// Trims and lowercases tags, dropping the ones left empty. Duplicates are kept.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
