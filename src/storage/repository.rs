use crate::{
    config::NotebookConfig,
    error::{NotebookError, Result},
    model::{Note, NoteRecord},
    validation,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Notes stored as one JSON array in a single file.
///
/// Every call re-reads the whole file and every mutation rewrites it, so
/// edits made by other programs between calls are picked up. There is no
/// locking: the file is assumed to have a single writer at a time.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    path: PathBuf,
}

impl NoteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &NotebookConfig, root: &Path) -> Self {
        Self::new(config.notes_path(root))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All notes in file order. A missing file is an empty notebook; a file
    /// that cannot be read or parsed is logged and also treated as empty.
    /// Records that do not form a valid note are logged and skipped.
    pub fn get_all(&self) -> Vec<Note> {
        let records = match self.read_records() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read notes file, treating it as empty"
                );
                return Vec::new();
            }
        };

        records
            .into_iter()
            .filter_map(|record| {
                let id = record.id;
                match Note::from_record(record) {
                    Ok(note) => Some(note),
                    Err(e) => {
                        tracing::warn!(
                            path = %self.path.display(),
                            id = ?id,
                            error = %e,
                            "Skipping invalid note record"
                        );
                        None
                    }
                }
            })
            .collect()
    }

    /// Like [`get_all`](Self::get_all) but fails on an unreadable file or on
    /// any invalid record instead of hiding it. Mutations go through here so
    /// they never rewrite a file they could not fully read.
    pub fn load(&self) -> Result<Vec<Note>> {
        let notes = self
            .read_records()?
            .into_iter()
            .map(Note::from_record)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| NotebookError::StorageRead(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(path = %self.path.display(), count = notes.len(), "Loaded notes");
        Ok(notes)
    }

    fn read_records(&self) -> Result<Vec<NoteRecord>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Notes file does not exist yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(NotebookError::StorageRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| NotebookError::StorageRead(format!("{}: {}", self.path.display(), e)))
    }

    pub fn get(&self, id: u64) -> Result<Note> {
        self.get_all()
            .into_iter()
            .find(|n| n.id == Some(id))
            .ok_or(NotebookError::NotFound(id))
    }

    /// Inserts a new note or replaces the stored note with the same ID.
    ///
    /// A note without an ID gets one more than the highest ID currently in
    /// the file; gaps left by deletes are never filled. The ID is written
    /// back into `note` once the file has been replaced.
    pub fn save(&self, note: &mut Note) -> Result<()> {
        validation::validate_note(note)?;

        let mut notes = self.load()?;
        let id = match note.id {
            Some(id) => {
                tracing::info!(id, title = %note.title, "Updating note");
                notes.retain(|n| n.id != Some(id));
                id
            }
            None => {
                let id = next_id(&notes);
                tracing::info!(id, title = %note.title, "Creating note");
                id
            }
        };

        let mut saved = note.clone();
        saved.id = Some(id);
        notes.push(saved);
        self.write_all(&notes)?;

        note.id = Some(id);
        Ok(())
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        let mut notes = self.load()?;
        let before = notes.len();
        notes.retain(|n| n.id != Some(id));
        if notes.len() == before {
            return Err(NotebookError::NotFound(id));
        }

        tracing::info!(id, "Deleting note");
        self.write_all(&notes)
    }

    fn write_all(&self, notes: &[Note]) -> Result<()> {
        let records: Vec<NoteRecord> = notes.iter().map(Note::to_record).collect();
        let mut content = serde_json::to_string_pretty(&records)?;
        content.push('\n');
        self.atomic_write(&content)
    }

    /// Writes to a temp file next to the target, syncs it, then renames it
    /// over the target. On any failure the previous file is left untouched.
    fn atomic_write(&self, content: &str) -> Result<()> {
        let target_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        std::fs::create_dir_all(target_dir).map_err(|e| {
            NotebookError::StorageWrite(format!("Failed to create {}: {}", target_dir.display(), e))
        })?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| NotebookError::StorageWrite(format!("Failed to create temp file: {}", e)))?;

        temp_file.write_all(content.as_bytes()).map_err(|e| {
            NotebookError::StorageWrite(format!("Failed to write to temp file: {}", e))
        })?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| NotebookError::StorageWrite(format!("Failed to sync temp file: {}", e)))?;

        temp_file.persist(&self.path).map_err(|e| {
            NotebookError::StorageWrite(format!("Failed to persist temp file: {}", e))
        })?;

        Ok(())
    }
}

fn next_id(notes: &[Note]) -> u64 {
    notes.iter().filter_map(|n| n.id).max().unwrap_or(0) + 1
}
