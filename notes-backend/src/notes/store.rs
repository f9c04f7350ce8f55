//! NoteStore: process-local note storage
//!
//! Notes are kept newest-first. The id counter and the note list sit behind a
//! single lock so id assignment and insertion happen as one step.

use chrono::{DateTime, Utc};
use notes_types::NoteResponse;
use parking_lot::Mutex;

use crate::error::NoteError;

/// Formats used for `created_at` on the wire; the fraction is left out on whole seconds
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const TIMESTAMP_FORMAT_WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// A single stored note
#[derive(Debug, Clone)]
pub struct Note {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn to_response(&self) -> NoteResponse {
        let format = if self.created_at.timestamp_subsec_micros() == 0 {
            TIMESTAMP_FORMAT_WHOLE_SECONDS
        } else {
            TIMESTAMP_FORMAT
        };
        NoteResponse {
            id: self.id,
            content: self.content.clone(),
            created_at: self.created_at.format(format).to_string(),
        }
    }
}

struct Inner {
    /// Newest first
    notes: Vec<Note>,
    next_id: i64,
}

pub struct NoteStore {
    inner: Mutex<Inner>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                notes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Trim, stamp, and prepend a new note. Never fails.
    pub fn create(&self, content: &str) -> Note {
        let mut inner = self.inner.lock();
        let note = Note {
            id: inner.next_id,
            content: content.trim().to_string(),
            created_at: Utc::now(),
        };
        inner.notes.insert(0, note.clone());
        inner.next_id += 1;

        log::debug!("[NOTES] Created note {} ({} bytes)", note.id, note.content.len());
        note
    }

    /// Snapshot of all notes, newest first
    pub fn list(&self) -> Vec<Note> {
        self.inner.lock().notes.clone()
    }

    pub fn delete(&self, id: i64) -> Result<(), NoteError> {
        let mut inner = self.inner.lock();
        let pos = inner
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(NoteError::NotFound(id))?;
        inner.notes.remove(pos);

        log::debug!("[NOTES] Deleted note {}", id);
        Ok(())
    }

    /// All note contents joined by single spaces, in store order
    pub fn combined_content(&self) -> String {
        let inner = self.inner.lock();
        inner
            .notes
            .iter()
            .map(|n| n.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.inner.lock().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
