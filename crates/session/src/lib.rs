//! vellum-session: the active-document layer above the editing core.
//!
//! Editing commands operate on "the current buffer". Rather than a
//! process-wide global, that notion lives here as ordinary owned state: a
//! [`Session`] holds at most one active [`TextStore`] and hands out the
//! single mutable reference editing commands work through. Construction
//! from a file is the only fallible path; an unreadable source surfaces as
//! a [`SessionError`] and no document is produced.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use vellum_buffer::TextStore;

/// Failure to produce a document.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The source text could not be read.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// Owns the active document, if any.
///
/// There is exactly one editable document at a time; replacing or closing
/// it drops the previous store.
#[derive(Debug, Default)]
pub struct Session {
    active: Option<TextStore>,
}

impl Session {
    /// Creates a session with no active document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an empty scratch document, replacing any active one.
    pub fn open_scratch(&mut self) -> &mut TextStore {
        info!("opening scratch document");
        self.active.insert(TextStore::new())
    }

    /// Opens a document from in-memory text, replacing any active one.
    pub fn open_str(&mut self, text: &str) -> &mut TextStore {
        debug!(chars = text.len(), "opening document from text");
        self.active.insert(TextStore::from_str(text))
    }

    /// Opens a document from a file, replacing any active one.
    ///
    /// On failure the previous document (if any) stays active.
    pub fn open_path(&mut self, path: &Path) -> Result<&mut TextStore, SessionError> {
        let text = fs::read_to_string(path)?;
        info!(path = %path.display(), chars = text.len(), "opened document");
        Ok(self.active.insert(TextStore::from_str(&text)))
    }

    /// Installs an externally constructed store as the active document.
    pub fn replace(&mut self, store: TextStore) -> &mut TextStore {
        debug!(chars = store.len(), "replacing active document");
        self.active.insert(store)
    }

    /// Drops the active document.
    pub fn close(&mut self) {
        if self.active.take().is_some() {
            info!("closed active document");
        }
    }

    /// The active document, if any.
    pub fn active(&self) -> Option<&TextStore> {
        self.active.as_ref()
    }

    /// The active document for editing, if any.
    pub fn active_mut(&mut self) -> Option<&mut TextStore> {
        self.active.as_mut()
    }
}
