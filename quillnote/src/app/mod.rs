use quillnote_core::storage::{Note, NoteStore, Result};
use tracing::warn;

mod editor;
pub use editor::NoteEditor;

/// Application-level operations over the shared note store.
///
/// This is the note-list presenter: it owns the degrade-to-empty policy
/// for enumeration failure and the create-then-edit flow.
pub struct Quillnote {
    pub store: NoteStore,
}

impl Quillnote {
    pub fn new(store: NoteStore) -> Self {
        Quillnote { store }
    }

    /// All notes currently in the shared container.
    ///
    /// Enumeration failure degrades to an empty list at this boundary; the
    /// user sees an empty note list, never an error.
    pub async fn notes(&self) -> Vec<Note> {
        match self.store.list_notes().await {
            Ok(notes) => notes,
            Err(e) => {
                warn!("Could not list notes, showing empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// Creates a note with the given title and performs the initial save,
    /// making it visible to the picker process.
    ///
    /// A note with the same title already in the container is silently
    /// overwritten; titles are the primary key.
    pub async fn add_note(&self, title: &str) -> Result<Note> {
        let note = self.store.create_note(title).await?;
        self.store.write_text(&note, "").await?;
        Ok(note)
    }

    /// Opens the note with the given title for editing.
    ///
    /// A note absent from disk opens as an empty buffer.
    pub async fn open_note(&self, title: &str) -> Result<NoteEditor> {
        let note = self.store.create_note(title).await?;
        NoteEditor::open(&self.store, note).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quillnote_core::config::StoreConfig;
    use tempfile::tempdir;

    fn app_in(dir: &std::path::Path) -> Quillnote {
        Quillnote::new(NoteStore::new(StoreConfig::with_base_dir(dir)))
    }

    #[tokio::test]
    async fn test_notes_degrades_to_empty_on_failure() {
        let dir = tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        tokio::fs::write(&blocked, "").await.unwrap();

        let app = app_in(&blocked);
        assert!(app.store.list_notes().await.is_err());
        assert!(app.notes().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_note_is_immediately_listed() {
        let dir = tempdir().unwrap();
        let app = app_in(dir.path());

        let note = app.add_note("Errands").await.unwrap();
        assert!(note.location().is_file());

        let notes = app.notes().await;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title(), "Errands");
    }

    #[tokio::test]
    async fn test_add_then_open_yields_empty_buffer() {
        let dir = tempdir().unwrap();
        let app = app_in(dir.path());

        app.add_note("Fresh").await.unwrap();
        let editor = app.open_note("Fresh").await.unwrap();
        assert_eq!(editor.text(), "");
    }
}
