use quillnote_core::storage::{Note, NoteStore, Result};

/// Editable text buffer over one note.
///
/// The buffer lives here between load and save; the store only sees whole
/// strings.
#[derive(Debug)]
pub struct NoteEditor {
    note: Note,
    text: String,
}

impl NoteEditor {
    /// Loads the note's current text. A note absent from disk (or saved
    /// empty) opens as an empty buffer, not as an error.
    pub async fn open(store: &NoteStore, note: Note) -> Result<Self> {
        let text = store.read_text(&note).await?.unwrap_or_default();
        Ok(NoteEditor { note, text })
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Writes the buffer back to the note's location.
    pub async fn save(&self, store: &NoteStore) -> Result<()> {
        store.write_text(&self.note, &self.text).await
    }
}
