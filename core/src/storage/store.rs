use crate::config::StoreConfig;
use crate::storage::note::title_from_file_name;
use crate::storage::{Error, Note, Result, PLACEHOLDER_TITLE};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, instrument, warn};

/// The shared note-storage contract.
///
/// A `NoteStore` is a cheap value constructed from a [`StoreConfig`]; both
/// the host app and the picker process build one per run against the same
/// configuration, which is what makes their title-to-location mappings
/// agree.
#[derive(Debug, Clone)]
pub struct NoteStore {
    config: StoreConfig,
}

impl NoteStore {
    pub fn new(config: StoreConfig) -> Self {
        NoteStore { config }
    }

    /// Returns the configuration this store was constructed with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Resolves the shared container, creating it (with any missing
    /// intermediate directories) if absent.
    ///
    /// Idempotent and safe to call from either process.
    ///
    /// # Errors
    ///
    /// Fails if the platform cannot supply the group location
    /// ([`Error::ContainerUnavailable`]) or directory creation fails
    /// ([`Error::ContainerCreate`]).
    #[instrument(skip(self))]
    pub async fn container(&self) -> Result<PathBuf> {
        let path = self.config.container_path()?;
        fs::create_dir_all(&path)
            .await
            .map_err(|source| Error::ContainerCreate {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    /// Returns the location a note with this title is stored at.
    ///
    /// An empty title is substituted with [`PLACEHOLDER_TITLE`]. Pure
    /// function of the title and the container resolution; no other I/O.
    pub async fn path_for_title(&self, title: &str) -> Result<PathBuf> {
        let container = self.container().await?;
        let stem = if title.is_empty() { PLACEHOLDER_TITLE } else { title };
        Ok(container.join(format!("{}.{}", stem, self.config.note_extension)))
    }

    /// Constructs a note with the resolved location and the given title.
    ///
    /// Does **not** write to storage; the note becomes visible to the other
    /// process on its first [`write_text`](Self::write_text).
    pub async fn create_note(&self, title: &str) -> Result<Note> {
        let location = self.path_for_title(title).await?;
        Ok(Note::new(title.to_string(), location))
    }

    /// Enumerates the notes currently in the shared container
    /// (non-recursive).
    ///
    /// Each file name maps to a note via [`create_note`](Self::create_note)
    /// after stripping one trailing extension suffix; entries for which
    /// note construction fails are skipped and logged as warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be resolved or read. The
    /// caller decides whether to surface it or degrade to an empty list.
    #[instrument(skip(self))]
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let container = self.container().await?;
        debug!("Listing notes in {}", container.display());

        let mut notes = Vec::new();
        let mut read_dir = fs::read_dir(&container)
            .await
            .map_err(|source| Error::ListNotes {
                path: container.clone(),
                source,
            })?;

        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|source| Error::ListNotes {
                path: container.clone(),
                source,
            })?
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let file_name_os = entry.file_name();
            let Some(file_name) = file_name_os.to_str() else {
                warn!("Skipping non-Unicode file name: {}", path.display());
                continue;
            };
            let title = title_from_file_name(file_name, &self.config.note_extension);
            match self.create_note(&title).await {
                Ok(note) => notes.push(note),
                Err(e) => {
                    warn!("Skipping unresolvable note '{}': {}", title, e);
                }
            }
        }
        debug!("Found {} notes", notes.len());
        Ok(notes)
    }

    /// Reads the note's stored text.
    ///
    /// Returns `None` if the file does not exist or is zero-length; callers
    /// treat that as empty text, never as an error.
    ///
    /// # Errors
    ///
    /// Fails if the stored bytes are not valid UTF-8 or the read itself
    /// fails.
    #[instrument(skip(self, note), fields(path = %note.location().display()))]
    pub async fn read_text(&self, note: &Note) -> Result<Option<String>> {
        let bytes = match fs::read(note.location()).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Io(e)),
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| Error::NotUtf8(note.location().to_path_buf()))
    }

    /// Overwrites (or creates, on first save) the file at the note's
    /// location.
    ///
    /// A direct overwrite with no lock file and no temp-then-rename:
    /// concurrent writers to the same title race, last writer wins.
    #[instrument(skip(self, note, text), fields(path = %note.location().display()))]
    pub async fn write_text(&self, note: &Note, text: &str) -> Result<()> {
        fs::write(note.location(), text).await.map_err(Error::Io)?;
        debug!("Note written successfully");
        Ok(())
    }
}
