//! Provides the shared note-storage contract used by the Quillnote app and
//! the document-picker process.
//!
//! This module defines how notes are named, located, enumerated, and
//! transferred to and from disk. Two independent executables depend on it,
//! so the one correctness-critical invariant lives here: both processes
//! MUST compute the same location for the same title, or the picker will
//! grant access to the wrong file, or the app won't see a note the picker
//! exposed.
//!
//! # Core Concepts
//!
//! *   **[`NoteStore`]:** The storage contract. Constructed from a
//!     [`StoreConfig`](crate::config::StoreConfig), it resolves the shared
//!     container, maps titles to locations, enumerates existing notes, and
//!     performs the load/save byte transfer.
//! *   **[`Note`]:** A named plain-text document. A `Note` value carries
//!     identity only (title and resolved location); it is constructed in
//!     memory whenever a title is known and becomes "real" on first save.
//! *   **Shared container:** A single directory,
//!     `<group root>/<group identifier>/File Provider Storage/`, lazily
//!     created on first access. Any process may create, overwrite, or
//!     enumerate it.
//!
//! # Naming Contract
//!
//! Each note is one file named `<title>.txt` directly inside the container
//! (flat, no metadata files, no header). An empty title resolves to the
//! fixed placeholder [`PLACEHOLDER_TITLE`]. Titles are the de facto primary
//! key: creating a note with an existing title silently overwrites on save.
//! Enumeration recovers a title by stripping one trailing extension suffix
//! from the file name.
//!
//! # Cross-Process Behavior
//!
//! There is no cross-process mutual exclusion. If the app and the picker
//! write the same title concurrently, the last writer wins at the
//! filesystem level; no merge, no lock file, no versioning.
//!
//! # Asynchronous API
//!
//! All filesystem I/O is `async` and relies on the `tokio` runtime. Methods
//! that perform I/O return `Result<T, Error>`. The store never panics into
//! caller code; every failure path is an explicit error value or an
//! absence, and nothing is retried automatically.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use quillnote_core::config::StoreConfig;
//! use quillnote_core::storage::NoteStore;
//! use tempfile::tempdir;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Point the store at an isolated container for the example.
//!     let temp_dir = tempdir()?;
//!     let store = NoteStore::new(StoreConfig::with_base_dir(temp_dir.path()));
//!
//!     let note = store.create_note("Groceries").await?;
//!     store.write_text(&note, "milk, eggs").await?;
//!
//!     let notes = store.list_notes().await?;
//!     assert_eq!(notes.len(), 1);
//!     assert_eq!(notes[0].title(), "Groceries");
//!     Ok(())
//! }
//! ```

pub use self::note::Note;
pub use self::store::NoteStore;

mod note;
mod store;

use std::path::PathBuf;
use thiserror::Error;

/// Title substituted when a note is created with an empty title.
pub const PLACEHOLDER_TITLE: &str = "Untitled";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Shared container location unavailable (no platform data directory)")]
    ContainerUnavailable,

    #[error("Could not create shared container at {}", .path.display())]
    ContainerCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not enumerate notes in {}", .path.display())]
    ListNotes {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Note at {} is not valid UTF-8 text", .0.display())]
    NotUtf8(PathBuf),

    #[error("Store configuration file is missing or invalid: {}", .0.display())]
    InvalidConfig(PathBuf),

    #[error("Configuration serialization/deserialization error")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

// Define a standard Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
