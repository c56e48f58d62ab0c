use std::path::{Path, PathBuf};

/// A named plain-text note backed by one file in the shared container.
///
/// A `Note` carries identity only: the title and the location derived from
/// it. Its text travels through [`NoteStore`](super::NoteStore) as a plain
/// `String` and lives with the caller between load and save. Constructing a
/// note does not touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Note {
    title: String,
    location: PathBuf,
}

impl Note {
    // Constructed by NoteStore so that the title-to-location mapping has a
    // single owner.
    pub(crate) fn new(title: String, location: PathBuf) -> Self {
        Note { title, location }
    }

    /// Returns the note's title as given at creation.
    ///
    /// May be empty; the empty title still resolves to the placeholder
    /// location.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's resolved location inside the shared container.
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn file_name(&self) -> Option<&str> {
        self.location.file_name()?.to_str()
    }
}

/// Recovers a note title from a container file name.
///
/// Strips exactly one trailing `.{extension}` suffix; a file name without
/// the suffix keeps its full name as the title.
pub(crate) fn title_from_file_name(file_name: &str, extension: &str) -> String {
    let suffix = format!(".{extension}");
    file_name
        .strip_suffix(&suffix)
        .unwrap_or(file_name)
        .to_string()
}
