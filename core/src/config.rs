//! Store configuration shared by every process that touches notes.
//!
//! The group identifier, storage subpath, and note extension are injected
//! into [`NoteStore`](crate::storage::NoteStore) at construction rather
//! than compiled in, so tests can point at an isolated temporary container
//! and both binaries can pin the same container through one config file.

use crate::storage::{Error, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// File name of the persisted store configuration.
pub const CONFIG_FILE_NAME: &str = "store.json";

/// Configuration for a [`NoteStore`](crate::storage::NoteStore).
///
/// The shared container resolves to
/// `<base dir>/<group identifier>/<storage component>/`, where the base
/// directory defaults to the platform's per-user data directory. Two
/// processes constructed from equal configurations compute identical note
/// locations; that agreement is the storage contract's load-bearing
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Overrides the platform group root. Tests point this at a temporary
    /// directory; a pinned value in the config file keeps both processes on
    /// the same container.
    pub base_dir: Option<PathBuf>,
    /// Cross-process group identifier the container is keyed by.
    pub group_identifier: String,
    /// Subpath component appended beneath the group directory.
    pub storage_component: String,
    /// File extension given to every note, without the leading dot.
    pub note_extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            base_dir: None,
            group_identifier: "group.quillnote.notes".to_string(),
            storage_component: "File Provider Storage".to_string(),
            note_extension: "txt".to_string(),
        }
    }
}

impl StoreConfig {
    /// Returns the default configuration rooted at the given base
    /// directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            base_dir: Some(base_dir.into()),
            ..StoreConfig::default()
        }
    }

    /// Computes the shared container path without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ContainerUnavailable`] if no base directory is
    /// configured and the platform supplies no per-user data directory.
    pub(crate) fn container_path(&self) -> Result<PathBuf> {
        let group_root = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => BaseDirs::new()
                .ok_or(Error::ContainerUnavailable)?
                .data_dir()
                .to_path_buf(),
        };
        Ok(group_root
            .join(&self.group_identifier)
            .join(&self.storage_component))
    }

    /// Default location of the persisted configuration file.
    pub fn default_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("", "", "quillnote")?;
        Some(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Reads a configuration file.
    ///
    /// A missing or malformed file is reported as
    /// [`Error::InvalidConfig`].
    pub async fn load(path: &Path) -> Result<StoreConfig> {
        let content = fs::read(path).await.map_err(|e| {
            warn!("Failed to read store config file '{}': {}", path.display(), e);
            Error::InvalidConfig(path.to_path_buf())
        })?;

        serde_json::from_slice(&content).map_err(|e| {
            warn!("Failed to parse store config file '{}': {}", path.display(), e);
            Error::InvalidConfig(path.to_path_buf())
        })
    }

    /// Serializes and writes the configuration, creating parent directories
    /// as needed.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(Error::Serialize)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(Error::Io)?;
        }
        fs::write(path, content).await.map_err(Error::Io)?;
        debug!("Store config written successfully to {}", path.display());
        Ok(())
    }

    /// Resolves the configuration a process should run with.
    ///
    /// An explicit path must load; otherwise the default config file is
    /// used when present, and the built-in defaults when not. Both binaries
    /// call this, which is what keeps two independent processes pointed at
    /// the same container.
    pub async fn resolve(explicit: Option<&Path>) -> Result<StoreConfig> {
        match explicit {
            Some(path) => StoreConfig::load(path).await,
            None => match StoreConfig::default_path() {
                Some(path) if path.is_file() => StoreConfig::load(&path).await,
                _ => Ok(StoreConfig::default()),
            },
        }
    }
}
