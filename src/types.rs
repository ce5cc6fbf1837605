/*!
 * Core types and data structures for treescript
 */

use std::path::{Path, PathBuf};

/// Where an entry lives on disk and where the generated script recreates it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPath {
    /// Path used to read the entry from the source tree
    pub source: PathBuf,
    /// Path written into the generated script
    pub target: PathBuf,
}

impl EntryPath {
    /// Create a path pair
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Descend into a child named `name`
    pub fn join(&self, name: impl AsRef<Path>) -> Self {
        Self {
            source: self.source.join(name.as_ref()),
            target: self.target.join(name.as_ref()),
        }
    }
}

/// A filesystem entry met during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Directory to recreate and descend into
    Directory(EntryPath),
    /// Regular file whose content is replicated
    File(EntryPath),
}

/// A file whose content was left out because of its extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path in the source tree
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

/// A file that could not be embedded as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableFile {
    /// Path in the source tree
    pub path: PathBuf,
    /// Why the content was not embedded
    pub reason: String,
}
