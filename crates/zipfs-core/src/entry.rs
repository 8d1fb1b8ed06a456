//! Archive entries and their classification.
//!
//! An archive stores a flat list of full paths. Classification turns one
//! stored path into what the virtual filesystem needs: its kind, its
//! display name, and the path of the directory it lives in.

use std::time::SystemTime;

use crate::types::EntryKind;

/// One stored item of an archive.
///
/// Entries are owned by an [`EntrySource`](crate::source::EntrySource);
/// the provider only ever borrows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Full stored path, `/`-separated. Directory markers end in `/`.
    pub path: String,
    /// Uncompressed size in bytes. Meaningful only for files.
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
    /// Position in the container's native entry order.
    pub index: usize,
}

impl ArchiveEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(path: impl Into<String>, size: u64, modified: SystemTime, index: usize) -> Self {
        Self {
            path: path.into(),
            size,
            modified,
            index,
        }
    }

    /// Returns `true` if this entry is a directory marker.
    #[must_use]
    pub fn is_directory_marker(&self) -> bool {
        EntryKind::of(&self.path).is_directory()
    }

    /// Classifies this entry.
    #[must_use]
    pub fn classify(&self) -> Classified<'_> {
        classify_path(&self.path)
    }
}

/// Result of classifying a stored path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    /// File or directory marker.
    pub kind: EntryKind,
    /// Final path segment, without the marker's trailing `/`.
    pub name: &'a str,
    /// Path of the containing directory, empty for the root.
    pub parent: &'a str,
}

/// Classifies a stored entry path.
///
/// A path ending in `/` is a directory marker: the trailing `/` is
/// dropped, then name and parent are split off the remainder. Any other
/// path is a file split at its last `/`.
///
/// # Examples
///
/// ```
/// use zipfs_core::entry::classify_path;
/// use zipfs_core::types::EntryKind;
///
/// let file = classify_path("Dir1/Dir1.1/File_empty.txt");
/// assert_eq!(file.kind, EntryKind::File);
/// assert_eq!(file.name, "File_empty.txt");
/// assert_eq!(file.parent, "Dir1/Dir1.1");
///
/// let dir = classify_path("Dir1/Dir1.1/");
/// assert_eq!(dir.kind, EntryKind::Directory);
/// assert_eq!(dir.name, "Dir1.1");
/// assert_eq!(dir.parent, "Dir1");
/// ```
#[must_use]
pub fn classify_path(path: &str) -> Classified<'_> {
    let kind = EntryKind::of(path);
    let subject = match kind {
        EntryKind::Directory => &path[..path.len() - 1],
        EntryKind::File => path,
    };

    Classified {
        kind,
        name: file_name(subject),
        parent: parent_path(subject),
    }
}

/// Returns everything before the last `/`, or `""` when there is none.
#[must_use]
pub fn parent_path(path: &str) -> &str {
    path.rfind('/').map_or("", |i| &path[..i])
}

/// Returns everything after the last `/`, or the whole path.
fn file_name(path: &str) -> &str {
    path.rfind('/').map_or(path, |i| &path[i + 1..])
}
