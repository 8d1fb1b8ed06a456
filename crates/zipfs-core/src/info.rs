//! Query results: file, directory, and not-found records.
//!
//! Results borrow from the provider that produced them. A file record keeps
//! a reference to its entry source so it can be opened later; directory
//! records carry only a name and a timestamp.

use std::fmt;
use std::time::SystemTime;

use crate::Result;
use crate::ZipFsError;
use crate::entry::ArchiveEntry;
use crate::io::EntryReader;
use crate::source::EntrySource;
use crate::types::EntryKind;

/// Result of resolving one path.
///
/// `NotFound` is an ordinary value: a miss is something callers branch
/// on, not an error.
///
/// # Examples
///
/// ```
/// use zipfs_core::FileInfo;
/// use zipfs_core::ProviderConfig;
/// use zipfs_core::ZipFileProvider;
/// use zipfs_core::source::MemorySource;
///
/// let source = MemorySource::new().with_file("file1.txt", b"Hello zip");
/// let provider = ZipFileProvider::new(source, &ProviderConfig::default());
///
/// match provider.get_info("/file1.txt") {
///     FileInfo::File(file) => assert_eq!(file.len(), 9),
///     other => panic!("unexpected {other:?}"),
/// }
/// assert!(!provider.get_info("/unknown").exists());
/// ```
#[derive(Debug, Clone)]
pub enum FileInfo<'a> {
    /// A file entry.
    File(ArchiveFile<'a>),
    /// A directory marker entry.
    Directory(ArchiveDirectory<'a>),
    /// Nothing is stored under the path.
    NotFound(NotFoundInfo),
}

impl<'a> FileInfo<'a> {
    /// Builds the record for a stored entry.
    pub(crate) fn from_entry(entry: &'a ArchiveEntry, source: &'a dyn EntrySource) -> Self {
        let classified = entry.classify();
        match classified.kind {
            EntryKind::File => Self::File(ArchiveFile {
                entry,
                name: classified.name,
                source,
            }),
            EntryKind::Directory => Self::Directory(ArchiveDirectory {
                name: classified.name,
                modified: entry.modified,
            }),
        }
    }

    /// Builds a not-found record for `path`.
    pub(crate) fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(NotFoundInfo { path: path.into() })
    }

    /// Returns `true` unless this is `NotFound`.
    #[must_use]
    pub const fn exists(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }

    /// Returns `true` for directory records.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// Returns the entry kind, or `None` when nothing was found.
    #[must_use]
    pub const fn kind(&self) -> Option<EntryKind> {
        match self {
            Self::File(_) => Some(EntryKind::File),
            Self::Directory(_) => Some(EntryKind::Directory),
            Self::NotFound(_) => None,
        }
    }

    /// Returns the final path segment, or the queried path for `NotFound`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => file.name(),
            Self::Directory(dir) => dir.name(),
            Self::NotFound(missing) => missing.path(),
        }
    }

    /// Returns the file size. Directories and misses have none.
    #[must_use]
    pub fn len(&self) -> Option<u64> {
        match self {
            Self::File(file) => Some(file.len()),
            _ => None,
        }
    }

    /// Returns the last modification time, if the path exists.
    #[must_use]
    pub fn modified(&self) -> Option<SystemTime> {
        match self {
            Self::File(file) => Some(file.modified()),
            Self::Directory(dir) => Some(dir.modified()),
            Self::NotFound(_) => None,
        }
    }

    /// Opens the record for reading.
    ///
    /// # Errors
    ///
    /// Returns `ZipFsError::DirectoryStream` for directories,
    /// `ZipFsError::NotFound` for misses, or any error of
    /// [`EntrySource::open`] for files.
    pub fn open_read(&self) -> Result<EntryReader> {
        match self {
            Self::File(file) => file.open_read(),
            Self::Directory(dir) => Err(ZipFsError::DirectoryStream {
                name: dir.name.to_string(),
            }),
            Self::NotFound(missing) => Err(ZipFsError::NotFound {
                path: missing.path.clone(),
            }),
        }
    }
}

/// A file stored in the archive.
#[derive(Clone, Copy)]
pub struct ArchiveFile<'a> {
    entry: &'a ArchiveEntry,
    name: &'a str,
    source: &'a dyn EntrySource,
}

impl<'a> ArchiveFile<'a> {
    /// Returns the file name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the full stored path.
    #[must_use]
    pub fn path(&self) -> &'a str {
        &self.entry.path
    }

    /// Returns the uncompressed size in bytes.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.entry.size
    }

    /// Returns `true` if the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry.size == 0
    }

    /// Returns the last modification time.
    #[must_use]
    pub fn modified(&self) -> SystemTime {
        self.entry.modified
    }

    /// Returns the underlying archive entry.
    #[must_use]
    pub fn entry(&self) -> &'a ArchiveEntry {
        self.entry
    }

    /// Decompresses the file and returns a reader over its bytes.
    ///
    /// # Errors
    ///
    /// Returns any error of [`EntrySource::open`].
    pub fn open_read(&self) -> Result<EntryReader> {
        self.source.open(self.entry)
    }
}

impl fmt::Debug for ArchiveFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchiveFile")
            .field("name", &self.name)
            .field("path", &self.entry.path)
            .field("len", &self.entry.size)
            .finish_non_exhaustive()
    }
}

/// A directory marker stored in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveDirectory<'a> {
    name: &'a str,
    modified: SystemTime,
}

impl<'a> ArchiveDirectory<'a> {
    /// Returns the directory name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the marker's modification time.
    #[must_use]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

/// Record for a path that resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundInfo {
    path: String,
}

impl NotFoundInfo {
    /// Returns the normalized path that was queried.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Result of listing a directory.
///
/// An existing directory with no children is `Listing` with an empty
/// vector, never `NotFound`.
#[derive(Debug, Clone)]
pub enum DirectoryContents<'a> {
    /// Direct children in the archive's native entry order.
    Listing(Vec<FileInfo<'a>>),
    /// The directory does not exist.
    NotFound,
}

impl<'a> DirectoryContents<'a> {
    /// Returns `true` unless this is `NotFound`.
    #[must_use]
    pub const fn exists(&self) -> bool {
        matches!(self, Self::Listing(_))
    }

    /// Returns the children, or an empty slice for `NotFound`.
    #[must_use]
    pub fn as_slice(&self) -> &[FileInfo<'a>] {
        match self {
            Self::Listing(children) => children,
            Self::NotFound => &[],
        }
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no children, or no directory.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Iterates over the children.
    pub fn iter(&self) -> std::slice::Iter<'_, FileInfo<'a>> {
        self.as_slice().iter()
    }

    /// Returns the children, or `None` for `NotFound`.
    #[must_use]
    pub fn into_listing(self) -> Option<Vec<FileInfo<'a>>> {
        match self {
            Self::Listing(children) => Some(children),
            Self::NotFound => None,
        }
    }
}

impl<'a> IntoIterator for DirectoryContents<'a> {
    type Item = FileInfo<'a>;
    type IntoIter = std::vec::IntoIter<FileInfo<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_listing().unwrap_or_default().into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s DirectoryContents<'a> {
    type Item = &'s FileInfo<'a>;
    type IntoIter = std::slice::Iter<'s, FileInfo<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_file("Dir/file.txt", b"abc")
            .with_directory("Dir")
    }

    #[test]
    fn test_file_record() {
        let source = source();
        let entry = source.find("Dir/file.txt").unwrap();
        let info = FileInfo::from_entry(entry, &source);

        assert!(info.exists());
        assert!(!info.is_directory());
        assert_eq!(info.kind(), Some(EntryKind::File));
        assert_eq!(info.name(), "file.txt");
        assert_eq!(info.len(), Some(3));
        assert_eq!(info.modified(), Some(entry.modified));
        assert_eq!(info.open_read().unwrap().into_inner(), b"abc");
    }

    #[test]
    fn test_directory_record() {
        let source = source();
        let entry = source.find("Dir/").unwrap();
        let info = FileInfo::from_entry(entry, &source);

        assert!(info.exists());
        assert!(info.is_directory());
        assert_eq!(info.name(), "Dir");
        assert_eq!(info.len(), None);
        assert!(info.modified().is_some());
    }

    #[test]
    fn test_directory_record_cannot_be_read() {
        let source = source();
        let info = FileInfo::from_entry(source.find("Dir/").unwrap(), &source);
        let err = info.open_read().unwrap_err();
        assert!(matches!(err, ZipFsError::DirectoryStream { ref name } if name == "Dir"));
    }

    #[test]
    fn test_not_found_record() {
        let info = FileInfo::not_found("missing.txt");
        assert!(!info.exists());
        assert!(!info.is_directory());
        assert_eq!(info.kind(), None);
        assert_eq!(info.name(), "missing.txt");
        assert_eq!(info.len(), None);
        assert_eq!(info.modified(), None);
        assert!(matches!(
            info.open_read(),
            Err(ZipFsError::NotFound { ref path }) if path == "missing.txt"
        ));
    }

    #[test]
    fn test_directory_contents_listing() {
        let contents = DirectoryContents::Listing(Vec::new());
        assert!(contents.exists());
        assert!(contents.is_empty());
        assert_eq!(contents.into_listing().map(|v| v.len()), Some(0));
    }

    #[test]
    fn test_directory_contents_not_found() {
        let contents = DirectoryContents::NotFound;
        assert!(!contents.exists());
        assert_eq!(contents.len(), 0);
        assert_eq!(contents.iter().count(), 0);
        assert!(contents.into_listing().is_none());
    }

    #[test]
    fn test_archive_file_debug() {
        let source = source();
        let info = FileInfo::from_entry(source.find("Dir/file.txt").unwrap(), &source);
        let debug = format!("{info:?}");
        assert!(debug.contains("ArchiveFile"));
        assert!(debug.contains("file.txt"));
    }
}
