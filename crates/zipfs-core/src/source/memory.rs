//! In-memory entry source.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::SystemTime;

use crate::Result;
use crate::ZipFsError;
use crate::entry::ArchiveEntry;
use crate::io::EntryReader;

use super::EntrySource;
use super::zip::dos_epoch;

/// Entry source holding paths and payloads in memory.
///
/// Useful for callers that already decoded an archive, and for tests that
/// need an exact entry order without writing a ZIP file.
///
/// # Examples
///
/// ```
/// use zipfs_core::ProviderConfig;
/// use zipfs_core::ZipFileProvider;
/// use zipfs_core::source::MemorySource;
///
/// let source = MemorySource::new()
///     .with_directory("docs/")
///     .with_file("docs/readme.txt", b"hello");
///
/// let provider = ZipFileProvider::new(source, &ProviderConfig::default());
/// assert_eq!(provider.list_children("docs").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<ArchiveEntry>,
    payloads: Vec<Vec<u8>>,
    by_path: HashMap<String, usize>,
}

impl MemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a file entry.
    #[must_use]
    pub fn with_file(self, path: &str, data: &[u8]) -> Self {
        self.with_entry(path, data.to_vec(), dos_epoch())
    }

    /// Appends a directory marker. A trailing `/` is added when missing.
    #[must_use]
    pub fn with_directory(self, path: &str) -> Self {
        let marker = if path.ends_with('/') || path.ends_with('\\') {
            path.to_string()
        } else {
            format!("{path}/")
        };
        self.with_entry(&marker, Vec::new(), dos_epoch())
    }

    /// Appends an entry with an explicit modification time.
    ///
    /// `\` in `path` is stored as `/`. A repeated path is kept in the entry
    /// list, but lookups resolve to its first occurrence.
    #[must_use]
    pub fn with_entry(mut self, path: &str, data: Vec<u8>, modified: SystemTime) -> Self {
        let index = self.entries.len();
        let entry = ArchiveEntry::new(path.replace('\\', "/"), data.len() as u64, modified, index);

        if let Entry::Vacant(slot) = self.by_path.entry(entry.path.clone()) {
            slot.insert(index);
        }
        self.entries.push(entry);
        self.payloads.push(data);
        self
    }
}

impl EntrySource for MemorySource {
    fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    fn find(&self, path: &str) -> Option<&ArchiveEntry> {
        self.by_path.get(path).map(|&i| &self.entries[i])
    }

    fn open(&self, entry: &ArchiveEntry) -> Result<EntryReader> {
        if entry.is_directory_marker() {
            return Err(ZipFsError::DirectoryStream {
                name: entry.classify().name.to_string(),
            });
        }

        match self.entries.get(entry.index) {
            Some(own) if own.path == entry.path => {
                Ok(EntryReader::new(self.payloads[entry.index].clone()))
            }
            _ => Err(ZipFsError::NotFound {
                path: entry.path.clone(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_order() {
        let source = MemorySource::new()
            .with_file("b.txt", b"b")
            .with_directory("a")
            .with_file("a/c.txt", b"c");

        let paths: Vec<_> = source.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["b.txt", "a/", "a/c.txt"]);
    }

    #[test]
    fn test_memory_source_find_exact() {
        let source = MemorySource::new().with_file("Dir/File.txt", b"x");
        assert!(source.find("Dir/File.txt").is_some());
        assert!(source.find("dir/file.txt").is_none());
        assert!(source.find("/Dir/File.txt").is_none());
    }

    #[test]
    fn test_memory_source_backslash_paths() {
        let source = MemorySource::new().with_file("Dir\\File.txt", b"x");
        assert!(source.find("Dir/File.txt").is_some());
    }

    #[test]
    fn test_memory_source_duplicate_first_wins() {
        let source = MemorySource::new()
            .with_file("dup.txt", b"first")
            .with_file("dup.txt", b"second!");

        assert_eq!(source.entries().len(), 2);
        let entry = source.find("dup.txt").unwrap();
        assert_eq!(entry.index, 0);
        assert_eq!(source.open(entry).unwrap().into_inner(), b"first");
    }

    #[test]
    fn test_memory_source_open_directory_fails() {
        let source = MemorySource::new().with_directory("Dir2");
        let entry = source.find("Dir2/").unwrap();
        let err = source.open(entry).unwrap_err();
        assert!(matches!(err, ZipFsError::DirectoryStream { ref name } if name == "Dir2"));
    }

    #[test]
    fn test_memory_source_open_foreign_entry() {
        let source = MemorySource::new().with_file("a.txt", b"a");
        let foreign = ArchiveEntry::new("b.txt", 1, dos_epoch(), 0);
        assert!(matches!(
            source.open(&foreign),
            Err(ZipFsError::NotFound { .. })
        ));
    }
}
