//! Archive entry kind enumeration.

/// Kind of an archive entry as seen through the virtual filesystem.
///
/// ZIP containers have no native directory object. An entry is a
/// [`Directory`](Self::Directory) only when its stored path ends in `/`
/// (a directory marker); everything else is a [`File`](Self::File).
///
/// # Examples
///
/// ```
/// use zipfs_core::types::EntryKind;
///
/// assert!(EntryKind::of("Dir2/").is_directory());
/// assert!(EntryKind::of("Dir1/file.txt").is_file());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file entry.
    File,

    /// Directory marker entry.
    Directory,
}

impl EntryKind {
    /// Returns the kind of an entry stored under `path`.
    #[must_use]
    pub fn of(path: &str) -> Self {
        if path.ends_with('/') {
            Self::Directory
        } else {
            Self::File
        }
    }

    /// Returns `true` if this is a regular file.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    /// Returns `true` if this is a directory.
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_file() {
        let kind = EntryKind::of("file1.txt");
        assert!(kind.is_file());
        assert!(!kind.is_directory());
    }

    #[test]
    fn test_entry_kind_directory() {
        let kind = EntryKind::of("Dir1/Dir1.1/");
        assert!(!kind.is_file());
        assert!(kind.is_directory());
    }

    #[test]
    fn test_entry_kind_backslash_is_not_a_marker() {
        // Entry sources convert `\` before classification.
        assert!(EntryKind::of("Dir1\\").is_file());
    }

    #[test]
    fn test_entry_kind_empty_path() {
        assert!(EntryKind::of("").is_file());
    }

    #[test]
    fn test_entry_kind_debug_format() {
        assert_eq!(format!("{:?}", EntryKind::File), "File");
        assert_eq!(format!("{:?}", EntryKind::Directory), "Directory");
    }
}
