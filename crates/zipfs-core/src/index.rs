//! Parent-to-children index over an entry list.

use std::collections::HashMap;

use crate::entry::ArchiveEntry;

/// Positions of every entry, grouped by the directory it lives in.
///
/// Built once from an immutable entry list. Each group keeps the entries
/// in their original order, so an indexed listing matches a full scan.
#[derive(Debug, Clone, Default)]
pub struct ChildIndex {
    children: HashMap<String, Vec<usize>>,
}

impl ChildIndex {
    /// Indexes `entries` by classified parent path.
    #[must_use]
    pub fn build(entries: &[ArchiveEntry]) -> Self {
        let mut children: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, entry) in entries.iter().enumerate() {
            children
                .entry(entry.classify().parent.to_owned())
                .or_default()
                .push(position);
        }
        Self { children }
    }

    /// Returns positions of the direct children of `parent`.
    #[must_use]
    pub fn children_of(&self, parent: &str) -> &[usize] {
        self.children.get(parent).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of distinct parent paths.
    #[must_use]
    pub fn parent_count(&self) -> usize {
        self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EntrySource;
    use crate::source::MemorySource;

    #[test]
    fn test_child_index_groups_by_parent() {
        let source = MemorySource::new()
            .with_file("file1.txt", b"Hello zip")
            .with_directory("Dir1")
            .with_directory("Dir1/Dir1.1")
            .with_file("Dir1/Dir1.1/File_empty.txt", b"")
            .with_directory("Dir2");
        let index = ChildIndex::build(source.entries());

        assert_eq!(index.children_of(""), &[0, 1, 4]);
        assert_eq!(index.children_of("Dir1"), &[2]);
        assert_eq!(index.children_of("Dir1/Dir1.1"), &[3]);
        assert!(index.children_of("Dir2").is_empty());
        assert!(index.children_of("nope").is_empty());
        assert_eq!(index.parent_count(), 3);
    }

    #[test]
    fn test_child_index_empty() {
        let index = ChildIndex::build(&[]);
        assert!(index.children_of("").is_empty());
        assert_eq!(index.parent_count(), 0);
    }
}
