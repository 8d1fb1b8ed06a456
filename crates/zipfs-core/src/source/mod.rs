//! Entry sources: the archive containers a provider reads from.
//!
//! The resolver needs three things from a container: the entries in their
//! native order, exact-match lookup by stored path, and a way to open an
//! entry for reading. [`EntrySource`] is that boundary.

pub mod memory;
pub mod zip;

pub use self::memory::MemorySource;
pub use self::zip::ZipSource;

use crate::Result;
use crate::entry::ArchiveEntry;
use crate::io::EntryReader;

/// A read-only container of archive entries.
///
/// Implementations must be immutable for their whole lifetime: the
/// provider relies on `entries` returning the same slice, in the same
/// order, on every call.
pub trait EntrySource: Send + Sync {
    /// Returns every entry in the container's native order.
    fn entries(&self) -> &[ArchiveEntry];

    /// Returns the entry stored under exactly `path`.
    ///
    /// Matching is case-sensitive and byte-exact; no normalization is
    /// applied.
    fn find(&self, path: &str) -> Option<&ArchiveEntry>;

    /// Opens an entry for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry is a directory marker, does not belong
    /// to this source, exceeds the read limit, or cannot be decompressed.
    fn open(&self, entry: &ArchiveEntry) -> Result<EntryReader>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn assert_object_safe(_: &dyn EntrySource) {}

    #[test]
    fn test_trait_object() {
        let source = MemorySource::new().with_file("a.txt", b"a");
        assert_object_safe(&source);

        let dyn_source: &dyn EntrySource = &source;
        assert_eq!(dyn_source.entries().len(), 1);
        assert!(dyn_source.find("a.txt").is_some());
    }
}
