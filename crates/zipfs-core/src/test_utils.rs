//! Test utilities for building ZIP archives in memory.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::write::SimpleFileOptions;

/// Contents of `file1.txt` in [`reference_archive`].
pub const FILE1_CONTENT: &[u8] = b"Hello zip";

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Paths ending in `/` become
/// directory markers; everything else is stored uncompressed.
///
/// # Examples
///
/// ```
/// use zipfs_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(vec![("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    entries
        .into_iter()
        .fold(ZipTestBuilder::new(), |builder, (path, data)| {
            if path.ends_with('/') {
                builder.add_directory(path)
            } else {
                builder.add_file(path, data)
            }
        })
        .build()
}

/// Builds the reference layout used across the test-suite:
///
/// ```text
/// file1.txt                    (9 bytes)
/// Dir1/
/// Dir1/Dir1.1/
/// Dir1/Dir1.1/File_empty.txt   (0 bytes)
/// Dir2/
/// ```
#[must_use]
pub fn reference_archive() -> Vec<u8> {
    ZipTestBuilder::new()
        .add_file("file1.txt", FILE1_CONTENT)
        .add_directory("Dir1/")
        .add_directory("Dir1/Dir1.1/")
        .add_file("Dir1/Dir1.1/File_empty.txt", b"")
        .add_directory("Dir2/")
        .build()
}

/// Builder for creating ZIP test archives entry by entry.
///
/// Entries are written in call order, which is the order a provider
/// lists them in.
///
/// # Examples
///
/// ```
/// use zipfs_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_file("file.txt", b"content")
///     .add_directory("dir/")
///     .build();
/// ```
pub struct ZipTestBuilder {
    zip: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a stored (uncompressed) file.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(0o644);
        self.write_file(path, data, options)
    }

    /// Adds a deflate-compressed file.
    #[must_use]
    pub fn add_deflated_file(self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);
        self.write_file(path, data, options)
    }

    /// Adds a stored file with an explicit modification time.
    #[must_use]
    pub fn add_file_with_time(self, path: &str, data: &[u8], modified: zip::DateTime) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .last_modified_time(modified);
        self.write_file(path, data, options)
    }

    /// Adds a directory marker.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    /// Builds and returns the ZIP archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }

    fn write_file(mut self, path: &str, data: &[u8], options: SimpleFileOptions) -> Self {
        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_zip() {
        let zip_data = create_test_zip(vec![("file.txt", b"hello")]);
        assert!(!zip_data.is_empty());
    }

    #[test]
    fn test_reference_archive() {
        let archive = zip::ZipArchive::new(Cursor::new(reference_archive())).unwrap();
        assert_eq!(archive.len(), 5);
    }

    #[test]
    fn test_zip_builder() {
        let zip_data = ZipTestBuilder::new()
            .add_file("file.txt", b"content")
            .add_directory("dir/")
            .build();
        assert!(!zip_data.is_empty());
    }
}
