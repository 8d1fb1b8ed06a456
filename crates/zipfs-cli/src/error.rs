//! Error conversion utilities for CLI.
//!
//! Converts zipfs-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use zipfs_core::ZipFsError;

/// Converts `ZipFsError` to user-friendly anyhow error with context
pub fn convert_zipfs_error(err: ZipFsError, archive: &Path) -> anyhow::Error {
    match err {
        ZipFsError::Io(io_err) => {
            anyhow!(
                "I/O error while reading '{}': {}",
                archive.display(),
                io_err
            )
        }
        ZipFsError::OpenArchive { path, source } => {
            anyhow!(
                "Cannot open archive '{}': {}\n\
                 HINT: Check that the path exists and is readable.",
                path.display(),
                source
            )
        }
        ZipFsError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The file may be corrupted, truncated, or not a ZIP archive.",
                archive.display(),
                reason
            )
        }
        ZipFsError::TooManyEntries { count, max } => {
            anyhow!(
                "Archive '{}' has {} entries, more than the limit of {}",
                archive.display(),
                count,
                max
            )
        }
        ZipFsError::DirectoryStream { name } => {
            anyhow!(
                "'{}' in '{}' is a directory\n\
                 HINT: Use `zipfs ls` to list its contents.",
                name,
                archive.display()
            )
        }
        ZipFsError::NotFound { path } => {
            anyhow!("File not found in '{}': {}", archive.display(), path)
        }
        ZipFsError::EntryTooLarge { path, size, max } => {
            anyhow!(
                "'{}' in '{}' is {} bytes, larger than the read limit of {} bytes\n\
                 HINT: Use --max-read-size to raise the limit.",
                path,
                archive.display(),
                size,
                max
            )
        }
        ZipFsError::NullArchive => anyhow::Error::from(err)
            .context(format!("Error processing archive '{}'", archive.display())),
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ZipFsError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_zipfs_error(e, archive))
}
