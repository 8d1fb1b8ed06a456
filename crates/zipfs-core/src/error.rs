//! Error types for archive-backed filesystem operations.
//!
//! Query misses are not errors: `get_info` and `list_children` report them
//! as [`FileInfo::NotFound`](crate::FileInfo::NotFound) and
//! [`DirectoryContents::NotFound`](crate::DirectoryContents::NotFound).
//! The variants here cover the two failure points that remain: building a
//! provider and opening a read stream.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `ZipFsError`.
pub type Result<T> = std::result::Result<T, ZipFsError>;

/// Errors that can occur while opening an archive or reading an entry.
#[derive(Error, Debug)]
pub enum ZipFsError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive file could not be opened.
    #[error("failed to open archive {}: {source}", path.display())]
    OpenArchive {
        /// Path that was passed to the constructor.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Archive container is corrupted or cannot be parsed.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// No archive was supplied to the provider constructor.
    #[error("no archive supplied")]
    NullArchive,

    /// Archive holds more entries than the configured limit.
    #[error("archive has too many entries ({count} > {max})")]
    TooManyEntries {
        /// Number of entries in the central directory.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A read stream was requested on a directory.
    #[error("cannot create a stream for a directory: {name}")]
    DirectoryStream {
        /// Name of the directory.
        name: String,
    },

    /// A read stream was requested on a path that does not exist.
    #[error("file not found: {path}")]
    NotFound {
        /// Normalized path that failed to resolve.
        path: String,
    },

    /// Entry is larger than the configured read limit.
    #[error("entry too large to read: {path} ({size} > {max} bytes)")]
    EntryTooLarge {
        /// Stored entry path.
        path: String,
        /// Uncompressed size in bytes.
        size: u64,
        /// Configured maximum in bytes.
        max: u64,
    },
}

impl ZipFsError {
    /// Returns `true` if this error prevented a provider from being built.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipfs_core::ZipFsError;
    ///
    /// assert!(ZipFsError::NullArchive.is_construction_failure());
    ///
    /// let err = ZipFsError::DirectoryStream {
    ///     name: "Dir2".to_string(),
    /// };
    /// assert!(!err.is_construction_failure());
    /// ```
    #[must_use]
    pub const fn is_construction_failure(&self) -> bool {
        matches!(
            self,
            Self::OpenArchive { .. }
                | Self::InvalidArchive(_)
                | Self::NullArchive
                | Self::TooManyEntries { .. }
        )
    }

    /// Returns `true` if this error came from opening a read stream.
    ///
    /// `Io` errors raised while decompressing are not classified here.
    #[must_use]
    pub const fn is_stream_failure(&self) -> bool {
        matches!(
            self,
            Self::DirectoryStream { .. } | Self::NotFound { .. } | Self::EntryTooLarge { .. }
        )
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipfs_core::ZipFsError;
    ///
    /// let err = ZipFsError::InvalidArchive("bad header".to_string());
    /// assert_eq!(err.context(), Some("bad header"));
    ///
    /// assert_eq!(ZipFsError::NullArchive.context(), None);
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::OpenArchive { path, .. } => path.to_str(),
            Self::InvalidArchive(msg) => Some(msg),
            Self::DirectoryStream { name } => Some(name),
            Self::NotFound { path } | Self::EntryTooLarge { path, .. } => Some(path),
            _ => None,
        }
    }
}
