//! Virtual directory resolution over a flat entry list.
//!
//! [`ZipFileProvider`] answers two queries against an [`EntrySource`]:
//! what is stored at a path ([`get_info`](ZipFileProvider::get_info)), and
//! what lives directly under a directory
//! ([`list_children`](ZipFileProvider::list_children)).
//!
//! The two queries apply different existence rules. A path
//! resolves in `get_info` whenever an entry (or a directory marker) is
//! stored under exactly that path. A non-root directory is listable only
//! when its marker entry exists; files nested under a path without a
//! marker do not make it listable.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use tracing::debug;
use tracing::trace;

use crate::ProviderConfig;
use crate::Result;
use crate::ZipFsError;
use crate::change::ChangeToken;
use crate::change::NullChangeToken;
use crate::config::LookupStrategy;
use crate::index::ChildIndex;
use crate::info::DirectoryContents;
use crate::info::FileInfo;
use crate::source::EntrySource;
use crate::source::ZipSource;
use crate::types::normalize;

/// Host-facing file provider interface.
///
/// Unlike the inherent methods on [`ZipFileProvider`], paths are optional
/// here: hosts may pass an unset path, which never resolves.
pub trait FileProvider {
    /// Resolves a path. `None` is always `NotFound`.
    fn file_info(&self, subpath: Option<&str>) -> FileInfo<'_>;

    /// Lists a directory. `None` is always `NotFound`.
    fn directory_contents(&self, subpath: Option<&str>) -> DirectoryContents<'_>;

    /// Returns a change token for `filter`.
    fn watch(&self, filter: &str) -> &'static dyn ChangeToken;
}

/// Read-only, case-sensitive filesystem view of a ZIP archive.
///
/// The provider holds no mutable state: every query takes `&self`, and a
/// provider over a `Send` reader can be shared between threads.
///
/// # Examples
///
/// ```no_run
/// use zipfs_core::ZipFileProvider;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ZipFileProvider::open("test1.zip")?;
///
/// let info = provider.get_info("/file1.txt");
/// assert!(info.exists());
///
/// for child in &provider.list_children("/") {
///     println!("{} (directory: {})", child.name(), child.is_directory());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ZipFileProvider<S> {
    source: S,
    index: Option<ChildIndex>,
}

impl ZipFileProvider<ZipSource<BufReader<File>>> {
    /// Opens a ZIP file on disk with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ZipFsError::Io` if the file cannot be opened, or
    /// `ZipFsError::InvalidArchive` if it is not a readable ZIP archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, &ProviderConfig::default())
    }

    /// Opens a ZIP file on disk.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open), plus `ZipFsError::TooManyEntries`.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &ProviderConfig) -> Result<Self> {
        let source = ZipSource::open(path, config)?;
        Ok(Self::new(source, config))
    }
}

impl<R: Read + Seek + Send> ZipFileProvider<ZipSource<R>> {
    /// Reads a ZIP archive from any seekable reader.
    ///
    /// # Errors
    ///
    /// Returns `ZipFsError::InvalidArchive` or `ZipFsError::TooManyEntries`.
    pub fn from_reader(reader: R, config: &ProviderConfig) -> Result<Self> {
        let source = ZipSource::new(reader, config)?;
        Ok(Self::new(source, config))
    }

    /// Wraps an archive opened by the caller.
    ///
    /// # Errors
    ///
    /// Returns `ZipFsError::NullArchive` when `archive` is `None`, otherwise
    /// any error of [`ZipSource::from_archive`].
    pub fn from_archive(
        archive: Option<::zip::ZipArchive<R>>,
        config: &ProviderConfig,
    ) -> Result<Self> {
        let archive = archive.ok_or(ZipFsError::NullArchive)?;
        let source = ZipSource::from_archive(archive, config)?;
        Ok(Self::new(source, config))
    }
}

impl<S: EntrySource> ZipFileProvider<S> {
    /// Creates a provider over `source`.
    ///
    /// With [`LookupStrategy::Indexed`] the children index is built here,
    /// once; the source must not change afterwards.
    #[must_use]
    pub fn new(source: S, config: &ProviderConfig) -> Self {
        let index = match config.lookup {
            LookupStrategy::Scan => None,
            LookupStrategy::Indexed => Some(ChildIndex::build(source.entries())),
        };

        debug!(
            entries = source.entries().len(),
            strategy = ?config.lookup,
            "created ZIP file provider"
        );

        Self { source, index }
    }

    /// Returns the underlying entry source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the lookup strategy in use.
    #[must_use]
    pub fn lookup_strategy(&self) -> LookupStrategy {
        if self.index.is_some() {
            LookupStrategy::Indexed
        } else {
            LookupStrategy::Scan
        }
    }

    /// Resolves `subpath` to a file or directory record.
    ///
    /// The path is normalized, then looked up exactly as given and, failing
    /// that, with a trailing `/` so directories resolve without one. The
    /// empty path and the root are never resolvable here; list the root
    /// with [`list_children`](Self::list_children) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipfs_core::ProviderConfig;
    /// use zipfs_core::ZipFileProvider;
    /// use zipfs_core::source::MemorySource;
    ///
    /// let source = MemorySource::new().with_directory("Dir2");
    /// let provider = ZipFileProvider::new(source, &ProviderConfig::default());
    ///
    /// assert!(provider.get_info("/Dir2").is_directory());
    /// assert!(provider.get_info("Dir2/").is_directory());
    /// assert!(!provider.get_info("/").exists());
    /// ```
    pub fn get_info(&self, subpath: &str) -> FileInfo<'_> {
        if subpath.is_empty() {
            trace!("get_info on empty path");
            return FileInfo::not_found(subpath);
        }

        let path = normalize(subpath);
        if path.is_root() {
            trace!(subpath, "get_info on root");
            return FileInfo::not_found(path.into_string());
        }

        let source: &dyn EntrySource = &self.source;
        let found = source
            .find(path.as_str())
            .or_else(|| source.find(&path.as_marker()));

        match found {
            Some(entry) => {
                trace!(path = %path, entry = %entry.path, "resolved path");
                FileInfo::from_entry(entry, source)
            }
            None => {
                trace!(path = %path, "path not found");
                FileInfo::not_found(path.into_string())
            }
        }
    }

    /// Lists the direct children of the directory at `subpath`.
    ///
    /// The empty path and `/` list the root, which always exists. Any other
    /// directory exists only if its marker entry (`path/`) is stored.
    /// Children come back in the archive's native entry order.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipfs_core::ProviderConfig;
    /// use zipfs_core::ZipFileProvider;
    /// use zipfs_core::source::MemorySource;
    ///
    /// let source = MemorySource::new()
    ///     .with_directory("Dir2")
    ///     .with_file("Loose/file.txt", b"");
    /// let provider = ZipFileProvider::new(source, &ProviderConfig::default());
    ///
    /// let empty = provider.list_children("/Dir2");
    /// assert!(empty.exists());
    /// assert!(empty.is_empty());
    ///
    /// // No `Loose/` marker, so `Loose` is not a listable directory.
    /// assert!(!provider.list_children("/Loose").exists());
    /// ```
    pub fn list_children(&self, subpath: &str) -> DirectoryContents<'_> {
        let target = normalize(subpath);

        if !target.is_root() && self.source.find(&target.as_marker()).is_none() {
            trace!(path = %target, "directory not found");
            return DirectoryContents::NotFound;
        }

        let source: &dyn EntrySource = &self.source;
        let entries = source.entries();

        let children: Vec<FileInfo<'_>> = match &self.index {
            Some(index) => index
                .children_of(target.as_str())
                .iter()
                .map(|&position| FileInfo::from_entry(&entries[position], source))
                .collect(),
            None => entries
                .iter()
                .filter(|entry| entry.classify().parent == target.as_str())
                .map(|entry| FileInfo::from_entry(entry, source))
                .collect(),
        };

        trace!(path = %target, children = children.len(), "listed directory");
        DirectoryContents::Listing(children)
    }

    /// Returns the change token for `filter`.
    ///
    /// Archives never change under a provider, so this is always the
    /// shared [`NullChangeToken`].
    pub fn watch(&self, _filter: &str) -> &'static NullChangeToken {
        NullChangeToken::singleton()
    }
}

impl<S: EntrySource> FileProvider for ZipFileProvider<S> {
    fn file_info(&self, subpath: Option<&str>) -> FileInfo<'_> {
        subpath.map_or_else(|| FileInfo::not_found(""), |path| self.get_info(path))
    }

    fn directory_contents(&self, subpath: Option<&str>) -> DirectoryContents<'_> {
        subpath.map_or(DirectoryContents::NotFound, |path| self.list_children(path))
    }

    fn watch(&self, filter: &str) -> &'static dyn ChangeToken {
        Self::watch(self, filter)
    }
}
