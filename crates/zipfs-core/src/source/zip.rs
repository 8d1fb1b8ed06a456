//! ZIP-backed entry source.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Duration;
use std::time::SystemTime;

use tracing::debug;
use tracing::warn;

use crate::ProviderConfig;
use crate::Result;
use crate::ZipFsError;
use crate::entry::ArchiveEntry;
use crate::io::EntryReader;

use super::EntrySource;

/// Seconds from the Unix epoch to 1980-01-01T00:00:00Z.
const DOS_EPOCH_SECS: u64 = 315_532_800;

/// Returns 1980-01-01T00:00:00Z, the earliest time a ZIP header can encode.
///
/// Entries without a usable timestamp report this instant.
#[must_use]
pub fn dos_epoch() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(DOS_EPOCH_SECS)
}

/// Entry source reading a ZIP container through the `zip` crate.
///
/// The central directory is read once, when the source is created. The
/// archive itself stays behind a mutex and is only touched again when an
/// entry is opened, so queries from several threads never block each other.
///
/// # Examples
///
/// ```no_run
/// use zipfs_core::ProviderConfig;
/// use zipfs_core::source::EntrySource;
/// use zipfs_core::source::ZipSource;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let source = ZipSource::open("test1.zip", &ProviderConfig::default())?;
/// for entry in source.entries() {
///     println!("{}: {} bytes", entry.path, entry.size);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ZipSource<R> {
    archive: Mutex<::zip::ZipArchive<R>>,
    entries: Vec<ArchiveEntry>,
    by_path: HashMap<String, usize>,
    max_read_size: u64,
}

impl ZipSource<BufReader<File>> {
    /// Opens a ZIP file on disk.
    ///
    /// # Errors
    ///
    /// Returns `ZipFsError::OpenArchive` if the file cannot be opened, or
    /// any error of [`ZipSource::new`].
    pub fn open<P: AsRef<Path>>(path: P, config: &ProviderConfig) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening ZIP archive");
        let file = File::open(path).map_err(|source| ZipFsError::OpenArchive {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufReader::new(file), config)
    }
}

impl<R: Read + Seek> ZipSource<R> {
    /// Reads the central directory from `reader`.
    ///
    /// # Errors
    ///
    /// Returns `ZipFsError::InvalidArchive` if the container cannot be
    /// parsed, or `ZipFsError::TooManyEntries` above `config.max_entries`.
    pub fn new(reader: R, config: &ProviderConfig) -> Result<Self> {
        let archive = ::zip::ZipArchive::new(reader)
            .map_err(|e| ZipFsError::InvalidArchive(format!("failed to open ZIP archive: {e}")))?;
        Self::from_archive(archive, config)
    }

    /// Wraps an already opened `zip` archive.
    ///
    /// # Errors
    ///
    /// Returns `ZipFsError::InvalidArchive` if an entry header cannot be
    /// read, or `ZipFsError::TooManyEntries` above `config.max_entries`.
    pub fn from_archive(
        mut archive: ::zip::ZipArchive<R>,
        config: &ProviderConfig,
    ) -> Result<Self> {
        let count = archive.len();
        if count > config.max_entries {
            return Err(ZipFsError::TooManyEntries {
                count,
                max: config.max_entries,
            });
        }

        let mut entries = Vec::with_capacity(count);
        let mut by_path = HashMap::with_capacity(count);

        for i in 0..count {
            let file = archive.by_index_raw(i).map_err(|e| {
                ZipFsError::InvalidArchive(format!("failed to read ZIP entry {i}: {e}"))
            })?;

            let modified = file.last_modified().and_then(to_system_time).unwrap_or_else(dos_epoch);
            let entry = ArchiveEntry::new(file.name().replace('\\', "/"), file.size(), modified, i);

            match by_path.entry(entry.path.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(_) => {
                    warn!(
                        path = %entry.path,
                        index = i,
                        "duplicate entry name, keeping first occurrence"
                    );
                }
            }
            entries.push(entry);
        }

        debug!(entries = count, "loaded ZIP central directory");

        Ok(Self {
            archive: Mutex::new(archive),
            entries,
            by_path,
            max_read_size: config.max_read_size,
        })
    }
}

impl<R: Read + Seek + Send> EntrySource for ZipSource<R> {
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

        let own = self
            .entries
            .get(entry.index)
            .filter(|own| own.path == entry.path)
            .ok_or_else(|| ZipFsError::NotFound {
                path: entry.path.clone(),
            })?;

        if own.size > self.max_read_size {
            return Err(ZipFsError::EntryTooLarge {
                path: own.path.clone(),
                size: own.size,
                max: self.max_read_size,
            });
        }

        // by_index reseeks on every call; a poisoned lock holds no partial read.
        let mut archive = self.archive.lock().unwrap_or_else(PoisonError::into_inner);
        let file = archive.by_index(own.index).map_err(|e| {
            ZipFsError::InvalidArchive(format!("failed to open ZIP entry {}: {e}", own.path))
        })?;

        let capacity = usize::try_from(own.size).unwrap_or(0);
        let mut data = Vec::with_capacity(capacity);
        // One byte past the limit detects headers that understate the size.
        file.take(self.max_read_size.saturating_add(1)).read_to_end(&mut data)?;

        if data.len() as u64 > self.max_read_size {
            return Err(ZipFsError::EntryTooLarge {
                path: own.path.clone(),
                size: data.len() as u64,
                max: self.max_read_size,
            });
        }

        Ok(EntryReader::new(data))
    }
}

impl<R> std::fmt::Debug for ZipSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipSource")
            .field("entries", &self.entries.len())
            .field("max_read_size", &self.max_read_size)
            .finish_non_exhaustive()
    }
}

/// Converts a DOS date-time, read as UTC, to a `SystemTime`.
///
/// Returns `None` for fields `time` rejects or instants before 1970.
#[allow(deprecated)]
fn to_system_time(dt: ::zip::DateTime) -> Option<SystemTime> {
    let timestamp = dt.to_time().ok()?.unix_timestamp();
    let secs = u64::try_from(timestamp).ok()?;
    SystemTime::UNIX_EPOCH.checked_add(Duration::from_secs(secs))
}
