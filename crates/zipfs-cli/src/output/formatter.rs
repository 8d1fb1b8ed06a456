//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;
use zipfs_core::FileInfo;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the children of a directory
    fn format_listing(
        &self,
        path: &str,
        children: &[FileInfo<'_>],
        long: bool,
        human_readable: bool,
    ) -> Result<()>;

    /// Format what a single path resolves to
    fn format_info(&self, path: &str, info: &FileInfo<'_>) -> Result<()>;

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);
}

/// Serializable view of one resolved entry.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EntryRecord {
    pub name: String,
    pub kind: EntryKindName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Seconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKindName {
    File,
    Directory,
}

impl EntryRecord {
    /// Returns `None` for `NotFound`.
    pub fn from_info(info: &FileInfo<'_>) -> Option<Self> {
        let kind = match info {
            FileInfo::File(_) => EntryKindName::File,
            FileInfo::Directory(_) => EntryKindName::Directory,
            FileInfo::NotFound(_) => return None,
        };

        Some(Self {
            name: info.name().to_string(),
            kind,
            size: info.len(),
            modified: info.modified().and_then(unix_seconds),
        })
    }
}

/// Seconds since the Unix epoch, or `None` for earlier times.
pub fn unix_seconds(time: SystemTime) -> Option<u64> {
    time.duration_since(UNIX_EPOCH).ok().map(|d| d.as_secs())
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use zipfs_core::ProviderConfig;
    use zipfs_core::ZipFileProvider;
    use zipfs_core::source::MemorySource;

    #[test]
    fn test_entry_record_from_file() {
        let source = MemorySource::new().with_file("a/b.txt", b"abc");
        let provider = ZipFileProvider::new(source, &ProviderConfig::default());

        let record = EntryRecord::from_info(&provider.get_info("a/b.txt")).unwrap();
        assert_eq!(record.name, "b.txt");
        assert_eq!(record.kind, EntryKindName::File);
        assert_eq!(record.size, Some(3));
        // 1980-01-01, the earliest ZIP timestamp
        assert_eq!(record.modified, Some(315_532_800));
    }

    #[test]
    fn test_entry_record_from_directory_and_miss() {
        let source = MemorySource::new().with_directory("a");
        let provider = ZipFileProvider::new(source, &ProviderConfig::default());

        let record = EntryRecord::from_info(&provider.get_info("a")).unwrap();
        assert_eq!(record.kind, EntryKindName::Directory);
        assert_eq!(record.size, None);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"kind\":\"directory\""));
        assert!(!json.contains("size"));

        assert!(EntryRecord::from_info(&provider.get_info("nope")).is_none());
    }

    #[test]
    fn test_json_output_error_envelope() {
        let output = JsonOutput::<()>::error("cat", "boom");
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("\"error\":\"boom\""));
        assert!(!json.contains("data"));
    }
}
