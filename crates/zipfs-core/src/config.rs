//! Provider configuration.

/// How directory listings find the children of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStrategy {
    /// Scan every archive entry on each listing.
    #[default]
    Scan,
    /// Build a parent-to-children index once, when the provider is created.
    Indexed,
}

/// Configuration for a [`ZipFileProvider`](crate::ZipFileProvider).
///
/// # Examples
///
/// ```
/// use zipfs_core::LookupStrategy;
/// use zipfs_core::ProviderConfig;
///
/// let config = ProviderConfig::default();
/// assert_eq!(config.lookup, LookupStrategy::Scan);
///
/// let custom = ProviderConfig {
///     max_read_size: 16 * 1024 * 1024, // 16 MB
///     ..ProviderConfig::indexed()
/// };
/// assert_eq!(custom.lookup, LookupStrategy::Indexed);
/// ```
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Strategy used by directory listings.
    pub lookup: LookupStrategy,

    /// Maximum number of entries accepted when an archive is loaded.
    pub max_entries: usize,

    /// Maximum uncompressed size of an entry opened for reading, in bytes.
    pub max_read_size: u64,
}

impl Default for ProviderConfig {
    /// Default values:
    /// - `lookup`: `Scan`
    /// - `max_entries`: 1,000,000
    /// - `max_read_size`: 256 MB
    fn default() -> Self {
        Self {
            lookup: LookupStrategy::Scan,
            max_entries: 1_000_000,
            max_read_size: 256 * 1024 * 1024, // 256 MB
        }
    }
}

impl ProviderConfig {
    /// Creates a configuration that indexes children at construction.
    ///
    /// Worth it for large archives that are listed many times.
    #[must_use]
    pub fn indexed() -> Self {
        Self {
            lookup: LookupStrategy::Indexed,
            ..Default::default()
        }
    }
}
