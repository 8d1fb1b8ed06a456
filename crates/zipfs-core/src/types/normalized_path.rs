//! Canonical path keys for archive lookups.

use std::borrow::Cow;
use std::fmt;

/// Separator used by archive entry paths.
pub const SEPARATOR: char = '/';

/// A caller-supplied path in the form archive entries are stored under.
///
/// A `NormalizedPath` uses `/` as its only separator and has no leading
/// or trailing separator. The empty path is the archive root.
///
/// Normalization is purely structural: repeated internal separators are
/// kept, `.` and `..` are not resolved, nothing is percent-decoded, and
/// comparisons stay case-sensitive. A `NormalizedPath` can only be built
/// through [`normalize`], so every value is canonical.
///
/// # Examples
///
/// ```
/// use zipfs_core::types::normalize;
///
/// let path = normalize("/Dir1\\Dir1.1/");
/// assert_eq!(path.as_str(), "Dir1/Dir1.1");
/// assert_eq!(path.as_marker(), "Dir1/Dir1.1/");
///
/// assert!(normalize("/").is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedPath(String);

/// Normalizes a caller-supplied path.
///
/// Every `\` is turned into `/`, then leading and trailing separators are
/// trimmed. Total and idempotent: every string maps to exactly one
/// canonical form, and normalizing a canonical form returns it unchanged.
#[must_use]
pub fn normalize(input: &str) -> NormalizedPath {
    let unified = if input.contains('\\') {
        Cow::Owned(input.replace('\\', "/"))
    } else {
        Cow::Borrowed(input)
    };

    NormalizedPath(unified.trim_matches(SEPARATOR).to_owned())
}

impl NormalizedPath {
    /// Returns the root path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the archive root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the key a directory marker for this path is stored under.
    ///
    /// The root has no marker entry; its marker key is `/`, which a
    /// well-formed archive never contains.
    #[must_use]
    pub fn as_marker(&self) -> String {
        let mut marker = String::with_capacity(self.0.len() + 1);
        marker.push_str(&self.0);
        marker.push(SEPARATOR);
        marker
    }

    /// Consumes the path and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for NormalizedPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NormalizedPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
