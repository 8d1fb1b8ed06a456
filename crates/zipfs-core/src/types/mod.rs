//! Value types shared by the normalizer, classifier, and resolver.
//!
//! - [`NormalizedPath`]: canonical form of a caller-supplied path
//! - [`EntryKind`]: whether a stored entry is a file or a directory marker

pub mod entry_kind;
pub mod normalized_path;

pub use entry_kind::EntryKind;
pub use normalized_path::NormalizedPath;
pub use normalized_path::normalize;
