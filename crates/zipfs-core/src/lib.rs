//! Read-only hierarchical filesystem view over a ZIP archive.
//!
//! A ZIP archive stores a flat list of entries whose names contain `/`
//! separators. `zipfs-core` exposes that list as a directory tree: paths
//! resolve to files or directories, directories list their direct
//! children, and files open as byte streams.
//!
//! # Examples
//!
//! ```no_run
//! use zipfs_core::ZipFileProvider;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ZipFileProvider::open("bundle.zip")?;
//!
//! for child in &provider.list_children("/") {
//!     println!("{}", child.name());
//! }
//!
//! let readme = provider.get_info("docs/README.md");
//! if readme.exists() {
//!     let mut reader = readme.open_read()?;
//!     std::io::copy(&mut reader, &mut std::io::stdout())?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Path rules
//!
//! - Lookups are case-sensitive.
//! - `\` is accepted as a separator and treated as `/`.
//! - Leading and trailing separators are ignored.
//! - A directory exists only if the archive stores a marker entry for it
//!   (a name ending in `/`). The root always exists.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod change;
pub mod config;
pub mod entry;
pub mod error;
pub mod index;
pub mod info;
pub mod io;
pub mod provider;
pub mod source;
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use change::ChangeToken;
pub use change::NullChangeToken;
pub use config::LookupStrategy;
pub use config::ProviderConfig;
pub use entry::ArchiveEntry;
pub use error::Result;
pub use error::ZipFsError;
pub use info::ArchiveDirectory;
pub use info::ArchiveFile;
pub use info::DirectoryContents;
pub use info::FileInfo;
pub use info::NotFoundInfo;
pub use io::EntryReader;
pub use provider::FileProvider;
pub use provider::ZipFileProvider;

// Re-export types module for easier access
pub use types::EntryKind;
pub use types::NormalizedPath;
pub use types::normalize;
