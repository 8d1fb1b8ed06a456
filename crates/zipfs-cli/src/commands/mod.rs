//! Command implementations.

pub mod cat;
pub mod completion;
pub mod ls;
pub mod stat;

use crate::cli::ArchiveArgs;
use crate::error::add_archive_context;
use anyhow::Result;
use std::fs::File;
use std::io::BufReader;
use tracing::debug;
use zipfs_core::ZipFileProvider;
use zipfs_core::source::ZipSource;

/// Provider over an archive opened from disk.
pub type DiskProvider = ZipFileProvider<ZipSource<BufReader<File>>>;

/// Opens the archive named on the command line.
pub fn open_provider(args: &ArchiveArgs) -> Result<DiskProvider> {
    debug!(archive = %args.archive.display(), indexed = args.indexed, "opening archive");
    add_archive_context(
        ZipFileProvider::open_with_config(&args.archive, &args.config()),
        &args.archive,
    )
}
