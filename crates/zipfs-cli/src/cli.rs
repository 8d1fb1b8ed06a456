//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;
use zipfs_core::LookupStrategy;
use zipfs_core::ProviderConfig;

#[derive(Parser)]
#[command(name = "zipfs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the children of a directory inside an archive
    Ls(LsArgs),
    /// Show what a path inside an archive resolves to
    Stat(StatArgs),
    /// Write a file stored in an archive to stdout
    Cat(CatArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

/// Options shared by every command that opens an archive.
#[derive(clap::Args)]
pub struct ArchiveArgs {
    /// Path to the ZIP archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Build a parent-to-children index when opening the archive
    #[arg(long)]
    pub indexed: bool,

    /// Maximum size of a single file to read (K, M, G, T suffixes allowed)
    #[arg(long, value_parser = parse_byte_size)]
    pub max_read_size: Option<u64>,
}

impl ArchiveArgs {
    /// Builds the provider configuration these flags describe.
    pub fn config(&self) -> ProviderConfig {
        let defaults = ProviderConfig::default();
        ProviderConfig {
            lookup: if self.indexed {
                LookupStrategy::Indexed
            } else {
                LookupStrategy::Scan
            },
            max_read_size: self.max_read_size.unwrap_or(defaults.max_read_size),
            ..defaults
        }
    }
}

#[derive(clap::Args)]
pub struct LsArgs {
    #[command(flatten)]
    pub archive: ArchiveArgs,

    /// Directory to list (default: archive root)
    #[arg(value_name = "PATH", default_value = "")]
    pub path: String,

    /// Show kind, size and modification time
    #[arg(short, long)]
    pub long: bool,

    /// Sort children by name instead of archive order
    #[arg(short, long)]
    pub sort: bool,

    /// Show sizes in human-readable format
    #[arg(short = 'H', long)]
    pub human_readable: bool,
}

#[derive(clap::Args)]
pub struct StatArgs {
    #[command(flatten)]
    pub archive: ArchiveArgs,

    /// Path inside the archive
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(clap::Args)]
pub struct CatArgs {
    #[command(flatten)]
    pub archive: ArchiveArgs,

    /// File inside the archive
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}
