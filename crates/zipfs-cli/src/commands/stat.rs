//! Stat command implementation

use super::open_provider;
use crate::cli::StatArgs;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;

pub fn execute(args: &StatArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let provider = open_provider(&args.archive)?;

    let info = provider.get_info(&args.path);
    if !info.exists() {
        bail!(
            "Path not found in '{}': {}",
            args.archive.archive.display(),
            args.path
        );
    }

    formatter.format_info(&args.path, &info)
}
