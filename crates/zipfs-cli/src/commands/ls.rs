//! Ls command implementation

use super::open_provider;
use crate::cli::LsArgs;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;

pub fn execute(args: &LsArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let provider = open_provider(&args.archive)?;

    let Some(mut children) = provider.list_children(&args.path).into_listing() else {
        bail!(
            "Directory not found in '{}': {}",
            args.archive.archive.display(),
            args.path
        );
    };

    if args.sort {
        children.sort_by(|a, b| a.name().cmp(b.name()));
    }

    formatter.format_listing(&args.path, &children, args.long, args.human_readable)
}
