//! Cat command implementation

use super::open_provider;
use crate::cli::CatArgs;
use crate::error::add_archive_context;
use anyhow::Context;
use anyhow::Result;
use std::io;
use std::io::Write;

/// Copies the file at `args.path` to stdout, bypassing the formatter.
pub fn execute(args: &CatArgs) -> Result<()> {
    let provider = open_provider(&args.archive)?;

    let info = provider.get_info(&args.path);
    let mut reader = add_archive_context(info.open_read(), &args.archive.archive)?;

    let mut stdout = io::stdout().lock();
    io::copy(&mut reader, &mut stdout).context("failed to write to stdout")?;
    stdout.flush().context("failed to write to stdout")?;

    Ok(())
}
