//! JSON output formatter for machine-readable results.

use super::formatter::EntryRecord;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use zipfs_core::FileInfo;

pub struct JsonFormatter;

#[derive(Serialize)]
struct ListingOutput<'a> {
    path: &'a str,
    entries: Vec<EntryRecord>,
}

#[derive(Serialize)]
struct InfoOutput<'a> {
    path: &'a str,
    #[serde(flatten)]
    entry: EntryRecord,
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    fn listing_output<'a>(
        path: &'a str,
        children: &[FileInfo<'_>],
    ) -> JsonOutput<ListingOutput<'a>> {
        let data = ListingOutput {
            path,
            entries: children.iter().filter_map(EntryRecord::from_info).collect(),
        };
        JsonOutput::success("ls", data)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_listing(
        &self,
        path: &str,
        children: &[FileInfo<'_>],
        _long: bool,
        _human_readable: bool,
    ) -> Result<()> {
        Self::output(&Self::listing_output(path, children))
    }

    fn format_info(&self, path: &str, info: &FileInfo<'_>) -> Result<()> {
        match EntryRecord::from_info(info) {
            Some(entry) => Self::output(&JsonOutput::success("stat", InfoOutput { path, entry })),
            None => Self::output(&JsonOutput::<()>::error("stat", format!("not found: {path}"))),
        }
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("unknown", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
