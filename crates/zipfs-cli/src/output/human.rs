//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::time::SystemTime;
use time::OffsetDateTime;
use time::macros::format_description;
use zipfs_core::FileInfo;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (i, c) in s.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }

        result.chars().rev().collect()
    }

    /// Formats a timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
    fn format_time(instant: SystemTime) -> String {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        OffsetDateTime::from(instant)
            .format(format)
            .unwrap_or_else(|_| "-".to_string())
    }

    fn display_name(&self, info: &FileInfo<'_>) -> String {
        if !info.is_directory() {
            return info.name().to_string();
        }
        if self.use_colors {
            style(format!("{}/", info.name())).blue().bold().to_string()
        } else {
            format!("{}/", info.name())
        }
    }

    fn write(&self, line: &str) {
        let _ = self.term.write_line(line);
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_listing(
        &self,
        path: &str,
        children: &[FileInfo<'_>],
        long: bool,
        human_readable: bool,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.verbose {
            let shown = if path.is_empty() { "/" } else { path };
            self.write(&format!("{shown}:"));
        }

        if !long {
            for child in children {
                self.write(&self.display_name(child));
            }
            return Ok(());
        }

        let mut total_size = 0;
        for child in children {
            let type_char = if child.is_directory() { "d" } else { "-" };
            let size_str = match child.len() {
                Some(size) if human_readable => Self::format_size(size),
                Some(size) => size.to_string(),
                None => "-".to_string(),
            };
            let time_str = child
                .modified()
                .map_or_else(|| "-".to_string(), Self::format_time);
            total_size += child.len().unwrap_or(0);

            self.write(&format!(
                "{} {:>10}  {}  {}",
                type_char,
                size_str,
                time_str,
                self.display_name(child)
            ));
        }

        self.write("");
        self.write(&format!(
            "Total: {} entries, {}",
            Self::format_number(children.len()),
            Self::format_size(total_size)
        ));

        Ok(())
    }

    fn format_info(&self, path: &str, info: &FileInfo<'_>) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let kind = match info {
            FileInfo::File(_) => "file",
            FileInfo::Directory(_) => "directory",
            FileInfo::NotFound(_) => "not found",
        };

        self.write(&format!("  Path: {path}"));
        self.write(&format!("  Name: {}", info.name()));
        self.write(&format!("  Kind: {kind}"));
        if let Some(size) = info.len() {
            self.write(&format!("  Size: {} ({size} bytes)", Self::format_size(size)));
        }
        if let Some(modified) = info.modified() {
            self.write(&format!("  Modified: {}", Self::format_time(modified)));
        }
        if self.verbose {
            if let FileInfo::File(file) = info {
                self.write(&format!("  Stored as: {}", file.path()));
            }
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
