//! I/O types for reading archive entries.

pub mod entry_reader;

pub use entry_reader::EntryReader;
