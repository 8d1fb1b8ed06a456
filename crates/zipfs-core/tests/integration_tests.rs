//! Integration tests for zipfs-core.
//!
//! These tests open real ZIP files from disk and walk them through the
//! public API only.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::io::Cursor;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use tempfile::TempDir;
use zipfs_core::FileProvider;
use zipfs_core::LookupStrategy;
use zipfs_core::ProviderConfig;
use zipfs_core::ZipFileProvider;
use zipfs_core::ZipFsError;
use zipfs_core::info::DirectoryContents;
use zipfs_core::source::EntrySource;
use zipfs_core::test_utils::FILE1_CONTENT;
use zipfs_core::test_utils::ZipTestBuilder;
use zipfs_core::test_utils::reference_archive;

fn write_reference(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("test1.zip");
    fs::write(&path, reference_archive()).unwrap();
    path
}

fn names(contents: &DirectoryContents<'_>) -> Vec<String> {
    contents.iter().map(|c| c.name().to_string()).collect()
}

#[test]
fn test_open_from_disk() {
    let temp = TempDir::new().unwrap();
    let provider = ZipFileProvider::open(write_reference(&temp)).unwrap();

    assert_eq!(provider.source().entries().len(), 5);
    assert!(provider.get_info("/file1.txt").exists());
}

#[test]
fn test_open_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = ZipFileProvider::open(temp.path().join("missing.zip")).unwrap_err();

    assert!(matches!(
        err,
        ZipFsError::OpenArchive { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound
    ));
    assert!(err.is_construction_failure());
}

#[test]
fn test_open_not_a_zip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("plain.zip");
    fs::write(&path, b"definitely not a zip archive").unwrap();

    let err = ZipFileProvider::open(&path).unwrap_err();
    assert!(err.is_construction_failure());
}

#[test]
fn test_root_listing_sorted_by_caller() {
    let temp = TempDir::new().unwrap();
    let provider = ZipFileProvider::open(write_reference(&temp)).unwrap();

    let contents = provider.list_children("");
    let mut sorted = names(&contents);
    sorted.sort();
    assert_eq!(sorted, vec!["Dir1", "Dir2", "file1.txt"]);

    let kinds: Vec<(String, bool)> = contents
        .iter()
        .map(|c| (c.name().to_string(), c.is_directory()))
        .collect();
    assert!(kinds.contains(&("file1.txt".to_string(), false)));
    assert!(kinds.contains(&("Dir1".to_string(), true)));
    assert!(kinds.contains(&("Dir2".to_string(), true)));
}

#[test]
fn test_walk_tree_recursively() {
    fn walk<S: EntrySource>(
        provider: &ZipFileProvider<S>,
        dir: &str,
        out: &mut Vec<String>,
    ) {
        for child in &provider.list_children(dir) {
            let path = if dir.is_empty() {
                child.name().to_string()
            } else {
                format!("{dir}/{}", child.name())
            };
            if child.is_directory() {
                walk(provider, &path, out);
            }
            out.push(path);
        }
    }

    let provider =
        ZipFileProvider::from_reader(Cursor::new(reference_archive()), &ProviderConfig::default())
            .unwrap();
    let mut paths = Vec::new();
    walk(&provider, "", &mut paths);
    paths.sort();

    assert_eq!(
        paths,
        vec![
            "Dir1",
            "Dir1/Dir1.1",
            "Dir1/Dir1.1/File_empty.txt",
            "Dir2",
            "file1.txt"
        ]
    );
}

#[test]
fn test_read_file_contents() {
    let temp = TempDir::new().unwrap();
    let provider = ZipFileProvider::open(write_reference(&temp)).unwrap();

    let mut reader = provider.get_info("file1.txt").open_read().unwrap();
    let mut data = Vec::new();
    reader.read_to_end(&mut data).unwrap();
    assert_eq!(data, FILE1_CONTENT);

    let empty = provider
        .get_info("Dir1/Dir1.1/File_empty.txt")
        .open_read()
        .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_read_deflated_file() {
    let payload = "compressible ".repeat(200);
    let data = ZipTestBuilder::new()
        .add_deflated_file("big.txt", payload.as_bytes())
        .build();
    let provider =
        ZipFileProvider::from_reader(Cursor::new(data), &ProviderConfig::default()).unwrap();

    let info = provider.get_info("big.txt");
    assert_eq!(info.len(), Some(payload.len() as u64));
    assert_eq!(info.open_read().unwrap().into_inner(), payload.as_bytes());
}

#[test]
fn test_read_size_limit() {
    let config = ProviderConfig {
        max_read_size: 4,
        ..ProviderConfig::default()
    };
    let provider = ZipFileProvider::from_reader(Cursor::new(reference_archive()), &config).unwrap();

    let err = provider.get_info("file1.txt").open_read().unwrap_err();
    assert!(matches!(err, ZipFsError::EntryTooLarge { size: 9, max: 4, .. }));
    assert!(err.is_stream_failure());
}

#[test]
fn test_read_size_limit_at_u64_max() {
    let temp = TempDir::new().unwrap();
    let config = ProviderConfig {
        max_read_size: u64::MAX,
        ..ProviderConfig::default()
    };
    let provider = ZipFileProvider::open_with_config(write_reference(&temp), &config).unwrap();

    let mut contents = String::new();
    provider
        .get_info("file1.txt")
        .open_read()
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, "Hello zip");
}

#[test]
fn test_from_archive() {
    let archive = zip::ZipArchive::new(Cursor::new(reference_archive())).unwrap();
    let provider =
        ZipFileProvider::from_archive(Some(archive), &ProviderConfig::indexed()).unwrap();

    assert_eq!(provider.lookup_strategy(), LookupStrategy::Indexed);
    assert_eq!(provider.list_children("Dir1").len(), 1);
}

#[test]
fn test_null_inputs_through_host_interface() {
    let provider =
        ZipFileProvider::from_reader(Cursor::new(reference_archive()), &ProviderConfig::default())
            .unwrap();
    let host: &dyn FileProvider = &provider;

    assert!(!host.file_info(None).exists());
    assert!(!host.directory_contents(None).exists());
    assert!(host.file_info(Some("/Dir2")).is_directory());
    assert_eq!(host.directory_contents(Some("/")).len(), 3);
}

#[test]
fn test_shared_across_threads() {
    let provider = Arc::new(
        ZipFileProvider::from_reader(Cursor::new(reference_archive()), &ProviderConfig::default())
            .unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let provider = Arc::clone(&provider);
            thread::spawn(move || {
                for _ in 0..50 {
                    let info = provider.get_info("/file1.txt");
                    assert_eq!(info.open_read().unwrap().into_inner(), FILE1_CONTENT);
                    assert_eq!(provider.list_children("/").len(), 3);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_modification_time_round_trips_through_archive() {
    let modified = zip::DateTime::from_date_and_time(2021, 3, 4, 5, 6, 8).unwrap();
    let data = ZipTestBuilder::new()
        .add_file_with_time("stamped.txt", b"x", modified)
        .build();
    let provider =
        ZipFileProvider::from_reader(Cursor::new(data), &ProviderConfig::default()).unwrap();

    let secs = provider
        .get_info("stamped.txt")
        .modified()
        .unwrap()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    // 2021-03-04T05:06:08Z
    assert_eq!(secs, 1_614_834_368);
}
