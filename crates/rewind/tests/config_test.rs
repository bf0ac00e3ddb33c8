//! Tests for loading configuration files.

use std::io::Write;
use std::path::PathBuf;

use rewind::RewindConfig;
use tempfile::NamedTempFile;

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "store_dir = \"/var/lib/rewind\"\nstorage_key = \"ranked\"").expect("write");

    let config = RewindConfig::from_file(file.path()).expect("load");
    assert_eq!(config.store_dir(), &PathBuf::from("/var/lib/rewind"));
    assert_eq!(config.storage_key(), "ranked");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let err = RewindConfig::load(Some(PathBuf::from("/definitely/not/here.toml").as_path()))
        .unwrap_err();
    assert!(err.message.contains("Failed to read config file"), "{err}");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "store_dir = [").expect("write");

    let err = RewindConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
}
