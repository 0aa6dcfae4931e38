use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vcucfg::parser::Document;

/// Path to a file under tests/fixtures
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write `contents` to a .cfg file in a fresh temp dir.
/// Keep the TempDir alive for as long as the path is used.
pub fn write_cfg(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("test.cfg");
    fs::write(&path, contents).expect("write cfg");
    (dir, path)
}

pub fn parse(text: &str) -> Document {
    Document::parse_str(text).expect("document should parse")
}
