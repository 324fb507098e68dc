//! Shared test helpers.

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temp directory for hosts-file fixtures.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostctl_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| std::path::Path::new(".").into()))
        .expect("temp dir")
}

/// Write a hosts file with `content` under `dir`, returning its path.
pub fn hosts_fixture(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("hosts");
    std::fs::write(&path, content).expect("write fixture");
    path
}
