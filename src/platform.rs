//! Platform-dependent hosts-file location.

use std::env;
use std::path::PathBuf;

/// Env var that overrides the hosts-file location (used by tests).
pub const HOSTS_FILE_ENV: &str = "HOSTCTL_HOSTS_FILE";

/// Hosts-file path: `HOSTCTL_HOSTS_FILE` if set, else the platform default.
pub fn hosts_path() -> PathBuf {
    if let Ok(path) = env::var(HOSTS_FILE_ENV) {
        return PathBuf::from(path);
    }
    default_hosts_path(env::consts::OS)
}

/// Fixed default hosts-file location for `platform` (a value in the style
/// of `std::env::consts::OS`). No I/O, no validation.
pub fn default_hosts_path(platform: &str) -> PathBuf {
    if platform.starts_with("win") {
        PathBuf::from(r"c:\windows\system32\drivers\etc\hosts")
    } else {
        PathBuf::from("/etc/hosts")
    }
}
