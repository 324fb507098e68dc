//! Address-family and hostname syntax validation.

use std::net::{Ipv4Addr, Ipv6Addr};

/// True if `address` is a syntactically valid IPv4 address.
pub fn is_ipv4(address: &str) -> bool {
    address.parse::<Ipv4Addr>().is_ok()
}

/// True if `address` is a syntactically valid IPv6 address.
pub fn is_ipv6(address: &str) -> bool {
    address.parse::<Ipv6Addr>().is_ok()
}

/// Validate hostname format: dot-separated labels of alphanumerics and
/// hyphens, 1-63 chars per label, 253 chars total, no hyphen at label edges.
pub fn is_valid_hostname(name: &str) -> bool {
    if name.is_empty() || name.len() > 253 {
        return false;
    }
    for label in name.split('.') {
        if label.is_empty() || label.len() > 63 {
            return false;
        }
        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
    }
    true
}

/// True if the slice is non-empty and every name in it is a valid hostname.
pub fn valid_hostnames<S: AsRef<str>>(names: &[S]) -> bool {
    !names.is_empty() && names.iter().all(|n| is_valid_hostname(n.as_ref()))
}
