//! Hosts-file entry model: one structured value per line.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{HostsError, Result};
use crate::validate::{is_ipv4, is_ipv6, valid_hostnames};

/// Kind of a raw hosts-file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Comment,
    Blank,
    Ipv4,
    Ipv6,
}

/// One line of a hosts file.
///
/// Comment text is the full raw line including the leading `#`, stored
/// verbatim (trailing newline trimmed) so it writes back unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HostsEntry {
    Comment { comment: String },
    Blank,
    Ipv4 { address: String, names: Vec<String> },
    Ipv6 { address: String, names: Vec<String> },
}

impl HostsEntry {
    /// Comment entry from the full raw line (leading `#` included).
    pub fn comment(text: impl Into<String>) -> Result<Self> {
        let comment = text.into();
        if comment.is_empty() {
            return Err(HostsError::MissingCommentText);
        }
        Ok(HostsEntry::Comment { comment })
    }

    /// IPv4 mapping entry. Fails on bad address syntax or missing names.
    pub fn ipv4(address: impl Into<String>, names: Vec<String>) -> Result<Self> {
        let address = address.into();
        if address.is_empty() || names.is_empty() {
            return Err(HostsError::MissingAddressOrNames);
        }
        if !is_ipv4(&address) {
            return Err(HostsError::InvalidIpv4Address(address));
        }
        Ok(HostsEntry::Ipv4 { address, names })
    }

    /// IPv6 mapping entry. Fails on bad address syntax or missing names.
    pub fn ipv6(address: impl Into<String>, names: Vec<String>) -> Result<Self> {
        let address = address.into();
        if address.is_empty() || names.is_empty() {
            return Err(HostsError::MissingAddressOrNames);
        }
        if !is_ipv6(&address) {
            return Err(HostsError::InvalidIpv6Address(address));
        }
        Ok(HostsEntry::Ipv6 { address, names })
    }

    /// Classify a raw hosts-file line. `None` means the line fits none of
    /// the four standard forms.
    pub fn classify(line: &str) -> Option<EntryKind> {
        if line.trim().is_empty() {
            return Some(EntryKind::Blank);
        }
        if line.starts_with('#') {
            return Some(EntryKind::Comment);
        }
        let first = line.split_whitespace().next()?;
        if is_ipv4(first) {
            Some(EntryKind::Ipv4)
        } else if is_ipv6(first) {
            Some(EntryKind::Ipv6)
        } else {
            None
        }
    }

    /// Parse a raw hosts-file line into an entry.
    ///
    /// Every candidate hostname must pass validation or the whole line is
    /// rejected. An unrecognized leading token is `InvalidEntryType`.
    pub fn parse(line: &str) -> Result<Self> {
        if line.trim().is_empty() {
            return Ok(HostsEntry::Blank);
        }
        if line.starts_with('#') {
            return Self::comment(line.trim_end_matches(['\r', '\n']));
        }
        let mut tokens = line.split_whitespace();
        let Some(address) = tokens.next() else {
            return Err(HostsError::InvalidEntryType);
        };
        let names: Vec<String> = tokens.map(String::from).collect();
        if is_ipv4(address) {
            if !names.is_empty() && !valid_hostnames(&names) {
                return Err(HostsError::InvalidHostnames {
                    address: address.to_string(),
                });
            }
            Self::ipv4(address, names)
        } else if is_ipv6(address) {
            if !names.is_empty() && !valid_hostnames(&names) {
                return Err(HostsError::InvalidHostnames {
                    address: address.to_string(),
                });
            }
            Self::ipv6(address, names)
        } else {
            Err(HostsError::InvalidEntryType)
        }
    }

    /// Entry kind discriminant.
    pub fn kind(&self) -> EntryKind {
        match self {
            HostsEntry::Comment { .. } => EntryKind::Comment,
            HostsEntry::Blank => EntryKind::Blank,
            HostsEntry::Ipv4 { .. } => EntryKind::Ipv4,
            HostsEntry::Ipv6 { .. } => EntryKind::Ipv6,
        }
    }

    /// Mapped address, for address entries.
    pub fn address(&self) -> Option<&str> {
        match self {
            HostsEntry::Ipv4 { address, .. } | HostsEntry::Ipv6 { address, .. } => Some(address),
            _ => None,
        }
    }

    /// Hostnames, for address entries.
    pub fn names(&self) -> Option<&[String]> {
        match self {
            HostsEntry::Ipv4 { names, .. } | HostsEntry::Ipv6 { names, .. } => {
                Some(names.as_slice())
            }
            _ => None,
        }
    }

    /// Comment text, for comment entries.
    pub fn comment_text(&self) -> Option<&str> {
        match self {
            HostsEntry::Comment { comment } => Some(comment),
            _ => None,
        }
    }
}

/// Serialized line form: comment verbatim, blank empty, mappings as
/// `address<TAB>name1 name2 ...`.
impl fmt::Display for HostsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostsEntry::Comment { comment } => f.write_str(comment),
            HostsEntry::Blank => Ok(()),
            HostsEntry::Ipv4 { address, names } | HostsEntry::Ipv6 { address, names } => {
                write!(f, "{}\t{}", address, names.join(" "))
            }
        }
    }
}

impl FromStr for HostsEntry {
    type Err = HostsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
