//! Ordered hosts-file collection: load, add, remove, count, write.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::entry::HostsEntry;
use crate::error::{HostsError, Result};

/// Match counts for a probe entry against the collection.
///
/// Address and name counts are independent; one existing entry can
/// contribute to both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCounts {
    pub address_matches: usize,
    pub name_matches: usize,
    pub comment_matches: usize,
}

/// An ordered, in-memory view of one hosts file.
///
/// Entry order is on-disk line order. The list is the sole source of truth
/// and the whole file is rewritten on every successful mutation.
#[derive(Debug)]
pub struct Hosts {
    path: PathBuf,
    entries: Vec<HostsEntry>,
}

impl Hosts {
    /// Load the hosts file at `path`. Any line that cannot be turned into
    /// an entry fails the whole load.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let (hosts, _) = Self::load(path.into(), false)?;
        Ok(hosts)
    }

    /// Load the hosts file at `path`, skipping lines that cannot be turned
    /// into entries. Returns the collection and the number of skipped lines.
    pub fn from_path_lenient(path: impl Into<PathBuf>) -> Result<(Self, usize)> {
        Self::load(path.into(), true)
    }

    fn load(path: PathBuf, lenient: bool) -> Result<(Self, usize)> {
        let file = fs::File::open(&path)?;
        let mut entries = Vec::new();
        let mut skipped = 0;
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            match HostsEntry::parse(&line) {
                Ok(entry) => entries.push(entry),
                Err(_) if lenient => skipped += 1,
                Err(_) => {
                    return Err(HostsError::UnparseableLine {
                        line_no: idx + 1,
                        line,
                    })
                }
            }
        }
        Ok((Hosts { path, entries }, skipped))
    }

    /// Resolved hosts-file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries in on-disk order.
    pub fn entries(&self) -> &[HostsEntry] {
        &self.entries
    }

    /// Rewrite the whole file from the in-memory entry list.
    ///
    /// The in-memory list stays authoritative whether or not the write
    /// succeeds; a failure is returned, never absorbed.
    pub fn write(&self) -> Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        for entry in &self.entries {
            writeln!(file, "{entry}")?;
        }
        Ok(())
    }

    /// Count address, name and comment matches for `entry` without mutating.
    pub fn count(&self, entry: &HostsEntry) -> MatchCounts {
        let mut counts = MatchCounts::default();
        for existing in &self.entries {
            match entry {
                HostsEntry::Ipv4 { address, names } | HostsEntry::Ipv6 { address, names } => {
                    if let Some(existing_names) = existing.names() {
                        if names.iter().any(|n| existing_names.contains(n)) {
                            counts.name_matches += 1;
                        }
                    }
                    if existing.address() == Some(address.as_str()) {
                        counts.address_matches += 1;
                    }
                }
                HostsEntry::Comment { comment } => {
                    if existing.comment_text() == Some(comment.as_str()) {
                        counts.comment_matches += 1;
                    }
                }
                HostsEntry::Blank => {}
            }
        }
        counts
    }

    /// Add `entry` to the collection and rewrite the file.
    ///
    /// Comments are deduplicated by exact text. An address entry conflicts
    /// when its address or any of its hostnames is already mapped; with
    /// `force` the conflicting entries are removed first. Returns `Ok(false)`
    /// when the entry was rejected as a duplicate or conflict.
    ///
    /// A failed write leaves the new entry in the in-memory list and
    /// propagates the error; the list is authoritative.
    pub fn add(&mut self, entry: HostsEntry, force: bool) -> Result<bool> {
        match &entry {
            HostsEntry::Comment { .. } => {
                if self.count(&entry).comment_matches >= 1 {
                    return Ok(false);
                }
            }
            HostsEntry::Ipv4 { .. } | HostsEntry::Ipv6 { .. } => {
                let counts = self.count(&entry);
                if counts.address_matches > 0 || counts.name_matches > 0 {
                    if !force {
                        return Ok(false);
                    }
                    self.remove_matching(&entry);
                }
            }
            HostsEntry::Blank => {}
        }
        self.entries.push(entry);
        self.write()?;
        Ok(true)
    }

    /// Parse `line` and add the resulting entry. A parse failure is an
    /// error, not a rejected add.
    pub fn add_line(&mut self, line: &str, force: bool) -> Result<bool> {
        self.add(HostsEntry::parse(line)?, force)
    }

    /// Remove every entry matching `entry` and rewrite the file.
    ///
    /// Returns true iff at least one entry was removed; removing a
    /// nonexistent entry is not an error.
    pub fn remove(&mut self, entry: &HostsEntry) -> Result<bool> {
        let removed = self.remove_matching(entry);
        self.write()?;
        Ok(removed > 0)
    }

    /// Drop matching entries from the in-memory list; no file write.
    fn remove_matching(&mut self, entry: &HostsEntry) -> usize {
        let before = self.entries.len();
        self.entries.retain(|existing| !entry_matches(existing, entry));
        before - self.entries.len()
    }
}

/// Union of removal checks: when both sides carry names, match on equal
/// address, identical name list or any shared name; independently of those,
/// match on identical comment text whichever kind the probe is.
fn entry_matches(existing: &HostsEntry, probe: &HostsEntry) -> bool {
    if let (Some(existing_names), Some(probe_names)) = (existing.names(), probe.names()) {
        if existing.address() == probe.address()
            || existing_names == probe_names
            || probe_names.iter().any(|n| existing_names.contains(n))
        {
            return true;
        }
    }
    if let (Some(existing_comment), Some(probe_comment)) =
        (existing.comment_text(), probe.comment_text())
    {
        if existing_comment == probe_comment {
            return true;
        }
    }
    false
}
