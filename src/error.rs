//! Error types for hosts-file management.

use thiserror::Error;

/// Result type alias for hosts-file operations.
pub type Result<T> = std::result::Result<T, HostsError>;

/// Errors raised by entry construction, line parsing and file I/O.
#[derive(Error, Debug)]
pub enum HostsError {
    /// Line or input whose leading token fits none of the four entry kinds.
    #[error("invalid entry type")]
    InvalidEntryType,

    /// Comment entry constructed without text.
    #[error("comment entry requires comment text")]
    MissingCommentText,

    /// Address entry constructed without an address or without names.
    #[error("address and name(s) must be specified")]
    MissingAddressOrNames,

    /// Address failed IPv4 syntax validation.
    #[error("invalid IPv4 address: {0}")]
    InvalidIpv4Address(String),

    /// Address failed IPv6 syntax validation.
    #[error("invalid IPv6 address: {0}")]
    InvalidIpv6Address(String),

    /// Valid address but one or more hostnames failed validation.
    #[error("invalid hostname(s) for address {address}")]
    InvalidHostnames { address: String },

    /// A line of the file could not be turned into an entry on load.
    #[error("unparseable line {line_no}: {line:?}")]
    UnparseableLine { line_no: usize, line: String },

    /// Underlying file open/read/write failure.
    #[error("hosts file I/O error: {0}")]
    Io(#[from] std::io::Error),
}
