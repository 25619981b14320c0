//! # Error Types
//!
//! Error handling for connector list encoding, decoding and configuration.
//!
//! Encoding and decoding failures each get their own enum so callers of the
//! codec can match on exactly what went wrong. Both convert into the
//! crate-wide [`ConnectorError`] for code that only wants to propagate.
//!
//! ## Error Categories
//! - **Encoding**: a description cannot be represented in the wire format
//! - **Decoding**: a buffer is truncated, inconsistent or carries invalid values
//! - **Serialization**: alternative storage formats (JSON, MessagePack, bincode)
//! - **Configuration**: TOML parsing, validation and file I/O
//!
//! ## Example Usage
//! ```rust
//! use hub_connector::core::codec::{decode, encode};
//! use hub_connector::core::description::ConnectorDescription;
//! use hub_connector::error::Result;
//!
//! fn roundtrip(list: &[ConnectorDescription]) -> Result<Vec<ConnectorDescription>> {
//!     let bytes = encode(list)?;
//!     Ok(decode(&bytes)?)
//! }
//!
//! let list = vec![ConnectorDescription::server("10.20.35.100", 6910)];
//! assert_eq!(roundtrip(&list).ok(), Some(list));
//! ```

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Buffer structure
    pub const ERR_EMPTY_DATA: &str = "Empty data";

    /// Wire field names used in truncation reports
    pub const FIELD_RECORD_COUNT: &str = "record count";
    pub const FIELD_HOST_NAME_LEN: &str = "host name length";
    pub const FIELD_HOST_NAME: &str = "host name";
    pub const FIELD_PORT: &str = "port";
    pub const FIELD_SERVER_FLAG: &str = "server flag";
}

/// A host name that breaks the description invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostNameError {
    #[error("host name cannot be empty")]
    Empty,

    #[error("host name contains an embedded NUL byte")]
    ContainsNul,

    #[error("host name too long: {len} bytes (maximum: {max})")]
    TooLong { len: usize, max: usize },
}

/// A connector description that cannot be represented in the wire format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Invalid host name: {0}")]
    HostName(#[from] HostNameError),

    #[error("Port out of range: {0} (valid range: 0-65535)")]
    PortOutOfRange(u32),

    #[error("Too many connectors: {count} (maximum: {max})")]
    TooManyConnectors { count: usize, max: usize },
}

/// A byte buffer that does not hold a well-formed connector list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    #[error("Truncated {field}: need {needed} bytes, have {remaining}")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("Invalid server flag byte: {0:#04x}")]
    InvalidFlag(u8),

    #[error("Host name is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Invalid host name: {0}")]
    HostName(#[from] HostNameError),

    #[error("Too many connectors: {count} (maximum: {max})")]
    TooManyConnectors { count: usize, max: usize },

    #[error("Unexpected trailing data: {0} bytes after last record")]
    TrailingBytes(usize),

    #[error("Unknown format byte: {0:#04x}")]
    UnknownFormat(u8),
}

// ConnectorError is the umbrella error for everything the crate does
#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Decoding error: {0}")]
    Decoding(#[from] DecodingError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Deserialize error: {0}")]
    DeserializeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ConnectorError
pub type Result<T> = std::result::Result<T, ConnectorError>;
