//! # Connector Descriptions
//!
//! A [`ConnectorDescription`] says how a peer reaches a rendezvous hub over
//! TCP: the hub's host name, its port, and whether this peer listens for the
//! connection (server) or dials out (client).
//!
//! Descriptions are immutable values. They are built by whatever layer owns
//! the hub connections, handed to the codec for encoding, and rebuilt as new
//! values on decode.
//!
//! ## Text form
//! ```text
//! host:port[/server|/client]
//! [ipv6-literal]:port[/server|/client]
//! ```
//! The role suffix defaults to `client` when omitted.

use crate::core::codec::MAX_HOST_NAME_LEN;
use crate::error::{EncodingError, HostNameError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a peer reaches one hub over TCP
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectorDescription {
    host_name: String,
    port: u16,
    is_server: bool,
}

impl ConnectorDescription {
    /// Create a description from an already range-checked port.
    ///
    /// The host name is checked when the description is encoded.
    pub fn new(host_name: impl Into<String>, port: u16, is_server: bool) -> Self {
        Self {
            host_name: host_name.into(),
            port,
            is_server,
        }
    }

    /// Create a description from an unchecked port number.
    ///
    /// # Errors
    /// Returns `EncodingError::PortOutOfRange` when `port` does not fit in a
    /// TCP port, and `EncodingError::HostName` when the host name could never
    /// be encoded.
    pub fn try_new(
        host_name: impl Into<String>,
        port: u32,
        is_server: bool,
    ) -> Result<Self, EncodingError> {
        let port = u16::try_from(port).map_err(|_| EncodingError::PortOutOfRange(port))?;
        let description = Self::new(host_name, port, is_server);
        description.validate(usize::from(MAX_HOST_NAME_LEN))?;
        Ok(description)
    }

    /// A connector this peer listens on
    pub fn server(host_name: impl Into<String>, port: u16) -> Self {
        Self::new(host_name, port, true)
    }

    /// A connector this peer dials out on
    pub fn client(host_name: impl Into<String>, port: u16) -> Self {
        Self::new(host_name, port, false)
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn is_server(&self) -> bool {
        self.is_server
    }

    /// `host:port`, bracketing IPv6 literals, ready for a TCP connect/bind call
    pub fn socket_addr_string(&self) -> String {
        if self.host_name.contains(':') {
            format!("[{}]:{}", self.host_name, self.port)
        } else {
            format!("{}:{}", self.host_name, self.port)
        }
    }

    /// Check the host name against the description invariants.
    pub fn validate(&self, max_host_name_len: usize) -> Result<(), HostNameError> {
        validate_host_name(&self.host_name, max_host_name_len)
    }
}

/// Host names must be non-empty, NUL-free and at most `max_len` bytes of UTF-8.
pub fn validate_host_name(host_name: &str, max_len: usize) -> Result<(), HostNameError> {
    if host_name.is_empty() {
        return Err(HostNameError::Empty);
    }
    if host_name.as_bytes().contains(&0) {
        return Err(HostNameError::ContainsNul);
    }
    if host_name.len() > max_len {
        return Err(HostNameError::TooLong {
            len: host_name.len(),
            max: max_len,
        });
    }
    Ok(())
}

impl fmt::Display for ConnectorDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = if self.is_server { "server" } else { "client" };
        write!(f, "{} ({role})", self.socket_addr_string())
    }
}

/// Failure to parse the `host:port[/role]` text form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDescriptionError {
    #[error("missing port in '{0}' (expected host:port)")]
    MissingPort(String),

    #[error("invalid port '{0}'")]
    InvalidPort(String),

    #[error("unknown role '{0}' (expected 'server' or 'client')")]
    UnknownRole(String),

    #[error("unterminated IPv6 literal in '{0}'")]
    UnterminatedBracket(String),

    #[error("{0}")]
    Invalid(#[from] EncodingError),
}

impl FromStr for ConnectorDescription {
    type Err = ParseDescriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // host names may contain '/', so only an exact role word is a suffix
        let (addr, is_server) = match s.rsplit_once('/') {
            Some((addr, "server")) => (addr, true),
            Some((addr, "client")) => (addr, false),
            _ => (s, false),
        };

        let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
            let (host, tail) = rest
                .split_once(']')
                .ok_or_else(|| ParseDescriptionError::UnterminatedBracket(s.to_string()))?;
            let port = tail
                .strip_prefix(':')
                .ok_or_else(|| ParseDescriptionError::MissingPort(s.to_string()))?;
            (host, port)
        } else {
            addr.rsplit_once(':')
                .ok_or_else(|| ParseDescriptionError::MissingPort(s.to_string()))?
        };

        let port = port.parse::<u32>().map_err(|_| match port.split_once('/') {
            Some((digits, role)) if digits.parse::<u32>().is_ok() => {
                ParseDescriptionError::UnknownRole(role.to_string())
            }
            _ => ParseDescriptionError::InvalidPort(port.to_string()),
        })?;

        Ok(Self::try_new(host, port, is_server)?)
    }
}
