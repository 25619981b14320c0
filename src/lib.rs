//! # Hub Connector
//!
//! Compact binary serialization for lists of rendezvous hub connector
//! descriptions: how a peer reaches a hub over TCP (host name, port) and
//! whether it plays the TCP server or client side of that connection.
//!
//! The crate does no networking. A connection layer builds
//! [`ConnectorDescription`]s, the codec turns an ordered list of them into a
//! byte buffer for transmission or storage, and the same layer decodes the
//! buffer back into descriptions when it sets up the actual connections.
//!
//! ## Quick Start
//! ```rust
//! use hub_connector::{decode, encode, ConnectorDescription};
//!
//! let hubs = vec![
//!     ConnectorDescription::server("10.20.35.100", 6910),
//!     ConnectorDescription::client("10.20.35.200", 6000),
//! ];
//!
//! let bytes = encode(&hubs).expect("valid descriptions");
//! let decoded = decode(&bytes).expect("well-formed buffer");
//! assert_eq!(decoded, hubs);
//! ```
//!
//! ## Modules
//! - [`core`]: description type, wire codec, alternative formats
//! - [`config`]: TOML/env configuration with validation
//! - [`error`]: encoding, decoding and umbrella error types
//! - [`utils`]: logging setup and metrics

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::HubConnectorConfig;
pub use crate::core::codec::{decode, encode, ConnectorCodec};
pub use crate::core::description::ConnectorDescription;
pub use crate::core::serialization::{MultiFormat, SerializationFormat};
pub use crate::error::{ConnectorError, DecodingError, EncodingError, Result};
