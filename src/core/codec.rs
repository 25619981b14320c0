//! # Connector List Codec
//!
//! Encodes an ordered list of [`ConnectorDescription`]s into one flat buffer
//! and decodes it back, preserving order and every field exactly.
//!
//! ## Wire Format (version [`WIRE_VERSION`], big-endian)
//! ```text
//! [Count(4)] { [HostLen(2)] [Host(HostLen)] [Port(2)] [IsServer(1)] } * Count
//! ```
//!
//! The record count makes the buffer self-terminating; each record is
//! self-delimiting through its host name length. `IsServer` is `0` (client)
//! or `1` (server) and nothing else.
//!
//! ## Guarantees
//! - Every description is validated before a single byte is written, so a
//!   failed encode never leaves half a list behind.
//! - Decoding returns the complete list or an error, never a prefix.
//! - A zero-length buffer decodes to an empty list.
//! - The default codec accepts any host name the length field can carry, so
//!   every description [`ConnectorDescription::try_new`] accepts round-trips
//!   through the free [`encode`] and [`decode`].
//! - Allocation on decode is bounded by what the remaining bytes can hold,
//!   not by the declared count.

use crate::config::DEFAULT_MAX_CONNECTORS;
use crate::core::description::{validate_host_name, ConnectorDescription};
use crate::error::constants::{
    FIELD_HOST_NAME, FIELD_HOST_NAME_LEN, FIELD_PORT, FIELD_RECORD_COUNT, FIELD_SERVER_FLAG,
};
use crate::error::{DecodingError, EncodingError};
use crate::utils::metrics::{global_metrics, Timer};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::debug;

/// Version of the layout below. Not written into the buffer.
pub const WIRE_VERSION: u8 = 1;

/// Largest host name the 2-byte length field can describe
pub const MAX_HOST_NAME_LEN: u16 = u16::MAX;

/// Width of the record count field
pub const COUNT_LEN: usize = 4;
/// Width of the host name length field
pub const HOST_NAME_LEN_LEN: usize = 2;
/// Width of the port field
pub const PORT_LEN: usize = 2;
/// Width of the server flag field
pub const FLAG_LEN: usize = 1;
/// Smallest possible record: a one-byte host name
pub const MIN_RECORD_LEN: usize = HOST_NAME_LEN_LEN + 1 + PORT_LEN + FLAG_LEN;

const FLAG_CLIENT: u8 = 0;
const FLAG_SERVER: u8 = 1;

/// Stateless encoder/decoder for connector lists with configurable limits.
///
/// The codec is `Copy` and holds no buffers, so a single value can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorCodec {
    max_connectors: usize,
    max_host_name_len: usize,
}

impl Default for ConnectorCodec {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_CONNECTORS, MAX_HOST_NAME_LEN)
    }
}

impl ConnectorCodec {
    /// Codec with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec with explicit limits.
    ///
    /// The parameter types match the wire field widths, so no limit can
    /// exceed what the format can carry.
    pub fn with_limits(max_connectors: u32, max_host_name_len: u16) -> Self {
        Self {
            max_connectors: max_connectors as usize,
            max_host_name_len: usize::from(max_host_name_len),
        }
    }

    pub fn max_connectors(&self) -> usize {
        self.max_connectors
    }

    pub fn max_host_name_len(&self) -> usize {
        self.max_host_name_len
    }

    /// Exact number of bytes `encode` produces for `list`
    pub fn encoded_len(&self, list: &[ConnectorDescription]) -> usize {
        COUNT_LEN
            + list
                .iter()
                .map(|d| HOST_NAME_LEN_LEN + d.host_name().len() + PORT_LEN + FLAG_LEN)
                .sum::<usize>()
    }

    /// Check every description against the codec limits without writing anything.
    ///
    /// # Errors
    /// Returns the first `EncodingError` found, in list order.
    pub fn validate_list(&self, list: &[ConnectorDescription]) -> Result<(), EncodingError> {
        if list.len() > self.max_connectors {
            return Err(EncodingError::TooManyConnectors {
                count: list.len(),
                max: self.max_connectors,
            });
        }
        for description in list {
            description.validate(self.max_host_name_len)?;
        }
        Ok(())
    }

    /// Encode `list` into a new buffer.
    ///
    /// # Errors
    /// Returns `EncodingError` when any description cannot be represented.
    pub fn encode(&self, list: &[ConnectorDescription]) -> Result<Bytes, EncodingError> {
        let mut dst = BytesMut::with_capacity(self.encoded_len(list));
        self.encode_into(list, &mut dst)?;
        Ok(dst.freeze())
    }

    /// Append the encoding of `list` to `dst`.
    ///
    /// `dst` is untouched when an error is returned.
    pub fn encode_into(
        &self,
        list: &[ConnectorDescription],
        dst: &mut BytesMut,
    ) -> Result<(), EncodingError> {
        let _timer = Timer::start("connector_list_encode");
        let metrics = global_metrics();
        metrics.encode_attempt();

        if let Err(e) = self.validate_list(list) {
            metrics.encode_failed();
            debug!(error = %e, connectors = list.len(), "Rejected connector list for encoding");
            return Err(e);
        }

        let start = dst.len();
        dst.reserve(self.encoded_len(list));
        // lengths below are bounded by validate_list and the limit field widths
        dst.put_u32(list.len() as u32);
        for description in list {
            let host = description.host_name().as_bytes();
            dst.put_u16(host.len() as u16);
            dst.put_slice(host);
            dst.put_u16(description.port());
            dst.put_u8(if description.is_server() {
                FLAG_SERVER
            } else {
                FLAG_CLIENT
            });
        }

        let written = dst.len() - start;
        metrics.encode_success(written as u64);
        debug!(connectors = list.len(), bytes = written, "Encoded connector list");
        Ok(())
    }

    /// Decode a buffer produced by `encode`.
    ///
    /// # Errors
    /// Returns `DecodingError` for truncated, inconsistent or invalid input.
    pub fn decode(&self, src: &[u8]) -> Result<Vec<ConnectorDescription>, DecodingError> {
        let _timer = Timer::start("connector_list_decode");
        let metrics = global_metrics();
        metrics.decode_attempt();

        match self.decode_records(src) {
            Ok(list) => {
                metrics.decode_success(src.len() as u64);
                debug!(connectors = list.len(), bytes = src.len(), "Decoded connector list");
                Ok(list)
            }
            Err(e) => {
                metrics.decode_failed();
                debug!(error = %e, bytes = src.len(), "Rejected malformed connector list");
                Err(e)
            }
        }
    }

    fn decode_records(&self, mut src: &[u8]) -> Result<Vec<ConnectorDescription>, DecodingError> {
        if src.is_empty() {
            return Ok(Vec::new());
        }

        ensure_remaining(src, COUNT_LEN, FIELD_RECORD_COUNT)?;
        let count = src.get_u32() as usize;
        if count > self.max_connectors {
            return Err(DecodingError::TooManyConnectors {
                count,
                max: self.max_connectors,
            });
        }

        let mut list = Vec::with_capacity(count.min(src.remaining() / MIN_RECORD_LEN));
        for _ in 0..count {
            list.push(self.decode_record(&mut src)?);
        }

        if src.has_remaining() {
            return Err(DecodingError::TrailingBytes(src.remaining()));
        }
        Ok(list)
    }

    fn decode_record(&self, src: &mut &[u8]) -> Result<ConnectorDescription, DecodingError> {
        ensure_remaining(*src, HOST_NAME_LEN_LEN, FIELD_HOST_NAME_LEN)?;
        let host_len = usize::from(src.get_u16());

        ensure_remaining(*src, host_len, FIELD_HOST_NAME)?;
        let (raw, rest) = (*src).split_at(host_len);
        *src = rest;
        let host_name =
            std::str::from_utf8(raw).map_err(|e| DecodingError::InvalidUtf8(e.to_string()))?;
        validate_host_name(host_name, self.max_host_name_len)?;

        ensure_remaining(*src, PORT_LEN, FIELD_PORT)?;
        let port = src.get_u16();

        ensure_remaining(*src, FLAG_LEN, FIELD_SERVER_FLAG)?;
        let is_server = match src.get_u8() {
            FLAG_CLIENT => false,
            FLAG_SERVER => true,
            other => return Err(DecodingError::InvalidFlag(other)),
        };

        Ok(ConnectorDescription::new(host_name, port, is_server))
    }
}

fn ensure_remaining(src: &[u8], needed: usize, field: &'static str) -> Result<(), DecodingError> {
    if src.remaining() < needed {
        Err(DecodingError::Truncated {
            field,
            needed,
            remaining: src.remaining(),
        })
    } else {
        Ok(())
    }
}

/// Encode `list` with the default limits
pub fn encode(list: &[ConnectorDescription]) -> Result<Bytes, EncodingError> {
    ConnectorCodec::default().encode(list)
}

/// Decode `src` with the default limits
pub fn decode(src: &[u8]) -> Result<Vec<ConnectorDescription>, DecodingError> {
    ConnectorCodec::default().decode(src)
}
