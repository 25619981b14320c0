//! # Serialization Formats
//!
//! Connector lists travel between peers in the compact wire format, but a
//! peer may also keep them in its configuration state or dump them for
//! debugging. This module puts the wire codec and the serde-based formats
//! behind one interface.
//!
//! ## Formats
//! - **Wire**: the fixed-width binary format from [`crate::core::codec`] (default)
//! - **Bincode**: serde binary encoding
//! - **JSON**: human-readable, for debugging and interop
//! - **MessagePack**: compact self-describing binary
//!
//! Whatever the format, decoded lists are checked against the same limits as
//! the wire codec, so a hand-edited JSON file cannot smuggle in an empty or
//! NUL-bearing host name.
//!
//! ## Usage
//! ```rust
//! use hub_connector::core::description::ConnectorDescription;
//! use hub_connector::core::serialization::{MultiFormat, SerializationFormat};
//!
//! let list = vec![ConnectorDescription::server("example.org", 443)];
//! let bytes = list.serialize_with_header(SerializationFormat::Json).unwrap();
//! let (back, format) = Vec::<ConnectorDescription>::deserialize_with_header(&bytes).unwrap();
//! assert_eq!(back, list);
//! assert_eq!(format, SerializationFormat::Json);
//! ```

use crate::core::codec::ConnectorCodec;
use crate::core::description::ConnectorDescription;
use crate::error::constants::ERR_EMPTY_DATA;
use crate::error::{ConnectorError, DecodingError, Result};

/// Supported serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializationFormat {
    /// Fixed-width wire format (default, what peers exchange)
    #[default]
    Wire,
    /// Serde binary format
    Bincode,
    /// Human-readable JSON format (debugging, interop)
    Json,
    /// Compact binary format (MessagePack)
    MessagePack,
}

impl SerializationFormat {
    /// Get the format identifier byte
    pub fn format_byte(self) -> u8 {
        match self {
            SerializationFormat::Wire => 0x00,
            SerializationFormat::Bincode => 0x01,
            SerializationFormat::Json => 0x02,
            SerializationFormat::MessagePack => 0x03,
        }
    }

    /// Detect format from identifier byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(SerializationFormat::Wire),
            0x01 => Some(SerializationFormat::Bincode),
            0x02 => Some(SerializationFormat::Json),
            0x03 => Some(SerializationFormat::MessagePack),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            SerializationFormat::Wire => "Wire",
            SerializationFormat::Bincode => "Bincode",
            SerializationFormat::Json => "JSON",
            SerializationFormat::MessagePack => "MessagePack",
        }
    }
}

/// Trait for values that can be stored in any of the supported formats
pub trait MultiFormat: Sized {
    /// Serialize to bytes using the specified format
    fn serialize_format(&self, format: SerializationFormat) -> Result<Vec<u8>>;

    /// Deserialize from bytes using the specified format
    fn deserialize_format(data: &[u8], format: SerializationFormat) -> Result<Self>;

    /// Serialize to bytes with format header
    fn serialize_with_header(&self, format: SerializationFormat) -> Result<Vec<u8>> {
        let mut data = vec![format.format_byte()];
        let mut payload = self.serialize_format(format)?;
        data.append(&mut payload);
        Ok(data)
    }

    /// Deserialize from bytes with format header
    fn deserialize_with_header(data: &[u8]) -> Result<(Self, SerializationFormat)> {
        let (&first, rest) = data
            .split_first()
            .ok_or_else(|| ConnectorError::DeserializeError(ERR_EMPTY_DATA.to_string()))?;

        let format =
            SerializationFormat::from_byte(first).ok_or(DecodingError::UnknownFormat(first))?;

        let value = Self::deserialize_format(rest, format)?;
        Ok((value, format))
    }
}

impl MultiFormat for Vec<ConnectorDescription> {
    fn serialize_format(&self, format: SerializationFormat) -> Result<Vec<u8>> {
        let codec = ConnectorCodec::default();
        if format != SerializationFormat::Wire {
            codec.validate_list(self)?;
        }

        match format {
            SerializationFormat::Wire => Ok(codec.encode(self)?.to_vec()),
            SerializationFormat::Bincode => {
                bincode::serialize(self).map_err(|e| ConnectorError::SerializeError(e.to_string()))
            }
            SerializationFormat::Json => {
                serde_json::to_vec(self).map_err(|e| ConnectorError::SerializeError(e.to_string()))
            }
            SerializationFormat::MessagePack => {
                rmp_serde::to_vec(self).map_err(|e| ConnectorError::SerializeError(e.to_string()))
            }
        }
    }

    fn deserialize_format(data: &[u8], format: SerializationFormat) -> Result<Self> {
        let codec = ConnectorCodec::default();
        let list: Self = match format {
            SerializationFormat::Wire => return Ok(codec.decode(data)?),
            SerializationFormat::Bincode => bincode::deserialize(data)
                .map_err(|e| ConnectorError::DeserializeError(e.to_string()))?,
            SerializationFormat::Json => serde_json::from_slice(data)
                .map_err(|e| ConnectorError::DeserializeError(e.to_string()))?,
            SerializationFormat::MessagePack => rmp_serde::from_slice(data)
                .map_err(|e| ConnectorError::DeserializeError(e.to_string()))?,
        };

        if list.len() > codec.max_connectors() {
            return Err(DecodingError::TooManyConnectors {
                count: list.len(),
                max: codec.max_connectors(),
            }
            .into());
        }
        for description in &list {
            description
                .validate(codec.max_host_name_len())
                .map_err(DecodingError::from)?;
        }
        Ok(list)
    }
}
