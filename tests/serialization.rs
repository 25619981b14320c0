//! Integration tests for alternative serialization formats
//!
//! Tests the MultiFormat implementation for connector lists across the wire
//! format, Bincode, JSON (human-readable) and MessagePack (compact).

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::uninlined_format_args,
    clippy::expect_fun_call
)]

use hub_connector::core::serialization::{MultiFormat, SerializationFormat};
use hub_connector::{ConnectorDescription, ConnectorError, DecodingError};

fn hubs() -> Vec<ConnectorDescription> {
    vec![
        ConnectorDescription::server("10.20.35.100", 6910),
        ConnectorDescription::client("10.20.35.200", 6000),
        ConnectorDescription::server("example.org", 443),
    ]
}

#[test]
fn test_wire_serialization() {
    let list = hubs();
    let bytes = list
        .serialize_format(SerializationFormat::Wire)
        .expect("Failed to serialize");

    // record count leads the buffer
    assert_eq!(&bytes[..4], &[0, 0, 0, 3]);

    let recovered = Vec::<ConnectorDescription>::deserialize_format(&bytes, SerializationFormat::Wire)
        .expect("Failed to deserialize");
    assert_eq!(list, recovered);
}

#[test]
fn test_json_serialization() {
    let list = hubs();
    let bytes = list
        .serialize_format(SerializationFormat::Json)
        .expect("Failed to serialize");

    let json_str = std::str::from_utf8(&bytes).expect("Invalid UTF-8");
    println!("JSON representation: {}", json_str);
    assert!(json_str.contains("\"host_name\":\"10.20.35.100\""));
    assert!(json_str.contains("\"port\":6910"));
    assert!(json_str.contains("\"is_server\":true"));

    let recovered = Vec::<ConnectorDescription>::deserialize_format(&bytes, SerializationFormat::Json)
        .expect("Failed to deserialize");
    assert_eq!(list, recovered);
}

#[test]
fn test_messagepack_serialization() {
    let list = hubs();
    let bytes = list
        .serialize_format(SerializationFormat::MessagePack)
        .expect("Failed to serialize");

    let recovered =
        Vec::<ConnectorDescription>::deserialize_format(&bytes, SerializationFormat::MessagePack)
            .expect("Failed to deserialize");
    assert_eq!(list, recovered);
}

#[test]
fn test_bincode_serialization() {
    let list = hubs();
    let bytes = list
        .serialize_format(SerializationFormat::Bincode)
        .expect("Failed to serialize");

    let recovered = Vec::<ConnectorDescription>::deserialize_format(&bytes, SerializationFormat::Bincode)
        .expect("Failed to deserialize");
    assert_eq!(list, recovered);
}

#[test]
fn test_format_with_header() {
    let list = hubs();
    let bytes = list
        .serialize_with_header(SerializationFormat::MessagePack)
        .expect("Failed to serialize");

    assert_eq!(bytes[0], SerializationFormat::MessagePack.format_byte());

    let (recovered, format) =
        Vec::<ConnectorDescription>::deserialize_with_header(&bytes).expect("Failed to deserialize");
    assert_eq!(list, recovered);
    assert_eq!(format, SerializationFormat::MessagePack);
}

#[test]
fn test_empty_list_all_formats() {
    let list: Vec<ConnectorDescription> = Vec::new();
    for format in [
        SerializationFormat::Wire,
        SerializationFormat::Bincode,
        SerializationFormat::Json,
        SerializationFormat::MessagePack,
    ] {
        let bytes = list
            .serialize_with_header(format)
            .expect(&format!("Failed to serialize with {}", format.name()));
        let (recovered, _) = Vec::<ConnectorDescription>::deserialize_with_header(&bytes)
            .expect(&format!("Failed to deserialize with {}", format.name()));
        assert!(recovered.is_empty());
    }
}

#[test]
fn test_truncated_wire_with_header() {
    let bytes = hubs()
        .serialize_with_header(SerializationFormat::Wire)
        .expect("Failed to serialize");
    let result = Vec::<ConnectorDescription>::deserialize_with_header(&bytes[..bytes.len() - 1]);
    assert!(matches!(
        result,
        Err(ConnectorError::Decoding(DecodingError::Truncated { .. }))
    ));
}

#[test]
fn test_corrupt_json_rejected() {
    let result =
        Vec::<ConnectorDescription>::deserialize_format(b"[{\"host_name\":", SerializationFormat::Json);
    assert!(matches!(result, Err(ConnectorError::DeserializeError(_))));
}

#[test]
fn test_format_size_comparison() {
    let list = hubs();

    let wire = list.serialize_format(SerializationFormat::Wire).unwrap();
    let json = list.serialize_format(SerializationFormat::Json).unwrap();
    let msgpack = list.serialize_format(SerializationFormat::MessagePack).unwrap();
    let bincode = list.serialize_format(SerializationFormat::Bincode).unwrap();

    println!("Wire: {} bytes", wire.len());
    println!("JSON: {} bytes", json.len());
    println!("MessagePack: {} bytes", msgpack.len());
    println!("Bincode: {} bytes", bincode.len());

    // bincode spends 8 bytes on every length prefix, the wire format 2 or 4
    assert!(wire.len() < bincode.len());
    assert!(wire.len() < json.len());
}
