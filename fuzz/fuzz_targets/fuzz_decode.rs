#![no_main]

use hub_connector::core::serialization::{MultiFormat, SerializationFormat};
use hub_connector::{decode, encode, ConnectorDescription};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz wire decoding - test for panics, over-allocation, partial results
    if let Ok(list) = decode(data) {
        // Anything accepted must re-encode byte-for-byte
        let bytes = encode(&list).expect("decoded list must be encodable");
        if !data.is_empty() {
            assert_eq!(&bytes[..], data);
        }
    }

    // Header-dispatched decoding across every format
    let _ = Vec::<ConnectorDescription>::deserialize_with_header(data);
    let _ = Vec::<ConnectorDescription>::deserialize_format(data, SerializationFormat::Json);
});
