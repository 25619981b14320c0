use bytes::BytesMut;
use hub_connector::{decode, ConnectorCodec, ConnectorDescription};

#[test]
fn stress_encode_into_shared_buffer() {
    // Reuse one buffer across a long series of lists, ensure no stale bytes leak through
    let codec = ConnectorCodec::new();
    let mut buf = BytesMut::new();

    for size in [0usize, 1, 16, 256, 1024] {
        let list: Vec<ConnectorDescription> = (0..size)
            .map(|n| ConnectorDescription::client(format!("10.0.{}.{}", n / 256, n % 256), 6000))
            .collect();
        for _ in 0..200 {
            codec.encode_into(&list, &mut buf).unwrap();
            let decoded = decode(&buf).unwrap();
            assert_eq!(decoded.len(), size);
            buf.clear();
        }
    }
}
