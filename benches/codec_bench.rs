use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use hub_connector::{ConnectorCodec, ConnectorDescription};

fn hub_list(len: usize) -> Vec<ConnectorDescription> {
    (0..len)
        .map(|n| ConnectorDescription::new(format!("hub-{n}.rendezvous.example"), 6910, n % 2 == 0))
        .collect()
}

#[allow(clippy::unwrap_used)]
fn bench_connector_list_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("connector_list_encode_decode");
    let list_sizes = [1usize, 8, 64, 1024];
    let codec = ConnectorCodec::new();

    for &size in &list_sizes {
        let list = hub_list(size);
        let encoded = codec.encode(&list).unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_function(format!("encode_{size}"), |b| {
            b.iter_batched(
                || list.clone(),
                |list| codec.encode(&list).unwrap(),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("decode_{size}"), |b| {
            b.iter(|| {
                let decoded = codec.decode(&encoded);
                assert!(decoded.is_ok());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_connector_list_encode_decode);
criterion_main!(benches);
