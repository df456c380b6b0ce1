use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use roadstream_core::{FeatureStream, StreamConfig};
use serde_json::json;
use std::hint::black_box;
use std::io::Cursor;

fn synthetic_collection(features: usize) -> Vec<u8> {
    let body: Vec<String> = (0..features)
        .map(|i| {
            json!({
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[i, 0.5], [i + 1, 1.5], [i + 2, 2.5]]},
                "properties": {"highway": "secondary", "name": format!("Road {i}"), "ref": format!("B{i}")}
            })
            .to_string()
        })
        .collect();
    format!(r#"{{"type":"FeatureCollection","features":[{}]}}"#, body.join(",")).into_bytes()
}

fn bench_decode(c: &mut Criterion) {
    let doc = synthetic_collection(10_000);
    let mut group = c.benchmark_group("decode_features");
    group.throughput(Throughput::Bytes(doc.len() as u64));

    for chunk in [4 * 1024, 64 * 1024, 1024 * 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let stream = FeatureStream::from_reader(
                    Cursor::new(doc.as_slice()),
                    &StreamConfig::with_chunk_size(chunk),
                )
                .unwrap();
                black_box(stream.map(|f| f.unwrap()).count())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
