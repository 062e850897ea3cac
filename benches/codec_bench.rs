// In canonpb-core/benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use canonpb::bridge;
use canonpb::kernels::{packed, scalar};
use canonpb::types::WireType;
use canonpb::CodecConfig;

const BENCH_ELEMENT_COUNT: usize = 1024;

/// A flat message: alternating sint64 (field 1) and string (field 2) fields.
fn generate_flat_message(fields: usize) -> Vec<u8> {
    let mut message = Vec::new();
    for i in 0..fields {
        message.extend(bridge::encode_key(1, WireType::Varint));
        message.extend(bridge::encode_sint64(-(i as i64) * 7919));
        message.extend(bridge::encode_key(2, WireType::LengthDelimited));
        message.extend(bridge::encode_string("canonical"));
    }
    message
}

fn bench_bridge_walk(c: &mut Criterion) {
    let message = generate_flat_message(BENCH_ELEMENT_COUNT);

    let mut group = c.benchmark_group("Bridge Message Walk");
    group.throughput(Throughput::Bytes(message.len() as u64));

    group.bench_function("Decode keys + sint64 + string spans", |b| {
        b.iter(|| {
            let buffer = black_box(&message);
            let mut pos = 0;
            let mut acc = 0i64;
            while pos < buffer.len() {
                let (ok, after_key, field_number, _) = bridge::decode_key(pos, buffer);
                assert!(ok);
                if field_number == 1 {
                    let (_, next, value) = bridge::decode_sint64(after_key, buffer);
                    acc = acc.wrapping_add(value);
                    pos = next;
                } else {
                    let (_, start, len) = bridge::decode_string(after_key, buffer);
                    pos = start + len;
                }
            }
            black_box(acc)
        })
    });

    group.finish();
}

fn bench_packed(c: &mut Criterion) {
    let values: Vec<u32> = (0..BENCH_ELEMENT_COUNT as u32).map(|v| v * 131).collect();
    let varint_packed = packed::encode_packed(&values, scalar::encode_uint32);
    let fixed_packed = packed::encode_packed(&values, bridge::encode_fixed32);
    let config = CodecConfig::default();

    let mut group = c.benchmark_group("Packed Repeated");
    group.throughput(Throughput::Elements(BENCH_ELEMENT_COUNT as u64));

    group.bench_function("Decode packed uint32", |b| {
        b.iter(|| {
            black_box(packed::decode_packed(
                black_box(&varint_packed),
                0,
                &config,
                scalar::decode_uint32,
            ))
        })
    });
    group.bench_function("Decode packed fixed32", |b| {
        b.iter(|| {
            black_box(packed::decode_packed(
                black_box(&fixed_packed),
                0,
                &config,
                canonpb::kernels::fixed::decode_fixed32,
            ))
        })
    });
    group.bench_function("Encode packed uint32", |b| {
        b.iter(|| black_box(packed::encode_packed(black_box(&values), scalar::encode_uint32)))
    });

    group.finish();
}

criterion_group!(benches, bench_bridge_walk, bench_packed);
criterion_main!(benches);
