// In canonpb-core/benches/varint_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use canonpb::kernels::varint;

/// Builds a buffer of back-to-back varints whose values need `width` bytes each.
fn generate_varint_stream(count: usize, width: u32) -> (Vec<u8>, usize) {
    let value = if width >= 10 { u64::MAX } else { (1u64 << (7 * width)) - 1 };
    let mut buffer = Vec::with_capacity(count * width as usize);
    for _ in 0..count {
        varint::encode_into(value, &mut buffer);
    }
    (buffer, count)
}

const BENCH_VALUE_COUNT: usize = 4096;

fn bench_varint_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("Varint Kernels");

    for width in [1u32, 3, 5, 10] {
        let (buffer, count) = generate_varint_stream(BENCH_VALUE_COUNT, width);
        group.throughput(Throughput::Bytes(buffer.len() as u64));

        group.bench_function(format!("Decode ({} byte values)", width), |b| {
            b.iter(|| {
                let mut pos = 0;
                let mut acc = 0u64;
                for _ in 0..count {
                    let decoded = varint::decode(black_box(&buffer), pos).unwrap();
                    acc = acc.wrapping_add(decoded.value);
                    pos = decoded.new_position;
                }
                black_box(acc)
            })
        });

        let value = if width >= 10 { u64::MAX } else { (1u64 << (7 * width)) - 1 };
        group.bench_function(format!("Encode ({} byte values)", width), |b| {
            b.iter(|| {
                let mut out = Vec::with_capacity(buffer.len());
                for _ in 0..count {
                    varint::encode_into(black_box(value), &mut out);
                }
                black_box(out)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_varint_kernels);
criterion_main!(benches);
