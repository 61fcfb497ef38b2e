use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tg_core::{analyze, has_failures};

fn clean_buffer(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

fn bench_audit(c: &mut Criterion) {
    let mut group = c.benchmark_group("audit");
    for &len in &[1 << 16, 1 << 20, 1 << 24] {
        let values = clean_buffer(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("analyze", len), &values, |b, values| {
            b.iter(|| analyze(black_box(values.as_slice())));
        });
        group.bench_with_input(
            BenchmarkId::new("has_failures", len),
            &values,
            |b, values| {
                b.iter(|| has_failures(black_box(values.as_slice())));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_audit);
criterion_main!(benches);
