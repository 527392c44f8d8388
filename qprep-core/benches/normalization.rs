//! Normalization throughput across state sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;
use qprep_core::{AmplitudeVector, Normalizer};

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let mut group = c.benchmark_group("normalize");

    for num_qubits in [4usize, 10, 16] {
        let dimension = 1usize << num_qubits;
        let amplitudes = vec![Complex64::new(1.0, 0.5); dimension];

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            &amplitudes,
            |b, amplitudes| {
                b.iter(|| {
                    let vector = AmplitudeVector::new(black_box(amplitudes.clone())).unwrap();
                    normalizer.normalize(vector).unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
