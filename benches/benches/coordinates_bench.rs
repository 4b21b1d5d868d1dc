//! # Bloch Coordinate Benchmarks
//!
//! Run: `cargo bench --bench coordinates_bench`

use bloch_quantum::{BasisLabel, Gate, QuantumState};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_to_coordinates(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_coordinates");
    let state = QuantumState::initial().apply(Gate::H).apply(Gate::T);

    group.bench_function("to_coordinates", |b| {
        b.iter(|| black_box(state).to_coordinates())
    });

    let v = state.to_coordinates();

    group.bench_function("to_angles", |b| b.iter(|| black_box(v).to_angles()));

    group.bench_function("nearest_label", |b| {
        b.iter(|| black_box(v).nearest_label())
    });

    group.bench_function("render_ascii", |b| {
        b.iter(|| black_box(BasisLabel::PlusI.point()).render_ascii(6))
    });

    group.finish();
}

criterion_group!(benches, bench_to_coordinates);
criterion_main!(benches);
