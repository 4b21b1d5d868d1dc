//! # Gate Benchmarks
//!
//! Measures gate lookup and application on a single qubit.
//! Every operation is a fixed 2x2 complex product.
//!
//! Run: `cargo bench --bench gate_bench`

use bloch_quantum::{Gate, QuantumState, list_gates};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark typed gate application for each registry entry
fn bench_gate_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_apply");
    let state = QuantumState::initial().apply(Gate::H);

    for gate in Gate::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(gate.key()), &gate, |b, &gate| {
            b.iter(|| black_box(state).apply(black_box(gate)))
        });
    }

    group.finish();
}

/// Benchmark key lookup + application
fn bench_gate_by_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_by_key");
    let state = QuantumState::initial();

    group.bench_function("apply_gate_T", |b| {
        b.iter(|| black_box(state).apply_gate(black_box("T")))
    });

    group.bench_function("unknown_key", |b| {
        b.iter(|| black_box(state).apply_gate(black_box("CNOT")))
    });

    group.finish();
}

/// Benchmark long sequences over the whole registry
fn bench_gate_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_sequence");
    let keys: Vec<&str> = list_gates().map(|g| g.key).collect();

    for repeats in [1usize, 10, 100] {
        let sequence: Vec<&str> = keys.iter().copied().cycle().take(keys.len() * repeats).collect();
        group.bench_with_input(BenchmarkId::from_parameter(sequence.len()), &sequence, |b, seq| {
            b.iter(|| QuantumState::initial().apply_sequence(black_box(seq)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gate_apply, bench_gate_by_key, bench_gate_sequence);
criterion_main!(benches);
