//! Benchmarks for the transpose and densify kernels
//!
//! Compares the serial and tiled transpose, and the fused transposed densify
//! against transposing first and densifying afterwards.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sparsecol_core::{Csc, Csc64};
use sparsecol_kernels::{
    to_dense, to_dense_transposed, transpose, transpose_with, KernelOptions,
};
use std::hint::black_box;

/// Random canonical CSC matrix with roughly `density * nrows * ncols` entries
fn random_csc(nrows: usize, ncols: usize, density: f64) -> Csc64 {
    let mut seed = 12345u64;
    let mut indptr = vec![0i64];
    let mut indices = Vec::new();
    let mut data = Vec::new();
    let cutoff = (density * 10_000.0) as u64;
    for _ in 0..ncols {
        for i in 0..nrows {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
            if (seed >> 16) % 10_000 < cutoff {
                indices.push(i as i64);
                data.push(((seed >> 8) % 1000) as f64 / 1000.0 + 0.001);
            }
        }
        indptr.push(indices.len() as i64);
    }
    Csc::from_parts(nrows, ncols, indptr, indices, data, true).expect("valid CSC")
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    for &(n, density) in &[(1_000usize, 0.01f64), (4_000, 0.005), (10_000, 0.001)] {
        let a = random_csc(n, n, density);
        group.throughput(Throughput::Elements(a.nnz() as u64));
        let serial = KernelOptions::default().sequential();
        let tiled = KernelOptions::default().with_parallel_threshold(0);
        group.bench_with_input(BenchmarkId::new("serial", n), &a, |b, a| {
            b.iter(|| transpose_with(black_box(a), &serial).expect("transpose"));
        });
        group.bench_with_input(BenchmarkId::new("tiled", n), &a, |b, a| {
            b.iter(|| transpose_with(black_box(a), &tiled).expect("transpose"));
        });
    }
    group.finish();
}

fn bench_densify(c: &mut Criterion) {
    let mut group = c.benchmark_group("densify");
    for &n in &[256usize, 1_024] {
        let a = random_csc(n, n / 2, 0.02);
        group.bench_with_input(BenchmarkId::new("to_dense", n), &a, |b, a| {
            b.iter(|| to_dense(black_box(a)).expect("dense"));
        });
        group.bench_with_input(BenchmarkId::new("fused_transposed", n), &a, |b, a| {
            b.iter(|| to_dense_transposed(black_box(a)).expect("dense"));
        });
        group.bench_with_input(BenchmarkId::new("transpose_then_dense", n), &a, |b, a| {
            b.iter(|| to_dense(&transpose(black_box(a)).expect("transpose")).expect("dense"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transpose, bench_densify);
criterion_main!(benches);
