//! Benchmarks for the polynomial solution pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use polyrec_poly::DensePoly;
use polyrec_recurrence::{DegreeBound, PolySolver, Recurrence, SolverConfig};
use polyrec_rings::rationals::Q;

fn poly(coeffs: &[i64]) -> DensePoly<Q> {
    DensePoly::new(coeffs.iter().map(|&c| Q::from_integer(c)).collect())
}

/// y(n+1) - y(n) = n^k, whose solution has degree k + 1.
fn power_sum(k: usize) -> Recurrence {
    Recurrence::new(vec![poly(&[-1]), poly(&[1])], DensePoly::monomial(Q::from_integer(1), k))
        .unwrap()
}

/// n y(n+1) - (n + m) y(n) = 0, whose indicial root is m.
fn indicial(m: i64) -> Recurrence {
    Recurrence::homogeneous(vec![poly(&[-m, -1]), poly(&[0, 1])]).unwrap()
}

fn bench_power_sums(c: &mut Criterion) {
    let mut group = c.benchmark_group("power_sum");
    let solver = PolySolver::default();

    for k in [2, 5, 10, 20] {
        let rec = power_sum(k);
        group.bench_with_input(BenchmarkId::new("solve", k), &k, |b, _| {
            b.iter(|| black_box(solver.solve(&rec)))
        });
    }

    group.finish();
}

fn bench_degree_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("degree_bound");
    let config = SolverConfig::default();

    for m in [12, 720, 5040, 40320] {
        let rec = indicial(m);
        group.bench_with_input(BenchmarkId::new("divisor_search", m), &m, |b, _| {
            b.iter(|| black_box(DegreeBound::compute(&rec, &config)))
        });
    }

    group.finish();
}

fn bench_second_order(c: &mut Criterion) {
    let rec = Recurrence::homogeneous(vec![poly(&[-1, 1]), poly(&[0, -1]), poly(&[3])]).unwrap();
    let solver = PolySolver::default();

    c.bench_function("second_order_family", |b| b.iter(|| black_box(solver.solve(&rec))));
}

criterion_group!(benches, bench_power_sums, bench_degree_bound, bench_second_order);
criterion_main!(benches);
