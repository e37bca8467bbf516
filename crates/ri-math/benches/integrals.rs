use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ri_core::Real;
use ri_math::{
    hit_or_miss, BoundedFunction, Integrator, MersenneTwisterUniformRng, SimpsonIntegral,
    TrapezoidIntegral,
};

fn quadrature(c: &mut Criterion) {
    let bf = BoundedFunction::new(|x: Real| (1.0 - x * x).sqrt(), 0.0, 1.0).unwrap();
    let mut group = c.benchmark_group("quadrature");
    for n in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("trapezoid", n), &n, |b, &n| {
            let t = TrapezoidIntegral::new(n);
            b.iter(|| t.integrate(black_box(&bf)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("simpson", n), &n, |b, &n| {
            let s = SimpsonIntegral::new(n);
            b.iter(|| s.integrate(black_box(&bf)).unwrap())
        });
    }
    group.finish();
}

fn monte_carlo(c: &mut Criterion) {
    let bf = BoundedFunction::new(|x: Real| x * x, -1.0, 1.0).unwrap();
    c.bench_function("hit_or_miss_100k", |b| {
        let mut rng = MersenneTwisterUniformRng::new(42);
        b.iter(|| hit_or_miss(black_box(&bf), 100_000, 1.0, &mut rng).unwrap())
    });
}

criterion_group!(benches, quadrature, monte_carlo);
criterion_main!(benches);
