use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
    Throughput,
};
use lexcount::{brute_count, formula_count, Sweep};
use std::hint::black_box;

fn brute_vs_formula(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut group = c.benchmark_group("brute_vs_formula");
    group.plot_config(plot_config);

    let ns = [99, 4_321, 123_456, 1_234_567];
    let moduli = [1, 7];
    for &n in &ns {
        for &m in &moduli {
            group.bench_with_input(BenchmarkId::new(format!("brute m={}", m), n), &n, |b, &n| {
                b.iter(|| brute_count(black_box(n), m));
            });
            group.bench_with_input(
                BenchmarkId::new(format!("formula m={}", m), n),
                &n,
                |b, &n| {
                    b.iter(|| formula_count(black_box(n), m));
                },
            );
        }
    }

    group.finish();
}

fn formula_varying_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("formula_varying_digits");

    let ns = [
        7,
        12_345,
        1_234_567_890,
        123_456_789_012_345,
        u64::MAX,
    ];
    for n in ns {
        group.throughput(Throughput::Elements(n.to_string().len() as u64));
        group.bench_with_input(BenchmarkId::new("formula", n), &n, |b, &n| {
            b.iter(|| formula_count(black_box(n), black_box(97)));
        });
    }

    group.finish();
}

fn default_sweep(c: &mut Criterion) {
    c.bench_function("default_sweep", |b| {
        b.iter(|| Sweep::default().run());
    });
}

criterion_group!(counting, brute_vs_formula, formula_varying_digits, default_sweep);
criterion_main!(counting);
