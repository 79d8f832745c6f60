use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kselect::cs::select::analysis::Distribution;
use kselect::{select_deterministic, select_randomized_in_place, select_randomized_with};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

fn bench_selection(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    for distribution in Distribution::ALL {
        let mut group = c.benchmark_group(format!("select_{}", distribution));
        for size in SIZES {
            let data = distribution.generate(size, &mut rng);
            let k = size / 2;

            group.bench_with_input(BenchmarkId::new("deterministic", size), &data, |b, data| {
                b.iter(|| select_deterministic(black_box(data), black_box(k)))
            });

            let mut pivot_rng = StdRng::seed_from_u64(7);
            group.bench_with_input(BenchmarkId::new("randomized", size), &data, |b, data| {
                b.iter(|| select_randomized_with(black_box(data), black_box(k), &mut pivot_rng))
            });

            let mut pivot_rng = StdRng::seed_from_u64(7);
            group.bench_with_input(
                BenchmarkId::new("randomized_in_place", size),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut arr = data.clone();
                        select_randomized_in_place(&mut arr, black_box(k), &mut pivot_rng)
                    })
                },
            );
        }
        group.finish();
    }
}

fn bench_std_select_nth(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("select_nth_unstable");
    for size in SIZES {
        let data = Distribution::Random.generate(size, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let mut arr = data.clone();
                *arr.select_nth_unstable(black_box(size / 2)).1
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection, bench_std_select_nth);
criterion_main!(benches);
