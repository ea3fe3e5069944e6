use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linfa::dataset::DatasetBase;
use linfa::traits::{Fit, Predict};
use ndarray::Array2;
use ndarray_rand::rand::{Rng, SeedableRng};
use rand_isaac::Isaac64Rng;
use zeroplusplus::ZeroParams;

fn random_binary(nrows: usize, ncols: usize, rng: &mut Isaac64Rng) -> Array2<f64> {
    Array2::from_shape_fn((nrows, ncols), |_| if rng.gen_bool(0.3) { 1.0 } else { 0.0 })
}

fn zero_bench(c: &mut Criterion) {
    let training_set_sizes: Vec<usize> = vec![100, 1000, 10000, 100000];
    let mut rng = Isaac64Rng::seed_from_u64(42);

    let params = ZeroParams::from_seed(50, 256, 42);

    let mut group = c.benchmark_group("zeroplusplus");
    group.sample_size(10);
    let num_features = 25;

    for n in training_set_sizes.iter() {
        let train = random_binary(*n, num_features, &mut rng);

        let dataset = DatasetBase::new(train, ());
        group.bench_with_input(BenchmarkId::new("fit", n), &dataset, |b, d| {
            b.iter(|| params.fit(d))
        });

        let model = params.fit(&dataset).unwrap();
        let query = random_binary(*n, num_features, &mut rng);
        group.bench_with_input(BenchmarkId::new("predict", n), &query, |b, q| {
            b.iter(|| model.predict(q))
        });
    }

    group.finish();
}

criterion_group!(benches, zero_bench);
criterion_main!(benches);
