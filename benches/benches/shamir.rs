use ark_std::rand::{rngs::StdRng, SeedableRng};
use benches::TOTALS;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve25519_mont::Fr;
use vss_schemes::shamir_ss::{deal_random_secret, honest_majority_threshold};

fn shamir(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);

    let mut group = c.benchmark_group("shamir");
    for total in TOTALS {
        let threshold = honest_majority_threshold(total).unwrap();

        group.bench_with_input(BenchmarkId::new("deal", total), &total, |b, _| {
            b.iter(|| deal_random_secret::<_, Fr>(&mut rng, threshold, total).unwrap())
        });

        let (_, shares, _) = deal_random_secret::<_, Fr>(&mut rng, threshold, total).unwrap();
        group.bench_with_input(BenchmarkId::new("reconstruct", total), &total, |b, _| {
            b.iter(|| shares.reconstruct_secret().unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, shamir);
criterion_main!(benches);
