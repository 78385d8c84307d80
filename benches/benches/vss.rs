//! Sharing and single-party verification timings for the four VSS schemes,
//! swept over the participant count with an honest-majority threshold.

use ark_std::rand::{rngs::StdRng, SeedableRng};
use benches::TOTALS;
use blake2::Blake2b512;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve25519_mont::{CommitmentKey, Fq, Fr};
use vss_schemes::{abcp_vss, pedersen_vss, pi_la_vss, pi_p_vss, shamir_ss};

fn pedersen(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let comm_key = CommitmentKey::new::<Blake2b512>(b"bench");

    let mut group = c.benchmark_group("pedersen-vss");
    group.sample_size(10);
    for total in TOTALS {
        let threshold = shamir_ss::honest_majority_threshold(total).unwrap();

        group.bench_with_input(BenchmarkId::new("deal", total), &total, |b, _| {
            b.iter(|| pedersen_vss::deal_random_secret(&mut rng, threshold, total, &comm_key).unwrap())
        });

        let (_, _, shares, commitments, _, _) =
            pedersen_vss::deal_random_secret(&mut rng, threshold, total, &comm_key).unwrap();
        group.bench_with_input(BenchmarkId::new("verify", total), &total, |b, _| {
            b.iter(|| shares.0[0].verify(&commitments, &comm_key).unwrap())
        });
    }
    group.finish();
}

fn abcp(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);

    let mut group = c.benchmark_group("abcp23-vss");
    for total in TOTALS {
        let threshold = shamir_ss::honest_majority_threshold(total).unwrap();

        group.bench_with_input(BenchmarkId::new("deal", total), &total, |b, _| {
            b.iter(|| {
                abcp_vss::deal_random_secret::<_, Fq, Blake2b512, 64>(&mut rng, threshold, total)
                    .unwrap()
            })
        });

        let (_, shares, _, proof, salts) =
            abcp_vss::deal_random_secret::<_, Fq, Blake2b512, 64>(&mut rng, threshold, total)
                .unwrap();
        group.bench_with_input(BenchmarkId::new("verify", total), &total, |b, _| {
            b.iter(|| proof.verify::<Blake2b512>(&shares.0[0], &salts[0]).unwrap())
        });
    }
    group.finish();
}

fn pi_p(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let comm_key = CommitmentKey::new::<Blake2b512>(b"bench");

    let mut group = c.benchmark_group("pi-p-vss");
    group.sample_size(10);
    for total in TOTALS {
        let threshold = shamir_ss::honest_majority_threshold(total).unwrap();

        group.bench_with_input(BenchmarkId::new("deal", total), &total, |b, _| {
            b.iter(|| {
                pi_p_vss::deal_random_secret::<_, Blake2b512>(&mut rng, threshold, total, &comm_key)
                    .unwrap()
            })
        });

        let (_, shares, _, proof) =
            pi_p_vss::deal_random_secret::<_, Blake2b512>(&mut rng, threshold, total, &comm_key)
                .unwrap();
        group.bench_with_input(BenchmarkId::new("verify", total), &total, |b, _| {
            b.iter(|| proof.verify::<Blake2b512>(&shares.0[0], &comm_key).unwrap())
        });
    }
    group.finish();
}

fn pi_la(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);

    let mut group = c.benchmark_group("pi-la-vss");
    for total in TOTALS {
        let threshold = shamir_ss::honest_majority_threshold(total).unwrap();

        group.bench_with_input(BenchmarkId::new("deal", total), &total, |b, _| {
            b.iter(|| {
                pi_la_vss::deal_random_secret::<_, Fr, Blake2b512, 64>(&mut rng, threshold, total)
                    .unwrap()
            })
        });

        let (_, shares, _, proof) =
            pi_la_vss::deal_random_secret::<_, Fr, Blake2b512, 64>(&mut rng, threshold, total)
                .unwrap();
        group.bench_with_input(BenchmarkId::new("verify", total), &total, |b, _| {
            b.iter(|| proof.verify::<Blake2b512>(&shares.0[0]).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, pedersen, abcp, pi_p, pi_la);
criterion_main!(benches);
