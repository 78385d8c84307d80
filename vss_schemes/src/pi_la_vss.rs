//! VSS scheme `Pi_LA`: the hash-commitment instantiation of the unified framework `Pi` from the
//! paper [A Unified Framework for Verifiable Secret Sharing](https://eprint.iacr.org/2023/1669),
//! for secrets with high entropy, so no per-party salt is needed.
//!
//! The dealer samples a blinding polynomial `b` of the same degree as the sharing polynomial `f`
//! and publishes one digest `C_i = H(f(i), b(i))` per party. The challenge `d` is derived from
//! all the digests and the dealer opens `r = b - d * f`. Party `i` recomputes
//! `b(i) = r(i) + d * f(i)` and checks that its digest matches.

use ark_ff::PrimeField;
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_into_iter, rand::RngCore, vec, vec::Vec};
use digest::Digest;

use crate::{
    common::{Share, ShareId, Shares},
    error::SSError,
    hashing::compute_random_oracle_challenge,
    shamir_ss,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const DEFAULT_DIGEST_SIZE: usize = 64;
pub const DOMAIN_SEPARATOR: &[u8] = b"PI_LA";

/// Proof that the dealer shared the secret correctly.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<F: PrimeField, const DIGEST_SIZE: usize = DEFAULT_DIGEST_SIZE> {
    /// `C_i = H(f(i), b(i))`, one digest per party
    pub commitments: Vec<[u8; DIGEST_SIZE]>,
    /// `r = b - d * f`
    pub resp: DensePolynomial<F>,
}

/// Generate a random secret with its shares according to Shamir's secret sharing.
/// At least `threshold` number of shares are needed to reconstruct the secret.
/// Returns the secret, shares, the sharing polynomial and the proof of
/// correct sharing
pub fn deal_random_secret<R: RngCore, F: PrimeField, D: Digest, const DIGEST_SIZE: usize>(
    rng: &mut R,
    threshold: ShareId,
    total: ShareId,
) -> Result<(F, Shares<F>, DensePolynomial<F>, Proof<F, DIGEST_SIZE>), SSError> {
    let secret = F::rand(rng);
    let (shares, sharing_poly, proof) =
        deal_secret::<_, _, D, DIGEST_SIZE>(rng, secret, threshold, total)?;
    Ok((secret, shares, sharing_poly, proof))
}

/// Same as `deal_random_secret` above but accepts the secret to share
pub fn deal_secret<R: RngCore, F: PrimeField, D: Digest, const DIGEST_SIZE: usize>(
    rng: &mut R,
    secret: F,
    threshold: ShareId,
    total: ShareId,
) -> Result<(Shares<F>, DensePolynomial<F>, Proof<F, DIGEST_SIZE>), SSError> {
    let (shares, f) = shamir_ss::deal_secret(rng, secret, threshold, total)?;
    let proof = prove::<_, _, D, DIGEST_SIZE>(rng, &f, &shares)?;
    Ok((shares, f, proof))
}

/// Commit to an existing sharing and open the challenge-dependent combination
pub fn prove<R: RngCore, F: PrimeField, D: Digest, const DIGEST_SIZE: usize>(
    rng: &mut R,
    f: &DensePolynomial<F>,
    shares: &Shares<F>,
) -> Result<Proof<F, DIGEST_SIZE>, SSError> {
    let total = shares.0.len();
    let b = <DensePolynomial<F> as DenseUVPolynomial<F>>::rand(f.degree(), rng);
    let commitments = cfg_into_iter!(0..total)
        .map(|i| {
            hash_commitment::<_, D, DIGEST_SIZE>(
                shares.0[i].share,
                b.evaluate(&F::from(i as u64 + 1)),
            )
        })
        .collect::<Vec<_>>();
    let d = challenge::<F, D, DIGEST_SIZE>(&commitments)?;
    let resp = &b - &(f * d);
    Ok(Proof { commitments, resp })
}

impl<F: PrimeField, const DIGEST_SIZE: usize> Proof<F, DIGEST_SIZE> {
    pub fn verify<D: Digest>(&self, share: &Share<F>) -> Result<(), SSError> {
        if share.id == 0 || share.id as usize > self.commitments.len() {
            return Err(SSError::InvalidShareId(share.id));
        }
        if self.resp.degree() != share.threshold as usize - 1 {
            return Err(SSError::DoesNotSupportThreshold(share.threshold));
        }
        let d = challenge::<F, D, DIGEST_SIZE>(&self.commitments)?;
        let b_i = self.resp.evaluate(&F::from(share.id)) + d * share.share;
        if self.commitments[share.id as usize - 1]
            != hash_commitment::<_, D, DIGEST_SIZE>(share.share, b_i)
        {
            return Err(SSError::InvalidShare);
        }
        Ok(())
    }
}

fn challenge<F: PrimeField, D: Digest, const DIGEST_SIZE: usize>(
    commitments: &[[u8; DIGEST_SIZE]],
) -> Result<F, SSError> {
    let mut chal_bytes = vec![];
    chal_bytes.extend_from_slice(DOMAIN_SEPARATOR);
    for c in commitments {
        c.serialize_compressed(&mut chal_bytes)?;
    }
    Ok(compute_random_oracle_challenge::<F, D>(&chal_bytes))
}

pub fn hash_commitment<F: PrimeField, D: Digest, const DIGEST_SIZE: usize>(
    share: F,
    blinding: F,
) -> [u8; DIGEST_SIZE] {
    let mut bytes = Vec::with_capacity(share.compressed_size() * 2 + DOMAIN_SEPARATOR.len());
    share.serialize_compressed(&mut bytes).unwrap();
    bytes.extend_from_slice(DOMAIN_SEPARATOR);
    blinding.serialize_compressed(&mut bytes).unwrap();
    let d = D::digest(&bytes);
    d.as_slice().try_into().expect("Wrong length")
}
