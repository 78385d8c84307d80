//! VSS scheme `Pi_P`: the Pedersen-commitment instantiation of the unified framework `Pi` from
//! the paper [A Unified Framework for Verifiable Secret Sharing](https://eprint.iacr.org/2023/1669).
//!
//! Unlike classic Pedersen VSS, which commits to the `threshold` coefficients, the dealer commits
//! to the `total` evaluations: party `i`'s commitment is `C_i = f(i) * G + g(i) * H + gamma_i * K`
//! for a blinding polynomial `g` and a fresh randomizer `gamma_i`. The challenge `d` is derived
//! from the whole commitment vector and the dealer opens `z = g + d * f`. Party `i`, holding
//! `(f(i), gamma_i)`, recomputes `g(i) = z(i) - d * f(i)` and checks its own `C_i` with a
//! constant number of curve operations, at the price of a sharing phase linear in the number
//! of parties.

use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_into_iter, rand::RngCore, vec, vec::Vec, UniformRand};
use curve25519_mont::{Affine, CommitmentKey, Fr};
use digest::Digest;
use zeroize::Zeroize;

use crate::{
    common::{Share, ShareId, Shares},
    error::SSError,
    hashing::compute_random_oracle_challenge,
    shamir_ss,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const DOMAIN_SEPARATOR: &[u8] = b"PI_P";

/// A party's share of the secret together with the randomizer of its
/// commitment, both received from the dealer on a private channel
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, CanonicalSerialize, CanonicalDeserialize)]
pub struct RandomizedShare {
    pub id: ShareId,
    pub threshold: ShareId,
    pub share: Fr,
    pub randomizer: Fr,
}

/// Collection of `RandomizedShare`s
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, CanonicalSerialize, CanonicalDeserialize)]
pub struct RandomizedShares(pub Vec<RandomizedShare>);

/// Proof that the dealer shared the secret correctly.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof {
    /// `C_i = f(i) * G + g(i) * H + gamma_i * K`, one commitment per party
    pub commitments: Vec<Affine>,
    /// `z = g + d * f`
    pub resp: DensePolynomial<Fr>,
}

impl Drop for RandomizedShare {
    fn drop(&mut self) {
        self.share.zeroize();
        self.randomizer.zeroize();
    }
}

/// Generate a random secret with its randomized shares.
/// At least `threshold` number of shares are needed to reconstruct the secret.
/// Returns the secret, shares, the sharing polynomial and the proof of
/// correct sharing
pub fn deal_random_secret<R: RngCore, D: Digest>(
    rng: &mut R,
    threshold: ShareId,
    total: ShareId,
    comm_key: &CommitmentKey,
) -> Result<(Fr, RandomizedShares, DensePolynomial<Fr>, Proof), SSError> {
    let secret = Fr::rand(rng);
    let (shares, sharing_poly, proof) =
        deal_secret::<_, D>(rng, secret, threshold, total, comm_key)?;
    Ok((secret, shares, sharing_poly, proof))
}

/// Same as `deal_random_secret` above but accepts the secret to share
pub fn deal_secret<R: RngCore, D: Digest>(
    rng: &mut R,
    secret: Fr,
    threshold: ShareId,
    total: ShareId,
    comm_key: &CommitmentKey,
) -> Result<(RandomizedShares, DensePolynomial<Fr>, Proof), SSError> {
    let (shares, f) = shamir_ss::deal_secret(rng, secret, threshold, total)?;
    let (proof, shares) = prove::<_, D>(rng, &f, shares, comm_key)?;
    Ok((shares, f, proof))
}

/// Commit to an existing sharing, consuming the plain shares and attaching a
/// fresh randomizer to each of them
pub fn prove<R: RngCore, D: Digest>(
    rng: &mut R,
    f: &DensePolynomial<Fr>,
    shares: Shares<Fr>,
    comm_key: &CommitmentKey,
) -> Result<(Proof, RandomizedShares), SSError> {
    let total = shares.0.len();
    let g = <DensePolynomial<Fr> as DenseUVPolynomial<Fr>>::rand(f.degree(), rng);
    let randomizers = (0..total).map(|_| Fr::rand(rng)).collect::<Vec<_>>();
    let commitments = cfg_into_iter!(0..total)
        .map(|i| {
            comm_key.commit_with_randomizer(
                &shares.0[i].share,
                &g.evaluate(&Fr::from(i as u64 + 1)),
                &randomizers[i],
            )
        })
        .collect::<Vec<_>>();
    let d = challenge::<D>(comm_key, &commitments)?;
    let resp = g + (f * d);
    let shares = RandomizedShares(
        cfg_into_iter!(shares.0)
            .zip(cfg_into_iter!(randomizers))
            .map(|(s, randomizer)| RandomizedShare {
                id: s.id,
                threshold: s.threshold,
                share: s.share,
                randomizer,
            })
            .collect(),
    );
    Ok((Proof { commitments, resp }, shares))
}

impl Proof {
    /// Executed by party `share.id`, which only ever reads its own entry of
    /// the commitment vector (the rest feed the challenge)
    pub fn verify<D: Digest>(
        &self,
        share: &RandomizedShare,
        comm_key: &CommitmentKey,
    ) -> Result<(), SSError> {
        if share.id == 0 || share.id as usize > self.commitments.len() {
            return Err(SSError::InvalidShareId(share.id));
        }
        if self.resp.degree() != share.threshold as usize - 1 {
            return Err(SSError::DoesNotSupportThreshold(share.threshold));
        }
        let d = challenge::<D>(comm_key, &self.commitments)?;
        let z_i = self.resp.evaluate(&Fr::from(share.id));
        let g_i = z_i - d * share.share;
        if self.commitments[share.id as usize - 1]
            != comm_key.commit_with_randomizer(&share.share, &g_i, &share.randomizer)
        {
            return Err(SSError::InvalidShare);
        }
        Ok(())
    }
}

impl RandomizedShares {
    pub fn threshold(&self) -> ShareId {
        self.0[0].threshold
    }

    /// Discard the randomizers and reconstruct the secret
    pub fn reconstruct_secret(&self) -> Result<Fr, SSError> {
        let threshold = self.threshold();
        let shares = self
            .0
            .iter()
            .map(|s| Share {
                id: s.id,
                threshold,
                share: s.share,
            })
            .collect::<Vec<_>>();
        Shares(shares).reconstruct_secret()
    }
}

fn challenge<D: Digest>(
    comm_key: &CommitmentKey,
    commitments: &[Affine],
) -> Result<Fr, SSError> {
    let mut chal_bytes = vec![];
    chal_bytes.extend_from_slice(DOMAIN_SEPARATOR);
    comm_key.serialize_compressed(&mut chal_bytes)?;
    for c in commitments {
        c.serialize_compressed(&mut chal_bytes)?;
    }
    Ok(compute_random_oracle_challenge::<Fr, D>(&chal_bytes))
}
