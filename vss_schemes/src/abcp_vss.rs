//! Verifiable Secret Sharing scheme by Atapoor, Baghery, Cozzo and Pedersen, committing to the
//! shares with salted hashes instead of elliptic curve operations. As described in the paper
//! [VSS from Distributed ZK Proofs and Applications](https://eprint.iacr.org/2023/992).
//!
//! The dealer samples a blinding polynomial `b` of the same degree as the sharing polynomial `f`
//! and, per party `i`, two random salts `y_i, y'_i`. It publishes the digests
//! `C_i = H(b(i), y_i)` and `C'_i = H(f(i), y'_i)`, derives the challenge `d` from all the
//! digests, and opens `r = b - d * f`. Party `i` receives `(f(i), y_i, y'_i)` privately and
//! accepts iff recomputing both of its digests from `r(i) + d * f(i)` and `f(i)` succeeds.

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
pub const SALT_SIZE: usize = 16;
pub const DOMAIN_SEPARATOR: &[u8] = b"ABCP23";

/// 128-bit salt making the per-party hash commitments hiding
pub type Salt = [u8; SALT_SIZE];

/// The two salts of one party, sent to it on a private channel along with its
/// share
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct SaltPair {
    pub blinding_salt: Salt,
    pub share_salt: Salt,
}

/// Proof that the dealer shared the secret correctly.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<F: PrimeField, const DIGEST_SIZE: usize = DEFAULT_DIGEST_SIZE> {
    /// `C_i = H(b(i), y_i)`, one digest per party
    pub blinding_commitments: Vec<[u8; DIGEST_SIZE]>,
    /// `C'_i = H(f(i), y'_i)`, one digest per party
    pub share_commitments: Vec<[u8; DIGEST_SIZE]>,
    /// `r = b - d * f`
    pub resp: DensePolynomial<F>,
}

/// Generate a random secret with its shares according to Shamir's secret sharing.
/// At least `threshold` number of shares are needed to reconstruct the secret.
/// Returns the secret, shares, the sharing polynomial, the proof of correct
/// sharing and the per-party salts
pub fn deal_random_secret<R: RngCore, F: PrimeField, D: Digest, const DIGEST_SIZE: usize>(
    rng: &mut R,
    threshold: ShareId,
    total: ShareId,
) -> Result<
    (
        F,
        Shares<F>,
        DensePolynomial<F>,
        Proof<F, DIGEST_SIZE>,
        Vec<SaltPair>,
    ),
    SSError,
> {
    let secret = F::rand(rng);
    let (shares, sharing_poly, proof, salts) =
        deal_secret::<_, _, D, DIGEST_SIZE>(rng, secret, threshold, total)?;
    Ok((secret, shares, sharing_poly, proof, salts))
}

/// Same as `deal_random_secret` above but accepts the secret to share
pub fn deal_secret<R: RngCore, F: PrimeField, D: Digest, const DIGEST_SIZE: usize>(
    rng: &mut R,
    secret: F,
    threshold: ShareId,
    total: ShareId,
) -> Result<(Shares<F>, DensePolynomial<F>, Proof<F, DIGEST_SIZE>, Vec<SaltPair>), SSError> {
    let (shares, f) = shamir_ss::deal_secret(rng, secret, threshold, total)?;
    let (proof, salts) = prove::<_, _, D, DIGEST_SIZE>(rng, &f, &shares)?;
    Ok((shares, f, proof, salts))
}

/// Commit to an existing sharing and open the challenge-dependent combination
pub fn prove<R: RngCore, F: PrimeField, D: Digest, const DIGEST_SIZE: usize>(
    rng: &mut R,
    f: &DensePolynomial<F>,
    shares: &Shares<F>,
) -> Result<(Proof<F, DIGEST_SIZE>, Vec<SaltPair>), SSError> {
    let total = shares.0.len();
    let b = <DensePolynomial<F> as DenseUVPolynomial<F>>::rand(f.degree(), rng);
    let salts = (0..total)
        .map(|_| {
            let mut pair = SaltPair {
                blinding_salt: [0u8; SALT_SIZE],
                share_salt: [0u8; SALT_SIZE],
            };
            rng.fill_bytes(&mut pair.blinding_salt);
            rng.fill_bytes(&mut pair.share_salt);
            pair
        })
        .collect::<Vec<_>>();
    let blinding_commitments = cfg_into_iter!(0..total)
        .map(|i| {
            hash_commitment::<_, D, DIGEST_SIZE>(
                b.evaluate(&F::from(i as u64 + 1)),
                &salts[i].blinding_salt,
            )
        })
        .collect::<Vec<_>>();
    let share_commitments = cfg_into_iter!(0..total)
        .map(|i| hash_commitment::<_, D, DIGEST_SIZE>(shares.0[i].share, &salts[i].share_salt))
        .collect::<Vec<_>>();
    let d = challenge::<F, D, DIGEST_SIZE>(&blinding_commitments, &share_commitments)?;
    let resp = &b - &(f * d);
    Ok((
        Proof {
            blinding_commitments,
            share_commitments,
            resp,
        },
        salts,
    ))
}

impl<F: PrimeField, const DIGEST_SIZE: usize> Proof<F, DIGEST_SIZE> {
    /// Executed by party `share.id` with the salts it received privately
    pub fn verify<D: Digest>(&self, share: &Share<F>, salts: &SaltPair) -> Result<(), SSError> {
        if self.blinding_commitments.len() != self.share_commitments.len() {
            return Err(SSError::UnequalNoOfCommitments(
                self.blinding_commitments.len(),
                self.share_commitments.len(),
            ));
        }
        if share.id == 0 || share.id as usize > self.blinding_commitments.len() {
            return Err(SSError::InvalidShareId(share.id));
        }
        if self.resp.degree() != share.threshold as usize - 1 {
            return Err(SSError::DoesNotSupportThreshold(share.threshold));
        }
        let d = challenge::<F, D, DIGEST_SIZE>(&self.blinding_commitments, &self.share_commitments)?;
        let r_i = self.resp.evaluate(&F::from(share.id));
        let idx = share.id as usize - 1;
        if self.blinding_commitments[idx]
            != hash_commitment::<_, D, DIGEST_SIZE>(r_i + d * share.share, &salts.blinding_salt)
        {
            return Err(SSError::InvalidShare);
        }
        if self.share_commitments[idx]
            != hash_commitment::<_, D, DIGEST_SIZE>(share.share, &salts.share_salt)
        {
            return Err(SSError::InvalidShare);
        }
        Ok(())
    }
}

fn challenge<F: PrimeField, D: Digest, const DIGEST_SIZE: usize>(
    blinding_commitments: &[[u8; DIGEST_SIZE]],
    share_commitments: &[[u8; DIGEST_SIZE]],
) -> Result<F, SSError> {
    let mut chal_bytes = vec![];
    chal_bytes.extend_from_slice(DOMAIN_SEPARATOR);
    for c in blinding_commitments {
        c.serialize_compressed(&mut chal_bytes)?;
    }
    for c in share_commitments {
        c.serialize_compressed(&mut chal_bytes)?;
    }
    Ok(compute_random_oracle_challenge::<F, D>(&chal_bytes))
}

pub fn hash_commitment<F: PrimeField, D: Digest, const DIGEST_SIZE: usize>(
    value: F,
    salt: &Salt,
) -> [u8; DIGEST_SIZE] {
    let mut bytes = Vec::with_capacity(value.compressed_size() + DOMAIN_SEPARATOR.len() + SALT_SIZE);
    value.serialize_compressed(&mut bytes).unwrap();
    bytes.extend_from_slice(DOMAIN_SEPARATOR);
    bytes.extend_from_slice(salt);
    let d = D::digest(&bytes);
    d.as_slice().try_into().expect("Wrong length")
}
