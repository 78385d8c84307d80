//! Shamir secret sharing. The secret is the constant term of a random
//! polynomial of degree `threshold - 1`; shares are its evaluations at the
//! points `1..=total`.

use ark_ff::PrimeField;
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_std::{cfg_into_iter, rand::RngCore, vec::Vec};

use crate::{
    common,
    common::{ShareId, Shares},
    error::SSError,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Generate a random secret with its shares according to Shamir secret sharing.
/// At least `threshold` number of shares are needed to reconstruct the secret.
/// Returns the secret, shares and the polynomial whose evaluations are the secret and the shares
pub fn deal_random_secret<R: RngCore, F: PrimeField>(
    rng: &mut R,
    threshold: ShareId,
    total: ShareId,
) -> Result<(F, Shares<F>, DensePolynomial<F>), SSError> {
    let secret = F::rand(rng);
    let (shares, poly) = deal_secret(rng, secret, threshold, total)?;
    Ok((secret, shares, poly))
}

/// Same as `deal_random_secret` above but accepts the secret to share
pub fn deal_secret<R: RngCore, F: PrimeField>(
    rng: &mut R,
    secret: F,
    threshold: ShareId,
    total: ShareId,
) -> Result<(Shares<F>, DensePolynomial<F>), SSError> {
    if threshold < 1 || total < 2 || threshold > total {
        return Err(SSError::InvalidThresholdOrTotal(threshold, total));
    }
    let mut coeffs = Vec::with_capacity(threshold as usize);
    coeffs.push(secret);
    coeffs.extend((1..threshold).map(|_| F::rand(rng)));
    let poly = DensePolynomial::from_coefficients_vec(coeffs);
    let shares = cfg_into_iter!(1..=total)
        .map(|i| (i, threshold, poly.evaluate(&F::from(i as u64))).into())
        .collect::<Vec<_>>();
    Ok((Shares(shares), poly))
}

/// The reconstruction threshold used by all the schemes in their
/// honest-majority configuration: a sharing polynomial of degree
/// `total/2 - 1`, i.e. `total/2` shares reconstruct. Only defined for an even
/// number of participants; an odd count is rejected rather than rounded.
pub fn honest_majority_threshold(total: ShareId) -> Result<ShareId, SSError> {
    if total == 0 || total % 2 != 0 {
        return Err(SSError::ExpectedEvenTotal(total));
    }
    Ok(total / 2)
}

impl<F: PrimeField> Shares<F> {
    /// Reconstruct the secret from the first `threshold` shares. Assumes that
    /// shares are unique and have the same threshold
    pub fn reconstruct_secret(&self) -> Result<F, SSError> {
        let threshold = self.threshold();
        let len = self.0.len() as ShareId;
        if threshold > len {
            return Err(SSError::BelowThreshold(threshold, len));
        }
        let shares = &self.0[0..threshold as usize];
        let share_ids = shares.iter().map(|s| s.id).collect::<Vec<_>>();
        let basis = common::lagrange_basis_at_0_for_all::<F>(share_ids)?;
        Ok(cfg_into_iter!(basis)
            .zip(cfg_into_iter!(shares))
            .map(|(b, s)| b * s.share)
            .sum::<F>())
    }
}
