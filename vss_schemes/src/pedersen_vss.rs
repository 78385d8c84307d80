//! Pedersen Verifiable secret sharing. Based on the paper "Non-interactive and information-theoretic
//! secure verifiable secret sharing", section 4. <https://www.cs.cornell.edu/courses/cs754/2001fa/129.PDF>.
//! The basic idea is the following
//! - Dealer wants to share a secret `s` in `k-of-n` manner with `n` participants
//! - Dealer samples a random blinding `t` and polynomials `F(x), G(x)` of degree `k-1` with
//!   `F(0) = s`, `G(0) = t`
//! - Dealer commits to the coefficient pairs as `C_j = F_j * G + G_j * H` and broadcasts the `C_j`
//! - Dealer sends `(F(i), G(i))` to participant `i`
//! - Participant `i` accepts iff `C_0 + C_1 * i + C_2 * i^2 + ... = F(i) * G + G(i) * H`
//!
//! There is no challenge anywhere: hiding is information theoretic and binding comes from the
//! commitment key alone.

use ark_ff::PrimeField;
use ark_poly::univariate::DensePolynomial;
use ark_std::{cfg_into_iter, rand::RngCore, vec::Vec, UniformRand};
use curve25519_mont::{Affine, CommitmentKey, Fr};

use crate::{
    common::{powers, CommitmentToCoefficients, Share, ShareId, Shares, VerifiableShare, VerifiableShares},
    error::SSError,
    shamir_ss,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Generate a random secret with its shares according to Pedersen's verifiable secret sharing.
/// At least `threshold` number of shares are needed to reconstruct the secret.
/// Returns the secret, blinding, shares, commitments to the coefficients of the two polynomials
/// and the polynomials themselves
pub fn deal_random_secret<R: RngCore>(
    rng: &mut R,
    threshold: ShareId,
    total: ShareId,
    comm_key: &CommitmentKey,
) -> Result<
    (
        Fr,
        Fr,
        VerifiableShares<Fr>,
        CommitmentToCoefficients,
        DensePolynomial<Fr>,
        DensePolynomial<Fr>,
    ),
    SSError,
> {
    let secret = Fr::rand(rng);
    let (blinding, shares, coeff_comms, s_poly, t_poly) =
        deal_secret(rng, secret, threshold, total, comm_key)?;
    Ok((secret, blinding, shares, coeff_comms, s_poly, t_poly))
}

/// Same as `deal_random_secret` above but accepts the secret to share
pub fn deal_secret<R: RngCore>(
    rng: &mut R,
    secret: Fr,
    threshold: ShareId,
    total: ShareId,
    comm_key: &CommitmentKey,
) -> Result<
    (
        Fr,
        VerifiableShares<Fr>,
        CommitmentToCoefficients,
        DensePolynomial<Fr>,
        DensePolynomial<Fr>,
    ),
    SSError,
> {
    // Shares of the secret
    let (s_shares, s_poly) = shamir_ss::deal_secret(rng, secret, threshold, total)?;
    // Create a random blinding and shares of that
    let (blinding, t_shares, t_poly) = shamir_ss::deal_random_secret(rng, threshold, total)?;
    let coeff_comms = prove(&s_poly, &t_poly, comm_key);
    Ok((
        blinding,
        combine_shares(s_shares, t_shares, threshold),
        coeff_comms,
        s_poly,
        t_poly,
    ))
}

/// The dealer's broadcast message: one commitment per pair of coefficients of
/// the secret and blinding polynomials
pub fn prove(
    s_poly: &DensePolynomial<Fr>,
    t_poly: &DensePolynomial<Fr>,
    comm_key: &CommitmentKey,
) -> CommitmentToCoefficients {
    comm_key
        .commit_to_a_batch(&s_poly.coeffs, &t_poly.coeffs)
        .into()
}

fn combine_shares(
    s_shares: Shares<Fr>,
    t_shares: Shares<Fr>,
    threshold: ShareId,
) -> VerifiableShares<Fr> {
    VerifiableShares(
        cfg_into_iter!(s_shares.0)
            .zip(cfg_into_iter!(t_shares.0))
            .map(|(s, t)| VerifiableShare {
                id: s.id,
                threshold,
                secret_share: s.share,
                blinding_share: t.share,
            })
            .collect(),
    )
}

impl VerifiableShare<Fr> {
    /// Executed by each participant to verify its share received from the dealer.
    /// Also, should be called by the "reconstructor" to verify that each of the share being used in
    /// reconstruction is a valid share.
    pub fn verify(
        &self,
        commitment_coeffs: &CommitmentToCoefficients,
        comm_key: &CommitmentKey,
    ) -> Result<(), SSError> {
        let len = commitment_coeffs.0.len() as ShareId;
        if self.threshold > len {
            return Err(SSError::BelowThreshold(self.threshold, len));
        }
        if self.id == 0 {
            return Err(SSError::InvalidShareId(self.id));
        }
        // Check commitment_coeffs[0] + commitment_coeffs[1]*id + commitment_coeffs[2]*{id^2} + ...
        // == g*secret_share + h*blinding_share
        let exponents = powers(&Fr::from(self.id), self.threshold as u32);
        let mut recombined = Affine::identity();
        for (comm, exp) in commitment_coeffs.0.iter().zip(exponents.iter()) {
            recombined = recombined + comm.mul(exp);
        }
        if recombined != comm_key.commit(&self.secret_share, &self.blinding_share) {
            return Err(SSError::InvalidShare);
        }
        Ok(())
    }
}

impl<F: PrimeField> VerifiableShares<F> {
    pub fn threshold(&self) -> ShareId {
        self.0[0].threshold
    }

    /// Recover both the secret and the blinding
    pub fn reconstruct_secret(&self) -> Result<(F, F), SSError> {
        let threshold = self.threshold();
        let mut s_shares = Vec::with_capacity(self.0.len());
        let mut t_shares = Vec::with_capacity(self.0.len());
        for share in &self.0 {
            s_shares.push(Share {
                id: share.id,
                threshold,
                share: share.secret_share,
            });
            t_shares.push(Share {
                id: share.id,
                threshold,
                share: share.blinding_share,
            });
        }
        let s = Shares(s_shares).reconstruct_secret()?;
        let t = Shares(t_shares).reconstruct_secret()?;

        Ok((s, t))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use ark_ff::One;
    use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use blake2::Blake2b512;

    #[test]
    fn pedersen_verifiable_secret_sharing() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let comm_key = CommitmentKey::new::<Blake2b512>(b"test");

        let mut checked_serialization = false;
        for (threshold, total) in [(2, 2), (2, 3), (3, 5), (4, 9), (5, 10), (7, 15), (8, 16)] {
            let (secret, blinding, shares, commitments, _, _) =
                deal_random_secret(&mut rng, threshold as ShareId, total as ShareId, &comm_key)
                    .unwrap();

            assert_eq!(shares.0.len(), total);
            assert!(commitments.supports_threshold(threshold as ShareId));

            for share in &shares.0 {
                // Wrong share fails to verify
                let mut wrong_share = share.clone();
                wrong_share.secret_share += Fr::one();
                assert!(wrong_share.verify(&commitments, &comm_key).is_err());

                let mut wrong_share = share.clone();
                wrong_share.blinding_share += Fr::one();
                assert!(wrong_share.verify(&commitments, &comm_key).is_err());

                // Correct share verifies
                share.verify(&commitments, &comm_key).unwrap();
            }

            // A tampered coefficient commitment is caught by every participant
            let mut wrong_commitments = commitments.clone();
            wrong_commitments.0[0] = wrong_commitments.0[0] + comm_key.g;
            for share in &shares.0 {
                assert!(share.verify(&wrong_commitments, &comm_key).is_err());
            }

            // Its assumed that reconstructor verifies each share before calling `reconstruct_secret`
            let (s, t) = shares.reconstruct_secret().unwrap();
            assert_eq!(s, secret);
            assert_eq!(t, blinding);

            // Test serialization
            if !checked_serialization {
                let mut bytes = Vec::new();
                commitments.serialize_compressed(&mut bytes).unwrap();
                assert_eq!(
                    CommitmentToCoefficients::deserialize_compressed(&bytes[..]).unwrap(),
                    commitments
                );
                let mut bytes = Vec::new();
                shares.0[0].serialize_compressed(&mut bytes).unwrap();
                assert_eq!(
                    VerifiableShare::<Fr>::deserialize_compressed(&bytes[..]).unwrap(),
                    shares.0[0]
                );
                checked_serialization = true;
            }
        }
    }

    #[test]
    fn out_of_range_share_id() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let comm_key = CommitmentKey::new::<Blake2b512>(b"test");
        let (_, _, shares, commitments, _, _) =
            deal_random_secret(&mut rng, 3, 6, &comm_key).unwrap();
        let mut share = shares.0[0].clone();
        share.id = 0;
        assert!(share.verify(&commitments, &comm_key).is_err());
    }
}
