use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_into_iter, cfg_iter, vec::Vec};
use curve25519_mont::Affine;
use zeroize::Zeroize;

use crate::error::SSError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub type ShareId = u16;

/// Share used in Shamir secret sharing and the hash-committing VSS schemes
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, CanonicalSerialize, CanonicalDeserialize)]
pub struct Share<F: PrimeField> {
    pub id: ShareId,
    pub threshold: ShareId,
    pub share: F,
}

/// Collection of `Share`s. A sufficient number of `Share`s reconstruct the secret.
/// Expects unique shares, i.e. each share has a different `ShareId` and each has the same threshold.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, CanonicalSerialize, CanonicalDeserialize)]
pub struct Shares<F: PrimeField>(pub Vec<Share<F>>);

/// Share used in Pedersen verifiable secret sharing: an evaluation of the
/// secret polynomial together with the matching evaluation of the blinding
/// polynomial
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifiableShare<F: PrimeField> {
    pub id: ShareId,
    pub threshold: ShareId,
    pub secret_share: F,
    pub blinding_share: F,
}

/// Collection of `VerifiableShare`s
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifiableShares<F: PrimeField>(pub Vec<VerifiableShare<F>>);

/// Commitments to the coefficients of a sharing polynomial, one curve point
/// per coefficient
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct CommitmentToCoefficients(pub Vec<Affine>);

impl<F: PrimeField> Drop for Share<F> {
    fn drop(&mut self) {
        self.share.zeroize();
    }
}

impl<F: PrimeField> From<(ShareId, ShareId, F)> for Share<F> {
    fn from((i, t, s): (ShareId, ShareId, F)) -> Self {
        Share {
            id: i,
            threshold: t,
            share: s,
        }
    }
}

impl<F: PrimeField> Drop for VerifiableShare<F> {
    fn drop(&mut self) {
        self.secret_share.zeroize();
        self.blinding_share.zeroize();
    }
}

impl<F: PrimeField> Shares<F> {
    pub fn threshold(&self) -> ShareId {
        self.0[0].threshold
    }
}

impl From<Vec<Affine>> for CommitmentToCoefficients {
    fn from(coeffs: Vec<Affine>) -> Self {
        CommitmentToCoefficients(coeffs)
    }
}

impl CommitmentToCoefficients {
    /// The constant coefficient is the secret and thus returns the commitment to that.
    pub fn commitment_to_secret(&self) -> &Affine {
        &self.0[0]
    }

    /// The degree of the polynomial whose coefficients were committed
    pub fn poly_degree(&self) -> usize {
        self.0.len() - 1
    }

    pub fn supports_threshold(&self, threshold: ShareId) -> bool {
        threshold as usize - 1 == self.poly_degree()
    }
}

/// `[1, base, base^2, ..., base^{n-1}]`
pub fn powers<F: PrimeField>(base: &F, n: u32) -> Vec<F> {
    let mut p = Vec::with_capacity(n as usize);
    if n == 0 {
        return p;
    }
    p.push(F::one());
    for i in 1..n as usize {
        let last = p[i - 1];
        p.push(last * base);
    }
    p
}

/// Return the Lagrange basis polynomial at x = 0 given the `x` coordinates
/// `(x_coords[0]) * (x_coords[1]) * ... / ((x_coords[0] - i) * (x_coords[1] - i) * ...)`
/// Assumes all `x` coordinates are distinct, nonzero and that `i` is among them
pub fn lagrange_basis_at_0<F: PrimeField>(x_coords: &[ShareId], i: ShareId) -> F {
    let mut numerator = F::one();
    let mut denominator = F::one();
    let i_f = F::from(i as u64);
    for x in x_coords {
        if *x == i {
            continue;
        }
        let x = F::from(*x as u64);
        numerator *= x;
        denominator *= x - i_f;
    }
    numerator * denominator.inverse().unwrap()
}

/// Return the Lagrange basis polynomial at x = 0 for each of the given `x`
/// coordinates. Faster than doing multiple calls to [`lagrange_basis_at_0`].
/// Fails on a zero or repeated coordinate, for which no interpolation exists.
pub fn lagrange_basis_at_0_for_all<F: PrimeField>(
    x_coords: Vec<ShareId>,
) -> Result<Vec<F>, SSError> {
    for (idx, x) in x_coords.iter().enumerate() {
        if *x == 0 {
            return Err(SSError::InvalidShareId(0));
        }
        if x_coords[..idx].contains(x) {
            return Err(SSError::DuplicateShareId(*x));
        }
    }
    let x = cfg_into_iter!(x_coords)
        .map(|x| F::from(x as u64))
        .collect::<Vec<_>>();

    // Product of all `x`, i.e. \prod_{i}(x_i)
    let product = cfg_iter!(x).product::<F>();

    Ok(cfg_into_iter!(x.clone())
        .map(move |i| {
            let denominator = cfg_iter!(x)
                .filter(|&j| &i != j)
                .map(|&j| j - i)
                .product::<F>();

            // The numerator is the product of all `x` except `i` and thus can
            // be calculated as \prod_{i}(x_i) * (1 / x_i); the coordinates
            // were checked to be distinct and nonzero above
            let numerator = product * i.inverse().unwrap();

            denominator.inverse().unwrap() * numerator
        })
        .collect::<Vec<_>>())
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use ark_std::{
        cfg_iter,
        rand::{rngs::StdRng, SeedableRng},
        vec,
        UniformRand,
    };
    use curve25519_mont::Fr;

    #[test]
    fn compare_lagrange_basis_at_0() {
        let mut rng = StdRng::seed_from_u64(0u64);

        let count = 20;
        let mut x = Vec::new();
        while x.len() < count {
            let i = ShareId::rand(&mut rng);
            if i != 0 && !x.contains(&i) {
                x.push(i);
            }
        }

        let single = cfg_iter!(x)
            .map(|i| lagrange_basis_at_0(&x, *i))
            .collect::<Vec<Fr>>();
        let multiple = lagrange_basis_at_0_for_all(x).unwrap();
        assert_eq!(single, multiple);
    }

    #[test]
    fn lagrange_rejects_degenerate_coordinates() {
        assert!(lagrange_basis_at_0_for_all::<Fr>(vec![1, 0, 3]).is_err());
        assert!(lagrange_basis_at_0_for_all::<Fr>(vec![1, 2, 1]).is_err());
    }

    #[test]
    fn powers_of_a_point() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let base = Fr::rand(&mut rng);
        let p = powers(&base, 5);
        assert_eq!(p.len(), 5);
        assert_eq!(p[0], Fr::from(1u64));
        for i in 1..5 {
            assert_eq!(p[i], p[i - 1] * base);
        }
    }
}
