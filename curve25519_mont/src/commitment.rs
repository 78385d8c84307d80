//! A Pedersen commitment key over the prime-order subgroup, with a third
//! generator for commitments that carry an extra randomizer.

use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cfg_into_iter, vec::Vec};
use digest::Digest;

use crate::{
    fields::{Fq, Fr},
    point::Affine,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Generators `(g, h, k)` of the prime-order subgroup, derived from a label by
/// hashing to the curve so that no discrete-log relation between them is known
/// to anyone. A 2-term commitment is `g * m + h * b` with opening `(m, b)`, a
/// 3-term one additionally carries `k * gamma`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct CommitmentKey {
    pub g: Affine,
    pub h: Affine,
    pub k: Affine,
}

impl CommitmentKey {
    /// Create a new commitment key. Keys with the same label are identical.
    pub fn new<D: Digest>(label: &[u8]) -> Self {
        Self {
            g: affine_from_try_and_incr::<D>(label, b" : G"),
            h: affine_from_try_and_incr::<D>(label, b" : H"),
            k: affine_from_try_and_incr::<D>(label, b" : K"),
        }
    }

    /// Commit to a message
    pub fn commit(&self, message: &Fr, blinding: &Fr) -> Affine {
        self.g.mul(message) + self.h.mul(blinding)
    }

    /// Commit to a message with an additional randomizer under the third
    /// generator
    pub fn commit_with_randomizer(&self, message: &Fr, blinding: &Fr, randomizer: &Fr) -> Affine {
        self.g.mul(message) + self.h.mul(blinding) + self.k.mul(randomizer)
    }

    /// Commit to a batch of messages and output commitments corresponding to
    /// each message.
    pub fn commit_to_a_batch(&self, messages: &[Fr], blindings: &[Fr]) -> Vec<Affine> {
        assert_eq!(messages.len(), blindings.len());
        cfg_into_iter!(messages)
            .zip(cfg_into_iter!(blindings))
            .map(|(m_i, b_i)| self.commit(m_i, b_i))
            .collect()
    }
}

/// Hash bytes to a point of exact order q by try-and-increment: hash to an
/// x-coordinate candidate, decompress, clear the cofactor, and retry on
/// failure. Deterministic in its input; not constant time, which is fine for
/// public setup material.
pub fn affine_from_try_and_incr<D: Digest>(label: &[u8], suffix: &[u8]) -> Affine {
    let mut seed = Vec::with_capacity(label.len() + suffix.len() + 16);
    seed.extend_from_slice(label);
    seed.extend_from_slice(suffix);
    let base_len = seed.len();
    let mut attempt = 0u64;
    loop {
        seed.truncate(base_len);
        seed.extend_from_slice(b"-attempt-");
        seed.extend_from_slice(&attempt.to_le_bytes());
        let hash = D::digest(&seed);
        if let Some(x) = Fq::from_random_bytes(&hash) {
            if let Some(p) = Affine::get_point_from_x(x) {
                let p = p.clear_cofactor();
                if !p.is_zero() {
                    return p;
                }
            }
        }
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };
    use blake2::Blake2b512;
    use sha2::Sha256;

    #[test]
    fn generators_are_independent_subgroup_points() {
        let ck = CommitmentKey::new::<Blake2b512>(b"test");
        for p in [ck.g, ck.h, ck.k] {
            assert!(!p.is_zero());
            assert!(p.is_on_curve());
            assert!(p.is_in_prime_order_subgroup());
        }
        assert_ne!(ck.g, ck.h);
        assert_ne!(ck.h, ck.k);
        assert_ne!(ck.g, ck.k);

        // same label, same key; different label, different key
        assert_eq!(ck, CommitmentKey::new::<Blake2b512>(b"test"));
        assert_ne!(ck, CommitmentKey::new::<Blake2b512>(b"test-2"));
        assert_ne!(ck.g, CommitmentKey::new::<Sha256>(b"test").g);
    }

    #[test]
    fn commitments_are_homomorphic() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let ck = CommitmentKey::new::<Blake2b512>(b"test");
        let (m1, b1) = (Fr::rand(&mut rng), Fr::rand(&mut rng));
        let (m2, b2) = (Fr::rand(&mut rng), Fr::rand(&mut rng));
        assert_eq!(
            ck.commit(&m1, &b1) + ck.commit(&m2, &b2),
            ck.commit(&(m1 + m2), &(b1 + b2))
        );
        let g1 = Fr::rand(&mut rng);
        let g2 = Fr::rand(&mut rng);
        assert_eq!(
            ck.commit_with_randomizer(&m1, &b1, &g1) + ck.commit_with_randomizer(&m2, &b2, &g2),
            ck.commit_with_randomizer(&(m1 + m2), &(b1 + b2), &(g1 + g2))
        );
    }

    #[test]
    fn batch_commit_matches_single() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let ck = CommitmentKey::new::<Blake2b512>(b"test");
        let messages = (0..8).map(|_| Fr::rand(&mut rng)).collect::<Vec<_>>();
        let blindings = (0..8).map(|_| Fr::rand(&mut rng)).collect::<Vec<_>>();
        let batch = ck.commit_to_a_batch(&messages, &blindings);
        for i in 0..8 {
            assert_eq!(batch[i], ck.commit(&messages[i], &blindings[i]));
        }
    }
}
