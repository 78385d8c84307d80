//! Deterministic hash-to-field, used to derive every scheme's Fiat-Shamir
//! challenge from its commitment bytes.

use ark_ff::PrimeField;
use ark_std::vec::Vec;
use digest::Digest;

/// Hash bytes to a field element by try-and-increment. Not constant time,
/// which is acceptable for challenge derivation where the input is public.
pub fn field_elem_from_try_and_incr<F: PrimeField, D: Digest>(bytes: &[u8]) -> F {
    let mut hash = D::digest(bytes);
    let mut f = F::from_random_bytes(&hash);
    let mut attempt = 1u64;
    while f.is_none() {
        let mut seed = Vec::with_capacity(bytes.len() + 17);
        seed.extend_from_slice(bytes);
        seed.extend_from_slice(b"-attempt-");
        seed.extend_from_slice(&attempt.to_le_bytes());
        hash = D::digest(&seed);
        f = F::from_random_bytes(&hash);
        attempt += 1;
    }
    f.unwrap()
}

/// The random oracle challenge of the Fiat-Shamir transformation. Both the
/// prover and every verifier recompute it from the same canonical commitment
/// bytes; it is never carried in a proof.
pub fn compute_random_oracle_challenge<F: PrimeField, D: Digest>(challenge_bytes: &[u8]) -> F {
    field_elem_from_try_and_incr::<F, D>(challenge_bytes)
}
