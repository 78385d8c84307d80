//! The two prime fields of Curve25519. Keeping them as distinct types means a
//! scalar can never silently take part in base-field arithmetic or vice versa.

use ark_ff::fields::{Fp256, MontBackend, MontConfig};

/// Base field `F_p` with `p = 2^255 - 19`.
#[derive(MontConfig)]
#[modulus = "57896044618658097711785492504343953926634992332820282019728792003956564819949"]
#[generator = "2"]
pub struct FqConfig;
pub type Fq = Fp256<MontBackend<FqConfig, 4>>;

/// Scalar field `F_q` where `q = 2^252 + 27742317777372353535851937790883648493`
/// is the order of the prime subgroup of the curve.
#[derive(MontConfig)]
#[modulus = "7237005577332262213973186563042994240857116359379907606001950938285454250989"]
#[generator = "2"]
pub struct FrConfig;
pub type Fr = Fp256<MontBackend<FrConfig, 4>>;
