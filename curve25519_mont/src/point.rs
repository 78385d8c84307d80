//! Curve points and the x-only scalar multiplication pipeline: differential
//! addition and doubling on XZ pairs, the Montgomery ladder, and
//! Okeya-Sakurai y-recovery from the ladder's two outputs.

use ark_ff::{BigInteger, Field, MontFp, One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{
    ops::{Add, Neg},
    rand::Rng,
    UniformRand,
};

use crate::{
    error::CurveError,
    fields::{Fq, Fr},
};

/// Montgomery `A` coefficient of Curve25519
pub const COEFF_A: Fq = MontFp!("486662");
/// `(A + 2) / 4`, the constant appearing in x-only doubling
pub const COEFF_A_REDUCED: Fq = MontFp!("121666");
/// Ratio of the full group order to the prime subgroup order
pub const COFACTOR: u64 = 8;

/// A point in projective x-only form. `Z = 0` encodes the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XzPoint {
    pub x: Fq,
    pub z: Fq,
}

/// A point on the curve, or the identity. The identity keeps the fixed
/// coordinates `(0, 1)` so that equality and serialization stay canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Affine {
    pub x: Fq,
    pub y: Fq,
    pub infinity: bool,
}

/// Differential addition: given `p = P`, `q = Q` and their known difference
/// `diff = P - Q` in x-only form, return `P + Q`. `diff` must be finite and
/// nonzero; the formula is undefined for `P == Q` (use [`xdbl`]).
pub fn xadd(p: &XzPoint, q: &XzPoint, diff: &XzPoint) -> XzPoint {
    let v1 = (q.x - q.z) * (p.x + p.z);
    let v2 = (q.x + q.z) * (p.x - p.z);
    XzPoint {
        x: diff.z * (v1 + v2).square(),
        z: diff.x * (v1 - v2).square(),
    }
}

/// Doubling in x-only form.
pub fn xdbl(p: &XzPoint) -> XzPoint {
    let v1 = (p.x + p.z).square();
    let v2 = (p.x - p.z).square();
    let v3 = v1 - v2;
    XzPoint {
        x: v1 * v2,
        z: v3 * (COEFF_A_REDUCED * v3 + v2),
    }
}

/// Compute `(k.P, (k+1).P)` in x-only form by scanning the bits of `k`
/// MSB-first. The two running points differ by `P` after every bit, which is
/// what makes the differential additions well defined. Requires `k != 0`.
pub fn montgomery_ladder(k: &Fr, base: &Affine) -> (XzPoint, XzPoint) {
    let mut bits = k.into_bigint().to_bits_be().into_iter().skip_while(|b| !*b);
    bits.next();
    ladder_bits(bits, base)
}

fn ladder_bits(bits: impl Iterator<Item = bool>, base: &Affine) -> (XzPoint, XzPoint) {
    let p = XzPoint {
        x: base.x,
        z: Fq::one(),
    };
    let mut r0 = p;
    let mut r1 = xdbl(&p);
    for bit in bits {
        let sum = xadd(&r0, &r1, &p);
        if bit {
            r0 = sum;
            r1 = xdbl(&r1);
        } else {
            r1 = sum;
            r0 = xdbl(&r0);
        }
    }
    (r0, r1)
}

/// Recover the affine point `k.P` from the ladder outputs `k_point = k.P` and
/// `k1_point = (k+1).P`, using the affine base point `P`. Both x-only inputs
/// must be finite.
pub fn recover_y(
    base: &Affine,
    k_point: &XzPoint,
    k1_point: &XzPoint,
) -> Result<Affine, CurveError> {
    if k_point.z.is_zero() || k1_point.z.is_zero() {
        return Err(CurveError::PointAtInfinity);
    }
    let mut v1 = base.x * k_point.z;
    let mut v2 = k_point.x + v1;
    let v3 = (k_point.x - v1).square() * k1_point.x;
    v1 = COEFF_A.double() * k_point.z;
    v2 = (v2 + v1) * (base.x * k_point.x + k_point.z);
    v2 = (v2 - v1 * k_point.z) * k1_point.z;
    let y = v2 - v3;
    v1 = base.y.double() * k_point.z * k1_point.z;
    let x = v1 * k_point.x;
    let z = v1 * k_point.z;
    if z.is_zero() {
        // only reachable for a 2-torsion base point
        return Err(CurveError::PointAtInfinity);
    }
    let z_inv = z.inverse().unwrap();
    Ok(Affine {
        x: x * z_inv,
        y: y * z_inv,
        infinity: false,
    })
}

impl Affine {
    pub fn identity() -> Self {
        Self {
            x: Fq::zero(),
            y: Fq::one(),
            infinity: true,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.infinity
    }

    /// Build a point from coordinates, checking both the curve equation and
    /// membership of the prime-order subgroup.
    pub fn new(x: Fq, y: Fq) -> Result<Self, CurveError> {
        let p = Self::new_unchecked(x, y);
        if !p.is_on_curve() {
            return Err(CurveError::NotOnCurve);
        }
        if !p.is_in_prime_order_subgroup() {
            return Err(CurveError::NotInPrimeOrderSubgroup);
        }
        Ok(p)
    }

    pub fn new_unchecked(x: Fq, y: Fq) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        self.y.square() == self.x * (self.x.square() + COEFF_A * self.x + Fq::one())
    }

    /// `true` iff multiplying by the subgroup order gives the identity. Uses
    /// only the x-only ladder, so no y-recovery is involved.
    pub fn is_in_prime_order_subgroup(&self) -> bool {
        if self.infinity {
            return true;
        }
        // 2-torsion, for which the x-only formulas degenerate
        if self.y.is_zero() {
            return false;
        }
        let mut bits = Fr::MODULUS.to_bits_be().into_iter().skip_while(|b| !*b);
        bits.next();
        let (order_times_self, _) = ladder_bits(bits, self);
        order_times_self.z.is_zero()
    }

    /// The point with the given x-coordinate and one of the two matching
    /// y-coordinates, if x is the abscissa of a curve point.
    pub fn get_point_from_x(x: Fq) -> Option<Self> {
        let rhs = x * (x.square() + COEFF_A * x + Fq::one());
        rhs.sqrt().map(|y| Self::new_unchecked(x, y))
    }

    /// Multiply by the cofactor, landing in the prime-order subgroup.
    pub fn clear_cofactor(&self) -> Self {
        self.double().double().double()
    }

    pub fn double(&self) -> Self {
        if self.infinity || self.y.is_zero() {
            return Self::identity();
        }
        let two_x = self.x.double();
        let lambda = (self.x * (two_x + self.x) + COEFF_A * two_x + Fq::one())
            * self.y.double().inverse().unwrap();
        let x3 = lambda.square() - COEFF_A - two_x;
        Self::new_unchecked(x3, lambda * (self.x - x3) - self.y)
    }

    /// Scalar multiplication: Montgomery ladder plus y-recovery. Assumes the
    /// point is the identity or lies in the prime-order subgroup, as
    /// guaranteed by every constructor except `new_unchecked`.
    pub fn mul(&self, scalar: &Fr) -> Self {
        if self.infinity || scalar.is_zero() {
            return Self::identity();
        }
        if *scalar == -Fr::one() {
            // (q-1).P = -P; the ladder's second output would be at infinity
            return -*self;
        }
        let (r0, r1) = montgomery_ladder(scalar, self);
        // recovery cannot degenerate: the scalar is in [1, q-2] and the base
        // point has order q
        recover_y(self, &r0, &r1).unwrap()
    }
}

impl Add for Affine {
    type Output = Affine;

    fn add(self, other: Affine) -> Affine {
        if self.infinity {
            return other;
        }
        if other.infinity {
            return self;
        }
        if self.x == other.x {
            if self.y == -other.y {
                return Affine::identity();
            }
            return self.double();
        }
        let lambda = (other.y - self.y) * (other.x - self.x).inverse().unwrap();
        let x3 = lambda.square() - COEFF_A - self.x - other.x;
        Affine::new_unchecked(x3, lambda * (self.x - x3) - self.y)
    }
}

impl Neg for Affine {
    type Output = Affine;

    fn neg(self) -> Affine {
        if self.infinity {
            return self;
        }
        Affine::new_unchecked(self.x, -self.y)
    }
}

impl UniformRand for Affine {
    /// Rejection sampling: a random x-coordinate that lands on the curve, a
    /// random choice among the two y-coordinates, then cofactor clearing. The
    /// identity is rejected, so the result always has exact order q.
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let x = Fq::rand(rng);
            if let Some(mut p) = Affine::get_point_from_x(x) {
                if bool::rand(rng) {
                    p = -p;
                }
                let p = p.clear_cofactor();
                if !p.is_zero() {
                    return p;
                }
            }
        }
    }
}
