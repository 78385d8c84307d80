#![cfg_attr(not(feature = "std"), no_std)]

//! # Curve25519 in Montgomery form
//!
//! Arithmetic for the Montgomery curve `y^2 = x^3 + A.x^2 + x` over `F_p` with
//! `p = 2^255 - 19` and `A = 486662`, i.e. Curve25519. Scalar multiplication
//! uses the x-only Montgomery ladder followed by Okeya-Sakurai y-recovery, so
//! every bit of the scalar costs the same fixed sequence of field operations.
//!
//! 1. [Base and scalar fields](./src/fields.rs)
//! 1. [Points, ladder and y-recovery](./src/point.rs)
//! 1. [3-generator Pedersen commitment key](./src/commitment.rs)

pub mod commitment;
pub mod error;
pub mod fields;
pub mod point;

pub use commitment::CommitmentKey;
pub use error::CurveError;
pub use fields::{Fq, Fr};
pub use point::{Affine, XzPoint};
