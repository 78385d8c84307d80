#![cfg_attr(not(feature = "std"), no_std)]

//! # Secret sharing and verifiable secret sharing
//!
//! Implements Shamir Secret Sharing (SS) with a trusted dealer and four
//! non-interactive Verifiable Secret Sharing (VSS) schemes on top of it. Two
//! of them commit to the sharing with elliptic curve points, two with hash
//! digests; all four let each shareholder check its own share against the
//! dealer's public commitment.
//!
//! 1. [Shamir secret sharing](./src/shamir_ss.rs)
//! 1. [Pedersen Verifiable Secret Sharing](./src/pedersen_vss.rs)
//! 1. [ABCP23 Verifiable Secret Sharing](./src/abcp_vss.rs)
//! 1. [Pi_P Verifiable Secret Sharing](./src/pi_p_vss.rs)
//! 1. [Pi_LA Verifiable Secret Sharing](./src/pi_la_vss.rs)

pub mod abcp_vss;
pub mod common;
pub mod error;
pub mod hashing;
pub mod pedersen_vss;
pub mod pi_la_vss;
pub mod pi_p_vss;
pub mod shamir_ss;
