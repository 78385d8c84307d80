//! Shared configuration for the secret sharing benchmarks.

/// Participant counts covered by every benchmark; the reconstruction
/// threshold is always `total / 2` (honest majority with an even total).
pub const TOTALS: [u16; 6] = [16, 32, 64, 128, 256, 512];
