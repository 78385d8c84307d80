use ark_serialize::SerializationError;

use crate::common::ShareId;

#[derive(Debug)]
pub enum SSError {
    InvalidThresholdOrTotal(ShareId, ShareId),
    /// The honest-majority parameter choice is only defined for an even
    /// number of participants
    ExpectedEvenTotal(ShareId),
    BelowThreshold(ShareId, ShareId),
    /// A verifier's consistency check failed: the share does not match the
    /// commitment. Expected for a faulty or malicious dealer, never a bug.
    InvalidShare,
    InvalidShareId(ShareId),
    DuplicateShareId(ShareId),
    DoesNotSupportThreshold(ShareId),
    UnequalNoOfCommitments(usize, usize),
    Serialization(SerializationError),
}

impl From<SerializationError> for SSError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}
