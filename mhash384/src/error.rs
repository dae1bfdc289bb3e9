use thiserror::Error;

use crate::hasher::digest::Digest;

/// Errors raised when an [`MHash384`](crate::hasher::MHash384) instance is
/// misused. The computation itself cannot fail; every variant describes a
/// usage error the caller can correct and retry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum HashingError {
    #[error("hash computation is finished; call `reset` before reusing the instance")]
    AlreadyFinished,

    #[error("range of length {len} at offset {offset} is out of bounds for a buffer of length {data_len}")]
    RangeOutOfBounds {
        offset: usize,
        len: usize,
        data_len: usize,
    },
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum TryFromDigestError {
    #[error("expected {expected} bytes for digest, but got {0}", expected = Digest::BYTES)]
    InvalidLength(usize),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TryFromHexDigestError {
    #[error("hex decoding error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("digest error: {0}")]
    Digest(#[from] TryFromDigestError),
}
