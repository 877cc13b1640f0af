use thiserror::Error;

use crate::codec::Algorithm;

/// Reasons an encoded stream cannot be unpacked.
///
/// Offsets point at the first byte of the offending token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedStream {
    #[error("Run at offset {offset} has a length but no symbol")]
    TruncatedRun { offset: usize },

    #[error("Literal marker at offset {offset} is missing its count byte")]
    MissingLiteralCount { offset: usize },

    #[error("Literal block at offset {offset} declares {declared} bytes but only {available} remain")]
    TruncatedLiteral {
        offset: usize,
        declared: usize,
        available: usize,
    },
}

/// Errors surfaced through the [`Codec`](crate::Codec) trait.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed stream: {0}")]
    Malformed(#[from] MalformedStream),

    #[error("{0} is not implemented")]
    NotImplemented(Algorithm),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown algorithm `{0}` (expected rle, lz78 or huff)")]
pub struct ParseAlgorithmError(pub alloc::string::String);
