use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::{CodecError, ParseAlgorithmError};

/// A packing algorithm that works on whole in-memory buffers.
///
/// Both directions append to `output`.
pub trait Codec {
    fn pack(&self, input: &[u8], output: &mut Vec<u8>) -> Result<(), CodecError>;

    fn unpack(&self, input: &[u8], output: &mut Vec<u8>) -> Result<(), CodecError>;
}

/// Run-length encoding with `0xFF`-marked literal blocks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rle;

impl Codec for Rle {
    fn pack(&self, input: &[u8], output: &mut Vec<u8>) -> Result<(), CodecError> {
        crate::pack(input, output);
        Ok(())
    }

    fn unpack(&self, input: &[u8], output: &mut Vec<u8>) -> Result<(), CodecError> {
        crate::unpack(input, output)?;
        Ok(())
    }
}

/// Algorithms selectable by tag.
///
/// Only [`Algorithm::Rle`] is implemented. The others fail with
/// [`CodecError::NotImplemented`] and leave the output untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Rle,
    Lz78,
    Huffman,
}

impl Algorithm {
    pub const ALL: [Self; 3] = [Self::Rle, Self::Lz78, Self::Huffman];

    /// Short tag accepted by [`FromStr`].
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Rle => "rle",
            Self::Lz78 => "lz78",
            Self::Huffman => "huff",
        }
    }

    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::Rle)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rle => "RLE",
            Self::Lz78 => "LZ78",
            Self::Huffman => "Huffman",
        })
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("huffman") {
            return Ok(Self::Huffman);
        }
        Self::ALL
            .into_iter()
            .find(|algorithm| s.eq_ignore_ascii_case(algorithm.tag()))
            .ok_or_else(|| ParseAlgorithmError(String::from(s)))
    }
}

impl Codec for Algorithm {
    fn pack(&self, input: &[u8], output: &mut Vec<u8>) -> Result<(), CodecError> {
        match self {
            Self::Rle => Rle.pack(input, output),
            other => Err(CodecError::NotImplemented(*other)),
        }
    }

    fn unpack(&self, input: &[u8], output: &mut Vec<u8>) -> Result<(), CodecError> {
        match self {
            Self::Rle => Rle.unpack(input, output),
            other => Err(CodecError::NotImplemented(*other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;
    use crate::error::MalformedStream;

    #[test]
    fn test_parse_tags() {
        assert_eq!("rle".parse::<Algorithm>(), Ok(Algorithm::Rle));
        assert_eq!("LZ78".parse::<Algorithm>(), Ok(Algorithm::Lz78));
        assert_eq!("huff".parse::<Algorithm>(), Ok(Algorithm::Huffman));
        assert_eq!("Huffman".parse::<Algorithm>(), Ok(Algorithm::Huffman));
        assert_eq!(
            "zip".parse::<Algorithm>(),
            Err(ParseAlgorithmError(String::from("zip")))
        );
    }

    #[test]
    fn test_tag_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.tag().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_unimplemented_algorithms_leave_output_untouched() {
        for algorithm in [Algorithm::Lz78, Algorithm::Huffman] {
            assert!(!algorithm.is_implemented());

            let mut out = Vec::new();
            assert_eq!(
                algorithm.pack(b"data", &mut out),
                Err(CodecError::NotImplemented(algorithm))
            );
            assert_eq!(
                algorithm.unpack(b"data", &mut out),
                Err(CodecError::NotImplemented(algorithm))
            );
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_not_implemented_message() {
        assert_eq!(
            CodecError::NotImplemented(Algorithm::Lz78).to_string(),
            "LZ78 is not implemented"
        );
    }

    #[test]
    fn test_rle_through_trait_object() {
        let codec: &dyn Codec = &Algorithm::Rle;
        let mut packed = Vec::new();
        codec.pack(b"xxxxy", &mut packed).unwrap();
        assert_eq!(packed, [4, b'x', 0xFF, 1, b'y']);

        let mut unpacked = Vec::new();
        codec.unpack(&packed, &mut unpacked).unwrap();
        assert_eq!(unpacked, b"xxxxy");

        assert_eq!(
            Rle.unpack(&[0xFF], &mut unpacked),
            Err(CodecError::Malformed(MalformedStream::MissingLiteralCount {
                offset: 0
            }))
        );
    }
}
