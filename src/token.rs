use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::error::MalformedStream;

/// Marker byte that opens a literal block. Never valid as a run length.
pub const LITERAL_MARKER: u8 = 0xFF;

/// Longest run a single length byte may describe.
pub const MAX_RUN: u8 = 254;

/// Longest literal block a single count byte may describe.
pub const MAX_LITERAL: usize = 255;

/// One decodable record of a packed stream.
///
/// Wire layout:
/// * `Run`: `[length][symbol]`, length in `0..=254`.
/// * `Literal`: `[0xFF][count][symbol; count]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Run { length: u8, symbol: u8 },
    Literal(&'a [u8]),
}

impl Token<'_> {
    /// Number of bytes this token expands to.
    #[must_use]
    pub const fn expanded_len(&self) -> usize {
        match self {
            Token::Run { length, .. } => *length as usize,
            Token::Literal(bytes) => bytes.len(),
        }
    }

    /// Number of bytes this token occupies on the wire.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        match self {
            Token::Run { .. } => 2,
            Token::Literal(bytes) => 2 + bytes.len(),
        }
    }

    /// Appends the wire form of the token to `output`.
    ///
    /// A run length of `0xFF` or a literal longer than [`MAX_LITERAL`] has no
    /// wire form; both are caught by debug assertions.
    pub fn write_to(&self, output: &mut Vec<u8>) {
        match *self {
            Token::Run { length, symbol } => {
                debug_assert_ne!(length, LITERAL_MARKER);
                output.push(length);
                output.push(symbol);
            }
            Token::Literal(bytes) => {
                debug_assert!(bytes.len() <= MAX_LITERAL);
                output.push(LITERAL_MARKER);
                output.push(bytes.len() as u8);
                output.extend_from_slice(bytes);
            }
        }
    }

    /// Appends the decoded bytes of the token to `output`.
    pub fn expand_into(&self, output: &mut Vec<u8>) {
        match *self {
            Token::Run { length, symbol } => {
                output.resize(output.len() + length as usize, symbol);
            }
            Token::Literal(bytes) => output.extend_from_slice(bytes),
        }
    }
}

/// Splits a packed stream into tokens.
///
/// Iteration stops after the first error.
#[must_use]
pub const fn tokens(input: &[u8]) -> Tokens<'_> {
    Tokens {
        input,
        pos: 0,
        failed: false,
    }
}

/// Iterator returned by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Tokens<'a> {
    /// Offset of the next unread byte.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    fn read_token(&mut self) -> Result<Token<'a>, MalformedStream> {
        let input = self.input;
        let offset = self.pos;
        let head = input[offset];
        let rest = &input[offset + 1..];

        if head == LITERAL_MARKER {
            let Some((&count, body)) = rest.split_first() else {
                return Err(MalformedStream::MissingLiteralCount { offset });
            };
            let declared = count as usize;
            if body.len() < declared {
                return Err(MalformedStream::TruncatedLiteral {
                    offset,
                    declared,
                    available: body.len(),
                });
            }
            self.pos = offset + 2 + declared;
            Ok(Token::Literal(&body[..declared]))
        } else {
            let Some(&symbol) = rest.first() else {
                return Err(MalformedStream::TruncatedRun { offset });
            };
            self.pos = offset + 2;
            Ok(Token::Run {
                length: head,
                symbol,
            })
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token<'a>, MalformedStream>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }
        let result = self.read_token();
        self.failed = result.is_err();
        Some(result)
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn test_splits_runs_and_literals() {
        let stream = [5, b'A', 0xFF, 2, b'B', b'C', 0, b'D'];
        let parsed: Vec<_> = tokens(&stream).collect::<Result<_, _>>().unwrap();
        assert_eq!(
            parsed,
            vec![
                Token::Run {
                    length: 5,
                    symbol: b'A'
                },
                Token::Literal(b"BC"),
                Token::Run {
                    length: 0,
                    symbol: b'D'
                },
            ]
        );
    }

    #[test]
    fn test_marker_as_run_symbol() {
        let stream = [3, 0xFF];
        let mut iter = tokens(&stream);
        assert_eq!(
            iter.next(),
            Some(Ok(Token::Run {
                length: 3,
                symbol: 0xFF
            }))
        );
        assert_eq!(iter.next(), None);
        assert_eq!(iter.position(), 2);
    }

    #[test]
    fn test_fused_after_error() {
        let stream = [0xFF, 4, b'A'];
        let mut iter = tokens(&stream);
        assert_eq!(
            iter.next(),
            Some(Err(MalformedStream::TruncatedLiteral {
                offset: 0,
                declared: 4,
                available: 1
            }))
        );
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_lengths_and_wire_form() {
        let literal = Token::Literal(b"xyz");
        assert_eq!(literal.expanded_len(), 3);
        assert_eq!(literal.encoded_len(), 5);

        let mut wire = Vec::new();
        literal.write_to(&mut wire);
        Token::Run {
            length: 9,
            symbol: 0,
        }
        .write_to(&mut wire);
        assert_eq!(wire, [0xFF, 3, b'x', b'y', b'z', 9, 0]);

        let mut expanded = Vec::new();
        for token in tokens(&wire) {
            token.unwrap().expand_into(&mut expanded);
        }
        assert_eq!(expanded, b"xyz\0\0\0\0\0\0\0\0\0");
    }
}
