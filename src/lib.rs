//! # NESPAK Run-Length Encoding
//!
//! `nespak` is a safe, pure-Rust implementation of the NESPAK run-length encoding,
//! a byte-oriented RLE scheme designed for NES nametables and similar data.
//!
//! The packed stream is a sequence of two kinds of records:
//!
//! * **Run**: `[length][symbol]`, where `length` is `1..=254`.
//! * **Literal block**: `[0xFF][count][symbol; count]`, for stretches without repeats.
//!
//! Because `0xFF` is reserved as the literal marker it never appears as a run
//! length, so a byte value of `0xFF` is still a valid *symbol* in either record.
//!
//! ## Example
//!
//! ```rust
//! extern crate alloc;
//! use nespak::{pack, unpack};
//! use alloc::vec::Vec;
//!
//! // 5x 'A', 4x 'F', then "AF" stored verbatim.
//! let mut packed = Vec::new();
//! pack(b"AAAAAFFFFAF", &mut packed);
//! assert_eq!(packed, [5, b'A', 4, b'F', 0xFF, 2, b'A', b'F']);
//!
//! let mut buffer = Vec::new();
//! unpack(&packed, &mut buffer).expect("Unpacking failed");
//! assert_eq!(buffer, b"AAAAAFFFFAF");
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod codec;
pub mod error;
pub mod pack;
pub mod report;
pub mod token;
pub mod unpack;

pub use codec::{Algorithm, Codec, Rle};
pub use error::{CodecError, MalformedStream, ParseAlgorithmError};
pub use pack::pack;
pub use report::Report;
pub use token::{LITERAL_MARKER, MAX_LITERAL, MAX_RUN, Token, Tokens, tokens};
pub use unpack::unpack;
