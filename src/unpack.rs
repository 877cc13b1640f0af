use crate::error::MalformedStream;
use crate::token::tokens;
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, MalformedStream>;

/// Unpacks an entire RLE stream.
///
/// Runs are expanded with a single `resize`, literal blocks are copied
/// verbatim. Zero-length runs are accepted and expand to nothing.
///
/// On error, the bytes of every token before the malformed one have already
/// been appended to `output`.
pub fn unpack(input: &[u8], output: &mut Vec<u8>) -> Result<()> {
    // Heuristic capacity reservation to reduce allocation churn.
    let heuristic_cap = input.len();
    if output.capacity() < output.len() + heuristic_cap {
        output.reserve(heuristic_cap);
    }

    for token in tokens(input) {
        token?.expand_into(output);
    }

    Ok(())
}
