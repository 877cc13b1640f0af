#![no_main]

use libfuzzer_sys::fuzz_target;
use nespak::{Token, pack, tokens, unpack};

/// Arbitrary bytes fed to the unpacker must produce `Ok` or `Err`, never a panic.
///
/// When unpacking succeeds, the output length must equal the sum of the
/// token expansions.
fn verify_unpack_robustness(data: &[u8]) {
    let mut output = Vec::new();
    if unpack(data, &mut output).is_ok() {
        let expected: usize = tokens(data)
            .map(|token| token.map_or(0, |t| t.expanded_len()))
            .sum();
        assert_eq!(output.len(), expected);
    }
}

/// `unpack(pack(data)) == data`, and the packer never writes a zero-length run
/// or a run length equal to the literal marker.
fn verify_round_trip(data: &[u8]) {
    let mut packed = Vec::new();
    pack(data, &mut packed);

    for token in tokens(&packed) {
        match token {
            Ok(Token::Run { length, .. }) => {
                assert!((1..=254).contains(&length), "invalid run length {length}")
            }
            Ok(Token::Literal(bytes)) => assert!(!bytes.is_empty(), "empty literal block"),
            Err(e) => panic!("Packer produced a malformed stream: {e:?}"),
        }
    }

    let mut unpacked = Vec::new();
    match unpack(&packed, &mut unpacked) {
        Ok(()) => {
            if unpacked != data {
                panic!(
                    "Round-trip mismatch!\nInput len: {}\nPacked len: {}\nUnpacked len: {}",
                    data.len(),
                    packed.len(),
                    unpacked.len()
                );
            }
        }
        Err(e) => {
            panic!(
                "Round-trip failed! Unpacker rejected packed data.\nError: {:?}\nInput len: {}",
                e,
                data.len()
            );
        }
    }
}

fuzz_target!(|data: &[u8]| {
    verify_unpack_robustness(data);
    verify_round_trip(data);
});
