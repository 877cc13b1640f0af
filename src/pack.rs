use alloc::vec::Vec;

use crate::token::{MAX_LITERAL, MAX_RUN, Token};

/// Scanning state of the RLE encoder.
///
/// Bytes that do not (yet) belong to a run wait in `queue`. When the byte
/// after them repeats the last queued one, that last byte becomes the head of
/// a run and everything queued before it is written as a literal block.
/// `queue_len > 0` implies `run_length == 0`.
struct Encoder {
    pattern: Option<u8>,
    run_length: u8,
    queue: [u8; MAX_LITERAL],
    queue_len: usize,
}

impl Encoder {
    const fn new() -> Self {
        Self {
            pattern: None,
            run_length: 0,
            queue: [0; MAX_LITERAL],
            queue_len: 0,
        }
    }

    /// Feeds one input byte.
    fn push(&mut self, byte: u8, output: &mut Vec<u8>) {
        if self.pattern == Some(byte) {
            self.extend_run(byte, output);
        } else {
            self.break_run(byte, output);
        }
    }

    fn extend_run(&mut self, byte: u8, output: &mut Vec<u8>) {
        if self.queue_len > 0 {
            // The last queued byte is the first byte of this run.
            self.queue_len -= 1;
            if self.queue_len > 0 {
                self.flush_literal(output);
            }
            self.run_length += 1;
        }

        self.run_length += 1;

        if self.run_length == MAX_RUN {
            emit_run(MAX_RUN, byte, output);
            self.run_length = 0;
        }
    }

    fn break_run(&mut self, byte: u8, output: &mut Vec<u8>) {
        if self.run_length > 0 {
            if let Some(pattern) = self.pattern {
                emit_run(self.run_length, pattern, output);
            }
            self.run_length = 0;
        }

        if self.queue_len == MAX_LITERAL {
            self.flush_literal(output);
        }
        self.queue[self.queue_len] = byte;
        self.queue_len += 1;
        self.pattern = Some(byte);
    }

    /// Writes the queued bytes as one literal block and empties the queue.
    fn flush_literal(&mut self, output: &mut Vec<u8>) {
        Token::Literal(&self.queue[..self.queue_len]).write_to(output);
        self.queue_len = 0;
    }

    /// End-of-input transition.
    ///
    /// Pending literals are written even when only one byte is queued. A run
    /// that ended exactly on a [`MAX_RUN`] boundary has already been written,
    /// so no zero-length run follows it.
    fn finish(mut self, output: &mut Vec<u8>) {
        if self.queue_len > 0 {
            self.flush_literal(output);
        } else if self.run_length > 0 {
            if let Some(pattern) = self.pattern {
                emit_run(self.run_length, pattern, output);
            }
        }
    }
}

#[inline]
fn emit_run(length: u8, symbol: u8, output: &mut Vec<u8>) {
    Token::Run { length, symbol }.write_to(output);
}

/// Packs the entire input into the output vector using run-length encoding.
///
/// Repeated bytes become `[length][symbol]` runs of at most 254 bytes. Stretches
/// without repeats become literal blocks: a `0xFF` marker, a count byte and the
/// bytes themselves. Empty input produces no output.
///
/// # Parameters
/// * `input`: The source data to pack.
/// * `output`: The destination vector (appended to).
pub fn pack(input: &[u8], output: &mut Vec<u8>) {
    output.reserve(input.len());

    let mut encoder = Encoder::new();
    for &byte in input {
        encoder.push(byte, output);
    }
    encoder.finish(output);
}
