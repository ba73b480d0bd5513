use crate::Generator;
use snip_core::{ShortCode, ALPHABET};

/// A short code generator using a sequential counter.
///
/// The counter is written in base62 using [`ALPHABET`] as the digit order
/// (`A` is zero) and left-padded to the requested length: `AAAAAA`,
/// `AAAAAB`, ... A counter too wide for the length is emitted in full.
///
/// Codes never repeat within one instance, so a registry using this
/// generator never has to reject a draw.
#[derive(Debug, Clone, Default)]
pub struct SeqGenerator {
    counter: u64,
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator starting from a specific counter value.
    ///
    /// Useful for resuming from a known state.
    pub fn with_offset(offset: u64) -> Self {
        Self { counter: offset }
    }
}

impl Generator for SeqGenerator {
    fn generate(&mut self, length: usize) -> ShortCode {
        let count = self.counter;
        self.counter = self.counter.wrapping_add(1);
        ShortCode::new_unchecked(encode_padded(count, length))
    }
}

fn encode_padded(mut num: u64, length: usize) -> String {
    let base = ALPHABET.len() as u64;
    let mut digits = Vec::with_capacity(length.max(1));
    loop {
        digits.push(ALPHABET[(num % base) as usize]);
        num /= base;
        if num == 0 {
            break;
        }
    }
    while digits.len() < length {
        digits.push(ALPHABET[0]);
    }
    digits.iter().rev().map(|&b| b as char).collect()
}
