// src/core/visualization/symbols.rs
//
// Positional alphabet used to label spectrogram columns with one character.

use crate::error::{SvaError, SvaResult};

/// Digits, lowercase, uppercase, `!`..=`/`, then `:`..=`@`.
const ALPHABET: &[u8; 84] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@";

/// Number of distinct axis symbols.
pub const SYMBOL_COUNT: usize = ALPHABET.len();

/// Single-symbol lookup into the positional alphabet.
///
/// This is not a base conversion: every call yields exactly one character,
/// and values at or beyond [`SYMBOL_COUNT`] are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalEncoder;

impl PositionalEncoder {
    pub fn encode(&self, n: usize) -> SvaResult<char> {
        encode_symbol(n)
    }

    pub fn capacity(&self) -> usize {
        SYMBOL_COUNT
    }
}

/// Symbol at position `n` of the alphabet.
pub fn encode_symbol(n: usize) -> SvaResult<char> {
    ALPHABET
        .get(n)
        .map(|&b| b as char)
        .ok_or(SvaError::SymbolOutOfRange {
            index: n,
            capacity: SYMBOL_COUNT,
        })
}
