//! Text visualizations of state histories
//!
//! Contains the ASCII spectrogram renderer, the positional axis alphabet
//! and the width-bounded state and symbol table layouts.

mod layout;
mod spectrogram;
mod symbols;

pub use layout::{nibbles, state_dump, symbol_table, wrap_tokens};
pub use spectrogram::{Spectrogram, SpectrogramRenderer};
pub use symbols::{encode_symbol, PositionalEncoder, SYMBOL_COUNT};
