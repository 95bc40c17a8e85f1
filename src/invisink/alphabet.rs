//! The sixteen invisible code points used as hexadecimal digits.
//!
//! Every symbol is a zero-width or formatting character that standard text
//! rendering draws as nothing. The position of a symbol in [`ALPHABET`] is the
//! nibble value it stands for, so the order is part of the persisted format:
//! notes written by earlier releases decode only against this exact table.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const ALPHABET: [char; 16] = [
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{2060}', // word joiner
    '\u{2061}', // function application
    '\u{2062}', // invisible times
    '\u{2063}', // invisible separator
    '\u{2064}', // invisible plus
    '\u{2066}', // left-to-right isolate
    '\u{2067}', // right-to-left isolate
    '\u{2068}', // first strong isolate
    '\u{2069}', // pop directional isolate
    '\u{200E}', // left-to-right mark
    '\u{200F}', // right-to-left mark
    '\u{202A}', // left-to-right embedding
    '\u{202B}', // right-to-left embedding
];

static REVERSE: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(value, &symbol)| (symbol, value as u8))
        .collect()
});

/// Symbol for a nibble. Only the low four bits of `value` are used.
pub fn value_to_symbol(value: u8) -> char {
    ALPHABET[usize::from(value & 0x0F)]
}

/// Nibble for a symbol, or `None` if `symbol` is not part of the alphabet.
pub fn symbol_to_value(symbol: char) -> Option<u8> {
    REVERSE.get(&symbol).copied()
}

/// Whether `symbol` belongs to the alphabet.
pub fn is_symbol(symbol: char) -> bool {
    REVERSE.contains_key(&symbol)
}
