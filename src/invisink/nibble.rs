use crate::alphabet::{symbol_to_value, value_to_symbol};
use crate::error::SymbolError;

/// Spell each byte as two symbols, high nibble first.
pub fn pack_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 * 3);
    for &byte in bytes {
        out.push(value_to_symbol(byte >> 4));
        out.push(value_to_symbol(byte & 0x0F));
    }
    out
}

/// Fold symbol pairs back into bytes.
pub fn unpack_symbols(text: &str) -> Result<Vec<u8>, SymbolError> {
    let count = text.chars().count();
    if count % 2 != 0 {
        return Err(SymbolError::OddLength { count });
    }

    let mut bytes = Vec::with_capacity(count / 2);
    let mut high: Option<u8> = None;
    for (position, symbol) in text.chars().enumerate() {
        let value =
            symbol_to_value(symbol).ok_or(SymbolError::UnknownSymbol { position, symbol })?;
        match high.take() {
            None => high = Some(value),
            Some(hi) => bytes.push((hi << 4) | value),
        }
    }
    Ok(bytes)
}
