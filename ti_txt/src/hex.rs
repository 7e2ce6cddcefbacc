use thiserror::Error;

const DIGITS_PER_BYTE: usize = 2;

/// Decodes pairs of ASCII hex digits into bytes, most significant digit first.
pub fn hex_string_to_bytes(hex_string: &[u8]) -> Result<Vec<u8>> {
    assert!(
        hex_string.len() % DIGITS_PER_BYTE == 0,
        "hex string must consist of pairs of hex digits"
    );
    let mut bytes = Vec::with_capacity(hex_string.len() / DIGITS_PER_BYTE);
    for (pair_idx, hex_digit_pair) in hex_string.chunks(DIGITS_PER_BYTE).enumerate() {
        let offset = pair_idx * DIGITS_PER_BYTE;
        let high_nibble = decode_hex_digit(hex_digit_pair[0], offset)?;
        let low_nibble = decode_hex_digit(hex_digit_pair[1], offset + 1)?;
        bytes.push(high_nibble << 4 | low_nibble);
    }
    Ok(bytes)
}

fn decode_hex_digit(digit: u8, offset: usize) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(10 + (digit - b'a')),
        b'A'..=b'F' => Ok(10 + (digit - b'A')),
        d => Err(InvalidHexDigit {
            digit: char::from(d),
            offset,
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid hex digit {digit:?} at offset {offset}")]
pub struct InvalidHexDigit {
    pub digit: char,
    pub offset: usize,
}

type Result<T> = std::result::Result<T, InvalidHexDigit>;
