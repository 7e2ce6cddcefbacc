use bytes::Buf;

use crate::common::{DecodeOutcome, Field, HexRecord, MalformedReason, HEADER_LEN, RECORD_MARKER};
use crate::hex;

/// Characters of an unrecognized line kept for diagnostics.
pub const PREVIEW_CHARS: usize = 20;

const LENGTH_NUM_DIGITS: usize = 2;
const ADDRESS_NUM_DIGITS: usize = 6;

/// Decodes one trimmed line. `line_no` is 1-based and only used for reporting.
pub fn decode(line: &str, line_no: usize) -> DecodeOutcome {
    match RecordDecoder::new(line).decode() {
        Ok(record) => DecodeOutcome::Record { line_no, record },
        Err(Rejection::Malformed(reason)) => DecodeOutcome::Malformed { line_no, reason },
        Err(Rejection::Unrecognized) => DecodeOutcome::Unrecognized {
            line_no,
            preview: line.chars().take(PREVIEW_CHARS).collect(),
        },
    }
}

/// Trims and decodes every line of `text`, blank lines included.
pub fn decode_lines(text: &str) -> impl Iterator<Item = DecodeOutcome> + '_ {
    text.lines()
        .enumerate()
        .map(|(line_idx, line)| decode(line.trim(), line_idx + 1))
}

enum Rejection {
    Unrecognized,
    Malformed(MalformedReason),
}

type DecodeResult<T> = std::result::Result<T, Rejection>;

struct RecordDecoder<'a> {
    line: &'a str,
    cursor: &'a [u8],
}

impl<'a> RecordDecoder<'a> {
    fn new(line: &'a str) -> Self {
        RecordDecoder {
            line,
            cursor: line.as_bytes(),
        }
    }

    fn decode(&mut self) -> DecodeResult<HexRecord> {
        self.skip_marker()?;
        self.check_header_len()?;
        let length = self.parse_length()?;
        let address = self.parse_address()?;
        let data_byte_count = self.count_data_bytes();

        Ok(HexRecord {
            length,
            address,
            data_byte_count,
        })
    }

    fn skip_marker(&mut self) -> DecodeResult<()> {
        if self.line.starts_with(RECORD_MARKER) {
            self.cursor = &self.cursor[RECORD_MARKER.len_utf8()..];
            Ok(())
        } else {
            Err(Rejection::Unrecognized)
        }
    }

    // Length is counted in characters, not bytes.
    fn check_header_len(&self) -> DecodeResult<()> {
        if self.line.chars().nth(HEADER_LEN - 1).is_none() {
            Err(Rejection::Malformed(MalformedReason::TooShort))
        } else {
            Ok(())
        }
    }

    fn parse_length(&mut self) -> DecodeResult<u8> {
        let field_bytes = self.parse_field_hex_string(Field::Length, LENGTH_NUM_DIGITS)?;
        Ok(field_bytes.as_slice().get_u8())
    }

    fn parse_address(&mut self) -> DecodeResult<u32> {
        let field_bytes = self.parse_field_hex_string(Field::Address, ADDRESS_NUM_DIGITS)?;
        Ok(field_bytes.as_slice().get_uint(ADDRESS_NUM_DIGITS / 2) as u32)
    }

    // Trailing odd nibble is dropped. Payload digits are not validated.
    fn count_data_bytes(&self) -> usize {
        // The header has been decoded, so it is all ASCII and HEADER_LEN is a char boundary.
        self.line[HEADER_LEN..].chars().count() / 2
    }

    fn parse_field_hex_string(&mut self, field: Field, field_size: usize) -> DecodeResult<Vec<u8>> {
        let hex_string = self.get_field_hex_string(field_size);
        hex::hex_string_to_bytes(hex_string)
            .map_err(|error| Rejection::Malformed(MalformedReason::ParseError { field, error }))
    }

    fn get_field_hex_string(&mut self, field_size: usize) -> &'a [u8] {
        let hex_string = &self.cursor[..field_size];
        self.cursor = &self.cursor[field_size..];
        hex_string
    }
}
