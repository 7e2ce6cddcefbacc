use std::fmt;

use thiserror::Error;

use crate::hex::InvalidHexDigit;
use crate::region::AddressRange;

pub const RECORD_MARKER: char = '%';

/// Marker, 2 length digits and 6 address digits.
pub const HEADER_LEN: usize = 9;

/// Highest address representable by the 6 address digits.
pub const MAX_ADDRESS: u32 = 0xFF_FFFF;

/// A successfully decoded data record.
///
/// `length` is the count declared in the header while `data_byte_count` is
/// what the payload actually holds. The two are kept apart and never
/// reconciled by the decoder.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HexRecord {
    pub length: u8,
    pub address: u32,
    pub data_byte_count: usize,
}

impl HexRecord {
    /// Address of the last payload byte, `None` for an empty payload.
    pub fn end_address(&self) -> Option<u32> {
        if self.data_byte_count == 0 {
            return None;
        }
        // Saturates only for payloads beyond 4 GiB.
        let count = u32::try_from(self.data_byte_count).unwrap_or(u32::MAX);
        Some(self.address.saturating_add(count - 1))
    }

    pub fn address_range(&self) -> Option<AddressRange> {
        self.end_address()
            .map(|end| AddressRange::new(self.address, end))
    }

    /// Re-encodes the header fields as `%LLAAAAAA`.
    pub fn header(&self) -> String {
        format!("{RECORD_MARKER}{:02X}{:06X}", self.length, self.address)
    }

    /// Checks the record against the constraints the decoder leaves alone.
    pub fn check_bounds(&self) -> Result<(), BoundsError> {
        if usize::from(self.length) != self.data_byte_count {
            return Err(BoundsError::LengthMismatch {
                declared: self.length,
                actual: self.data_byte_count,
            });
        }
        if self.data_byte_count > 0 {
            let end = u64::from(self.address) + self.data_byte_count as u64 - 1;
            if end > u64::from(MAX_ADDRESS) {
                return Err(BoundsError::AddressOverflow { end });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("declared length {declared} does not match {actual} data bytes")]
    LengthMismatch { declared: u8, actual: usize },
    #[error("end address 0x{end:X} exceeds the 24-bit address space")]
    AddressOverflow { end: u64 },
}

/// Result of decoding one line. Every line yields exactly one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Record { line_no: usize, record: HexRecord },
    Malformed { line_no: usize, reason: MalformedReason },
    Unrecognized { line_no: usize, preview: String },
}

impl DecodeOutcome {
    pub fn line_no(&self) -> usize {
        use DecodeOutcome::*;
        match self {
            Record { line_no, .. } | Malformed { line_no, .. } | Unrecognized { line_no, .. } => {
                *line_no
            }
        }
    }

    pub fn record(&self) -> Option<&HexRecord> {
        match self {
            DecodeOutcome::Record { record, .. } => Some(record),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    TooShort,
    ParseError { field: Field, error: InvalidHexDigit },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MalformedReason::*;
        match self {
            TooShort => write!(f, "too short"),
            ParseError { field, error } => write!(f, "parse error in {field} field: {error}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Field::*;
        match self {
            Length => write!(f, "length"),
            Address => write!(f, "address"),
        }
    }
}
