//! Decoding and address statistics for TI-TXT style firmware record files.
//!
//! Each line of the form `%LLAAAAAADD...DD` is decoded on its own into a
//! [`DecodeOutcome`]. Lines that are not records, or are damaged, come back
//! as outcomes too, so a whole file always decodes. The outcomes are then
//! folded into an [`AggregateReport`].

mod aggregate;
mod analysis;
mod common;
mod hex;
mod parse;
mod region;

pub use aggregate::{aggregate, AggregateReport, Aggregator};
pub use analysis::{
    analyze_file, analyze_str, AggregateScope, AnalysisOptions, Error, FileAnalysis, Result,
    DEFAULT_DISPLAY_LINES,
};
pub use common::{
    BoundsError, DecodeOutcome, Field, HexRecord, MalformedReason, HEADER_LEN, MAX_ADDRESS,
    RECORD_MARKER,
};
pub use hex::InvalidHexDigit;
pub use parse::{decode, decode_lines, PREVIEW_CHARS};
pub use region::{AddressRange, MemoryRegion, FLASH_BASE_ADDRESS};
