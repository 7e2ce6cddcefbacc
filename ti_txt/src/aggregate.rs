use crate::common::DecodeOutcome;
use crate::region::{AddressRange, MemoryRegion};

/// Folds decode outcomes into an [`AggregateReport`].
///
/// Malformed and unrecognized outcomes are only counted; they never stop
/// the fold.
pub fn aggregate<'a, I>(outcomes: I) -> AggregateReport
where
    I: IntoIterator<Item = &'a DecodeOutcome>,
{
    let mut aggregator = Aggregator::new();
    aggregator.extend(outcomes);
    aggregator.finish()
}

#[derive(Debug, Default)]
pub struct Aggregator {
    report: AggregateReport,
}

impl Aggregator {
    pub fn new() -> Self {
        Aggregator::default()
    }

    pub fn push(&mut self, outcome: &DecodeOutcome) {
        let report = &mut self.report;
        match outcome {
            DecodeOutcome::Record { record, .. } => {
                report.records += 1;
                report.total_data_bytes += record.data_byte_count as u64;
                if let Some(range) = record.address_range() {
                    report.address_ranges.push(range);
                }
            }
            DecodeOutcome::Malformed { .. } => report.malformed += 1,
            DecodeOutcome::Unrecognized { .. } => report.unrecognized += 1,
        }
    }

    pub fn finish(self) -> AggregateReport {
        self.report
    }
}

impl<'a> Extend<&'a DecodeOutcome> for Aggregator {
    fn extend<I: IntoIterator<Item = &'a DecodeOutcome>>(&mut self, outcomes: I) {
        for outcome in outcomes {
            self.push(outcome);
        }
    }
}

/// Summary of a run of records. Min, max, span and region are derived from
/// `address_ranges` and are `None` when no record carried data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    pub total_data_bytes: u64,
    /// In encounter order.
    pub address_ranges: Vec<AddressRange>,
    pub records: usize,
    pub malformed: usize,
    pub unrecognized: usize,
}

impl AggregateReport {
    pub fn min_address(&self) -> Option<u32> {
        self.address_ranges.iter().map(|range| range.start).min()
    }

    pub fn max_address(&self) -> Option<u32> {
        self.address_ranges.iter().map(|range| range.end).max()
    }

    pub fn bounds(&self) -> Option<AddressRange> {
        Some(AddressRange::new(self.min_address()?, self.max_address()?))
    }

    pub fn span_bytes(&self) -> Option<u64> {
        self.bounds().map(|bounds| bounds.size_bytes())
    }

    pub fn region(&self) -> Option<MemoryRegion> {
        self.min_address().map(MemoryRegion::classify)
    }

    pub fn is_flash_region(&self) -> Option<bool> {
        self.region().map(MemoryRegion::is_flash)
    }

    /// Combines two reports as if their outcomes had been folded one after
    /// the other.
    pub fn merge(mut self, other: AggregateReport) -> AggregateReport {
        self.total_data_bytes += other.total_data_bytes;
        self.address_ranges.extend(other.address_ranges);
        self.records += other.records;
        self.malformed += other.malformed;
        self.unrecognized += other.unrecognized;
        self
    }
}
