use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};

use crate::aggregate::{AggregateReport, Aggregator};
use crate::common::DecodeOutcome;
use crate::parse::decode_lines;

pub const DEFAULT_DISPLAY_LINES: usize = 10;

/// Which lines feed the aggregate statistics.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum AggregateScope {
    /// Every line of the input.
    #[default]
    FullInput,
    /// Only the lines kept for display.
    DisplayWindow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Leading lines whose outcomes are kept in [`FileAnalysis::displayed`].
    pub display_lines: usize,
    pub scope: AggregateScope,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            display_lines: DEFAULT_DISPLAY_LINES,
            scope: AggregateScope::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAnalysis {
    pub total_lines: usize,
    pub size_bytes: u64,
    pub displayed: Vec<DecodeOutcome>,
    pub report: AggregateReport,
}

impl FileAnalysis {
    /// Lines decoded but not kept for display.
    pub fn hidden_lines(&self) -> usize {
        self.total_lines - self.displayed.len()
    }
}

pub fn analyze_file<P: AsRef<Path>>(path: P, options: &AnalysisOptions) -> Result<FileAnalysis> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), size_bytes = contents.len(), "read record file");

    Ok(analyze_str(&contents, options))
}

pub fn analyze_str(contents: &str, options: &AnalysisOptions) -> FileAnalysis {
    let mut aggregator = Aggregator::new();
    let mut displayed: Vec<DecodeOutcome> = Vec::new();
    let mut total_lines = 0;

    for outcome in decode_lines(contents) {
        total_lines += 1;
        let in_window = displayed.len() < options.display_lines;
        if in_window || options.scope == AggregateScope::FullInput {
            aggregator.push(&outcome);
        }
        if in_window {
            trace!(line_no = outcome.line_no(), ?outcome, "decoded line");
            displayed.push(outcome);
        }
    }

    let report = aggregator.finish();
    debug!(
        total_lines,
        records = report.records,
        malformed = report.malformed,
        unrecognized = report.unrecognized,
        total_data_bytes = report.total_data_bytes,
        "aggregated records"
    );

    FileAnalysis {
        total_lines,
        size_bytes: contents.len() as u64,
        displayed,
        report,
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
