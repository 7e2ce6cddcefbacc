use std::fmt;
use std::path::Path;

use ti_txt::{AggregateReport, DecodeOutcome, Error, FileAnalysis, MalformedReason, MemoryRegion};

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub strict: bool,
}

/// Plain-text report for one analyzed file.
pub struct AnalysisReport<'a> {
    pub path: &'a Path,
    pub analysis: &'a FileAnalysis,
    pub options: &'a RenderOptions,
}

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;
        writeln!(f, "=== Analyzing {} ===", self.path.display())?;
        writeln!(f, "total lines: {}", analysis.total_lines)?;
        writeln!(f, "file size: {} bytes", analysis.size_bytes)?;

        for outcome in &analysis.displayed {
            writeln!(f, "{}", OutcomeLine(outcome))?;
            if self.options.strict {
                if let Some(Err(e)) = outcome.record().map(|rec| rec.check_bounds()) {
                    writeln!(f, "line {:2}: note: {e}", outcome.line_no())?;
                }
            }
        }

        if analysis.hidden_lines() > 0 {
            writeln!(f, "... ({} more lines)", analysis.hidden_lines())?;
        }

        writeln!(f)?;
        write!(f, "{}", Summary(&analysis.report))
    }
}

/// Report for a file that could not be analyzed.
pub struct FailureReport<'a> {
    pub path: &'a Path,
    pub error: &'a Error,
}

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Analyzing {} ===", self.path.display())?;
        writeln!(f, "error: {}", self.error)
    }
}

struct OutcomeLine<'a>(&'a DecodeOutcome);

impl fmt::Display for OutcomeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            DecodeOutcome::Record { line_no, record } => write!(
                f,
                "line {line_no:2}: address=0x{:06X}, length={:2}, data={:2} bytes",
                record.address, record.length, record.data_byte_count
            ),
            DecodeOutcome::Malformed {
                line_no,
                reason: MalformedReason::TooShort,
            } => write!(f, "line {line_no:2}: too short"),
            DecodeOutcome::Malformed { line_no, reason } => {
                write!(f, "line {line_no:2}: malformed record ({reason})")
            }
            DecodeOutcome::Unrecognized { line_no, preview } => {
                write!(f, "line {line_no:2}: unrecognized format: {preview}...")
            }
        }
    }
}

struct Summary<'a>(&'a AggregateReport);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "total data bytes: {}", report.total_data_bytes)?;

        let (Some(bounds), Some(region)) = (report.bounds(), report.region()) else {
            return Ok(());
        };
        writeln!(f, "address range: {bounds}")?;
        writeln!(f, "memory span: {} bytes", bounds.size_bytes())?;
        match region {
            MemoryRegion::Flash => writeln!(f, "flash memory address (programmable)"),
            MemoryRegion::NonFlash => writeln!(f, "non-standard flash address"),
        }
    }
}
