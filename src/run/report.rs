//! Final run report and console summary.

use std::io::Write;
use std::time::Duration;

use crate::error::{GlossError, io_error};

use super::totals::RunTotals;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Files whose task completed without error, including files with no
    /// matching comment blocks.
    pub processed: usize,
    /// Files rewritten and written back, counted once each.
    pub modified: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl RunReport {
    /// Builds the report from the shared counters and the run duration.
    #[must_use]
    pub fn from_totals(totals: &RunTotals, elapsed: Duration) -> Self {
        Self {
            processed: totals.processed(),
            modified: totals.modified(),
            elapsed,
        }
    }
}

/// Renders a duration as seconds below one minute and minutes otherwise.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(60) {
        format!("{:.2} seconds", elapsed.as_secs_f64())
    } else {
        format!("{:.2} minutes", (elapsed / 60).as_secs_f64())
    }
}

/// Writes the end-of-run summary lines.
///
/// # Errors
///
/// Returns [`GlossError::Io`] when the writer fails.
pub fn write_run_summary<W: Write>(writer: &mut W, report: &RunReport) -> Result<(), GlossError> {
    writeln!(
        writer,
        "Total modified files: {} / {}",
        report.modified, report.processed
    )
    .map_err(|error| io_error(&error))?;
    writeln!(writer, "Total time: {}", format_elapsed(report.elapsed))
        .map_err(|error| io_error(&error))
}
