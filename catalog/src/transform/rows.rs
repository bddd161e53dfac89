//! Row transformer
//!
//! Turns raw CSV rows into [`ControlRecord`]s. Row 0 is the header and only
//! fixes the expected width; every data row must match it. Blank lines reach
//! this stage as empty rows and are malformed like any other width mismatch.

use crate::error::{TransformError, TransformResult};
use crate::logs::{log_error, log_warning};
use crate::models::ControlRecord;
use crate::parser::RawRow;

/// What to do with a data row whose width differs from the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Stop at the first malformed row.
    #[default]
    Abort,
    /// Log the row, leave it out, keep going.
    Skip,
}

/// A data row that was left out under [`RowPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Index in the row sequence (header is 0)
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

/// Result of transforming a row sequence
#[derive(Debug, Default)]
pub struct RowOutcome {
    /// Records in input order
    pub records: Vec<ControlRecord>,
    /// Rows left out under the skip policy
    pub skipped: Vec<SkippedRow>,
    /// Width of the header row (0 for an empty input)
    pub header_width: usize,
}

impl RowOutcome {
    /// Get summary statistics
    pub fn summary(&self) -> String {
        format!(
            "Transformed: {} records, {} skipped",
            self.records.len(),
            self.skipped.len()
        )
    }
}

/// Transform raw rows into control records.
///
/// An input with no rows, or only a header, yields an empty outcome.
pub fn transform_rows(rows: Vec<RawRow>, policy: RowPolicy) -> TransformResult<RowOutcome> {
    let mut rows = rows.into_iter().enumerate();

    let header_width = match rows.next() {
        Some((_, header)) => header.len(),
        None => return Ok(RowOutcome::default()),
    };

    let mut outcome = RowOutcome {
        header_width,
        ..RowOutcome::default()
    };

    for (idx, row) in rows {
        if row.is_empty() || row.len() != header_width {
            let found = row.len();
            match policy {
                RowPolicy::Abort => {
                    log_error(format!(
                        "Row {} does not have correct column count ({} of {})",
                        idx, found, header_width
                    ));
                    return Err(TransformError::RowShape {
                        row: idx,
                        expected: header_width,
                        found,
                    });
                }
                RowPolicy::Skip => {
                    log_warning(format!(
                        "Row {} does not have correct column count ({} of {}), skipped",
                        idx, found, header_width
                    ));
                    outcome.skipped.push(SkippedRow {
                        row: idx,
                        expected: header_width,
                        found,
                    });
                    continue;
                }
            }
        }

        // Column 0 is the spreadsheet's own id; catalog ids are generated.
        let cells = row.into_iter().skip(1).collect();
        outcome.records.push(ControlRecord::from_cells(idx, cells)?);
    }

    Ok(outcome)
}
