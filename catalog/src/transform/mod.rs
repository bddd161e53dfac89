//! Transformation module.
//!
//! - Rows: raw CSV rows to control records
//! - Pipeline: the full CSV to catalog run

pub mod pipeline;
pub mod rows;

pub use pipeline::{convert, run, RunSummary};
pub use rows::{transform_rows, RowOutcome, RowPolicy, SkippedRow};
