//! Error types for the CSV to OSCAL catalog pipeline.
//!
//! Each stage owns its error type:
//!
//! - [`CsvError`] - reading and parsing the input file
//! - [`TransformError`] - row width and record shape checks
//! - [`CatalogError`] - serializing and writing the catalog
//! - [`ConfigError`] - resolving the run configuration
//! - [`PipelineError`] - top-level orchestration
//!
//! Stage errors convert into [`PipelineError`] via `From`, so `?` works
//! across stage boundaries.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// CSV Loading Errors
// =============================================================================

/// Errors while loading the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid delimited text.
    #[error("Invalid CSV in {path} at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

// =============================================================================
// Row Transformation Errors
// =============================================================================

/// Errors while turning raw rows into control records.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A data row's width does not match the header row.
    #[error("Row {row} has {found} columns, expected {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row had the header's width but not the number of fields a control needs.
    #[error("Row {row} has {found} control fields, expected {expected}")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Catalog Output Errors
// =============================================================================

/// Errors while writing the catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The destination could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog could not be serialized.
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while resolving the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A path option was given an empty value.
    #[error("Empty path given for {flag}")]
    MissingPath { flag: &'static str },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input could not be loaded.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// A row was rejected.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Output could not be produced.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration was invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV loading.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for row transformation.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for catalog output.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for pipeline runs.
pub type PipelineResult<T> = Result<T, PipelineError>;
