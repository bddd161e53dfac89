//! # Control Catalog - CSV to OSCAL catalog conversion
//!
//! Turns the cloud native security controls spreadsheet into an OSCAL
//! catalog document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Loader    │────▶│    Rows     │────▶│   Catalog   │────▶ JSON file
//! │             │     │  (parser)   │     │ (transform) │     │  (builder)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use control_catalog::{run, Config};
//!
//! let config = Config::default().with_paths("controls.csv", "catalog.json");
//! let summary = run(&config).unwrap();
//! println!("{} controls", summary.control_count);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Per-stage error types
//! - [`models`] - Control records and the catalog document
//! - [`parser`] - CSV loading
//! - [`transform`] - Row validation and the pipeline
//! - [`catalog`] - Catalog building and writing
//! - [`config`] - Run configuration
//! - [`logs`] - Progress logging

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Loading
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod catalog;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    CatalogError, CatalogResult, ConfigError, CsvError, CsvResult, PipelineError, PipelineResult,
    TransformError, TransformResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Catalog, Control, ControlRecord, Metadata};

// =============================================================================
// Re-exports - Stages
// =============================================================================

pub use catalog::{build_catalog, build_catalog_at, catalog_to_json, write_catalog};
pub use config::Config;
pub use parser::{detect_delimiter, parse_csv, parse_str, read_csv, LoaderOptions, RawRow};
pub use transform::{convert, run, transform_rows, RowOutcome, RowPolicy, RunSummary, SkippedRow};
