//! Domain models for the CSV to OSCAL catalog pipeline.
//!
//! - [`ControlRecord`] - one validated CSV row, identifier column removed
//! - [`Control`] - a control entry of the output catalog
//! - [`Metadata`] - document-level catalog metadata
//! - [`Catalog`] - the complete catalog document

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{TransformError, TransformResult};

/// Title written into every generated catalog.
pub const CATALOG_TITLE: &str = "Cloud Native Security Controls Catalog";

/// Version of the catalog content.
pub const CATALOG_VERSION: &str = "0.0.1";

/// OSCAL schema version the catalog targets.
pub const OSCAL_VERSION: &str = "1.0.2";

// =============================================================================
// Control Record
// =============================================================================

/// One row of the controls spreadsheet, without its leading id column.
///
/// Fields are in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRecord {
    pub origin_doc: String,
    pub section: String,
    pub title: String,
    pub implementation: String,
    pub nist_sp80053_refs: String,
    pub assurance_level: String,
    pub risk_categories: String,
}

impl ControlRecord {
    /// Number of fields a record carries.
    pub const FIELD_COUNT: usize = 7;

    /// Column names in record order, as they appear in the CSV header after `id`.
    pub const COLUMNS: [&'static str; Self::FIELD_COUNT] = [
        "origin_doc",
        "section",
        "title",
        "implementation",
        "nist_sp80053_refs",
        "assurance_level",
        "risk_categories",
    ];

    /// Build a record from the cells that follow the id column.
    ///
    /// `row` is only used for error context.
    pub fn from_cells(row: usize, cells: Vec<String>) -> TransformResult<Self> {
        let found = cells.len();
        let fields: [String; Self::FIELD_COUNT] =
            cells.try_into().map_err(|_| TransformError::FieldCount {
                row,
                expected: Self::FIELD_COUNT,
                found,
            })?;
        let [
            origin_doc,
            section,
            title,
            implementation,
            nist_sp80053_refs,
            assurance_level,
            risk_categories,
        ] = fields;

        Ok(Self {
            origin_doc,
            section,
            title,
            implementation,
            nist_sp80053_refs,
            assurance_level,
            risk_categories,
        })
    }

    /// Field values in column order.
    pub fn fields(&self) -> [&str; Self::FIELD_COUNT] {
        [
            &self.origin_doc,
            &self.section,
            &self.title,
            &self.implementation,
            &self.nist_sp80053_refs,
            &self.assurance_level,
            &self.risk_categories,
        ]
    }
}

// =============================================================================
// Catalog Document
// =============================================================================

/// A control entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub title: String,
}

impl Control {
    /// Entry for the `index`-th record (0-based); ids start at `control-1`.
    pub fn from_record(index: usize, record: &ControlRecord) -> Self {
        Self {
            id: format!("control-{}", index + 1),
            title: record.title.clone(),
        }
    }
}

/// Catalog metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    #[serde(rename = "last-modified")]
    pub last_modified: String,
    pub version: String,
    #[serde(rename = "oscal-version")]
    pub oscal_version: String,
}

impl Metadata {
    /// Metadata for a catalog generated at `timestamp`.
    pub fn generated(timestamp: DateTime<Utc>) -> Self {
        Self {
            title: CATALOG_TITLE.to_string(),
            last_modified: timestamp.to_rfc3339_opts(SecondsFormat::Micros, false),
            version: CATALOG_VERSION.to_string(),
            oscal_version: OSCAL_VERSION.to_string(),
        }
    }
}

/// The catalog document written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub uuid: Uuid,
    pub metadata: Metadata,
    pub controls: Vec<Control>,
}
