//! Catalog builder.
//!
//! Maps control records to catalog entries and wraps them with generated
//! metadata and a fresh document uuid. No I/O; see [`writer`] for output.

pub mod writer;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Catalog, Control, ControlRecord, Metadata};

pub use writer::{catalog_to_json, write_catalog};

/// Build a catalog stamped with the current time and a new v4 uuid.
pub fn build_catalog(records: &[ControlRecord]) -> Catalog {
    build_catalog_at(records, Utc::now(), Uuid::new_v4())
}

/// Build a catalog with an explicit timestamp and document uuid.
///
/// Only the record title is carried into each entry.
pub fn build_catalog_at(records: &[ControlRecord], timestamp: DateTime<Utc>, uuid: Uuid) -> Catalog {
    let controls = records
        .iter()
        .enumerate()
        .map(|(idx, record)| Control::from_record(idx, record))
        .collect();

    Catalog {
        uuid,
        metadata: Metadata::generated(timestamp),
        controls,
    }
}
