//! High-level pipeline: CSV file to OSCAL catalog file.
//!
//! Runs the stages in order and stops at the first error:
//!
//! 1. Load rows from the input CSV
//! 2. Validate widths and build control records
//! 3. Build the catalog
//! 4. Write the catalog
//!
//! Nothing is written unless every earlier stage succeeded.
//!
//! # Example
//!
//! ```rust,ignore
//! use control_catalog::{run, Config};
//!
//! let summary = run(&Config::default())?;
//! println!("Wrote {} controls", summary.control_count);
//! ```

use std::path::PathBuf;

use uuid::Uuid;

use crate::catalog::{build_catalog, write_catalog};
use crate::config::Config;
use crate::error::PipelineResult;
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::Catalog;
use crate::parser::read_csv;

use super::rows::{transform_rows, SkippedRow};

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Data rows read, header excluded
    pub row_count: usize,
    pub control_count: usize,
    pub skipped: Vec<SkippedRow>,
    pub catalog_uuid: Uuid,
}

/// Load, transform and build without writing.
pub fn convert(config: &Config) -> PipelineResult<(Catalog, Vec<SkippedRow>, usize)> {
    log_info(format!("Reading {}", config.input.display()));
    let rows = read_csv(&config.input, &config.loader)?;
    let row_count = rows.len().saturating_sub(1);
    log_success(format!("Read {} data rows", row_count));

    let outcome = transform_rows(rows, config.row_policy)?;
    log_info_indent(outcome.summary(), 1);
    if !outcome.skipped.is_empty() {
        log_warning(format!("{} malformed rows left out", outcome.skipped.len()));
    }

    let catalog = build_catalog(&outcome.records);
    log_success(format!(
        "Built catalog {} with {} controls",
        catalog.uuid,
        catalog.controls.len()
    ));

    Ok((catalog, outcome.skipped, row_count))
}

/// Run the full pipeline described by `config`.
pub fn run(config: &Config) -> PipelineResult<RunSummary> {
    let (catalog, skipped, row_count) = convert(config)?;

    write_catalog(&catalog, &config.output)?;
    log_success(format!("Wrote {}", config.output.display()));

    Ok(RunSummary {
        input: config.input.clone(),
        output: config.output.clone(),
        row_count,
        control_count: catalog.controls.len(),
        skipped,
        catalog_uuid: catalog.uuid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CsvError, PipelineError, TransformError};
    use crate::transform::RowPolicy;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;

    const HEADER: &str =
        "id,origin_doc,section,title,implementation,nist_sp80053_refs,assurance_level,risk_categories";

    fn setup(csv: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("controls.csv");
        fs::write(&input, csv).unwrap();
        let config = Config::default().with_paths(&input, dir.path().join("catalog.json"));
        (dir, config)
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn control_list(path: &Path) -> Value {
        read_json(path)["controls"].clone()
    }

    #[test]
    fn test_least_privilege_scenario() {
        let (_dir, config) = setup(&format!(
            "{HEADER}\n1,DocA,1.1,Least Privilege,Use RBAC,AC-6,High,Access Control\n"
        ));

        let summary = run(&config).unwrap();
        assert_eq!(summary.row_count, 1);
        assert_eq!(summary.control_count, 1);

        let json = read_json(&config.output);
        assert_eq!(
            json["controls"],
            serde_json::json!([{"id": "control-1", "title": "Least Privilege"}])
        );
        assert_eq!(json["metadata"]["title"], "Cloud Native Security Controls Catalog");
        assert_eq!(json["uuid"], summary.catalog_uuid.to_string());
    }

    #[test]
    fn test_n_rows_give_n_controls() {
        let mut csv = format!("{HEADER}\n");
        for i in 0..25 {
            csv.push_str(&format!("{},Doc,{}.0,Control {},impl,AC-{},Low,Risk\n", 100 + i, i, i, i));
        }
        let (_dir, config) = setup(&csv);

        let summary = run(&config).unwrap();
        assert_eq!(summary.control_count, 25);

        let controls = control_list(&config.output);
        let controls = controls.as_array().unwrap();
        for (i, control) in controls.iter().enumerate() {
            assert_eq!(control["id"], format!("control-{}", i + 1));
            assert_eq!(control["title"], format!("Control {}", i));
        }
    }

    #[test]
    fn test_repeat_runs_same_controls() {
        let (_dir, config) = setup(&format!(
            "{HEADER}\n1,DocA,1.1,A,x,AC-1,High,R\n2,DocA,1.2,B,y,AC-2,Low,R\n"
        ));

        let first = run(&config).unwrap();
        let first_controls = control_list(&config.output);
        let second = run(&config).unwrap();
        let second_controls = control_list(&config.output);

        assert_eq!(first_controls, second_controls);
        assert_ne!(first.catalog_uuid, second.catalog_uuid);
    }

    #[test]
    fn test_header_only_input() {
        let (_dir, config) = setup(&format!("{HEADER}\n"));

        let summary = run(&config).unwrap();
        assert_eq!(summary.control_count, 0);

        let json = read_json(&config.output);
        assert_eq!(json["controls"], serde_json::json!([]));
        assert_eq!(json["metadata"]["oscal-version"], "1.0.2");
    }

    #[test]
    fn test_empty_file() {
        let (_dir, config) = setup("");
        let summary = run(&config).unwrap();
        assert_eq!(summary.row_count, 0);
        assert_eq!(summary.control_count, 0);
    }

    #[test]
    fn test_short_row_aborts_without_output() {
        let (_dir, config) = setup(&format!(
            "{HEADER}\n1,DocA,1.1,A,x,AC-1,High,R\n2,DocA,1.2,B,y,AC-2,Low\n"
        ));

        let err = run(&config).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Transform(TransformError::RowShape { row: 2, expected: 8, found: 7 })
        ));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_trailing_blank_line_aborts_without_output() {
        let (_dir, config) = setup(&format!("{HEADER}\n1,DocA,1.1,A,x,AC-1,High,R\n\n"));

        let err = run(&config).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Transform(TransformError::RowShape { row: 2, expected: 8, found: 0 })
        ));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_blank_line_counts_toward_row_index() {
        let (_dir, config) = setup(&format!(
            "{HEADER}\n1,DocA,1.1,A,x,AC-1,High,R\n\n3,DocA,1.3,C,z,AC-3,Low\n4,DocA,1.4,D,w,AC-4,Low,R\n"
        ));
        let config = config.with_row_policy(RowPolicy::Skip);

        let summary = run(&config).unwrap();
        let skipped: Vec<(usize, usize)> = summary.skipped.iter().map(|s| (s.row, s.found)).collect();
        assert_eq!(skipped, vec![(2, 0), (3, 7)]);
        assert_eq!(summary.row_count, 4);
        assert_eq!(summary.control_count, 2);
    }

    #[test]
    fn test_short_row_skipped_under_skip_policy() {
        let (_dir, config) = setup(&format!(
            "{HEADER}\n1,DocA,1.1,A,x,AC-1,High,R\n2,DocA,1.2,B,y,AC-2,Low\n3,DocA,1.3,C,z,AC-3,Low,R\n"
        ));
        let config = config.with_row_policy(RowPolicy::Skip);

        let summary = run(&config).unwrap();
        assert_eq!(summary.row_count, 3);
        assert_eq!(summary.control_count, 2);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].row, 2);

        let titles: Vec<Value> = control_list(&config.output)
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].clone())
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default().with_paths(dir.path().join("absent.csv"), dir.path().join("out.json"));

        let err = run(&config).unwrap_err();
        assert!(matches!(err, PipelineError::Csv(CsvError::Read { .. })));
        assert!(err.to_string().contains("absent.csv"));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_convert_does_not_write() {
        let (_dir, config) = setup(&format!("{HEADER}\n1,DocA,1.1,A,x,AC-1,High,R\n"));

        let (catalog, skipped, rows) = convert(&config).unwrap();
        assert_eq!(catalog.controls.len(), 1);
        assert!(skipped.is_empty());
        assert_eq!(rows, 1);
        assert!(!config.output.exists());
    }
}
