//! Delimited table reading into Polars DataFrames.
//!
//! Table 1 (`PatientDATA1.txt`) is tab-delimited, Table 2
//! (`PatientDATA2.txt`) is comma-delimited. Both are read with schema
//! inference and a single header row.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Columns that must be present in the patient table.
pub const PATIENT_REQUIRED_COLUMNS: [&str; 3] = ["PATNO", "GENDER", "HR"];

/// Columns that must be present in the visit table.
pub const VISIT_REQUIRED_COLUMNS: [&str; 4] = ["PATNO", "VISIT", "SBP_DBP", "AE"];

fn check_file_exists(path: &Path) -> Result<()> {
    std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(())
}

/// Reads a delimited text table into a DataFrame.
///
/// The first row is taken as the header; column types are inferred from
/// the leading rows.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`], [`IngestError::TableParse`] on
/// malformed input, or [`IngestError::EmptyTable`] when no data rows
/// remain after the header.
pub fn read_delimited_table(path: &Path, separator: u8) -> Result<DataFrame> {
    check_file_exists(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .map_parse_options(|opts| opts.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::TableParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::TableParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded table"
    );

    Ok(df)
}

/// Reads the patient table (tab-delimited) and checks its required columns.
pub fn read_patient_records(path: &Path) -> Result<DataFrame> {
    let df = read_delimited_table(path, b'\t')?;
    require_columns(&df, &PATIENT_REQUIRED_COLUMNS, path)?;
    Ok(df)
}

/// Reads the visit table (comma-delimited) and checks its required columns.
pub fn read_visit_records(path: &Path) -> Result<DataFrame> {
    let df = read_delimited_table(path, b',')?;
    require_columns(&df, &VISIT_REQUIRED_COLUMNS, path)?;
    Ok(df)
}

/// Checks that every named column exists in the frame.
///
/// # Errors
///
/// Returns [`IngestError::MissingColumn`] naming the first absent column.
pub fn require_columns(df: &DataFrame, columns: &[&str], path: &Path) -> Result<()> {
    for column in columns {
        if !df.get_column_names().iter().any(|name| name.as_str() == *column) {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_table(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn reads_tab_delimited_patient_table() {
        let file = create_temp_table("PATNO\tGENDER\tHR\n1\tM\t75\n2\tF\t82\n");
        let df = read_patient_records(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        let names: Vec<&str> = df.get_column_names_str();
        assert_eq!(names, vec!["PATNO", "GENDER", "HR"]);
    }

    #[test]
    fn reads_comma_delimited_visit_table() {
        let file = create_temp_table(
            "PATNO,VISIT,SBP_DBP,AE\n1,01-02-2020,130_85,NONE\n2,05-02-2020,120_80,HEADACHE\n",
        );
        let df = read_visit_records(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 4);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let result = read_patient_records(Path::new("/nonexistent/PatientDATA1.txt"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn header_only_file_is_empty_table() {
        let file = create_temp_table("PATNO\tGENDER\tHR\n");
        let result = read_patient_records(file.path());
        assert!(matches!(result, Err(IngestError::EmptyTable { .. })));
    }

    #[test]
    fn absent_required_column_is_missing_column() {
        let file = create_temp_table("PATNO\tSEX\tHR\n1\tM\t75\n");
        let result = read_patient_records(file.path());
        match result {
            Err(IngestError::MissingColumn { column, .. }) => assert_eq!(column, "GENDER"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn visit_table_requires_adverse_event_column() {
        let file = create_temp_table("PATNO,VISIT,SBP_DBP\n1,01-02-2020,130_85\n");
        let result = read_visit_records(file.path());
        match result {
            Err(IngestError::MissingColumn { column, .. }) => assert_eq!(column, "AE"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn passthrough_columns_are_preserved() {
        let file =
            create_temp_table("PATNO\tGENDER\tHR\tAGE\tWEIGHT\tSMOKER\n1\tM\t75\t54\t80\tN\n");
        let df = read_patient_records(file.path()).unwrap();
        assert_eq!(df.width(), 6);
    }
}
