//! Gender label normalization.
//!
//! Raw `GENDER` values are mapped to `{"Male", "Female"}` through an
//! exact-match lookup carried over from the source data dictionary. The
//! lookup is deliberately case-sensitive and incomplete: values such as
//! `"male"` or `"MALE"` are not in the table and pass through unchanged.
//! This mirrors the upstream mapping and is flagged rather than fixed.

use polars::prelude::*;

use crate::error::{Result, TransformError};

/// The derived normalized-gender column.
pub const GENDER_CLEAN_COLUMN: &str = "GENDER_CLEAN";

/// Exact-match replacements for raw gender labels.
const GENDER_REPLACEMENTS: [(&str, &str); 6] = [
    ("m", "Male"),
    ("F", "Female"),
    ("feminin", "Female"),
    ("Mal", "Male"),
    ("M", "Male"),
    ("Man", "Male"),
];

/// Normalizes a single raw gender label.
///
/// Returns the mapped label, or the input unchanged when no exact match
/// exists.
pub fn normalize_gender(raw: &str) -> &str {
    GENDER_REPLACEMENTS
        .iter()
        .find(|(from, _)| *from == raw)
        .map_or(raw, |(_, to)| to)
}

/// Appends a [`GENDER_CLEAN_COLUMN`] derived from the raw gender column.
///
/// Missing values stay missing. The raw column is kept.
///
/// # Errors
///
/// Returns [`TransformError::ColumnNotFound`] when the raw column is
/// absent.
pub fn with_gender_clean(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let values = df
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?
        .str()?;

    let cleaned: Vec<Option<&str>> = values
        .into_iter()
        .map(|value| value.map(normalize_gender))
        .collect();

    let mut out = df.clone();
    out.with_column(Series::new(GENDER_CLEAN_COLUMN.into(), cleaned))?;
    Ok(out)
}

/// Uppercase view of the raw gender column.
///
/// Diagnostic only; the result is never stored back into the frame.
pub fn uppercase_genders(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let values = df
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?
        .str()?;
    Ok(values
        .into_iter()
        .map(|value| value.map(str::to_uppercase))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gender_frame(values: Vec<Option<&str>>) -> DataFrame {
        let series = Series::new("GENDER".into(), values);
        DataFrame::new(vec![series.into_column()]).unwrap()
    }

    #[test]
    fn maps_known_labels() {
        assert_eq!(normalize_gender("m"), "Male");
        assert_eq!(normalize_gender("M"), "Male");
        assert_eq!(normalize_gender("Mal"), "Male");
        assert_eq!(normalize_gender("Man"), "Male");
        assert_eq!(normalize_gender("F"), "Female");
        assert_eq!(normalize_gender("feminin"), "Female");
    }

    #[test]
    fn unmapped_labels_pass_through() {
        // Exact-match only: lowercase "male" is not in the table.
        assert_eq!(normalize_gender("male"), "male");
        assert_eq!(normalize_gender("MALE"), "MALE");
        assert_eq!(normalize_gender("Female"), "Female");
        assert_eq!(normalize_gender("unknown"), "unknown");
    }

    #[test]
    fn appends_clean_column_and_keeps_raw() {
        let df = gender_frame(vec![Some("M"), Some("feminin"), Some("male"), None]);
        let out = with_gender_clean(&df, "GENDER").unwrap();

        assert_eq!(out.get_column_names_str(), vec!["GENDER", "GENDER_CLEAN"]);
        let clean: Vec<Option<&str>> = out
            .column(GENDER_CLEAN_COLUMN)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(
            clean,
            vec![Some("Male"), Some("Female"), Some("male"), None]
        );
    }

    #[test]
    fn uppercase_view_is_not_stored() {
        let df = gender_frame(vec![Some("m"), Some("F")]);
        let upper = uppercase_genders(&df, "GENDER").unwrap();

        assert_eq!(upper, vec![Some("M".to_string()), Some("F".to_string())]);
        assert_eq!(df.width(), 1);
    }

    #[test]
    fn missing_raw_column_is_column_not_found() {
        let df = gender_frame(vec![Some("M")]);
        let result = with_gender_clean(&df, "SEX");
        assert!(matches!(result, Err(TransformError::ColumnNotFound { .. })));
    }
}
