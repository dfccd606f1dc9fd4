//! Composite blood-pressure field splitting.
//!
//! `SBP_DBP` encodes systolic and diastolic pressure as
//! `"<int>_<int>"`. The column is split into integer `SBP` and `DBP`
//! columns and dropped from the cleaned table.

use polars::prelude::*;

use crate::error::{Result, TransformError};

/// The composite source column.
pub const SBP_DBP_COLUMN: &str = "SBP_DBP";

/// The derived systolic column.
pub const SBP_COLUMN: &str = "SBP";

/// The derived diastolic column.
pub const DBP_COLUMN: &str = "DBP";

fn composite_error(value: &str, reason: impl Into<String>) -> TransformError {
    TransformError::CompositeFormat {
        column: SBP_DBP_COLUMN.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Splits one composite value into `(SBP, DBP)`.
///
/// # Errors
///
/// Returns [`TransformError::CompositeFormat`] unless the value splits
/// on `_` into exactly two integer-parseable parts.
pub fn split_composite(value: &str) -> Result<(i32, i32)> {
    let trimmed = value.trim();
    let mut parts = trimmed.split('_');
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(composite_error(
            value,
            "expected exactly two parts separated by '_'",
        ));
    };
    let sbp = first
        .parse::<i32>()
        .map_err(|_| composite_error(value, format!("'{first}' is not an integer")))?;
    let dbp = second
        .parse::<i32>()
        .map_err(|_| composite_error(value, format!("'{second}' is not an integer")))?;
    Ok((sbp, dbp))
}

/// Replaces [`SBP_DBP_COLUMN`] with integer [`SBP_COLUMN`] and
/// [`DBP_COLUMN`] columns.
///
/// Every row must carry a well-formed composite value; a missing value
/// is treated as malformed, matching the all-or-nothing integer cast in
/// the source analysis.
///
/// # Errors
///
/// Returns [`TransformError::ColumnNotFound`] when the composite column
/// is absent and [`TransformError::CompositeFormat`] on the first
/// malformed value.
pub fn split_blood_pressure(df: &DataFrame) -> Result<DataFrame> {
    let values = df
        .column(SBP_DBP_COLUMN)
        .map_err(|_| TransformError::ColumnNotFound {
            column: SBP_DBP_COLUMN.to_string(),
        })?
        .str()?;

    let mut systolic: Vec<i32> = Vec::with_capacity(values.len());
    let mut diastolic: Vec<i32> = Vec::with_capacity(values.len());
    for value in values {
        let text = value.ok_or_else(|| composite_error("", "missing value"))?;
        let (sbp, dbp) = split_composite(text)?;
        systolic.push(sbp);
        diastolic.push(dbp);
    }

    let mut out = df.clone();
    out.with_column(Series::new(SBP_COLUMN.into(), systolic))?;
    out.with_column(Series::new(DBP_COLUMN.into(), diastolic))?;
    Ok(out.drop(SBP_DBP_COLUMN)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp_frame(values: Vec<&str>) -> DataFrame {
        let series = Series::new(SBP_DBP_COLUMN.into(), values);
        DataFrame::new(vec![series.into_column()]).unwrap()
    }

    #[test]
    fn splits_well_formed_value() {
        assert_eq!(split_composite("120_80").unwrap(), (120, 80));
        assert_eq!(split_composite(" 135_90 ").unwrap(), (135, 90));
    }

    #[test]
    fn wrong_separator_is_format_error() {
        let result = split_composite("120-80");
        assert!(matches!(result, Err(TransformError::CompositeFormat { .. })));
    }

    #[test]
    fn extra_parts_are_format_error() {
        let result = split_composite("120_80_60");
        assert!(matches!(result, Err(TransformError::CompositeFormat { .. })));
    }

    #[test]
    fn non_integer_part_is_format_error() {
        let result = split_composite("120_low");
        assert!(matches!(result, Err(TransformError::CompositeFormat { .. })));
    }

    #[test]
    fn composite_column_replaced_by_sbp_and_dbp() {
        let df = bp_frame(vec!["130_85", "120_80"]);
        let out = split_blood_pressure(&df).unwrap();

        assert!(out.column(SBP_DBP_COLUMN).is_err());
        let sbp: Vec<Option<i32>> = out
            .column(SBP_COLUMN)
            .unwrap()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        let dbp: Vec<Option<i32>> = out
            .column(DBP_COLUMN)
            .unwrap()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(sbp, vec![Some(130), Some(120)]);
        assert_eq!(dbp, vec![Some(85), Some(80)]);
    }

    #[test]
    fn malformed_row_aborts_split() {
        let df = bp_frame(vec!["130_85", "120-80"]);
        let result = split_blood_pressure(&df);
        assert!(matches!(result, Err(TransformError::CompositeFormat { .. })));
    }
}
