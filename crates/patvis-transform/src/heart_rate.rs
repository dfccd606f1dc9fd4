//! Heart-rate plausibility filtering and summary statistics.
//!
//! Heart rates outside `[40, 100]` bpm are implausible for this cohort
//! and are replaced with a missing value; the row itself is kept.

use polars::prelude::*;

use crate::error::{Result, TransformError};

/// The heart-rate column.
pub const HR_COLUMN: &str = "HR";

/// Lowest plausible heart rate (inclusive).
pub const HR_MIN: i64 = 40;

/// Highest plausible heart rate (inclusive).
pub const HR_MAX: i64 = 100;

/// Max/min/mean of the heart-rate column, missing values ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartRateSummary {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
}

fn require_hr(df: &DataFrame) -> Result<&Column> {
    df.column(HR_COLUMN)
        .map_err(|_| TransformError::ColumnNotFound {
            column: HR_COLUMN.to_string(),
        })
}

/// Replaces out-of-range heart rates with nulls.
///
/// Two independent threshold passes, below-range then above-range; the
/// ranges are disjoint so the order is immaterial. Values exactly at the
/// bounds are retained.
pub fn null_out_of_range_heart_rate(df: &DataFrame) -> Result<DataFrame> {
    require_hr(df)?;

    let out = df
        .clone()
        .lazy()
        .with_column(
            when(col(HR_COLUMN).lt(lit(HR_MIN)))
                .then(lit(NULL))
                .otherwise(col(HR_COLUMN))
                .alias(HR_COLUMN),
        )
        .with_column(
            when(col(HR_COLUMN).gt(lit(HR_MAX)))
                .then(lit(NULL))
                .otherwise(col(HR_COLUMN))
                .alias(HR_COLUMN),
        )
        .collect()?;

    let nulled = out.column(HR_COLUMN)?.null_count() - df.column(HR_COLUMN)?.null_count();
    if nulled > 0 {
        tracing::debug!(nulled, "replaced out-of-range heart rates with nulls");
    }

    Ok(out)
}

/// Computes max, min, and mean heart rate, ignoring missing values.
///
/// Returns `None` when every value is missing.
pub fn heart_rate_summary(df: &DataFrame) -> Result<Option<HeartRateSummary>> {
    let series = require_hr(df)?.as_materialized_series();
    let max = series.max::<f64>()?;
    let min = series.min::<f64>()?;
    let mean = series.mean();

    Ok(match (max, min, mean) {
        (Some(max), Some(min), Some(mean)) => Some(HeartRateSummary { max, min, mean }),
        _ => None,
    })
}
