//! Visit date normalization.
//!
//! `VISIT` arrives as `DD-MM-YYYY` text and is replaced with a proper
//! `Date` column. Parsing is strict: any non-conforming, non-missing
//! value aborts the pipeline with a format error.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::error::{Result, TransformError};

/// The expected text format of the `VISIT` column.
pub const VISIT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a single `DD-MM-YYYY` value into a calendar date.
///
/// # Errors
///
/// Returns [`TransformError::DateFormat`] when the value does not match
/// the pattern or names an impossible date.
pub fn parse_visit_date(column: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), VISIT_DATE_FORMAT).map_err(|_| {
        TransformError::DateFormat {
            column: column.to_string(),
            value: value.to_string(),
        }
    })
}

fn days_since_epoch(date: NaiveDate) -> i32 {
    // NaiveDate::default() is the Unix epoch, 1970-01-01.
    let epoch = NaiveDate::default();
    date.signed_duration_since(epoch).num_days() as i32
}

/// Replaces a `DD-MM-YYYY` string column with a `Date` column in place.
///
/// Missing values stay missing; everything else must parse.
///
/// # Errors
///
/// Returns [`TransformError::ColumnNotFound`] when the column is absent
/// and [`TransformError::DateFormat`] on the first non-conforming value.
pub fn normalize_visit_dates(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let series = df
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?
        .as_materialized_series();
    let values = series.str()?;

    let mut days: Vec<Option<i32>> = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Some(text) => days.push(Some(days_since_epoch(parse_visit_date(column, text)?))),
            None => days.push(None),
        }
    }

    let dates = Series::new(column.into(), days).cast(&DataType::Date)?;
    let mut out = df.clone();
    out.with_column(dates)?;
    Ok(out)
}

/// Extracts a `Date` column as calendar dates.
///
/// # Errors
///
/// Returns [`TransformError::ColumnNotFound`] when the column is absent
/// or a frame error when it is not a `Date` column.
pub fn visit_dates(df: &DataFrame, column: &str) -> Result<Vec<Option<NaiveDate>>> {
    let series = df
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?
        .as_materialized_series();
    Ok(series.date()?.as_date_iter().collect())
}

/// Day deltas between consecutive visit dates.
///
/// The first element is always missing, as is any delta touching a
/// missing date. Diagnostic only; the result is never stored back into
/// the frame.
pub fn visit_date_diffs(df: &DataFrame, column: &str) -> Result<Vec<Option<i64>>> {
    let dates = visit_dates(df, column)?;
    let mut diffs = Vec::with_capacity(dates.len());
    let mut previous: Option<NaiveDate> = None;
    for current in dates {
        let delta = match (previous, current) {
            (Some(prev), Some(cur)) => Some(cur.signed_duration_since(prev).num_days()),
            _ => None,
        };
        diffs.push(delta);
        previous = current;
    }
    Ok(diffs)
}
