//! Descriptive views over the joined table.
//!
//! None of these mutate the pipeline's data; they exist so the cleaned
//! dataset can be eyeballed (value counts, crosstab, a random sample,
//! sorted orderings) and so the schema ordering can be sanity-checked.

use polars::prelude::*;

use crate::error::{Result, TransformError};
use crate::values::any_to_string;

/// Counts occurrences of each value in a column, most frequent first.
///
/// The result frame has the source column plus a `count` column.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<DataFrame> {
    require_column(df, column)?;
    let counts = df
        .clone()
        .lazy()
        .group_by([col(column)])
        .agg([len().alias("count")])
        .sort(
            ["count"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;
    Ok(counts)
}

/// Cross-tabulates two columns as a long-format count frame.
///
/// Rows are `(left, right, count)` sorted by both keys; absent
/// combinations are simply absent rather than zero-filled.
pub fn cross_tab(df: &DataFrame, left: &str, right: &str) -> Result<DataFrame> {
    require_column(df, left)?;
    require_column(df, right)?;
    let counts = df
        .clone()
        .lazy()
        .group_by([col(left), col(right)])
        .agg([len().alias("count")])
        .sort([left, right], SortMultipleOptions::default())
        .collect()?;
    Ok(counts)
}

/// Draws `n` rows at random without replacement.
///
/// Seedless by default, matching the source analysis; pass a seed for a
/// reproducible draw in tests. Asking for more rows than exist returns
/// the whole frame in random order.
pub fn sample_rows(df: &DataFrame, n: usize, seed: Option<u64>) -> Result<DataFrame> {
    let n = n.min(df.height());
    Ok(df.sample_n_literal(n, false, true, seed)?)
}

/// Sorts ascending by one column, nulls last.
pub fn sort_by_column(df: &DataFrame, column: &str) -> Result<DataFrame> {
    require_column(df, column)?;
    Ok(df.sort(
        [column],
        SortMultipleOptions::default().with_nulls_last(true),
    )?)
}

/// Distinct values of a column in first-seen order.
pub fn unique_values(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    require_column(df, column)?;
    let unique = df.column(column)?.as_materialized_series().unique_stable()?;
    Ok(unique.iter().map(|value| any_to_string(&value)).collect())
}

/// Selects columns by name and by positional index and checks that the
/// two selections agree, then returns the projection.
///
/// This is a consistency check on schema ordering, not a transformation:
/// the caller states where it expects the named columns to sit.
///
/// # Errors
///
/// Returns [`TransformError::ProjectionMismatch`] when the index
/// selection resolves to a different column list (or runs off the end of
/// the schema), and [`TransformError::ColumnNotFound`] when a named
/// column is absent.
pub fn project_by_name_and_index(
    df: &DataFrame,
    names: &[&str],
    indices: &[usize],
) -> Result<DataFrame> {
    for name in names {
        require_column(df, name)?;
    }

    let by_name: Vec<String> = names.iter().map(|name| (*name).to_string()).collect();
    let by_index: Vec<String> = indices
        .iter()
        .filter_map(|&idx| df.select_at_idx(idx))
        .map(|column| column.name().to_string())
        .collect();

    if by_name != by_index {
        return Err(TransformError::ProjectionMismatch { by_name, by_index });
    }

    Ok(df.select(names.iter().copied())?)
}

fn require_column(df: &DataFrame, column: &str) -> Result<()> {
    if df.column(column).is_err() {
        return Err(TransformError::ColumnNotFound {
            column: column.to_string(),
        });
    }
    Ok(())
}
