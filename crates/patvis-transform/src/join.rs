//! Inner join of patient and visit records.

use polars::prelude::*;

use crate::error::{Result, TransformError};

/// The join key shared by both tables.
pub const JOIN_KEY: &str = "PATNO";

/// Inner-joins the two tables on [`JOIN_KEY`].
///
/// Standard relational semantics: only keys present on both sides
/// survive, and duplicate keys on either side produce the full
/// cross-product of the matching groups. Column order is the patient
/// columns followed by the non-key visit columns.
///
/// # Errors
///
/// Returns [`TransformError::ColumnNotFound`] when either side lacks the
/// key column.
pub fn join_on_patno(patients: &DataFrame, visits: &DataFrame) -> Result<DataFrame> {
    for (side, df) in [("patient", patients), ("visit", visits)] {
        if df.column(JOIN_KEY).is_err() {
            tracing::debug!(side, "join key missing");
            return Err(TransformError::ColumnNotFound {
                column: JOIN_KEY.to_string(),
            });
        }
    }

    // Keep left-table row order so the output is deterministic.
    let mut args = JoinArgs::new(JoinType::Inner);
    args.maintain_order = MaintainOrderJoin::Left;

    let joined = patients
        .clone()
        .lazy()
        .join(
            visits.clone().lazy(),
            [col(JOIN_KEY)],
            [col(JOIN_KEY)],
            args,
        )
        .collect()?;

    tracing::debug!(
        patient_rows = patients.height(),
        visit_rows = visits.height(),
        joined_rows = joined.height(),
        "inner join on {JOIN_KEY}"
    );

    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(columns: Vec<Column>) -> DataFrame {
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn keeps_only_keys_present_on_both_sides() {
        let patients = frame(vec![
            Series::new("PATNO".into(), vec![1i64, 2, 3]).into_column(),
            Series::new("GENDER".into(), vec!["M", "F", "m"]).into_column(),
        ]);
        let visits = frame(vec![
            Series::new("PATNO".into(), vec![2i64, 3, 4]).into_column(),
            Series::new("AE".into(), vec!["NONE", "HEADACHE", "NAUSEA"]).into_column(),
        ]);

        let joined = join_on_patno(&patients, &visits).unwrap();

        assert_eq!(joined.height(), 2);
        let keys: Vec<Option<i64>> = joined
            .column("PATNO")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(keys, vec![Some(2), Some(3)]);
    }

    #[test]
    fn carries_non_key_fields_from_both_sides() {
        let patients = frame(vec![
            Series::new("PATNO".into(), vec![1i64]).into_column(),
            Series::new("GENDER".into(), vec!["M"]).into_column(),
            Series::new("HR".into(), vec![75i64]).into_column(),
        ]);
        let visits = frame(vec![
            Series::new("PATNO".into(), vec![1i64]).into_column(),
            Series::new("AE".into(), vec!["NONE"]).into_column(),
        ]);

        let joined = join_on_patno(&patients, &visits).unwrap();

        assert_eq!(joined.height(), 1);
        assert_eq!(
            joined.get_column_names_str(),
            vec!["PATNO", "GENDER", "HR", "AE"]
        );
        let hr = joined.column("HR").unwrap().i64().unwrap().get(0);
        assert_eq!(hr, Some(75));
    }

    #[test]
    fn duplicate_keys_cross_product() {
        let patients = frame(vec![
            Series::new("PATNO".into(), vec![1i64, 1]).into_column(),
            Series::new("GENDER".into(), vec!["M", "M"]).into_column(),
        ]);
        let visits = frame(vec![
            Series::new("PATNO".into(), vec![1i64, 1, 1]).into_column(),
            Series::new("AE".into(), vec!["A", "B", "C"]).into_column(),
        ]);

        let joined = join_on_patno(&patients, &visits).unwrap();
        assert_eq!(joined.height(), 6);
    }

    #[test]
    fn missing_key_column_is_column_not_found() {
        let patients = frame(vec![Series::new("ID".into(), vec![1i64]).into_column()]);
        let visits = frame(vec![Series::new("PATNO".into(), vec![1i64]).into_column()]);

        let result = join_on_patno(&patients, &visits);
        assert!(matches!(
            result,
            Err(TransformError::ColumnNotFound { .. })
        ));
    }
}
