//! Cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: read the patient and visit tables
//! 2. **Dates**: normalize `VISIT` to a date column, log the diff diagnostic
//! 3. **Join**: inner join on `PATNO`
//! 4. **Projection check**: name-vs-index schema ordering consistency
//! 5. **Descriptive views**: value counts, crosstab, sample, sorts
//! 6. **Gender**: derive `GENDER_CLEAN`
//! 7. **Blood pressure**: split `SBP_DBP` into `SBP`/`DBP`
//! 8. **Heart rate**: null out-of-range values
//! 9. **Summary**: max/min/mean heart rate
//!
//! Every stage is fatal on error; there is no recovery or retry.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use patvis_ingest::{read_patient_records, read_visit_records};
use patvis_transform::{
    HeartRateSummary, cross_tab, heart_rate_summary, join_on_patno, normalize_visit_dates,
    null_out_of_range_heart_rate, project_by_name_and_index, sample_rows, sort_by_column,
    split_blood_pressure, unique_values, uppercase_genders, value_counts, visit_date_diffs,
    with_gender_clean,
};

/// Fixed name of the patient table file.
pub const PATIENT_DATA_FILE: &str = "PatientDATA1.txt";

/// Fixed name of the visit table file.
pub const VISIT_DATA_FILE: &str = "PatientDATA2.txt";

/// The visit date column.
pub const VISIT_COLUMN: &str = "VISIT";

/// The raw gender column.
pub const GENDER_COLUMN: &str = "GENDER";

/// The adverse-event column.
pub const AE_COLUMN: &str = "AE";

/// Columns of the projection consistency check, by name.
pub const PROJECTION_COLUMNS: [&str; 4] = ["PATNO", "GENDER", "HR", "VISIT"];

/// The positions those columns are expected to occupy in the joined frame.
pub const PROJECTION_INDICES: [usize; 4] = [0, 1, 2, 6];

/// Number of rows drawn for the random-sample view.
pub const SAMPLE_SIZE: usize = 3;

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct CleanResult {
    /// The cleaned table.
    pub cleaned: DataFrame,
    /// Heart-rate statistics, `None` when every value was nulled.
    pub heart_rate: Option<HeartRateSummary>,
    /// Row count of the patient table.
    pub patient_rows: usize,
    /// Row count of the visit table.
    pub visit_rows: usize,
    /// Row count after the inner join.
    pub joined_rows: usize,
}

/// Runs the full cleaning pipeline against `PatientDATA1.txt` and
/// `PatientDATA2.txt` in `data_dir`.
///
/// # Errors
///
/// Any load, format, or schema failure aborts the run; the underlying
/// error is propagated with the stage it occurred in.
pub fn run_clean(data_dir: &Path) -> Result<CleanResult> {
    let (patients, visits) = {
        let _span = info_span!("load").entered();
        let patients = read_patient_records(&data_dir.join(PATIENT_DATA_FILE))
            .context("load patient table")?;
        let visits =
            read_visit_records(&data_dir.join(VISIT_DATA_FILE)).context("load visit table")?;
        info!(
            patient_rows = patients.height(),
            visit_rows = visits.height(),
            "tables loaded"
        );
        (patients, visits)
    };

    let visits = {
        let _span = info_span!("dates").entered();
        let visits =
            normalize_visit_dates(&visits, VISIT_COLUMN).context("normalize visit dates")?;
        let diffs = visit_date_diffs(&visits, VISIT_COLUMN).context("visit date diffs")?;
        debug!(?diffs, "day deltas between consecutive visits");
        visits
    };

    let joined = {
        let _span = info_span!("join").entered();
        join_on_patno(&patients, &visits).context("inner join on PATNO")?
    };

    {
        let _span = info_span!("projection_check").entered();
        let projected =
            project_by_name_and_index(&joined, &PROJECTION_COLUMNS, &PROJECTION_INDICES)
                .context("projection consistency check")?;
        debug!(columns = ?projected.get_column_names_str(), "projection agrees by name and index");
    }

    {
        let _span = info_span!("views").entered();
        let ae_counts = value_counts(&joined, AE_COLUMN).context("AE value counts")?;
        debug!(view = %ae_counts, "AE value counts");
        let ae_by_gender =
            cross_tab(&joined, AE_COLUMN, GENDER_COLUMN).context("AE x GENDER crosstab")?;
        debug!(view = %ae_by_gender, "AE x GENDER crosstab");
        // Seedless draw; not reproducible across runs.
        let sample = sample_rows(&joined, SAMPLE_SIZE, None).context("random sample")?;
        debug!(view = %sample, "random sample of {SAMPLE_SIZE} rows");
        let by_hr = sort_by_column(&joined, "HR").context("sort by HR")?;
        debug!(view = %by_hr, "sorted by HR ascending");
        let by_visit = sort_by_column(&joined, VISIT_COLUMN).context("sort by VISIT")?;
        debug!(view = %by_visit, "sorted by VISIT ascending");
    }

    let cleaned = {
        let _span = info_span!("gender").entered();
        let upper = uppercase_genders(&joined, GENDER_COLUMN).context("uppercase genders")?;
        debug!(?upper, "uppercased raw gender labels");
        let raw = unique_values(&joined, GENDER_COLUMN).context("unique raw genders")?;
        let cleaned = with_gender_clean(&joined, GENDER_COLUMN).context("derive GENDER_CLEAN")?;
        let normalized = unique_values(&cleaned, patvis_transform::GENDER_CLEAN_COLUMN)
            .context("unique clean genders")?;
        debug!(?raw, ?normalized, "gender labels before and after normalization");
        cleaned
    };

    let cleaned = {
        let _span = info_span!("blood_pressure").entered();
        split_blood_pressure(&cleaned).context("split SBP_DBP")?
    };

    let cleaned = {
        let _span = info_span!("heart_rate").entered();
        null_out_of_range_heart_rate(&cleaned).context("null out-of-range heart rates")?
    };

    let heart_rate = heart_rate_summary(&cleaned).context("heart rate summary")?;

    info!(
        rows = cleaned.height(),
        columns = cleaned.width(),
        "pipeline complete"
    );

    Ok(CleanResult {
        patient_rows: patients.height(),
        visit_rows: visits.height(),
        joined_rows: joined.height(),
        cleaned,
        heart_rate,
    })
}
