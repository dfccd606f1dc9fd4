//! Patient visit data cleaning transformations.
//!
//! This crate holds the logic of the cleaning pipeline:
//!
//! - **dates**: strict `DD-MM-YYYY` parsing of the `VISIT` column
//! - **join**: inner join of patient and visit records on `PATNO`
//! - **views**: descriptive views and the name-vs-index projection check
//! - **gender**: exact-match gender label normalization
//! - **blood_pressure**: `SBP_DBP` composite split into `SBP`/`DBP`
//! - **heart_rate**: plausibility nulling and summary statistics
//! - **values**: AnyValue display helpers

pub mod blood_pressure;
pub mod dates;
mod error;
pub mod gender;
pub mod heart_rate;
pub mod join;
pub mod values;
pub mod views;

pub use blood_pressure::{
    DBP_COLUMN, SBP_COLUMN, SBP_DBP_COLUMN, split_blood_pressure, split_composite,
};
pub use dates::{
    VISIT_DATE_FORMAT, normalize_visit_dates, parse_visit_date, visit_date_diffs, visit_dates,
};
pub use error::{Result, TransformError};
pub use gender::{GENDER_CLEAN_COLUMN, normalize_gender, uppercase_genders, with_gender_clean};
pub use heart_rate::{
    HR_COLUMN, HR_MAX, HR_MIN, HeartRateSummary, heart_rate_summary, null_out_of_range_heart_rate,
};
pub use join::{JOIN_KEY, join_on_patno};
pub use values::{any_to_string, format_numeric};
pub use views::{
    cross_tab, project_by_name_and_index, sample_rows, sort_by_column, unique_values, value_counts,
};
