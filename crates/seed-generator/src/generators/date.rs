//! Date value generators.

use crate::error::GeneratorError;
use chrono::{Days, NaiveDate};
use rand::Rng;

/// Generate a random date in the given closed interval.
pub fn date_range<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<NaiveDate, GeneratorError> {
    if start > end {
        return Err(GeneratorError::InvalidRange(format!(
            "date range [{start}, {end}] is empty"
        )));
    }

    let span = (end - start).num_days() as u64;
    let offset = rng.random_range(0..=span);
    start.checked_add_days(Days::new(offset)).ok_or_else(|| {
        GeneratorError::InvalidRange(format!("{start} + {offset} days overflows"))
    })
}

/// The closed window of `days` days ending at `end`.
pub fn trailing_window(end: NaiveDate, days: u64) -> Result<(NaiveDate, NaiveDate), GeneratorError> {
    let start = end.checked_sub_days(Days::new(days)).ok_or_else(|| {
        GeneratorError::InvalidRange(format!("{end} - {days} days underflows"))
    })?;
    Ok((start, end))
}
