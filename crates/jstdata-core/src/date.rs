//! Length-keyed date shorthand accepted by `--start` / `--end`.
//!
//! This is deliberately not calendar parsing: any string of an accepted
//! length is taken at face value and left for the provider to reject.

use crate::ValidationError;

/// Shape of a partial date, decided by input length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpec {
    /// `YYYY`
    Year,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY-MM-DD`
    FullDate,
    /// 11-character unix timestamp, forwarded verbatim.
    Timestamp,
}

impl DateSpec {
    pub fn classify(input: &str) -> Result<Self, ValidationError> {
        match input.chars().count() {
            4 => Ok(Self::Year),
            7 => Ok(Self::YearMonth),
            10 => Ok(Self::FullDate),
            11 => Ok(Self::Timestamp),
            _ => Err(ValidationError::InvalidDateFormat {
                value: input.to_owned(),
            }),
        }
    }
}

/// Expand `input` to `YYYY-MM-DD`, or pass it through when already full or a timestamp.
pub fn normalize_date(input: &str) -> Result<String, ValidationError> {
    Ok(match DateSpec::classify(input)? {
        DateSpec::Year => format!("{input}-01-01"),
        DateSpec::YearMonth => format!("{input}-01"),
        DateSpec::FullDate | DateSpec::Timestamp => input.to_owned(),
    })
}
