//! Calendar dates encoded as `YYYYMMDD` integers.
//!
//! An [`IntDate`] is a plain `u32` such as `20150130`. The validating path
//! ([`decode`], [`normalize`], the day arithmetic) turns it into a
//! [`CalendarDate`] and back; the membership helpers ([`in_year`],
//! [`in_month`], [`in_day_of_month`]) read the digits directly and never
//! validate.

mod arith;
mod consts;
mod membership;
mod prelude;
mod span;
mod value;

#[cfg(test)]
mod test_utils;

pub use arith::{add_days, business_day_difference, day_difference, today};
pub use consts::*;
pub use membership::{Candidates, in_day_of_month, in_month, in_year};
pub use span::DateSpan;
pub use value::{DateValue, normalize};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate, Weekday};
use std::str::FromStr;

/// A date encoded as `year * 10000 + month * 100 + day`.
pub type IntDate = u32;

/// A validated calendar date with a year in `MIN_YEAR..=MAX_YEAR`.
///
/// Derefs to [`NaiveDate`], so `year()`, `month()` and the rest of
/// [`Datelike`] are available directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into)]
pub struct CalendarDate(NaiveDate);

/// Error returned whenever an input cannot be turned into a real date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDateError {
    /// Input is not an 8-digit `YYYYMMDD` numeral.
    #[error("Not a compact YYYYMMDD date: {0}")]
    NotCompact(String),

    /// Input string has neither `-` nor `/`.
    #[error("No date separator found (expected '{hyphen}' or '{slash}'): {0}", hyphen = DATE_SEPARATOR, slash = SLASH_SEPARATOR)]
    MissingSeparator(String),

    /// Input string does not parse under the separator it contains.
    #[error("Cannot parse {input} as YYYY{separator}MM{separator}DD")]
    Malformed { input: String, separator: char },

    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u32),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u32),

    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u32, month: u32, day: u32 },

    /// Day arithmetic left the representable year range.
    #[error("Date out of range: {date} {delta:+} days")]
    OutOfRange { date: IntDate, delta: i64 },

    /// Span whose start comes after its end.
    #[error("Invalid date span: start ({start}) is after end ({end})")]
    ReversedSpan { start: CalendarDate, end: CalendarDate },
}

/// Input accepted by [`decode`]: an integer or a string of 8 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactDate<'a> {
    Int(IntDate),
    Digits(&'a str),
}

impl From<IntDate> for CompactDate<'_> {
    fn from(value: IntDate) -> Self {
        Self::Int(value)
    }
}

impl<'a> From<&'a str> for CompactDate<'a> {
    fn from(value: &'a str) -> Self {
        Self::Digits(value)
    }
}

impl<'a> From<&'a String> for CompactDate<'a> {
    fn from(value: &'a String) -> Self {
        Self::Digits(value.as_str())
    }
}

/// Decodes an IntDate (integer or digit string) into a calendar date.
///
/// Strings must be exactly 8 digits. Integers are split by place value
/// instead, so years below 1000 decode from fewer digits (`10101` is
/// 0001-01-01). This keeps `decode(encode(d)) == d` for every
/// [`CalendarDate`].
///
/// # Errors
/// Returns `InvalidDateError` if the token is not 8 digits or the digits do
/// not name a real date, e.g. `20150230`.
pub fn decode<'a>(value: impl Into<CompactDate<'a>>) -> Result<CalendarDate, InvalidDateError> {
    match value.into() {
        CompactDate::Int(int_date) => CalendarDate::from_int(int_date),
        CompactDate::Digits(digits) => CalendarDate::from_compact(digits),
    }
}

/// Encodes a calendar date as `YYYYMMDD`.
pub fn encode(date: CalendarDate) -> IntDate {
    date.to_int()
}

impl CalendarDate {
    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` for the first
    /// component that is out of range.
    pub fn new(year: u32, month: u32, day: u32) -> Result<Self, InvalidDateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(InvalidDateError::InvalidYear(year));
        }
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(InvalidDateError::InvalidMonth(month));
        }
        let signed_year = i32::try_from(year).map_err(|_| InvalidDateError::InvalidYear(year))?;
        NaiveDate::from_ymd_opt(signed_year, month, day)
            .map(Self)
            .ok_or(InvalidDateError::InvalidDay { year, month, day })
    }

    /// Splits an IntDate into its digits and validates them.
    /// Values shorter than 8 digits are read as years below 1000.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if the digits do not form a real date.
    pub fn from_int(value: IntDate) -> Result<Self, InvalidDateError> {
        let year = value / YEAR_FACTOR;
        let month = value / MONTH_FACTOR % MONTH_FACTOR;
        let day = value % MONTH_FACTOR;
        Self::new(year, month, day).inspect_err(|err| log::debug!("rejected int date {value}: {err}"))
    }

    /// Parses a compact `YYYYMMDD` string. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `NotCompact` unless the input is exactly 8 ASCII digits, then
    /// validates like [`CalendarDate::from_int`].
    pub fn from_compact(s: &str) -> Result<Self, InvalidDateError> {
        let trimmed = s.trim();
        if trimmed.len() != COMPACT_DIGITS || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            log::debug!("rejected compact date {s:?}");
            return Err(InvalidDateError::NotCompact(s.to_owned()));
        }
        let value = trimmed
            .parse::<IntDate>()
            .map_err(|_| InvalidDateError::NotCompact(s.to_owned()))?;
        Self::from_int(value)
    }

    /// Returns the `YYYYMMDD` encoding of this date.
    pub fn to_int(self) -> IntDate {
        encode_naive(self.0)
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Monday through Friday. Holidays are not considered.
    pub fn is_business_day(self) -> bool {
        !matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Parses one `YYYY?MM?DD` token, where the year has exactly four digits
    /// and month and day have one or two.
    fn parse_separated(s: &str, trimmed: &str, separator: char) -> Result<Self, InvalidDateError> {
        let malformed = || InvalidDateError::Malformed {
            input: s.to_owned(),
            separator,
        };

        let parts: Vec<&str> = trimmed.split(separator).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(malformed());
        };

        let year = parse_field(year, YEAR_DIGITS, YEAR_DIGITS).ok_or_else(malformed)?;
        let month = parse_field(month, 1, FIELD_MAX_DIGITS).ok_or_else(malformed)?;
        let day = parse_field(day, 1, FIELD_MAX_DIGITS).ok_or_else(malformed)?;

        Self::new(year, month, day)
    }
}

pub(crate) fn encode_naive(date: NaiveDate) -> IntDate {
    date.year().unsigned_abs() * YEAR_FACTOR + date.month() * MONTH_FACTOR + date.day()
}

fn parse_field(field: &str, min_digits: usize, max_digits: usize) -> Option<u32> {
    let well_formed =
        (min_digits..=max_digits).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit());
    if well_formed { field.parse().ok() } else { None }
}

impl FromStr for CalendarDate {
    type Err = InvalidDateError;

    /// Parses `YYYY-MM-DD` or `YYYY/MM/DD`. A hyphen wins when both
    /// separators are present, so mixed input fails to parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator = if trimmed.contains(DATE_SEPARATOR) {
            DATE_SEPARATOR
        } else if trimmed.contains(SLASH_SEPARATOR) {
            SLASH_SEPARATOR
        } else {
            log::debug!("rejected date string without separator: {s:?}");
            return Err(InvalidDateError::MissingSeparator(s.to_owned()));
        };

        Self::parse_separated(s, trimmed, separator)
            .inspect_err(|err| log::debug!("rejected date string {s:?}: {err}"))
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = InvalidDateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u32::try_from(date.year()).unwrap_or(0);
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(InvalidDateError::InvalidYear(year));
        }
        Ok(Self(date))
    }
}

impl TryFrom<IntDate> for CalendarDate {
    type Error = InvalidDateError;

    fn try_from(value: IntDate) -> Result<Self, Self::Error> {
        Self::from_int(value)
    }
}

impl From<CalendarDate> for IntDate {
    fn from(date: CalendarDate) -> Self {
        date.to_int()
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
