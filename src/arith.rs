use chrono::{Days, Local};

use crate::{CalendarDate, DateSpan, IntDate, InvalidDateError, decode, encode_naive};

/// Days from `left` to `right`; negative when `right` is earlier.
///
/// # Errors
/// Returns `InvalidDateError` if either value is not a real date.
pub fn day_difference(left: IntDate, right: IntDate) -> Result<i64, InvalidDateError> {
    let left_date = decode(left)?;
    let right_date = decode(right)?;
    Ok((*right_date - *left_date).num_days())
}

/// Weekdays between two dates, both ends included.
///
/// The count always runs from the earlier date to the later one. It is
/// negated when `left > right` comparing the raw integers.
///
/// # Errors
/// Returns `InvalidDateError` if either value is not a real date.
pub fn business_day_difference(left: IntDate, right: IntDate) -> Result<i64, InvalidDateError> {
    let count = DateSpan::from_ints(left, right)?.business_days();
    Ok(if left > right { -count } else { count })
}

/// Moves `int_date` by `delta_days` (negative moves into the past).
///
/// # Errors
/// Returns `InvalidDateError` if `int_date` is not a real date, or
/// `OutOfRange` if the result falls outside years 1..=9999.
pub fn add_days(int_date: IntDate, delta_days: i64) -> Result<IntDate, InvalidDateError> {
    let date = decode(int_date)?;
    let magnitude = Days::new(delta_days.unsigned_abs());
    let shifted = if delta_days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };

    let out_of_range = || InvalidDateError::OutOfRange {
        date:  int_date,
        delta: delta_days,
    };
    let result = CalendarDate::try_from(shifted.ok_or_else(out_of_range)?)
        .map_err(|_| out_of_range())?
        .to_int();

    log::trace!("{int_date} {delta_days:+} days = {result}");
    Ok(result)
}

/// Today's date on the local system clock.
pub fn today() -> IntDate {
    encode_naive(Local::now().date_naive())
}
