use serde::{Deserialize, Serialize};

use crate::consts::{BUSINESS_DAYS_PER_WEEK, DAYS_PER_WEEK};
use crate::{CalendarDate, IntDate, InvalidDateError, decode, prelude::*};

/// An inclusive range of calendar dates.
/// The start date is never after the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}..={end}")]
#[serde(try_from = "RawSpan")]
pub struct DateSpan {
    start: CalendarDate,
    end:   CalendarDate,
}

#[derive(Deserialize)]
struct RawSpan {
    start: CalendarDate,
    end:   CalendarDate,
}

impl TryFrom<RawSpan> for DateSpan {
    type Error = InvalidDateError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateSpan {
    /// Creates a new span with validation.
    ///
    /// # Errors
    /// Returns `InvalidDateError::ReversedSpan` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, InvalidDateError> {
        if start > end {
            return Err(InvalidDateError::ReversedSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the span covering both dates, whichever order they come in.
    pub fn between(a: CalendarDate, b: CalendarDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Decodes two IntDates and spans them.
    ///
    /// # Errors
    /// Returns `InvalidDateError` if either value is not a real date.
    pub fn from_ints(left: IntDate, right: IntDate) -> Result<Self, InvalidDateError> {
        Ok(Self::between(decode(left)?, decode(right)?))
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of dates in the span, counting both ends.
    pub fn len_days(&self) -> i64 {
        (*self.end - *self.start).num_days() + 1
    }

    /// Number of Monday-to-Friday dates in the span, counting both ends.
    pub fn business_days(&self) -> i64 {
        let total = self.len_days();
        let first = i64::from(self.start.weekday().num_days_from_monday());
        let partial_week = (0..total % DAYS_PER_WEEK)
            .filter(|&offset| (first + offset) % DAYS_PER_WEEK < BUSINESS_DAYS_PER_WEEK)
            .count() as i64;
        let count = total / DAYS_PER_WEEK * BUSINESS_DAYS_PER_WEEK + partial_week;

        log::trace!("{count} business days in {}", self);
        count
    }

    /// Every date in the span, in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let end = self.end;
        self.start
            .iter_days()
            .take_while(move |date| *date <= *end)
            .map(CalendarDate)
    }
}
