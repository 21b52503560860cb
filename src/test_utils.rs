//! Shorthand constructors for tests.

use crate::CalendarDate;

pub fn cal(year: u32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date should be valid")
}
