//! Fast, unchecked component tests.
//!
//! These helpers read the year, month and day straight out of the digits of
//! an [`IntDate`] with integer arithmetic. They never validate: a value such
//! as `20151340` reports month 13 and day 40 instead of failing. Use
//! [`crate::decode`] first when the input is not already known to be good.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use std::ops::RangeInclusive;

use crate::IntDate;
use crate::consts::{MONTH_FACTOR, YEAR_FACTOR};

/// Acceptable values for a date component: a single bare value or any
/// collection of them.
pub trait Candidates {
    fn contains_value(&self, value: u32) -> bool;
}

impl Candidates for u32 {
    fn contains_value(&self, value: u32) -> bool {
        *self == value
    }
}

impl Candidates for [u32] {
    fn contains_value(&self, value: u32) -> bool {
        self.contains(&value)
    }
}

impl<const N: usize> Candidates for [u32; N] {
    fn contains_value(&self, value: u32) -> bool {
        self.contains(&value)
    }
}

impl Candidates for Vec<u32> {
    fn contains_value(&self, value: u32) -> bool {
        self.contains(&value)
    }
}

impl Candidates for RangeInclusive<u32> {
    fn contains_value(&self, value: u32) -> bool {
        self.contains(&value)
    }
}

impl Candidates for BTreeSet<u32> {
    fn contains_value(&self, value: u32) -> bool {
        self.contains(&value)
    }
}

impl<S: BuildHasher> Candidates for HashSet<u32, S> {
    fn contains_value(&self, value: u32) -> bool {
        self.contains(&value)
    }
}

impl<T: Candidates + ?Sized> Candidates for &T {
    fn contains_value(&self, value: u32) -> bool {
        (**self).contains_value(value)
    }
}

/// Whether the year digits of `int_date` are among `years`.
pub fn in_year(int_date: IntDate, years: impl Candidates) -> bool {
    years.contains_value(int_date / YEAR_FACTOR)
}

/// Whether the month digits of `int_date` are among `months`.
pub fn in_month(int_date: IntDate, months: impl Candidates) -> bool {
    months.contains_value(int_date % YEAR_FACTOR / MONTH_FACTOR)
}

/// Whether the day-of-month digits of `int_date` are among `days`.
pub fn in_day_of_month(int_date: IntDate, days: impl Candidates) -> bool {
    days.contains_value(int_date % MONTH_FACTOR)
}
