use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde::{Serialize, Serializer};

use crate::{CalendarDate, IntDate, InvalidDateError};

/// Any of the loosely typed inputs that [`normalize`] understands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateValue {
    /// No date. Normalizes to `None`.
    #[default]
    Absent,
    /// An IntDate that is trusted as-is.
    Integer(IntDate),
    /// `YYYY-MM-DD` or `YYYY/MM/DD`.
    Text(String),
    Calendar(CalendarDate),
}

/// Converts a loosely typed date into its `YYYYMMDD` integer.
///
/// Integers pass through untouched and are NOT validated; strings must use a
/// single separator style; `Absent` stays `None`.
///
/// # Errors
/// Returns `InvalidDateError` if a string has no recognized separator or
/// does not parse as a real date.
pub fn normalize(value: impl Into<DateValue>) -> Result<Option<IntDate>, InvalidDateError> {
    match value.into() {
        DateValue::Absent => Ok(None),
        DateValue::Integer(int_date) => Ok(Some(int_date)),
        DateValue::Text(text) => text.parse::<CalendarDate>().map(|date| Some(date.to_int())),
        DateValue::Calendar(date) => Ok(Some(date.to_int())),
    }
}

impl From<IntDate> for DateValue {
    fn from(value: IntDate) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<CalendarDate> for DateValue {
    fn from(value: CalendarDate) -> Self {
        Self::Calendar(value)
    }
}

impl<T: Into<DateValue>> From<Option<T>> for DateValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Integer(int_date) => serializer.serialize_u32(*int_date),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Calendar(date) => date.serialize(serializer),
        }
    }
}

/// Accepts null, a non-negative integer that fits an IntDate, or a string.
/// Every other type (bool, float, sequence, map) is rejected.
impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DateValueVisitor)
    }
}

struct DateValueVisitor;

impl<'de> Visitor<'de> for DateValueVisitor {
    type Value = DateValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer date, a date string or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DateValue::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DateValue::Absent)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        IntDate::try_from(v)
            .map(DateValue::Integer)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        IntDate::try_from(v)
            .map(DateValue::Integer)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(DateValue::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(DateValue::Text(v))
    }
}
