/// Smallest year an IntDate can carry
pub const MIN_YEAR: u32 = 1;
/// Largest year an IntDate can carry (four decimal digits)
pub const MAX_YEAR: u32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// Multiplier of the year component: `YYYY * 10000`
pub const YEAR_FACTOR: u32 = 10_000;
/// Multiplier of the month component: `MM * 100`
pub const MONTH_FACTOR: u32 = 100;

/// Number of digits in a compact `YYYYMMDD` token
pub const COMPACT_DIGITS: usize = 8;
/// Number of digits in the year field of a separated date
pub const YEAR_DIGITS: usize = 4;
/// Maximum number of digits in the month or day field of a separated date
pub const FIELD_MAX_DIGITS: usize = 2;

/// Separator of the ISO style `YYYY-MM-DD`
pub const DATE_SEPARATOR: char = '-';
/// Separator of the slash style `YYYY/MM/DD`
pub const SLASH_SEPARATOR: char = '/';

/// Days in a week
pub(crate) const DAYS_PER_WEEK: i64 = 7;
/// Monday through Friday
pub(crate) const BUSINESS_DAYS_PER_WEEK: i64 = 5;
