/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days before the first of each month in a non-leap year (1-indexed)
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar
pub(crate) const DAYS_TO_UNIX_EPOCH: i64 = 719_468;

pub const DAYS_PER_WEEK: u8 = 7;

/// First ISO week of a week-numbering year
pub const MIN_WEEK: u8 = 1;
/// Last possible ISO week; only long years reach it
pub const MAX_WEEK: u8 = 53;
/// Weeks in an ISO year that does not have a 53rd week
pub const WEEKS_IN_SHORT_YEAR: u8 = 52;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Designator preceding the week number in `YYYY-Www`
pub const WEEK_DESIGNATOR: char = 'W';

/// First calendar year sampled by the generator
pub const FIRST_PROBE_YEAR: u16 = 1990;
/// Last calendar year sampled by the generator (inclusive)
pub const LAST_PROBE_YEAR: u16 = 2029;
/// January days probed per year
pub const JANUARY_PROBE_DAYS: [u8; 4] = [1, 2, 3, 4];
/// December days probed per year
pub const DECEMBER_PROBE_DAYS: [u8; 4] = [28, 29, 30, 31];
