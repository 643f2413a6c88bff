use crate::consts::{DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_WEEK, DAYS_TO_UNIX_EPOCH, MAX_MONTH};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week, ordered the ISO way (Monday first).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Weekday for a zero-based index where Monday is 0. Wraps modulo 7.
    pub const fn from_monday_index(index: u8) -> Self {
        Self::ALL[(index % DAYS_PER_WEEK) as usize]
    }

    /// Zero-based index where Monday is 0 and Sunday is 6.
    pub const fn index_from_monday(self) -> u8 {
        self as u8
    }

    /// ISO-8601 weekday number: Monday is 1, Sunday is 7.
    pub const fn number_from_monday(self) -> u8 {
        self.index_from_monday() + 1
    }

    /// Weekday of a proleptic Gregorian date. The components are not validated.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn of(year: u16, month: u8, day: u8) -> Self {
        // 1970-01-01 was a Thursday
        let days = days_from_civil(year, month, day) + Self::Thursday as i64;
        Self::from_monday_index(days.rem_euclid(DAYS_PER_WEEK as i64) as u8)
    }
}

/// Days between 1970-01-01 and the given proleptic Gregorian date (negative before).
///
/// Counts from a March-based year so the leap day falls at the end of the
/// counted year, which keeps the month offset formula leap-agnostic.
pub const fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let m = month as i64;
    let shifted_month = if m > 2 { m - 3 } else { m + 9 };
    let day_of_shifted_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era =
        year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_shifted_year;
    era * DAYS_PER_GREGORIAN_CYCLE + day_of_era - DAYS_TO_UNIX_EPOCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_from_civil_epoch() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1970, 1, 2), 1);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(days_from_civil(1, 1, 1), -719_162);
    }

    #[test]
    fn test_days_from_civil_is_contiguous() {
        // Consecutive dates across month and leap boundaries differ by one
        let pairs = [
            ((2024, 2, 28), (2024, 2, 29)),
            ((2024, 2, 29), (2024, 3, 1)),
            ((2023, 2, 28), (2023, 3, 1)),
            ((1999, 12, 31), (2000, 1, 1)),
        ];
        for ((y1, m1, d1), (y2, m2, d2)) in pairs {
            assert_eq!(
                days_from_civil(y2, m2, d2) - days_from_civil(y1, m1, d1),
                1,
                "{y1}-{m1}-{d1} -> {y2}-{m2}-{d2}"
            );
        }
    }

    #[test]
    fn test_weekday_of_known_dates() {
        let cases = [
            ((1970, 1, 1), Weekday::Thursday),
            ((1990, 1, 1), Weekday::Monday),
            ((1999, 12, 31), Weekday::Friday),
            ((2000, 1, 1), Weekday::Saturday),
            ((2007, 1, 1), Weekday::Monday),
            ((2024, 2, 29), Weekday::Thursday),
            ((1, 1, 1), Weekday::Monday),
        ];
        for ((y, m, d), expected) in cases {
            assert_eq!(Weekday::of(y, m, d), expected, "{y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday_numbering() {
        assert_eq!(Weekday::Monday.number_from_monday(), 1);
        assert_eq!(Weekday::Sunday.number_from_monday(), 7);
        assert_eq!(Weekday::Thursday.index_from_monday(), 3);
        assert_eq!(Weekday::from_monday_index(6), Weekday::Sunday);
        assert_eq!(Weekday::from_monday_index(7), Weekday::Monday);
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }
}
