mod consts;
pub mod generator;
mod prelude;
mod types;
mod weekday;
mod year_week;

pub use consts::*;
pub use generator::{Assertion, GenerateError, Probe, ProbeSet, generate};
pub use types::{Day, Month, Week, Year, day_of_year, days_in_month, is_leap_year};
pub use weekday::{Weekday, days_from_civil};
pub use year_week::{YearWeek, weeks_in_year};

use crate::prelude::*;
use std::str::FromStr;

/// A validated proleptic Gregorian calendar date.
///
/// Ordering is chronological because the fields compare in year, month, day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid week {week} for ISO year {year}")]
    InvalidWeek { year: u16, week: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the `DateError` of the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Creates a date from already validated components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is past the end of that month,
    /// since `Day` alone is only checked against its lower bound.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        Self::new(year.get(), month.get(), day.get())
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Ordinal day within the year, 1-based.
    pub const fn day_of_year(&self) -> u16 {
        day_of_year(self.year(), self.month(), self.day())
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::of(self.year(), self.month(), self.day())
    }

    /// Days since 1970-01-01 (negative before it).
    pub const fn days_from_civil(&self) -> i64 {
        days_from_civil(self.year(), self.month(), self.day())
    }

    /// ISO-8601 week-numbering year and week of this date.
    ///
    /// A week belongs to the year its Thursday falls in. 0001-01-01 is a
    /// Monday and 9999-12-31 is a Friday, so no date's Thursday leaves
    /// `1..=MAX_YEAR` and the clamping constructors never clamp.
    pub fn week(&self) -> YearWeek {
        let (iso_year, iso_week) = self.iso_week_parts();
        YearWeek::from_parts(Year::saturating_new(iso_year), Week::saturating_new(iso_week))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn iso_week_parts(&self) -> (u16, u8) {
        let year = self.year();
        let offset_to_thursday = i32::from(Weekday::Thursday.index_from_monday())
            - i32::from(self.weekday().index_from_monday());
        let mut thursday = i32::from(self.day_of_year()) + offset_to_thursday;
        let mut iso_year = year;

        if thursday < 1 {
            iso_year = year - 1;
            thursday += i32::from(days_in_year(iso_year));
        } else if thursday > i32::from(days_in_year(year)) {
            thursday -= i32::from(days_in_year(year));
            iso_year = year + 1;
        }

        let week = (thursday - 1) / i32::from(DAYS_PER_WEEK) + 1;
        (iso_year, week as u8)
    }
}

const fn days_in_year(year: u16) -> u16 {
    day_of_year(year, DECEMBER, DAYS_IN_MONTH[DECEMBER as usize])
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses the ISO extended calendar form `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected 2 {} separators, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            )));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;
        Self::new(year, month, day)
    }
}

impl CalendarDate {
    fn parse_u16(s: &str) -> Result<u16, DateError> {
        s.parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
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
