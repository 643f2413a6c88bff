use std::str::FromStr;

use crate::{
    DATE_SEPARATOR, DateError, JANUARY, MAX_WEEK, MIN_DAY, WEEK_DESIGNATOR, WEEKS_IN_SHORT_YEAR,
    Week, Weekday, Year, is_leap_year, prelude::*,
};

/// An ISO-8601 week-numbering year and week.
///
/// Weeks start on Monday and week 1 is the week holding the year's first
/// Thursday, so `year` can differ from the calendar year of the dates it
/// covers near January 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}{}{}{:02}", "year.get()", DATE_SEPARATOR, WEEK_DESIGNATOR, "week.get()")]
pub struct YearWeek {
    year: Year,
    week: Week,
}

impl YearWeek {
    /// Creates a year-week, checking that the week exists in that ISO year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for a year outside `1..=MAX_YEAR`, and
    /// `DateError::InvalidWeek` for week 0, a week above 53, or week 53 of a
    /// 52-week year.
    pub fn new(year: u16, week: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let invalid = DateError::InvalidWeek {
            year: year.get(),
            week,
        };
        let week = Week::new(week).map_err(|_| invalid.clone())?;
        if week.get() > weeks_in_year(year.get()) {
            return Err(invalid);
        }
        Ok(Self { year, week })
    }

    /// Pairs an already validated year and week without re-checking week 53.
    pub(crate) const fn from_parts(year: Year, week: Week) -> Self {
        Self { year, week }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn week(&self) -> u8 {
        self.week.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn week_typed(&self) -> Week {
        self.week
    }
}

/// Number of ISO weeks in a week-numbering year: 52, or 53 for long years.
///
/// A year is long when January 1st is a Thursday, or when it is a leap year
/// starting on a Wednesday.
pub const fn weeks_in_year(year: u16) -> u8 {
    match Weekday::of(year, JANUARY, MIN_DAY) {
        Weekday::Thursday => MAX_WEEK,
        Weekday::Wednesday if is_leap_year(year) => MAX_WEEK,
        _ => WEEKS_IN_SHORT_YEAR,
    }
}

impl FromStr for YearWeek {
    type Err = DateError;

    /// Parses the ISO extended week form `YYYY-Www`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let invalid = || DateError::InvalidFormat(trimmed.to_owned());
        let (year, week) = trimmed.split_once(DATE_SEPARATOR).ok_or_else(invalid)?;
        let week = week.strip_prefix(WEEK_DESIGNATOR).ok_or_else(invalid)?;

        let year = year.parse::<u16>().map_err(|_| invalid())?;
        let week = week.parse::<u8>().map_err(|_| invalid())?;
        Self::new(year, week)
    }
}

impl serde::Serialize for YearWeek {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for YearWeek {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let yw = YearWeek::new(1990, 1).unwrap();
        assert_eq!(yw.year(), 1990);
        assert_eq!(yw.week(), 1);
        assert_eq!(yw.year_typed(), Year::new(1990).unwrap());
        assert_eq!(yw.week_typed(), Week::new(1).unwrap());

        // 1992 starts on a Wednesday and is a leap year
        assert!(YearWeek::new(1992, 53).is_ok());
    }

    #[test]
    fn test_new_rejects_missing_week_53() {
        let result = YearWeek::new(1990, 53);
        assert!(matches!(
            result,
            Err(DateError::InvalidWeek {
                year: 1990,
                week: 53
            })
        ));
    }

    #[test]
    fn test_new_invalid() {
        assert!(matches!(
            YearWeek::new(2020, 0),
            Err(DateError::InvalidWeek { year: 2020, week: 0 })
        ));
        assert!(matches!(
            YearWeek::new(2020, 54),
            Err(DateError::InvalidWeek { .. })
        ));
        assert!(matches!(
            YearWeek::new(0, 1),
            Err(DateError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_weeks_in_year() {
        struct TestCase {
            year: u16,
            weeks: u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 1998,
                weeks: 53,
                description: "starts on Thursday",
            },
            TestCase {
                year: 2015,
                weeks: 53,
                description: "starts on Thursday",
            },
            TestCase {
                year: 2020,
                weeks: 53,
                description: "leap year starting on Wednesday",
            },
            TestCase {
                year: 2014,
                weeks: 52,
                description: "starts on Wednesday, not leap",
            },
            TestCase {
                year: 2021,
                weeks: 52,
                description: "starts on Friday",
            },
            TestCase {
                year: 2026,
                weeks: 53,
                description: "starts on Thursday",
            },
        ];

        for case in &cases {
            assert_eq!(
                weeks_in_year(case.year),
                case.weeks,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(YearWeek::new(1990, 1).unwrap().to_string(), "1990-W01");
        assert_eq!(YearWeek::new(2020, 53).unwrap().to_string(), "2020-W53");
        assert_eq!(YearWeek::new(5, 10).unwrap().to_string(), "0005-W10");
    }

    #[test]
    fn test_parse() {
        let yw: YearWeek = "2004-W53".parse().unwrap();
        assert_eq!((yw.year(), yw.week()), (2004, 53));

        assert!(matches!(
            "".parse::<YearWeek>(),
            Err(DateError::EmptyInput)
        ));
        assert!(matches!(
            "2004-53".parse::<YearWeek>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2004W53".parse::<YearWeek>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2005-W53".parse::<YearWeek>(),
            Err(DateError::InvalidWeek { .. })
        ));
    }

    #[test]
    fn test_ordering() {
        let late = YearWeek::new(1992, 53).unwrap();
        let early = YearWeek::new(1993, 1).unwrap();
        assert!(late < early);
        assert!(YearWeek::new(1993, 1).unwrap() < YearWeek::new(1993, 2).unwrap());
    }

    #[test]
    fn test_serde_string_format() {
        let yw = YearWeek::new(2015, 53).unwrap();
        let json = serde_json::to_string(&yw).unwrap();
        assert_eq!(json, r#""2015-W53""#);
        let parsed: YearWeek = serde_json::from_str(&json).unwrap();
        assert_eq!(yw, parsed);

        assert!(serde_json::from_str::<YearWeek>(r#""2014-W53""#).is_err());
    }
}
