//! Emits `snn_require` assertion lines pinning the ISO week of boundary dates.
//!
//! Each probe is a date close to a year boundary, where the ISO
//! week-numbering year is most likely to differ from the calendar year.

use std::io::Write;

use tracing::{debug, info};

use crate::{
    CalendarDate, DECEMBER, DECEMBER_PROBE_DAYS, DateError, FIRST_PROBE_YEAR, JANUARY,
    JANUARY_PROBE_DAYS, LAST_PROBE_YEAR, YearWeek, prelude::*,
};

/// Error type for assertion generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A probe does not name a real calendar date.
    #[error("Invalid probe date: {0}")]
    InvalidProbe(#[from] DateError),

    /// The probe year range runs backwards.
    #[error("Invalid probe years: first ({first}) is after last ({last})")]
    InvalidYearRange { first: u16, last: u16 },

    /// Writing to the output failed.
    #[error("Failed to write assertions")]
    Io(#[from] std::io::Error),
}

/// One sampled calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Probe {
    date: CalendarDate,
}

impl Probe {
    /// # Errors
    /// Returns `DateError` if the components do not form a valid date.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        CalendarDate::new(year, month, day).map(|date| Self { date })
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }
}

/// The years and days of month sampled by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSet {
    first_year: u16,
    last_year: u16,
    january_days: &'static [u8],
    december_days: &'static [u8],
}

impl Default for ProbeSet {
    /// 1990 through 2029, January 1-4 and December 28-31 of each year.
    fn default() -> Self {
        Self {
            first_year: FIRST_PROBE_YEAR,
            last_year: LAST_PROBE_YEAR,
            january_days: &JANUARY_PROBE_DAYS,
            december_days: &DECEMBER_PROBE_DAYS,
        }
    }
}

impl ProbeSet {
    /// Creates a probe set over `first_year..=last_year`.
    ///
    /// Days are not checked here; a day that does not exist in its month
    /// surfaces as `GenerateError::InvalidProbe` when the probe is built.
    ///
    /// # Errors
    /// Returns `GenerateError::InvalidYearRange` if `first_year > last_year`.
    pub fn new(
        first_year: u16,
        last_year: u16,
        january_days: &'static [u8],
        december_days: &'static [u8],
    ) -> Result<Self, GenerateError> {
        if first_year > last_year {
            return Err(GenerateError::InvalidYearRange {
                first: first_year,
                last: last_year,
            });
        }
        Ok(Self {
            first_year,
            last_year,
            january_days,
            december_days,
        })
    }

    pub const fn first_year(&self) -> u16 {
        self.first_year
    }

    pub const fn last_year(&self) -> u16 {
        self.last_year
    }

    pub const fn probes_per_year(&self) -> usize {
        self.january_days.len() + self.december_days.len()
    }

    /// Total number of probes, which is also the number of lines generated.
    pub const fn len(&self) -> usize {
        (self.last_year as usize - self.first_year as usize + 1) * self.probes_per_year()
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Probes in output order: year ascending, then the January days, then
    /// the December days, each in the order given.
    pub fn probes(&self) -> impl Iterator<Item = Result<Probe, DateError>> + '_ {
        (self.first_year..=self.last_year).flat_map(move |year| {
            let january = self.january_days.iter().map(move |&day| (JANUARY, day));
            let december = self.december_days.iter().map(move |&day| (DECEMBER, day));
            january
                .chain(december)
                .map(move |(month, day)| Probe::new(year, month, day))
        })
    }
}

/// A probe paired with its computed ISO week; displays as one assertion line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(
    fmt = "snn_require(time::point{{{}, {}, {}}}.week() == time::year_week{{{}, {}}});",
    "probe.date().year()",
    "probe.date().month()",
    "probe.date().day()",
    "week.year()",
    "week.week()"
)]
pub struct Assertion {
    probe: Probe,
    week: YearWeek,
}

impl Assertion {
    pub fn new(probe: Probe) -> Self {
        Self {
            probe,
            week: probe.date().week(),
        }
    }

    pub const fn probe(&self) -> Probe {
        self.probe
    }

    pub const fn week(&self) -> YearWeek {
        self.week
    }
}

/// Writes one assertion line per probe and returns the number of lines written.
///
/// Stops at the first invalid probe; lines already written stay written.
///
/// # Errors
/// Returns `GenerateError::InvalidProbe` for a probe that is not a real date
/// and `GenerateError::Io` if the writer fails.
pub fn generate<W: Write>(probes: &ProbeSet, mut out: W) -> Result<usize, GenerateError> {
    let mut lines = 0;
    let mut current_year = None;

    for probe in probes.probes() {
        let probe = probe?;
        let year = probe.date().year();
        if current_year != Some(year) {
            debug!(year, "probing year");
            current_year = Some(year);
        }

        let assertion = Assertion::new(probe);
        writeln!(out, "{assertion}")?;
        lines += 1;
    }

    out.flush()?;
    info!(
        lines,
        first_year = probes.first_year(),
        last_year = probes.last_year(),
        "generated ISO week assertions"
    );
    Ok(lines)
}
