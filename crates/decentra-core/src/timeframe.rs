//! Timeframes of the form `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
//!
//! A timeframe selects every block produced within a calendar year, month or
//! day. Parsing validates the components as a real calendar date (missing
//! components default to 1 for validation only).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{END_YEAR, START_YEAR};
use crate::error::TimeframeError;

/// A calendar year, month or day.
///
/// # Examples
///
/// ```
/// use decentra_core::timeframe::Timeframe;
/// let tf: Timeframe = "2021-3".parse().unwrap();
/// assert_eq!(tf.to_string(), "2021-03");
/// assert!("2021-02-30".parse::<Timeframe>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timeframe {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
}

impl Timeframe {
    /// A whole calendar year.
    pub fn year(year: i32) -> Result<Self, TimeframeError> {
        Self::from_parts(year, None, None)
    }

    /// A single calendar month.
    pub fn month(year: i32, month: u32) -> Result<Self, TimeframeError> {
        Self::from_parts(year, Some(month), None)
    }

    /// A single calendar day.
    pub fn day(year: i32, month: u32, day: u32) -> Result<Self, TimeframeError> {
        Self::from_parts(year, Some(month), Some(day))
    }

    fn from_parts(year: i32, month: Option<u32>, day: Option<u32>) -> Result<Self, TimeframeError> {
        let tf = Self { year, month, day };
        NaiveDate::from_ymd_opt(year, month.unwrap_or(1), day.unwrap_or(1))
            .ok_or_else(|| TimeframeError::InvalidDate(tf.to_string()))?;
        Ok(tf)
    }

    /// Whether `date` falls within this timeframe.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year
            && self.month.is_none_or(|m| date.month() == m)
            && self.day.is_none_or(|d| date.day() == d)
    }

    /// Every month from January of [`START_YEAR`] through December of the
    /// year before [`END_YEAR`].
    pub fn default_sweep() -> Vec<Timeframe> {
        (START_YEAR..END_YEAR)
            .flat_map(|year| (1..=12).map(move |month| Timeframe { year, month: Some(month), day: None }))
            .collect()
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(m) = self.month {
            write!(f, "-{m:02}")?;
        }
        if let Some(d) = self.day {
            write!(f, "-{d:02}")?;
        }
        Ok(())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeframeError::Malformed(s.to_string());

        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() > 3 || parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
            return Err(malformed());
        }

        let year: i32 = parts[0].parse().map_err(|_| malformed())?;
        let month = parts
            .get(1)
            .map(|p| p.parse::<u32>().map_err(|_| malformed()))
            .transpose()?;
        let day = parts
            .get(2)
            .map(|p| p.parse::<u32>().map_err(|_| malformed()))
            .transpose()?;

        Self::from_parts(year, month, day)
    }
}

impl TryFrom<String> for Timeframe {
    type Error = TimeframeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self {
        tf.to_string()
    }
}
