//! Calendar arithmetic over `YYYY-MM-DD` dates and sub-period classification.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ArtfinError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month names for the fixed pt-BR locale, indexed by 0-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parses a `YYYY-MM-DD` string into a calendar-local date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ArtfinError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ArtfinError::Validation(format!("invalid date `{}`, expected YYYY-MM-DD", s)))
}

/// Returns the calendar date `days` after `date`, with Gregorian rollover.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// 0-based month index of a date.
pub fn month_index_of(date: NaiveDate) -> u32 {
    date.month0()
}

pub fn year_of(date: NaiveDate) -> i32 {
    date.year()
}

pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[month0 as usize]
}

/// Sub-period selector driving every report view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodSelector {
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "semester_1")]
    Semester1,
    #[serde(rename = "semester_2")]
    Semester2,
    #[serde(rename = "quarter_1")]
    Quarter1,
    #[serde(rename = "quarter_2")]
    Quarter2,
    #[serde(rename = "quarter_3")]
    Quarter3,
    #[serde(rename = "quarter_4")]
    Quarter4,
}

impl PeriodSelector {
    /// Inclusive 0-based month bounds of the selector.
    pub fn month_bounds(&self) -> (u32, u32) {
        match self {
            PeriodSelector::Year => (0, 11),
            PeriodSelector::Semester1 => (0, 5),
            PeriodSelector::Semester2 => (6, 11),
            PeriodSelector::Quarter1 => (0, 2),
            PeriodSelector::Quarter2 => (3, 5),
            PeriodSelector::Quarter3 => (6, 8),
            PeriodSelector::Quarter4 => (9, 11),
        }
    }

    /// Whether a 0-based month index falls inside the selector.
    pub fn contains(&self, month0: u32) -> bool {
        let (start, end) = self.month_bounds();
        month0 >= start && month0 <= end
    }
}

impl Default for PeriodSelector {
    fn default() -> Self {
        PeriodSelector::Year
    }
}

/// Year dimension of the report filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    All,
    Year(i32),
}

impl YearFilter {
    pub fn matches(&self, year: i32) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(selected) => year == *selected,
        }
    }
}

impl Default for YearFilter {
    fn default() -> Self {
        YearFilter::All
    }
}
