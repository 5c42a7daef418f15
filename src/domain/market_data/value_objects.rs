use crate::domain::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use derive_more::{Constructor, Deref, DerefMut, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - price in dollars
#[derive(
    Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize,
)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - traded share count
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    From,
    Into,
    Deref,
    DerefMut,
    Constructor,
    Serialize,
    Deserialize,
)]
pub struct Volume(u64);

impl Volume {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Value Object - ticker symbol (trimmed, case-insensitive)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "Symbol({})", _0)]
pub struct Symbol(String);

impl Symbol {
    /// Validating constructor for user input
    pub fn parse(raw: &str) -> AppResult<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(AppError::Validation("Please enter a stock symbol".to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Value Object - inclusive calendar range walked weekday by weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The fixed historical window every lookup covers
    pub fn default_history() -> Self {
        let start = NaiveDate::from_ymd_opt(2012, 1, 1).expect("valid calendar date");
        let end = NaiveDate::from_ymd_opt(2022, 12, 31).expect("valid calendar date");
        Self { start, end }
    }

    /// Iterate every trading day (Mon-Fri) in the range, in order
    pub fn weekdays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start
            .iter_days()
            .take_while(move |d| *d <= self.end)
            .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
    }
}
