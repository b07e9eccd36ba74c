//! Per-entry deduction and workday/weekend classification.
//!
//! Accrual and usage are workday-denominated: a scheduled day off always
//! costs one standard 8-hour workday, a partial absence costs the hours
//! actually taken capped at 8, and weekend-dated entries deduct nothing.
//! The weekend rule lives here so it stays a separate branch from the
//! expiration tie-break in the balance walk.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TimeOffEntry;

/// One standard workday, in hours.
pub const STANDARD_DAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Classifies a calendar date for deduction purposes.
///
/// # Example
///
/// ```
/// use pto_engine::calculation::{DayType, day_type};
/// use chrono::NaiveDate;
///
/// // 2025-01-20 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
/// assert_eq!(day_type(monday), DayType::Workday);
/// assert!(!day_type(monday).is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday - entries on these dates deduct hours.
    Workday,
    /// Saturday - entries deduct nothing.
    Saturday,
    /// Sunday - entries deduct nothing.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Workday => write!(f, "Workday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
pub fn day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Workday,
    }
}

/// Returns the hours a single entry deducts on one of its scheduled dates.
///
/// A full-day or multi-day entry costs exactly one standard 8-hour workday
/// regardless of its clock span; a partial single-day absence costs its
/// clock hours, capped at 8.
///
/// # Examples
///
/// ```
/// use pto_engine::calculation::deduction_for;
/// use pto_engine::models::TimeOffEntry;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let partial = TimeOffEntry::new(
///     "Appointment",
///     NaiveDateTime::parse_from_str("2025-03-10 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2025-03-10 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     false,
/// )
/// .unwrap();
/// assert_eq!(deduction_for(&partial), Decimal::from(4));
/// ```
pub fn deduction_for(entry: &TimeOffEntry) -> Decimal {
    if entry.full_day || entry.is_multi_day() {
        STANDARD_DAY_HOURS
    } else {
        entry.duration_hours().min(STANDARD_DAY_HOURS)
    }
}
