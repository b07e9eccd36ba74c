//! Time-off entry model.
//!
//! This module defines the TimeOffEntry struct representing a scheduled
//! absence. Entries are created and edited by the calling application; the
//! engine only ever reads them.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Represents a scheduled time-off entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// Display title (e.g., "Vacation").
    pub title: String,
    /// The start instant of the absence.
    pub start_time: NaiveDateTime,
    /// The end instant of the absence.
    pub end_time: NaiveDateTime,
    /// Whether the entry covers the entire day regardless of its clock span.
    pub full_day: bool,
}

impl TimeOffEntry {
    /// Creates an entry with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] if `end_time` is before
    /// `start_time`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pto_engine::models::TimeOffEntry;
    /// use chrono::NaiveDateTime;
    ///
    /// let entry = TimeOffEntry::new(
    ///     "Dentist",
    ///     NaiveDateTime::parse_from_str("2025-03-10 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2025-03-10 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     false,
    /// )
    /// .unwrap();
    /// assert!(!entry.is_multi_day());
    /// ```
    pub fn new(
        title: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        full_day: bool,
    ) -> EngineResult<Self> {
        let entry = Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start_time,
            end_time,
            full_day,
        };
        if end_time < start_time {
            return Err(EngineError::InvalidEntry {
                entry_id: entry.id,
                message: "end time before start time".to_string(),
            });
        }
        Ok(entry)
    }

    /// Returns the calendar date the entry starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Returns the calendar date the entry ends on.
    pub fn end_date(&self) -> NaiveDate {
        self.end_time.date()
    }

    /// Returns true if the entry spans more than one calendar date.
    pub fn is_multi_day(&self) -> bool {
        self.start_date() != self.end_date()
    }

    /// Returns the clock span of the entry in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use pto_engine::models::TimeOffEntry;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeOffEntry::new(
    ///     "Half day",
    ///     NaiveDateTime::parse_from_str("2025-03-10 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2025-03-10 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     false,
    /// )
    /// .unwrap();
    /// assert_eq!(entry.duration_hours(), Decimal::from(4));
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        let minutes = (self.end_time - self.start_time).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }

    /// Returns the number of calendar days the entry touches, inclusive of
    /// both the start and end dates.
    pub fn days_spanned(&self) -> i64 {
        (self.end_date() - self.start_date()).num_days() + 1
    }

    /// Returns true if this entry's instant span overlaps another's.
    ///
    /// Spans are treated as half-open, so an entry starting exactly when
    /// another ends does not overlap it.
    pub fn overlaps(&self, other: &TimeOffEntry) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}
