//! Error types for the PTO balance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors are raised only at the boundaries: policy mutation, entry
//! construction, and snapshot loading. The balance computation itself never
//! fails; an inverted date range is a valid query that yields negative
//! accrual.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the PTO balance engine.
///
/// # Example
///
/// ```
/// use pto_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::NegativeValue {
///     field: "accrual_rate".to_string(),
///     value: Decimal::new(-5, 0),
/// };
/// assert_eq!(error.to_string(), "accrual_rate cannot be negative: -5");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A policy field was set to a negative value.
    #[error("{field} cannot be negative: {value}")]
    NegativeValue {
        /// The policy field that was being set.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// A month-and-day combination does not name a real calendar day.
    #[error("Invalid month-day: month {month}, day {day}")]
    InvalidMonthDay {
        /// The month component (1-12).
        month: u32,
        /// The day-of-month component.
        day: u32,
    },

    /// A time-off entry was invalid or contained inconsistent data.
    #[error("Invalid entry '{entry_id}': {message}")]
    InvalidEntry {
        /// The ID of the invalid entry.
        entry_id: Uuid,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A policy snapshot file was not found at the specified path.
    #[error("Policy snapshot not found: {path}")]
    SnapshotNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A policy snapshot file could not be parsed.
    #[error("Failed to parse policy snapshot '{path}': {message}")]
    SnapshotParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
