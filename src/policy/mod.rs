//! Accrual policy settings for the PTO balance engine.
//!
//! This module contains the accrual policy holder with its validated
//! setters, the recurring annual expiration date type, and a loader for
//! policy snapshot files.

mod loader;
mod types;

pub use loader::{PolicySnapshot, load_policy};
pub use types::{AccrualPeriod, AccrualPolicy, MonthDay};
