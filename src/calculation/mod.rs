//! Balance calculation logic for the PTO engine.
//!
//! This module contains the pure time-based accrual functions, the per-entry
//! deduction rule with workday/weekend classification, the core date-ordered
//! balance walk, and candidate entry validation.

mod accrual;
mod balance;
mod deduction;
mod validation;

pub use accrual::{accrual_between, accrue_and_cap};
pub use balance::{balance_at, balance_between, rollforward_balance};
pub use deduction::{DayType, STANDARD_DAY_HOURS, day_type, deduction_for};
pub use validation::validate_entry;
