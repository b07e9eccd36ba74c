//! Balance projection engine for a personal PTO planning tool.
//!
//! This crate computes projected paid-time-off balances under a continuous
//! accrual policy with an optional hard ceiling and an optional annual
//! carry-over reset, and validates candidate time-off entries against the
//! projection.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod policy;
