//! Candidate entry validation.
//!
//! Decides whether a candidate time-off entry is affordable against the
//! balance projected at the date the hours would be needed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{EntryIndex, TimeOffEntry};
use crate::policy::AccrualPolicy;

use super::balance::balance_at;
use super::deduction::STANDARD_DAY_HOURS;

/// Returns true if the candidate entry is affordable.
///
/// An entry that already ended before `today` is unconditionally valid;
/// past entries are not re-validated. Otherwise a multi-day entry needs one
/// standard workday per spanned calendar day, checked against the balance
/// projected at its end date, and a single-day entry needs a full workday
/// (full-day) or its clock hours, checked at its start date.
///
/// The existing `entries` should not already contain the candidate;
/// double-booking is a separate check
/// ([`EntryIndex::intersects`](crate::models::EntryIndex::intersects)).
///
/// # Examples
///
/// ```
/// use pto_engine::calculation::validate_entry;
/// use pto_engine::models::{EntryIndex, TimeOffEntry};
/// use pto_engine::policy::{AccrualPeriod, AccrualPolicy};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let policy = AccrualPolicy::new(
///     Decimal::from(40),
///     Decimal::ONE,
///     AccrualPeriod::Daily,
///     Decimal::ZERO,
///     Decimal::ZERO,
///     None,
/// )
/// .unwrap();
///
/// let entry = TimeOffEntry::new(
///     "Day off",
///     NaiveDateTime::parse_from_str("2025-03-10 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2025-03-10 23:59:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     true,
/// )
/// .unwrap();
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// assert!(validate_entry(&policy, today, &entry, &EntryIndex::new()));
/// ```
pub fn validate_entry(
    policy: &AccrualPolicy,
    today: NaiveDate,
    entry: &TimeOffEntry,
    entries: &EntryIndex,
) -> bool {
    if entry.end_date() < today {
        return true;
    }

    let (required, check_date) = if entry.is_multi_day() {
        (
            Decimal::from(entry.days_spanned()) * STANDARD_DAY_HOURS,
            entry.end_date(),
        )
    } else if entry.full_day {
        (STANDARD_DAY_HOURS, entry.start_date())
    } else {
        (entry.duration_hours(), entry.start_date())
    };

    let projected = balance_at(policy, today, check_date, entries);
    let valid = projected >= required;

    debug!(
        entry_id = %entry.id,
        required = %required,
        projected = %projected,
        valid,
        "Validated candidate entry"
    );

    valid
}
