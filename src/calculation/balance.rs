//! The core balance projection walk.
//!
//! Walks a policy and an entry index forward in time, interleaving
//! continuous accrual, the optional max-balance ceiling, the optional annual
//! carry-over reset, and discrete per-day deductions, in strict date order.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::EntryIndex;
use crate::policy::AccrualPolicy;

use super::accrual::accrue_and_cap;
use super::deduction::{day_type, deduction_for};

/// Computes the projected balance at the start of `target_date`, walking
/// from `start_date` with the policy's current balance as the seed.
///
/// `target_date` may be before, at, or after `start_date`; an inverted range
/// yields negative accrual and answers "what was my balance on this past
/// date".
///
/// The walk visits every entry date in ascending order. Dates before
/// `start_date` are outside the window and skipped; a deduction on
/// `target_date` itself has not yet taken effect on the balance at the start
/// of that date, so iteration stops there. When a carry-over expiration
/// falls on or before an entry date, the expiration is resolved before that
/// day's deductions. Entries dated on a weekend deduct nothing, since
/// accrual and usage are workday-denominated.
///
/// # Examples
///
/// ```
/// use pto_engine::calculation::balance_between;
/// use pto_engine::models::EntryIndex;
/// use pto_engine::policy::{AccrualPeriod, AccrualPolicy};
/// use chrono::NaiveDate;
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
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let target = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// let balance = balance_between(&policy, start, target, &EntryIndex::new());
/// assert_eq!(balance, Decimal::from(41));
/// ```
pub fn balance_between(
    policy: &AccrualPolicy,
    start_date: NaiveDate,
    target_date: NaiveDate,
    entries: &EntryIndex,
) -> Decimal {
    let mut balance = policy.current_balance();
    let mut cursor = start_date;
    let mut next_expiration = policy.next_expiration_date(start_date);

    for (date, day_entries) in entries.iter_days() {
        if date < start_date {
            continue;
        }
        if date >= target_date {
            break;
        }

        // Resolve any expiration on or before this date first, so the
        // carry-over clamp lands before a same-day deduction.
        while let Some(expiration) = next_expiration {
            if expiration > date {
                break;
            }
            balance = accrue_and_cap(policy, cursor, expiration, balance, true);
            cursor = expiration;
            next_expiration = expiration
                .succ_opt()
                .and_then(|day_after| policy.next_expiration_date(day_after));
        }

        balance = accrue_and_cap(policy, cursor, date, balance, false);
        cursor = date;

        if !day_type(date).is_weekend() {
            for entry in &day_entries {
                balance -= deduction_for(entry);
            }
            if policy.is_max_balance_enabled() {
                balance = balance.min(policy.max_balance());
            }
        }
    }

    // Expirations between the last entry date and the target still apply.
    while let Some(expiration) = next_expiration {
        if expiration > target_date {
            break;
        }
        balance = accrue_and_cap(policy, cursor, expiration, balance, true);
        cursor = expiration;
        next_expiration = expiration
            .succ_opt()
            .and_then(|day_after| policy.next_expiration_date(day_after));
    }

    balance = accrue_and_cap(policy, cursor, target_date, balance, false);

    debug!(
        start = %start_date,
        target = %target_date,
        balance = %balance,
        "Projected balance"
    );

    balance
}

/// Computes the projected balance at the start of `date`, walking from
/// `today`.
///
/// `today` is an explicit parameter; the engine never reads an ambient
/// clock.
pub fn balance_at(
    policy: &AccrualPolicy,
    today: NaiveDate,
    date: NaiveDate,
    entries: &EntryIndex,
) -> Decimal {
    balance_between(policy, today, date, entries)
}

/// Brings a stored balance forward from the date it was last persisted.
///
/// Runs the same walk as [`balance_between`], so entries that have passed
/// since the last update are settled along the way, together with any
/// expiration and cap. Returns the current balance unchanged when
/// `last_update` is not in the past.
pub fn rollforward_balance(
    policy: &AccrualPolicy,
    last_update: NaiveDate,
    today: NaiveDate,
    entries: &EntryIndex,
) -> Decimal {
    if last_update >= today {
        return policy.current_balance();
    }
    balance_between(policy, last_update, today, entries)
}
