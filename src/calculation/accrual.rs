//! Continuous time-based accrual.
//!
//! Accrual is a pure function of elapsed days and the policy's rate and
//! period; scheduled entries are deducted elsewhere, by the balance walk.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::policy::AccrualPolicy;

/// Computes the hours accrued between two dates.
///
/// The result is `(days / days_in_period) * accrual_rate`. It is
/// antisymmetric: swapping `start` and `end` negates the result, and a
/// negative result is a meaningful answer to "what was my balance on this
/// past date", not an error.
///
/// # Examples
///
/// ```
/// use pto_engine::calculation::accrual_between;
/// use pto_engine::policy::{AccrualPeriod, AccrualPolicy};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = AccrualPolicy::new(
///     Decimal::ZERO,
///     Decimal::from(2),
///     AccrualPeriod::Daily,
///     Decimal::ZERO,
///     Decimal::ZERO,
///     None,
/// )
/// .unwrap();
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();
/// assert_eq!(accrual_between(&policy, start, end), Decimal::from(20));
/// assert_eq!(accrual_between(&policy, end, start), Decimal::from(-20));
/// ```
pub fn accrual_between(policy: &AccrualPolicy, start: NaiveDate, end: NaiveDate) -> Decimal {
    let days = Decimal::from((end - start).num_days());
    let period_days = Decimal::from(policy.accrual_period().days_in_period());
    days / period_days * policy.accrual_rate()
}

/// Accrues from `from` to `to` on top of `balance` and applies the caps.
///
/// The balance is clamped to the max balance whenever that cap is enabled.
/// The carry-over limit is applied only when `apply_carry_over` is true; the
/// balance walk sets it only at expiration boundaries, never at ordinary
/// accrual steps.
pub fn accrue_and_cap(
    policy: &AccrualPolicy,
    from: NaiveDate,
    to: NaiveDate,
    balance: Decimal,
    apply_carry_over: bool,
) -> Decimal {
    let mut balance = balance + accrual_between(policy, from, to);

    if policy.is_max_balance_enabled() {
        balance = balance.min(policy.max_balance());
    }

    if apply_carry_over && policy.is_carry_over_enabled() {
        balance = balance.min(policy.carry_over_limit());
    }

    balance
}
