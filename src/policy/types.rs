//! Accrual policy types.
//!
//! This module defines the [`AccrualPeriod`] enum, the [`MonthDay`] recurring
//! date type, and the [`AccrualPolicy`] settings holder.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How often PTO is accrued.
///
/// Each period maps to a canonical day count used as the accrual
/// denominator.
///
/// # Example
///
/// ```
/// use pto_engine::policy::AccrualPeriod;
///
/// assert_eq!(AccrualPeriod::Weekly.days_in_period(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualPeriod {
    /// PTO accrues every day.
    Daily,
    /// PTO accrues every week (7 days).
    Weekly,
    /// PTO accrues every month (normalized to 30 days).
    Monthly,
    /// PTO accrues every year (normalized to 365 days).
    Yearly,
}

impl AccrualPeriod {
    /// Returns the number of days in this accrual period.
    pub fn days_in_period(self) -> u32 {
        match self {
            AccrualPeriod::Daily => 1,
            AccrualPeriod::Weekly => 7,
            AccrualPeriod::Monthly => 30,
            AccrualPeriod::Yearly => 365,
        }
    }
}

impl std::fmt::Display for AccrualPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccrualPeriod::Daily => write!(f, "Daily"),
            AccrualPeriod::Weekly => write!(f, "Weekly"),
            AccrualPeriod::Monthly => write!(f, "Monthly"),
            AccrualPeriod::Yearly => write!(f, "Yearly"),
        }
    }
}

/// Serde representation of a [`MonthDay`], validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawMonthDay {
    month: u32,
    day: u32,
}

/// A recurring annual month-and-day with no year, such as a carry-over
/// expiration date of January 1.
///
/// February 29 is a valid month-day; [`MonthDay::at_year`] clamps it to
/// February 28 in non-leap years.
///
/// # Example
///
/// ```
/// use pto_engine::policy::MonthDay;
/// use chrono::NaiveDate;
///
/// let expiration = MonthDay::new(1, 1).unwrap();
/// assert_eq!(
///     expiration.at_year(2026),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMonthDay", into = "RawMonthDay")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a month-day, rejecting combinations that never name a real
    /// calendar day.
    ///
    /// Validation is performed against a leap year, so February 29 is
    /// accepted.
    pub fn new(month: u32, day: u32) -> EngineResult<Self> {
        // 2024 is a leap year, so Feb 29 passes and Feb 30 does not.
        if NaiveDate::from_ymd_opt(2024, month, day).is_none() {
            return Err(EngineError::InvalidMonthDay { month, day });
        }
        Ok(Self { month, day })
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day-of-month component.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Resolves this month-day to a concrete date in the given year.
    ///
    /// February 29 resolves to February 28 in non-leap years.
    pub fn at_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month, 28))
            .expect("validated month-day resolves in every year")
    }
}

impl TryFrom<RawMonthDay> for MonthDay {
    type Error = EngineError;

    fn try_from(raw: RawMonthDay) -> EngineResult<Self> {
        MonthDay::new(raw.month, raw.day)
    }
}

impl From<MonthDay> for RawMonthDay {
    fn from(month_day: MonthDay) -> Self {
        RawMonthDay {
            month: month_day.month,
            day: month_day.day,
        }
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

/// Accrual policy settings for a single user.
///
/// Holds the current balance, the accrual rate and period, and the two
/// optional caps: a hard ceiling (`max_balance`) applied at every accrual
/// step, and a carry-over limit applied only at the annual expiration date.
/// A zero value is the sentinel for "disabled" on both caps.
///
/// Mutation goes through validated setters that reject negative values and
/// leave the policy unchanged on error.
///
/// # Example
///
/// ```
/// use pto_engine::policy::{AccrualPeriod, AccrualPolicy};
/// use rust_decimal::Decimal;
///
/// let mut policy = AccrualPolicy::default();
/// policy.set_current_balance(Decimal::from(40)).unwrap();
/// policy.set_accrual_rate(Decimal::from(1)).unwrap();
/// policy.set_accrual_period(AccrualPeriod::Daily);
///
/// assert!(!policy.is_max_balance_enabled());
/// assert!(policy.set_current_balance(Decimal::from(-1)).is_err());
/// assert_eq!(policy.current_balance(), Decimal::from(40));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AccrualPolicy {
    current_balance: Decimal,
    accrual_rate: Decimal,
    accrual_period: AccrualPeriod,
    max_balance: Decimal,
    carry_over_limit: Decimal,
    expiration_date: Option<MonthDay>,
}

impl Default for AccrualPolicy {
    fn default() -> Self {
        Self {
            current_balance: Decimal::ZERO,
            accrual_rate: Decimal::ZERO,
            accrual_period: AccrualPeriod::Weekly,
            max_balance: Decimal::ZERO,
            carry_over_limit: Decimal::ZERO,
            expiration_date: None,
        }
    }
}

impl AccrualPolicy {
    /// Creates a policy with the given settings, validating every value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NegativeValue`] if any of `current_balance`,
    /// `accrual_rate`, `max_balance`, or `carry_over_limit` is negative.
    pub fn new(
        current_balance: Decimal,
        accrual_rate: Decimal,
        accrual_period: AccrualPeriod,
        max_balance: Decimal,
        carry_over_limit: Decimal,
        expiration_date: Option<MonthDay>,
    ) -> EngineResult<Self> {
        let mut policy = Self {
            accrual_period,
            expiration_date,
            ..Self::default()
        };
        policy.set_current_balance(current_balance)?;
        policy.set_accrual_rate(accrual_rate)?;
        policy.set_max_balance(max_balance)?;
        policy.set_carry_over_limit(carry_over_limit)?;
        Ok(policy)
    }

    /// Returns the current PTO balance in hours.
    pub fn current_balance(&self) -> Decimal {
        self.current_balance
    }

    /// Sets the current PTO balance in hours.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NegativeValue`] if `value` is negative; the
    /// policy is left unchanged.
    pub fn set_current_balance(&mut self, value: Decimal) -> EngineResult<()> {
        if value < Decimal::ZERO {
            return Err(EngineError::NegativeValue {
                field: "current_balance".to_string(),
                value,
            });
        }
        self.current_balance = value;
        Ok(())
    }

    /// Returns the accrual rate in hours per accrual period.
    pub fn accrual_rate(&self) -> Decimal {
        self.accrual_rate
    }

    /// Sets the accrual rate in hours per accrual period.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NegativeValue`] if `value` is negative; the
    /// policy is left unchanged.
    pub fn set_accrual_rate(&mut self, value: Decimal) -> EngineResult<()> {
        if value < Decimal::ZERO {
            return Err(EngineError::NegativeValue {
                field: "accrual_rate".to_string(),
                value,
            });
        }
        self.accrual_rate = value;
        Ok(())
    }

    /// Returns the accrual period.
    pub fn accrual_period(&self) -> AccrualPeriod {
        self.accrual_period
    }

    /// Sets the accrual period.
    pub fn set_accrual_period(&mut self, period: AccrualPeriod) {
        self.accrual_period = period;
    }

    /// Returns the maximum balance in hours. Zero means disabled.
    pub fn max_balance(&self) -> Decimal {
        self.max_balance
    }

    /// Sets the maximum balance in hours. Zero disables the cap.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NegativeValue`] if `value` is negative; the
    /// policy is left unchanged.
    pub fn set_max_balance(&mut self, value: Decimal) -> EngineResult<()> {
        if value < Decimal::ZERO {
            return Err(EngineError::NegativeValue {
                field: "max_balance".to_string(),
                value,
            });
        }
        self.max_balance = value;
        Ok(())
    }

    /// Returns the carry-over limit in hours. Zero means disabled.
    pub fn carry_over_limit(&self) -> Decimal {
        self.carry_over_limit
    }

    /// Sets the carry-over limit in hours. Zero disables the annual reset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NegativeValue`] if `value` is negative; the
    /// policy is left unchanged.
    pub fn set_carry_over_limit(&mut self, value: Decimal) -> EngineResult<()> {
        if value < Decimal::ZERO {
            return Err(EngineError::NegativeValue {
                field: "carry_over_limit".to_string(),
                value,
            });
        }
        self.carry_over_limit = value;
        Ok(())
    }

    /// Returns the annual carry-over expiration date, if one is set.
    pub fn expiration_date(&self) -> Option<MonthDay> {
        self.expiration_date
    }

    /// Sets or clears the annual carry-over expiration date.
    pub fn set_expiration_date(&mut self, expiration_date: Option<MonthDay>) {
        self.expiration_date = expiration_date;
    }

    /// Returns true if the maximum balance cap is enabled.
    pub fn is_max_balance_enabled(&self) -> bool {
        self.max_balance > Decimal::ZERO
    }

    /// Returns true if the carry-over limit is enabled.
    pub fn is_carry_over_enabled(&self) -> bool {
        self.carry_over_limit > Decimal::ZERO
    }

    /// Returns the smallest date on or after `reference` whose month-and-day
    /// equals the stored expiration date.
    ///
    /// If this year's occurrence is already before `reference`, the
    /// occurrence in the following year is returned. Returns `None` when
    /// carry-over is disabled or no expiration date is set.
    ///
    /// # Example
    ///
    /// ```
    /// use pto_engine::policy::{AccrualPeriod, AccrualPolicy, MonthDay};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let policy = AccrualPolicy::new(
    ///     Decimal::ZERO,
    ///     Decimal::ZERO,
    ///     AccrualPeriod::Weekly,
    ///     Decimal::ZERO,
    ///     Decimal::from(40),
    ///     Some(MonthDay::new(1, 1).unwrap()),
    /// )
    /// .unwrap();
    ///
    /// let reference = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    /// assert_eq!(
    ///     policy.next_expiration_date(reference),
    ///     NaiveDate::from_ymd_opt(2026, 1, 1)
    /// );
    /// ```
    pub fn next_expiration_date(&self, reference: NaiveDate) -> Option<NaiveDate> {
        if !self.is_carry_over_enabled() {
            return None;
        }
        let expiration = self.expiration_date?;

        let this_year = expiration.at_year(reference.year());
        if this_year >= reference {
            Some(this_year)
        } else {
            Some(expiration.at_year(reference.year() + 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn carry_over_policy(limit: &str, expiration: Option<MonthDay>) -> AccrualPolicy {
        AccrualPolicy::new(
            Decimal::ZERO,
            Decimal::ONE,
            AccrualPeriod::Daily,
            Decimal::ZERO,
            dec(limit),
            expiration,
        )
        .unwrap()
    }

    /// AP-001: canonical day counts
    #[test]
    fn test_days_in_period() {
        assert_eq!(AccrualPeriod::Daily.days_in_period(), 1);
        assert_eq!(AccrualPeriod::Weekly.days_in_period(), 7);
        assert_eq!(AccrualPeriod::Monthly.days_in_period(), 30);
        assert_eq!(AccrualPeriod::Yearly.days_in_period(), 365);
    }

    #[test]
    fn test_accrual_period_serialization() {
        assert_eq!(
            serde_json::to_string(&AccrualPeriod::Daily).unwrap(),
            "\"daily\""
        );
        assert_eq!(
            serde_json::from_str::<AccrualPeriod>("\"yearly\"").unwrap(),
            AccrualPeriod::Yearly
        );
    }

    /// AP-002: negative setter values rejected, policy unchanged
    #[test]
    fn test_negative_setter_values_rejected() {
        let mut policy = AccrualPolicy::default();
        policy.set_current_balance(dec("40")).unwrap();

        let result = policy.set_current_balance(dec("-1"));
        assert!(matches!(
            result,
            Err(EngineError::NegativeValue { ref field, .. }) if field == "current_balance"
        ));
        assert_eq!(policy.current_balance(), dec("40"));

        assert!(policy.set_accrual_rate(dec("-0.5")).is_err());
        assert!(policy.set_max_balance(dec("-80")).is_err());
        assert!(policy.set_carry_over_limit(dec("-40")).is_err());
    }

    /// AP-003: zero disables the caps
    #[test]
    fn test_zero_is_disabled_sentinel() {
        let mut policy = AccrualPolicy::default();
        assert!(!policy.is_max_balance_enabled());
        assert!(!policy.is_carry_over_enabled());

        policy.set_max_balance(dec("80")).unwrap();
        policy.set_carry_over_limit(dec("40")).unwrap();
        assert!(policy.is_max_balance_enabled());
        assert!(policy.is_carry_over_enabled());

        policy.set_max_balance(Decimal::ZERO).unwrap();
        policy.set_carry_over_limit(Decimal::ZERO).unwrap();
        assert!(!policy.is_max_balance_enabled());
        assert!(!policy.is_carry_over_enabled());
    }

    #[test]
    fn test_new_validates_all_fields() {
        let result = AccrualPolicy::new(
            dec("40"),
            dec("-1"),
            AccrualPeriod::Daily,
            Decimal::ZERO,
            Decimal::ZERO,
            None,
        );
        assert!(matches!(
            result,
            Err(EngineError::NegativeValue { ref field, .. }) if field == "accrual_rate"
        ));
    }

    #[test]
    fn test_default_policy() {
        let policy = AccrualPolicy::default();
        assert_eq!(policy.current_balance(), Decimal::ZERO);
        assert_eq!(policy.accrual_period(), AccrualPeriod::Weekly);
        assert_eq!(policy.expiration_date(), None);
    }

    /// AP-004: expiration later this year
    #[test]
    fn test_next_expiration_date_later_this_year() {
        let policy = carry_over_policy("40", Some(MonthDay::new(6, 15).unwrap()));
        assert_eq!(
            policy.next_expiration_date(date("2025-03-01")),
            Some(date("2025-06-15"))
        );
    }

    /// AP-005: expiration already passed rolls to next year
    #[test]
    fn test_next_expiration_date_rolls_to_next_year() {
        let policy = carry_over_policy("40", Some(MonthDay::new(1, 1).unwrap()));
        assert_eq!(
            policy.next_expiration_date(date("2025-12-01")),
            Some(date("2026-01-01"))
        );
    }

    /// AP-006: expiration on the reference date itself
    #[test]
    fn test_next_expiration_date_on_reference_date() {
        let policy = carry_over_policy("40", Some(MonthDay::new(7, 4).unwrap()));
        assert_eq!(
            policy.next_expiration_date(date("2025-07-04")),
            Some(date("2025-07-04"))
        );
    }

    /// AP-007: disabled carry-over yields no expiration
    #[test]
    fn test_next_expiration_date_disabled() {
        let disabled = carry_over_policy("0", Some(MonthDay::new(1, 1).unwrap()));
        assert_eq!(disabled.next_expiration_date(date("2025-12-01")), None);

        let no_date = carry_over_policy("40", None);
        assert_eq!(no_date.next_expiration_date(date("2025-12-01")), None);
    }

    #[test]
    fn test_month_day_rejects_impossible_dates() {
        assert!(MonthDay::new(2, 30).is_err());
        assert!(MonthDay::new(13, 1).is_err());
        assert!(MonthDay::new(4, 31).is_err());
        assert!(MonthDay::new(2, 29).is_ok());
    }

    #[test]
    fn test_feb_29_clamps_in_non_leap_years() {
        let leap_day = MonthDay::new(2, 29).unwrap();
        assert_eq!(leap_day.at_year(2024), date("2024-02-29"));
        assert_eq!(leap_day.at_year(2025), date("2025-02-28"));
    }

    #[test]
    fn test_month_day_serde_round_trip() {
        let month_day = MonthDay::new(1, 1).unwrap();
        let json = serde_json::to_string(&month_day).unwrap();
        assert_eq!(json, r#"{"month":1,"day":1}"#);

        let deserialized: MonthDay = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, month_day);
    }

    #[test]
    fn test_month_day_rejects_invalid_on_deserialize() {
        let result = serde_json::from_str::<MonthDay>(r#"{"month":2,"day":30}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_month_day_display() {
        assert_eq!(MonthDay::new(1, 1).unwrap().to_string(), "--01-01");
        assert_eq!(MonthDay::new(12, 25).unwrap().to_string(), "--12-25");
    }
}
