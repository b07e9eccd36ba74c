//! Policy snapshot loading.
//!
//! The shape persisted settings arrive in is the storage collaborator's
//! concern; this module only defines the snapshot boundary format and a
//! loader for YAML snapshot files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::types::{AccrualPeriod, AccrualPolicy, MonthDay};

/// The policy snapshot boundary shape.
///
/// Zero is the "disabled" sentinel for both caps, so they default to zero
/// when absent from the snapshot.
///
/// # Example
///
/// ```
/// use pto_engine::policy::{AccrualPolicy, PolicySnapshot};
///
/// let yaml = r#"
/// current_balance: 40
/// accrual_rate: 1
/// accrual_period: daily
/// max_balance: 80
/// "#;
///
/// let snapshot: PolicySnapshot = serde_yaml::from_str(yaml).unwrap();
/// let policy = AccrualPolicy::try_from(snapshot).unwrap();
/// assert!(policy.is_max_balance_enabled());
/// assert!(!policy.is_carry_over_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySnapshot {
    /// The current PTO balance in hours.
    #[serde(default)]
    pub current_balance: Decimal,
    /// The accrual rate in hours per accrual period.
    #[serde(default)]
    pub accrual_rate: Decimal,
    /// The accrual period.
    pub accrual_period: AccrualPeriod,
    /// The maximum balance in hours (0 = disabled).
    #[serde(default)]
    pub max_balance: Decimal,
    /// The carry-over limit in hours (0 = disabled).
    #[serde(default)]
    pub carry_over_limit: Decimal,
    /// The annual carry-over expiration date, if any.
    #[serde(default)]
    pub expiration_date: Option<MonthDay>,
}

impl TryFrom<PolicySnapshot> for AccrualPolicy {
    type Error = EngineError;

    fn try_from(snapshot: PolicySnapshot) -> EngineResult<Self> {
        AccrualPolicy::new(
            snapshot.current_balance,
            snapshot.accrual_rate,
            snapshot.accrual_period,
            snapshot.max_balance,
            snapshot.carry_over_limit,
            snapshot.expiration_date,
        )
    }
}

impl From<&AccrualPolicy> for PolicySnapshot {
    fn from(policy: &AccrualPolicy) -> Self {
        PolicySnapshot {
            current_balance: policy.current_balance(),
            accrual_rate: policy.accrual_rate(),
            accrual_period: policy.accrual_period(),
            max_balance: policy.max_balance(),
            carry_over_limit: policy.carry_over_limit(),
            expiration_date: policy.expiration_date(),
        }
    }
}

/// Loads a validated accrual policy from a YAML snapshot file.
///
/// # Errors
///
/// Returns an error if the file is missing ([`EngineError::SnapshotNotFound`]),
/// contains invalid YAML ([`EngineError::SnapshotParseError`]), or holds a
/// negative value ([`EngineError::NegativeValue`]).
///
/// # Example
///
/// ```no_run
/// use pto_engine::policy::load_policy;
///
/// let policy = load_policy("./policy.yaml")?;
/// # Ok::<(), pto_engine::error::EngineError>(())
/// ```
pub fn load_policy<P: AsRef<Path>>(path: P) -> EngineResult<AccrualPolicy> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::SnapshotNotFound {
        path: path_str.clone(),
    })?;

    let snapshot: PolicySnapshot =
        serde_yaml::from_str(&content).map_err(|e| EngineError::SnapshotParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    let policy = AccrualPolicy::try_from(snapshot)?;
    tracing::info!(path = %path_str, period = %policy.accrual_period(), "Loaded policy snapshot");
    Ok(policy)
}
