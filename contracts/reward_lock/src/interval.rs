//! Validity interval bounds and the lock's time windows.
//!
//! ## Windows
//! - **Deposits** must be impossible to include later than
//!   `deadline - DEPOSIT_CUTOFF_SECS`.
//! - **Claims** must be impossible to include earlier than
//!   `deadline + CLAIM_DELAY_SECS`.

use crate::errors::Rejection;
use crate::ledger::{Extended, ValidityRange};
use crate::math;

/// Deposits close one hour before the deadline.
pub const DEPOSIT_CUTOFF_SECS: i64 = 3_600;

/// Rewarded units unlock one day after the deadline.
pub const CLAIM_DELAY_SECS: i64 = 24 * 3_600;

/// Finite time point of a bound, or `UnboundedValidity` for either infinity.
pub fn finite(bound: &Extended) -> Result<i64, Rejection> {
    match bound {
        Extended::Finite(t) => Ok(*t),
        Extended::NegInf | Extended::PosInf => Err(Rejection::UnboundedValidity),
    }
}

/// Latest time at which the transaction can be included.
pub fn latest(range: &ValidityRange) -> Result<i64, Rejection> {
    finite(&range.to)
}

/// Earliest time at which the transaction can be included.
pub fn earliest(range: &ValidityRange) -> Result<i64, Rejection> {
    finite(&range.from)
}

/// Last time point a deposit transaction may still be valid at.
pub fn deposit_cutoff(deadline: i64) -> Result<i64, Rejection> {
    math::sub_i64(deadline, DEPOSIT_CUTOFF_SECS)
}

/// First time point a claim transaction may be valid at.
pub fn claim_opens(deadline: i64) -> Result<i64, Rejection> {
    math::add_i64(deadline, CLAIM_DELAY_SECS)
}
