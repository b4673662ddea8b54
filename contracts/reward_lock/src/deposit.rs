//! Deposit against an `Allocation` unit.
//!
//! A deposit spends exactly two inputs (the pool unit and the depositor's
//! unit) and produces exactly two outputs:
//!
//! | Role | Address            | Designated amount        | Datum                    |
//! |------|--------------------|--------------------------|--------------------------|
//! | pool | pool input address | `pool - interest`        | `Allocation`             |
//! | user | user input address | `user + interest - fee`  | `Rewarded(user address)` |
//!
//! Outputs may appear in either order.

use crate::errors::Rejection;
use crate::interval;
use crate::ledger::{OutRef, TxInfo, TxOut};
use crate::math;
use crate::output::is_expected_output;
use crate::types::{Datum, DepositQuote, LockParams};
use crate::validator::Accepted;
use crate::value;

/// One unit of reward per `INTEREST_DIVISOR` units deposited.
///
/// NOTE: this is a flat 0.1% per deposit, independent of how long the funds
/// stay locked; it is not an annualized rate.
pub const INTEREST_DIVISOR: i128 = 1_000;

/// Amounts a deposit of `user_lovelaces` against a pool holding
/// `contract_lovelaces` must produce when the transaction pays `fee`.
pub fn quote(
    contract_lovelaces: i128,
    user_lovelaces: i128,
    fee: i128,
) -> Result<DepositQuote, Rejection> {
    let interest = math::div_i128(user_lovelaces, INTEREST_DIVISOR)?;
    let user_out = math::sub_i128(math::add_i128(user_lovelaces, interest)?, fee)?;
    let contract_out = math::sub_i128(contract_lovelaces, interest)?;
    Ok(DepositQuote {
        interest,
        contract_out,
        user_out,
    })
}

/// Validate a `Deposit(contract_input_idx)` spend of the input at `own_ref`.
pub fn validate_deposit(
    params: &LockParams,
    contract_input_idx: u32,
    own_ref: &OutRef,
    tx: &TxInfo,
) -> Result<Accepted, Rejection> {
    let latest = interval::latest(&tx.valid_range)?;
    if latest > interval::deposit_cutoff(params.deadline)? {
        return Err(Rejection::DepositWindowClosed);
    }

    if tx.inputs.len() != 2 {
        return Err(Rejection::InputCount);
    }

    let (pool_pos, user_pos) = match contract_input_idx {
        0 => (0, 1),
        1 => (1, 0),
        _ => return Err(Rejection::InvalidInputIndex),
    };
    let pool_input = tx.inputs.get(pool_pos).ok_or(Rejection::InputCount)?;
    let user_input = tx.inputs.get(user_pos).ok_or(Rejection::InputCount)?;

    if pool_input.out_ref != *own_ref {
        return Err(Rejection::OwnInputMismatch);
    }

    if tx.outputs.len() != 2 {
        return Err(Rejection::OutputCount);
    }

    let quote = quote(
        value::lovelaces(&pool_input.resolved.value)?,
        value::lovelaces(&user_input.resolved.value)?,
        value::lovelaces(&tx.fee)?,
    )?;

    let pool_address = &pool_input.resolved.address;
    let user_address = &user_input.resolved.address;
    let pool_datum = Datum::Allocation;
    let user_datum = Datum::Rewarded(user_address.clone());

    let first = tx.outputs.get(0).ok_or(Rejection::OutputCount)?;
    let second = tx.outputs.get(1).ok_or(Rejection::OutputCount)?;

    let is_pool_output =
        |out: &TxOut| is_expected_output(out, pool_address, quote.contract_out, &pool_datum);
    let is_user_output =
        |out: &TxOut| is_expected_output(out, user_address, quote.user_out, &user_datum);

    // Pool and user datums differ, so one output can never fill both roles.
    let outputs_match = if is_pool_output(&first)? {
        is_user_output(&second)?
    } else {
        is_user_output(&first)? && is_pool_output(&second)?
    };
    if !outputs_match {
        return Err(Rejection::DepositOutputsMismatch);
    }

    Ok(Accepted::Deposit {
        depositor: user_address.clone(),
        quote,
    })
}
