//! Reward Lock Validator
//!
//! Spending validator for a pooled, time-locked reward scheme over a
//! resolved unspent-output transaction view.
//!
//! - **Deposit** (`Allocation` + `Deposit`): before `deadline - 1h` a user
//!   spends one pool unit together with their own unit. The pool pays a flat
//!   reward of `user / 1000` and the user's funds are re-locked under a
//!   `Rewarded` datum naming them.
//! - **Claim** (`Rewarded` + `Withdraw`): from `deadline + 1d` the named user
//!   takes the whole unit in a single-input, single-output transaction.
//! - **Sweep** (`Allocation` + `Withdraw`): the issuer reclaims pool units at
//!   any time, signing the transaction and paying every output to itself.
//!
//! ## Key design decisions
//!
//! - **Fixed parameters**: issuer and deadline are constructor arguments and
//!   have no setter.
//! - **Binary verdict**: `validate` reports every failure as
//!   `Error::Rejected`; the reason is only visible through the pure
//!   [`validator::evaluate`].
//! - **Checked arithmetic**: overflow rejects instead of trapping.
//! - **Parallel pools**: several `Allocation` units may be spent in the same
//!   transaction; each is validated independently against the same view.

#![no_std]

pub mod deposit;
pub mod errors;
pub mod interval;
pub mod ledger;
pub mod output;
pub mod types;
pub mod validator;
pub mod value;
pub mod withdraw;

mod events;
mod math;
mod storage;

pub use errors::{Error, Rejection, RejectionCategory, RejectionExt};
pub use ledger::{
    AssetClass, Credential, Extended, LedgerAddress, OutRef, OutputDatum, ScriptContext,
    ScriptPurpose, StakeCredential, TxInInfo, TxInfo, TxOut, ValidityRange, Value,
};
pub use types::{Datum, DepositQuote, LockParams, Redeemer};

use errors::ERR_DEADLINE_OUT_OF_RANGE;
use soroban_sdk::{contract, contractimpl, Env};





#[cfg(test)]
mod test_events;



// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct RewardLock;

#[contractimpl]
impl RewardLock {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// Store the lock parameters. They cannot be changed afterwards.
    ///
    /// Panics if `deadline` is so close to the ends of the time axis that the
    /// deposit cut-off or the claim opening overflow.
    pub fn __constructor(e: Env, issuer: LedgerAddress, deadline: i64) {
        if interval::deposit_cutoff(deadline).is_err() || interval::claim_opens(deadline).is_err()
        {
            panic!("{}", ERR_DEADLINE_OUT_OF_RANGE);
        }
        storage::set_params(&e, &issuer, deadline);
        events::emit_lock_created(&e, &issuer, deadline);
    }

    // ── Validation ─────────────────────────────────────────────────────────

    /// Accept or reject spending a locked unit carrying `datum` with
    /// `redeemer`, given the resolved transaction `ctx`.
    ///
    /// # Errors
    /// * `Rejected` - any rule failed. The cause is not reported.
    pub fn validate(
        e: Env,
        datum: Datum,
        redeemer: Redeemer,
        ctx: ScriptContext,
    ) -> Result<(), Error> {
        let params = storage::load_params(&e);
        let accepted = validator::evaluate(&params, &datum, &redeemer, &ctx)?;
        events::emit_accepted(&e, &accepted);
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn issuer(e: Env) -> LedgerAddress {
        storage::get_issuer(&e)
    }

    pub fn deadline(e: Env) -> i64 {
        storage::get_deadline(&e)
    }

    /// Latest validity upper bound a deposit transaction may use.
    pub fn deposit_cutoff(e: Env) -> i64 {
        // Range-checked by the constructor.
        interval::deposit_cutoff(storage::get_deadline(&e))
            .unwrap_or_else(|_| panic!("{}", ERR_DEADLINE_OUT_OF_RANGE))
    }

    /// Earliest validity lower bound a claim transaction may use.
    pub fn withdraw_opens_at(e: Env) -> i64 {
        interval::claim_opens(storage::get_deadline(&e))
            .unwrap_or_else(|_| panic!("{}", ERR_DEADLINE_OUT_OF_RANGE))
    }

    /// Outputs a deposit must produce for the given designated amounts.
    ///
    /// # Errors
    /// * `Overflow` - the amounts do not fit the checked arithmetic.
    pub fn quote_deposit(
        _e: Env,
        contract_lovelaces: i128,
        user_lovelaces: i128,
        fee: i128,
    ) -> Result<DepositQuote, Error> {
        deposit::quote(contract_lovelaces, user_lovelaces, fee).map_err(|_| Error::Overflow)
    }
}
