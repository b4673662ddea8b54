//! Spend dispatch over (datum, redeemer).
//!
//! | Datum        | Redeemer   | Rule                              |
//! |--------------|------------|-----------------------------------|
//! | `Allocation` | `Deposit`  | [`deposit::validate_deposit`]     |
//! | `Allocation` | `Withdraw` | [`withdraw::validate_sweep`]      |
//! | `Rewarded`   | `Withdraw` | [`withdraw::validate_claim`]      |
//! | `Rewarded`   | `Deposit`  | always rejected                   |
//!
//! `evaluate` is pure: it reads only its arguments and never touches
//! contract storage, so it can be called directly from tests and tooling.

use crate::deposit;
use crate::errors::Rejection;
use crate::ledger::{LedgerAddress, ScriptContext, ScriptPurpose};
use crate::types::{Datum, DepositQuote, LockParams, Redeemer};
use crate::withdraw;

/// Outcome of an accepted spend, used for event emission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Accepted {
    Deposit {
        depositor: LedgerAddress,
        quote: DepositQuote,
    },
    Sweep {
        outputs: u32,
    },
    Claim {
        user: LedgerAddress,
    },
}

/// Decide whether spending a unit carrying `datum` with `redeemer` is allowed
/// by the transaction described in `ctx`.
pub fn evaluate(
    params: &LockParams,
    datum: &Datum,
    redeemer: &Redeemer,
    ctx: &ScriptContext,
) -> Result<Accepted, Rejection> {
    let own_ref = match &ctx.purpose {
        ScriptPurpose::Spending(out_ref) => out_ref,
        ScriptPurpose::Minting(_) => return Err(Rejection::NotSpending),
    };

    match datum {
        Datum::Allocation => match redeemer {
            Redeemer::Deposit(contract_input_idx) => {
                deposit::validate_deposit(params, *contract_input_idx, own_ref, &ctx.tx)
            }
            Redeemer::Withdraw => withdraw::validate_sweep(params, &ctx.tx),
        },
        Datum::Rewarded(user) => match redeemer {
            // A unit already earmarked for a depositor never returns to the pool.
            Redeemer::Deposit(_) => Err(Rejection::RedepositForbidden),
            Redeemer::Withdraw => withdraw::validate_claim(params, user, &ctx.tx),
        },
    }
}
