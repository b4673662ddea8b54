//! Withdraw paths.
//!
//! - **Sweep** (`Allocation`): the issuer reclaims pool units. Every output
//!   must pay the issuer and the issuer must sign. Amounts are not checked.
//! - **Claim** (`Rewarded`): after the claim window opens the recorded user
//!   takes the whole unit. The transaction is restricted to a single input
//!   and a single output, so ledger balancing carries the full value to it.

use crate::errors::Rejection;
use crate::interval;
use crate::ledger::{LedgerAddress, TxInfo};
use crate::types::LockParams;
use crate::validator::Accepted;

/// Validate a `Withdraw` spend of an `Allocation` unit.
pub fn validate_sweep(params: &LockParams, tx: &TxInfo) -> Result<Accepted, Rejection> {
    if tx.outputs.iter().any(|out| out.address != params.issuer) {
        return Err(Rejection::OutputNotToIssuer);
    }

    let issuer_key = params.issuer.payment.hash();
    if !tx.signatories.iter().any(|signer| signer == issuer_key) {
        return Err(Rejection::MissingIssuerSignature);
    }

    Ok(Accepted::Sweep {
        outputs: tx.outputs.len(),
    })
}

/// Validate a `Withdraw` spend of a unit rewarded to `user`.
pub fn validate_claim(
    params: &LockParams,
    user: &LedgerAddress,
    tx: &TxInfo,
) -> Result<Accepted, Rejection> {
    let earliest = interval::earliest(&tx.valid_range)?;
    if earliest < interval::claim_opens(params.deadline)? {
        return Err(Rejection::ClaimWindowNotOpen);
    }

    if tx.inputs.len() != 1 {
        return Err(Rejection::InputCount);
    }
    if tx.outputs.len() != 1 {
        return Err(Rejection::OutputCount);
    }

    let out = tx.outputs.get(0).ok_or(Rejection::OutputCount)?;
    if out.address != *user {
        return Err(Rejection::WrongDestination);
    }

    Ok(Accepted::Claim { user: user.clone() })
}
