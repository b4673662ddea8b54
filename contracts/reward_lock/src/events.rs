use soroban_sdk::{Env, Symbol};

use crate::ledger::LedgerAddress;
use crate::types::DepositQuote;
use crate::validator::Accepted;

/// Emitted once when the lock instance is constructed.
///
/// # Topics
/// * `Symbol` - "lock_created"
///
/// # Data
/// * `LedgerAddress` - The issuer address
/// * `i64` - The snapshot deadline
pub fn emit_lock_created(e: &Env, issuer: &LedgerAddress, deadline: i64) {
    let topics = (Symbol::new(e, "lock_created"),);
    let data = (issuer.clone(), deadline);
    e.events().publish(topics, data);
}

/// Emitted when a deposit spend is accepted.
///
/// # Topics
/// * `Symbol` - "deposit_ok"
/// * `BytesN<28>` - Payment credential hash of the depositor
///
/// # Data
/// * `i128` - Interest moved from the pool
/// * `i128` - Designated amount left in the pool output
/// * `i128` - Designated amount of the rewarded output
pub fn emit_deposit_accepted(e: &Env, depositor: &LedgerAddress, quote: &DepositQuote) {
    let topics = (Symbol::new(e, "deposit_ok"), depositor.payment.hash());
    let data = (quote.interest, quote.contract_out, quote.user_out);
    e.events().publish(topics, data);
}

/// Emitted when the issuer sweeps a pool unit.
///
/// # Topics
/// * `Symbol` - "sweep_ok"
///
/// # Data
/// * `u32` - Number of outputs paid to the issuer
pub fn emit_sweep_accepted(e: &Env, outputs: u32) {
    let topics = (Symbol::new(e, "sweep_ok"),);
    e.events().publish(topics, outputs);
}

/// Emitted when a depositor claims a rewarded unit.
///
/// # Topics
/// * `Symbol` - "claim_ok"
/// * `BytesN<28>` - Payment credential hash of the user
///
/// # Data
/// * `LedgerAddress` - The full user address
pub fn emit_claim_accepted(e: &Env, user: &LedgerAddress) {
    let topics = (Symbol::new(e, "claim_ok"), user.payment.hash());
    e.events().publish(topics, user.clone());
}

pub fn emit_accepted(e: &Env, accepted: &Accepted) {
    match accepted {
        Accepted::Deposit { depositor, quote } => emit_deposit_accepted(e, depositor, quote),
        Accepted::Sweep { outputs } => emit_sweep_accepted(e, *outputs),
        Accepted::Claim { user } => emit_claim_accepted(e, user),
    }
}
