use soroban_sdk::Env;

use crate::errors::ERR_NOT_INITIALIZED;
use crate::ledger::LedgerAddress;
use crate::types::{DataKey, LockParams};

/// Bump amount for instance storage (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

pub fn set_params(e: &Env, issuer: &LedgerAddress, deadline: i64) {
    let instance = e.storage().instance();
    instance.set(&DataKey::Issuer, issuer);
    instance.set(&DataKey::Deadline, &deadline);
    instance.extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

pub fn get_issuer(e: &Env) -> LedgerAddress {
    e.storage()
        .instance()
        .get(&DataKey::Issuer)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

pub fn get_deadline(e: &Env) -> i64 {
    e.storage()
        .instance()
        .get(&DataKey::Deadline)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

pub fn load_params(e: &Env) -> LockParams {
    LockParams {
        issuer: get_issuer(e),
        deadline: get_deadline(e),
    }
}
