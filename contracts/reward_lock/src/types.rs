use soroban_sdk::contracttype;

use crate::ledger::LedgerAddress;

// ─── Locked unit state ─────────────────────────────────────────────────────

/// Record attached to a locked unit.
///
/// Variant names and field order are the wire encoding compared against
/// output datums. Never rename or reorder them after deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Datum {
    /// Pool unit holding rewards still available to depositors. Several may
    /// coexist so that concurrent deposits do not contend for one output.
    Allocation,
    /// Principal plus reward owed to one depositor, claimable after the
    /// deadline.
    Rewarded(LedgerAddress),
}

// ─── Spend actions ─────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Redeemer {
    /// Lock user funds against an `Allocation` unit. The field is the
    /// position (0 or 1) of the pool input among the two transaction inputs.
    Deposit(u32),
    /// Sweep pool units to the issuer, or claim a rewarded unit.
    Withdraw,
}

// ─── Deposit accounting ────────────────────────────────────────────────────

/// Amounts a deposit transaction must produce.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositQuote {
    /// Reward moved from the pool to the depositor.
    pub interest: i128,
    /// Designated amount of the pool output.
    pub contract_out: i128,
    /// Designated amount of the rewarded user output.
    pub user_out: i128,
}

// ─── Deployment parameters ─────────────────────────────────────────────────

/// Parameters fixed when the contract instance is constructed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockParams {
    /// Address allowed to sweep pool units.
    pub issuer: LedgerAddress,
    /// Snapshot deadline on the ledger time axis.
    pub deadline: i64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Issuer address (LedgerAddress).
    Issuer,
    /// Snapshot deadline (i64).
    Deadline,
}
