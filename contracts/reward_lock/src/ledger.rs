//! Read-only view of the transaction being validated.
//!
//! The ledger resolves every input reference to the output it spends and
//! hands the validator one `ScriptContext` per locked unit. Nothing here is
//! stored by the contract.

use soroban_sdk::{contracttype, Bytes, BytesN, Map, Vec};

use crate::types::Datum;

/// Quantity held per asset class. The designated amount is read with
/// [`crate::value::lovelaces`].
pub type Value = Map<AssetClass, i128>;

/// Hash identifying a key or a script.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Credential {
    PubKey(BytesN<28>),
    Script(BytesN<28>),
}

impl Credential {
    /// The 28-byte hash, regardless of credential kind.
    pub fn hash(&self) -> BytesN<28> {
        match self {
            Credential::PubKey(hash) | Credential::Script(hash) => hash.clone(),
        }
    }
}

/// Staking part of an address. Contract types cannot nest inside `Option`,
/// so absence is its own variant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StakeCredential {
    Absent,
    Present(Credential),
}

/// Ledger address: payment credential plus optional staking credential.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerAddress {
    pub payment: Credential,
    pub stake: StakeCredential,
}

/// Asset identifier. The base currency has an empty policy id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetClass {
    pub policy: Bytes,
    pub name: Bytes,
}

/// Reference to an output created by an earlier transaction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutRef {
    pub tx_id: BytesN<32>,
    pub index: u32,
}

/// Record attached to an output.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OutputDatum {
    NoDatum,
    Hash(BytesN<32>),
    Inline(Datum),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxOut {
    pub address: LedgerAddress,
    pub value: Value,
    pub datum: OutputDatum,
}

/// A transaction input together with the output it resolves to.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxInInfo {
    pub out_ref: OutRef,
    pub resolved: TxOut,
}

/// Time point that may be infinite in either direction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Extended {
    NegInf,
    Finite(i64),
    PosInf,
}

/// Window within which the transaction may be included.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidityRange {
    pub from: Extended,
    pub to: Extended,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TxInfo {
    pub inputs: Vec<TxInInfo>,
    pub outputs: Vec<TxOut>,
    pub fee: Value,
    pub valid_range: ValidityRange,
    /// Key hashes that signed the transaction.
    pub signatories: Vec<BytesN<28>>,
}

/// Why the validator is being run.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScriptPurpose {
    /// Spending the locked output at this reference.
    Spending(OutRef),
    /// Minting under the given policy id.
    Minting(BytesN<28>),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScriptContext {
    pub tx: TxInfo,
    pub purpose: ScriptPurpose,
}
