use crate::errors::Rejection;
use crate::ledger::{LedgerAddress, OutputDatum, TxOut};
use crate::types::Datum;
use crate::value;

/// Returns whether `out` pays exactly `lovelaces` to `address` with `datum`
/// attached inline. Hashed or missing datums never match.
pub fn is_expected_output(
    out: &TxOut,
    address: &LedgerAddress,
    lovelaces: i128,
    datum: &Datum,
) -> Result<bool, Rejection> {
    if out.address != *address {
        return Ok(false);
    }
    if value::lovelaces(&out.value)? != lovelaces {
        return Ok(false);
    }
    Ok(matches!(&out.datum, OutputDatum::Inline(attached) if attached == datum))
}
