use soroban_sdk::{Bytes, Env, Map};

use crate::errors::Rejection;
use crate::ledger::{AssetClass, Value};
use crate::math;

/// Asset class of the base currency: empty policy id, empty name.
pub fn lovelace_class(e: &Env) -> AssetClass {
    AssetClass {
        policy: Bytes::new(e),
        name: Bytes::new(e),
    }
}

/// A value holding only `amount` of the base currency.
pub fn lovelace_value(e: &Env, amount: i128) -> Value {
    let mut value = Map::new(e);
    value.set(lovelace_class(e), amount);
    value
}

/// Designated amount of `value`: the sum of every entry under the empty
/// policy id. All other assets are ignored.
pub fn lovelaces(value: &Value) -> Result<i128, Rejection> {
    let mut total = 0_i128;
    for (class, quantity) in value.iter() {
        if class.policy.is_empty() {
            total = math::add_i128(total, quantity)?;
        }
    }
    Ok(total)
}
