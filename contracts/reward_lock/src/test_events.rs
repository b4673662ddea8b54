#![cfg(test)]

use crate::ledger::{LedgerAddress, OutputDatum};
use crate::test_helpers::*;
use crate::types::{Datum, Redeemer};
use soroban_sdk::{testutils::Events, vec, BytesN, Env, FromVal, Symbol};

#[test]
fn test_lock_created_event() {
    let e = Env::default();
    let a = actors(&e);
    let (_client, contract_id) = setup(&e, &a);

    let events = e.events().all();
    let created = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == contract_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &created.1.get(0).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "lock_created"));

    let data = <(LedgerAddress, i64)>::from_val(&e, &created.2);
    assert_eq!(data, (a.issuer.clone(), DEADLINE));
}

#[test]
fn test_deposit_accepted_event() {
    let e = Env::default();
    let a = actors(&e);
    let (client, contract_id) = setup(&e, &a);

    let ctx = deposit_context(&e, &a, true, expected_deposit_outputs(&e, &a, true));
    client.validate(&Datum::Allocation, &Redeemer::Deposit(0), &ctx);

    let events = e.events().all();
    let deposit_event = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == contract_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &deposit_event.1.get(0).unwrap());
    let topic_user = BytesN::<28>::from_val(&e, &deposit_event.1.get(1).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "deposit_ok"));
    assert_eq!(topic_user, key_hash(&e, 3));

    let data = <(i128, i128, i128)>::from_val(&e, &deposit_event.2);
    assert_eq!(
        data,
        (EXPECTED_INTEREST, EXPECTED_POOL_OUT, EXPECTED_USER_OUT)
    );
}

#[test]
fn test_sweep_accepted_event() {
    let e = Env::default();
    let a = actors(&e);
    let (client, contract_id) = setup(&e, &a);

    let outputs = vec![
        &e,
        tx_out(&e, &a.issuer, 1_000_000, OutputDatum::NoDatum),
        tx_out(&e, &a.issuer, 1_000_000, OutputDatum::NoDatum),
    ];
    let ctx = sweep_context(&e, &a, outputs, vec![&e, key_hash(&e, 1)]);
    client.validate(&Datum::Allocation, &Redeemer::Withdraw, &ctx);

    let events = e.events().all();
    let sweep_event = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == contract_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &sweep_event.1.get(0).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "sweep_ok"));
    assert_eq!(u32::from_val(&e, &sweep_event.2), 2);
}

#[test]
fn test_claim_accepted_event() {
    let e = Env::default();
    let a = actors(&e);
    let (client, contract_id) = setup(&e, &a);

    let ctx = claim_context(&e, &a, DEADLINE + 86_400, &a.user);
    client.validate(&Datum::Rewarded(a.user.clone()), &Redeemer::Withdraw, &ctx);

    let events = e.events().all();
    let claim_event = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == contract_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &claim_event.1.get(0).unwrap());
    let topic_user = BytesN::<28>::from_val(&e, &claim_event.1.get(1).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "claim_ok"));
    assert_eq!(topic_user, key_hash(&e, 3));

    let data = LedgerAddress::from_val(&e, &claim_event.2);
    assert_eq!(data, a.user);
}
