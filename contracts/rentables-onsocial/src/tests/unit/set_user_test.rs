use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- Authorization ---

#[test]
fn owner_can_set_user() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());
    let expires = NOW_SECS + HOUR;

    set_user_as(&mut contract, &owner(), id, Some(renter()), expires).unwrap();

    assert_eq!(contract.nft_user_of(U64(id)), Some(renter()));
    assert_eq!(contract.nft_user_expires(U64(id)), U64(expires));
}

#[test]
fn non_owner_cannot_set_user() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());

    let err = set_user_as(&mut contract, &renter(), id, Some(renter()), NOW_SECS + HOUR)
        .unwrap_err();
    assert_eq!(err, RentablesError::not_owner_nor_approved());
    assert_eq!(contract.nft_user_of(U64(id)), None);
    assert_eq!(contract.nft_user_expires(U64(id)), U64(0));
}

#[test]
fn current_user_cannot_reassign() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());
    set_user_as(&mut contract, &owner(), id, Some(renter()), NOW_SECS + HOUR).unwrap();

    let err = set_user_as(&mut contract, &renter(), id, Some(stranger()), NOW_SECS + HOUR)
        .unwrap_err();
    assert!(matches!(err, RentablesError::NotAuthorized(_)));
    assert_eq!(contract.nft_user_of(U64(id)), Some(renter()));
}

#[test]
fn approved_account_can_set_user() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());
    testing_env!(context_with_deposit(owner(), MINT_DEPOSIT).build());
    contract.nft_approve(U64(id), stranger()).unwrap();

    set_user_as(&mut contract, &stranger(), id, Some(renter()), NOW_SECS + HOUR).unwrap();
    assert_eq!(contract.nft_user_of(U64(id)), Some(renter()));
}

#[test]
fn operator_can_set_user() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());
    testing_env!(context_with_deposit(owner(), MINT_DEPOSIT).build());
    contract.set_approval_for_all(stranger(), true).unwrap();

    set_user_as(&mut contract, &stranger(), id, Some(renter()), NOW_SECS + HOUR).unwrap();
    assert_eq!(contract.nft_user_of(U64(id)), Some(renter()));
}

#[test]
fn set_user_missing_token_fails() {
    let mut contract = new_contract();

    let err = set_user_as(&mut contract, &owner(), 42, Some(renter()), NOW_SECS + HOUR)
        .unwrap_err();
    assert_eq!(err, RentablesError::invalid_token());
}

#[test]
fn set_user_requires_one_yocto() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());
    testing_env!(context(owner()).build());

    let err = contract
        .nft_set_user(U64(id), Some(renter()), U64(NOW_SECS + HOUR))
        .unwrap_err();
    assert!(matches!(err, RentablesError::InsufficientDeposit(_)));
}

// --- Overwrite semantics ---

#[test]
fn owner_overrides_active_renter_by_default() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());
    set_user_as(&mut contract, &owner(), id, Some(renter()), NOW_SECS + HOUR).unwrap();

    set_user_as(&mut contract, &owner(), id, Some(stranger()), NOW_SECS + 2 * HOUR).unwrap();

    assert_eq!(contract.nft_user_of(U64(id)), Some(stranger()));
    assert_eq!(contract.nft_user_expires(U64(id)), U64(NOW_SECS + 2 * HOUR));
}

#[test]
fn set_user_none_clears_user_but_keeps_expiry() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());
    set_user_as(&mut contract, &owner(), id, Some(renter()), NOW_SECS + HOUR).unwrap();

    set_user_as(&mut contract, &owner(), id, None, NOW_SECS + HOUR).unwrap();

    assert_eq!(contract.nft_user_of(U64(id)), None);
    assert_eq!(contract.nft_user_expires(U64(id)), U64(NOW_SECS + HOUR));
}

#[test]
fn owner_can_rent_to_self() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());

    set_user_as(&mut contract, &owner(), id, Some(owner()), NOW_SECS + HOUR).unwrap();
    assert_eq!(contract.nft_user_of(U64(id)), Some(owner()));
}

#[test]
fn set_user_does_not_change_ownership() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());

    set_user_as(&mut contract, &owner(), id, Some(renter()), NOW_SECS + HOUR).unwrap();

    assert_eq!(contract.owner_of(U64(id)).unwrap(), owner());
    assert_eq!(contract.nft_supply_for_owner(renter()).0, 0);
}

// --- Events ---

#[test]
fn set_user_emits_update_user() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());

    set_user_as(&mut contract, &owner(), id, Some(renter()), NOW_SECS + HOUR).unwrap();

    let events = update_user_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["author"], owner().as_str());
    assert_eq!(events[0]["token_id"], id.to_string());
    assert_eq!(events[0]["user"], renter().as_str());
    assert_eq!(events[0]["expires"], (NOW_SECS + HOUR).to_string());
}

#[test]
fn set_user_none_emits_null_user() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());

    set_user_as(&mut contract, &owner(), id, None, 0).unwrap();

    let events = update_user_events();
    assert_eq!(events.len(), 1);
    assert!(events[0]["user"].is_null());
    assert_eq!(events[0]["expires"], "0");
}

#[test]
fn failed_set_user_emits_nothing() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());

    let _ = set_user_as(&mut contract, &renter(), id, Some(renter()), NOW_SECS + HOUR);
    assert!(update_user_events().is_empty());
}
