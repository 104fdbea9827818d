use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- Happy path ---

#[test]
fn mint_assigns_sequential_ids_from_one() {
    let mut contract = new_contract();

    assert_eq!(mint_as(&mut contract, &owner()), 1);
    assert_eq!(mint_as(&mut contract, &owner()), 2);
    assert_eq!(mint_as(&mut contract, &renter()), 3);
    assert_eq!(contract.next_token_id, 4);
}

#[test]
fn mint_caller_becomes_owner() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &renter());

    assert_eq!(contract.owner_of(U64(id)).unwrap(), renter());
    assert_eq!(contract.token_uri(U64(id)).unwrap(), "fakeURI");
}

#[test]
fn mint_increments_total_supply_and_balance() {
    let mut contract = new_contract();
    assert_eq!(contract.nft_total_supply(), U128(0));
    assert_eq!(contract.nft_supply_for_owner(owner()), U128(0));

    mint_as(&mut contract, &owner());
    assert_eq!(contract.nft_total_supply(), U128(1));
    assert_eq!(contract.nft_supply_for_owner(owner()), U128(1));

    mint_as(&mut contract, &owner());
    assert_eq!(contract.nft_total_supply(), U128(2));
    assert_eq!(contract.nft_supply_for_owner(owner()), U128(2));
}

#[test]
fn mint_creates_no_rental_record() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());

    assert_eq!(contract.nft_user_of(U64(id)), None);
    assert_eq!(contract.nft_user_expires(U64(id)), U64(0));
    assert!(contract.nft_user_info(U64(id)).is_none());
}

#[test]
fn mint_accepts_empty_uri() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), MINT_DEPOSIT).build());

    let id = contract.nft_mint(String::new()).unwrap();
    assert_eq!(contract.token_uri(id).unwrap(), "");
}

#[test]
fn mint_emits_nep171_event() {
    let mut contract = new_contract();
    mint_as(&mut contract, &owner());

    let events = nep171_events("nft_mint");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["version"], "1.2.0");
    assert_eq!(events[0]["data"][0]["owner_id"], owner().as_str());
    assert_eq!(events[0]["data"][0]["token_ids"][0], "1");
    assert!(update_user_events().is_empty());
}

#[test]
fn mint_records_block_time() {
    let mut contract = new_contract();
    let id = mint_as(&mut contract, &owner());

    let view = contract.nft_token(U64(id)).unwrap();
    assert_eq!(view.minted_at, U64(NOW_SECS * NANOS_PER_SECOND));
}

// --- Failures ---

#[test]
fn mint_uri_too_long_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), MINT_DEPOSIT).build());

    let err = contract
        .nft_mint("x".repeat(MAX_TOKEN_URI_LEN + 1))
        .unwrap_err();
    assert!(matches!(err, RentablesError::InvalidInput(_)));
}

#[test]
fn mint_without_deposit_fails() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    let err = contract.nft_mint("fakeURI".into()).unwrap_err();
    assert!(matches!(err, RentablesError::InsufficientDeposit(_)));
}
