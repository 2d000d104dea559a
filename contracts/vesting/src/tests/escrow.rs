use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address };
use yieldstake::{ error::ErrorCode, types::Claim };

use super::setup::setup_escrow;

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initialize_twice_should_fail() {
    let test = setup_escrow();
    test.escrow.initialize(&test.owner, &test.token.address);
}

#[test]
fn owner_and_token_are_recorded() {
    let test = setup_escrow();

    assert_eq!(test.escrow.query_owner(), test.owner);
    assert_eq!(test.escrow.query_config().receipt_token, test.token.address);
}

#[test]
fn deposits_merge_into_one_record() {
    let test = setup_escrow();
    let user = Address::generate(&test.env);

    test.lock(&user, 400, 5);
    test.lock(&user, 600, 3);

    let claim = test.escrow.query_claim(&user);
    assert_eq!(claim.amount, 1_000);
    assert_eq!(claim.release_at, 5);
    assert_eq!(claim.shares, test.token.shares_for_balance(&1_000));
    assert_eq!(test.escrow.claim_value(&user), 1_000);
}

#[test]
fn retrieve_before_release_is_not_vested() {
    let test = setup_escrow();
    let user = Address::generate(&test.env);
    test.lock(&user, 1_000, 5);

    assert_eq!(
        test.escrow.try_retrieve(&test.owner, &user, &1_000, &4),
        Err(Ok(ErrorCode::NotYetVested))
    );
    assert_eq!(test.token.balance(&user), 0);
}

#[test]
fn retrieve_releases_and_deletes_the_record() {
    let test = setup_escrow();
    let user = Address::generate(&test.env);
    test.lock(&user, 1_000, 5);

    assert_eq!(test.escrow.retrieve(&test.owner, &user, &300, &5), 300);
    assert_eq!(test.escrow.claim_value(&user), 700);
    assert_eq!(test.escrow.query_claim(&user).amount, 700);

    assert_eq!(test.escrow.retrieve(&test.owner, &user, &700, &6), 700);
    assert_eq!(test.escrow.query_claim(&user), Claim::default());
    assert_eq!(test.token.balance(&user), 1_000);
    assert_eq!(test.token.balance(&test.escrow.address), 0);
}

#[test]
fn retrieve_more_than_recorded_fails() {
    let test = setup_escrow();
    let user = Address::generate(&test.env);
    test.lock(&user, 1_000, 0);

    assert_eq!(
        test.escrow.try_retrieve(&test.owner, &user, &1_001, &0),
        Err(Ok(ErrorCode::InsufficientBalance))
    );
}

#[test]
fn only_the_owner_moves_funds() {
    let test = setup_escrow();
    let user = Address::generate(&test.env);
    let stranger = Address::generate(&test.env);
    test.lock(&user, 1_000, 0);

    assert_eq!(
        test.escrow.try_retrieve(&stranger, &user, &1_000, &0),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(
        test.escrow.try_release_to(&stranger, &user, &1_000, &stranger),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(
        test.escrow.try_deposit(&stranger, &user, &1_000, &0),
        Err(Ok(ErrorCode::NotAuthorized))
    );
}

#[test]
fn release_to_skips_vesting_and_pays_recipient() {
    let test = setup_escrow();
    let user = Address::generate(&test.env);
    let recipient = Address::generate(&test.env);
    test.lock(&user, 1_000, 50);

    assert_eq!(test.escrow.release_to(&test.owner, &user, &250, &recipient), 250);
    assert_eq!(test.token.balance(&recipient), 250);
    assert_eq!(test.escrow.claim_value(&user), 750);
}

#[test]
fn records_grow_with_rebases() {
    let test = setup_escrow();
    let first = Address::generate(&test.env);
    let second = Address::generate(&test.env);
    test.lock(&first, 10_000, 1);
    test.lock(&second, 1_000, 1);

    test.token.rebase(&1_000, &1);

    assert_eq!(test.escrow.claim_value(&first), 10_909);
    assert_eq!(test.escrow.claim_value(&second), 1_090);
    // nominal amount is what was deposited
    assert_eq!(test.escrow.query_claim(&first).amount, 10_000);

    assert_eq!(test.escrow.retrieve(&test.owner, &first, &10_909, &1), 10_909);
    assert_eq!(test.escrow.query_claim(&first), Claim::default());
    assert_eq!(test.token.balance(&first), 10_909);
}
