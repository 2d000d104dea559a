use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address };
use yieldstake::error::ErrorCode;

use super::setup::{ setup_protocol, Options };

#[test]
fn providers_keep_their_value_through_instant_unstakes() {
    let test = setup_protocol(Options {
        fee_bps: 1_000,
        seed: 1_000_000_000_000_000,
        ..Options::default()
    });
    let first = test.user(100_000_000_000_000);
    let second = test.user(25_000_000_000_000);
    let staker = test.user(25_000_000_000_000);

    let first_shares = test.reserve.add_liquidity(&first, &100_000_000_000_000);
    assert_eq!(first_shares, 100_000_000_000_000);

    test.stake_and_claim(&staker, 25_000_000_000_000);
    test.approve(&staker, 25_000_000_000_000);
    let paid = test.staking.instant_unstake(&staker, &25_000_000_000_000, &false);
    assert_eq!(paid, 22_500_000_000_000);
    assert_eq!(test.base.balance(&staker), 22_500_000_000_000);
    assert_eq!(test.receipt.balance(&test.reserve.address), 25_000_000_000_000);

    let second_shares = test.reserve.add_liquidity(&second, &25_000_000_000_000);
    assert!(second_shares < 25_000_000_000_000);

    let first_payout = test.reserve.remove_liquidity(&first, &first_shares);
    assert!(first_payout > 100_000_000_000_000);

    let second_payout = test.reserve.remove_liquidity(&second, &second_shares);
    assert!(second_payout <= 25_000_000_000_000);
    assert!(second_payout >= 25_000_000_000_000 - 2);
}

#[test]
fn instant_unstake_from_warmup() {
    let test = setup_protocol(Options { warmup_epochs: 2, ..Options::default() });
    let user = test.user(10_000);

    test.staking.stake(&user, &10_000);
    assert_eq!(test.staking.instant_unstake(&user, &4_000, &false), 3_600);

    assert_eq!(test.warmup.claim_value(&user), 6_000);
    assert_eq!(test.base.balance(&user), 3_600);
    assert_eq!(test.receipt.balance(&test.reserve.address), 4_000);
}

#[test]
fn instant_unstake_fails_when_the_float_is_short() {
    let test = setup_protocol(Options { seed: 1_000, ..Options::default() });
    let user = test.user(10_000);
    test.stake_and_claim(&user, 10_000);
    test.approve(&user, 10_000);

    assert_eq!(
        test.staking.try_instant_unstake(&user, &5_000, &false),
        Err(Ok(ErrorCode::InsufficientReserveFunds))
    );
    assert_eq!(test.receipt.balance(&user), 10_000);
    assert_eq!(test.base.balance(&user), 0);
}

#[test]
fn remove_liquidity_beyond_the_float_keeps_shares() {
    let test = setup_protocol(Options { seed: 1_000, ..Options::default() });
    let provider = test.user(10_000);
    let user = test.user(10_000);

    test.reserve.add_liquidity(&provider, &10_000);
    test.stake_and_claim(&user, 10_000);
    test.approve(&user, 10_000);
    test.staking.instant_unstake(&user, &10_000, &false);
    assert_eq!(test.base.balance(&test.reserve.address), 2_000);

    assert_eq!(
        test.reserve.try_remove_liquidity(&provider, &10_000),
        Err(Ok(ErrorCode::InsufficientReserveFunds))
    );
    assert_eq!(test.reserve.balance(&provider), 10_000);
}

#[test]
fn reserve_recycles_receipts_through_cooldown() {
    let test = setup_protocol(Options::default());
    let user = test.user(10_000);
    test.stake_and_claim(&user, 10_000);
    test.approve(&user, 10_000);
    test.staking.instant_unstake(&user, &10_000, &false);

    let value = test.reserve.reserve_value();
    assert_eq!(value, 100_000 + 1_000);

    assert_eq!(test.reserve.unstake_all_reward_tokens(&test.admin), 10_000);
    assert_eq!(test.staking.query_cooldown_info(&test.reserve.address).amount, 10_000);
    assert_eq!(test.reserve.reserve_value(), value);

    test.staking.send_withdrawal_requests();
    assert_eq!(test.reserve.claim_withdraw(), 0);

    test.pool.complete_rollover();
    assert_eq!(test.reserve.claim_withdraw(), 10_000);

    assert_eq!(test.base.balance(&test.reserve.address), value);
    assert_eq!(test.reserve.reserve_value(), value);
    assert_eq!(test.receipt.total_supply(), 0);
}

#[test]
fn reserve_entry_point_rejects_direct_callers() {
    let test = setup_protocol(Options::default());
    let stranger = Address::generate(&test.env);

    assert_eq!(
        test.reserve.try_instant_unstake(&stranger, &1_000, &stranger),
        Err(Ok(ErrorCode::NotStakingContract))
    );
}
