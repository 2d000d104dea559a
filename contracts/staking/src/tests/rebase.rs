use pretty_assertions::assert_eq;
use yieldstake::error::ErrorCode;

use super::setup::{ setup_protocol, Options, EPOCH_LENGTH, START_LEDGER };

#[test]
fn rebase_waits_for_the_epoch_end() {
    let test = setup_protocol(Options::default());

    assert!(!test.staking.rebase());
    test.advance(EPOCH_LENGTH - 1);
    assert!(!test.staking.rebase());

    test.advance(1);
    assert!(test.staking.rebase());

    let epoch = test.staking.query_epoch();
    assert_eq!(epoch.number, 2);
    assert_eq!(epoch.end_ledger, START_LEDGER + 2 * EPOCH_LENGTH);
    assert!(!test.staking.rebase());
}

#[test]
fn rewards_land_one_epoch_after_funding() {
    let test = setup_protocol(Options::default());
    let large = test.user(10_000);
    let small = test.user(1_000);
    test.base_admin.mint(&test.admin, &1_000);

    test.stake_and_claim(&large, 10_000);
    test.stake_and_claim(&small, 1_000);

    // funded during epoch 1
    test.staking.add_rewards_for_stakers(&test.admin, &1_000, &true);
    assert_eq!(test.staking.query_staged_rewards(), 1_000);
    assert_eq!(test.receipt.balance(&large), 10_000);

    // end of epoch 1 moves the reward into epoch 2's distribution
    test.next_epoch();
    assert_eq!(test.staking.query_staged_rewards(), 0);
    assert_eq!(test.staking.query_epoch().distribute, 1_000);
    assert_eq!(test.receipt.balance(&large), 10_000);
    assert_eq!(test.receipt.balance(&small), 1_000);

    // end of epoch 2 distributes it
    test.next_epoch();
    assert_eq!(test.receipt.balance(&large), 10_909);
    assert_eq!(test.receipt.balance(&small), 1_090);
    assert_eq!(test.receipt.total_supply(), 12_000);
    assert_eq!(test.staking.query_epoch().distribute, 0);

    let record = test.receipt.query_rebase(&2).unwrap();
    assert_eq!(record.profit, 1_000);
    assert_eq!(record.total_supply_before, 11_000);
}

#[test]
fn rewards_are_deposited_into_the_pool() {
    let test = setup_protocol(Options::default());
    test.base_admin.mint(&test.admin, &5_000);

    test.staking.add_rewards_for_stakers(&test.admin, &5_000, &false);

    assert_eq!(test.base.balance(&test.admin), 0);
    assert_eq!(test.pool.deposited(&test.staking.address), 5_000);
    assert_eq!(test.staking.query_staged_rewards(), 5_000);
}

#[test]
fn only_admin_adds_rewards() {
    let test = setup_protocol(Options::default());
    let stranger = test.user(1_000);

    assert_eq!(
        test.staking.try_add_rewards_for_stakers(&stranger, &1_000, &false),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(
        test.staking.try_add_rewards_for_stakers(&test.admin, &0, &false),
        Err(Ok(ErrorCode::ZeroAmount))
    );
}

#[test]
fn escrowed_positions_share_in_rewards() {
    let test = setup_protocol(Options { warmup_epochs: 5, ..Options::default() });
    let warming = test.user(10_000);
    let cooling = test.user(1_000);
    test.base_admin.mint(&test.admin, &1_000);

    test.staking.stake(&warming, &10_000);
    test.staking.stake(&cooling, &1_000);
    test.staking.unstake(&cooling, &1_000, &false);

    test.staking.add_rewards_for_stakers(&test.admin, &1_000, &false);
    test.next_epoch();
    test.next_epoch();

    assert_eq!(test.staking.query_warmup_info(&warming).amount, 10_000);
    assert_eq!(test.warmup.claim_value(&warming), 10_909);
    assert_eq!(test.cooldown.claim_value(&cooling), 1_090);

    // cooldown still pays the nominal amount
    assert_eq!(test.staking.query_cooldown_info(&cooling).amount, 1_000);
}

#[test]
fn stake_processes_a_due_rebase() {
    let test = setup_protocol(Options::default());
    let user = test.user(2_000);

    test.staking.stake(&user, &1_000);
    test.advance(EPOCH_LENGTH);
    test.staking.stake(&user, &1_000);

    assert_eq!(test.staking.query_epoch().number, 2);
    assert_eq!(test.staking.query_warmup_info(&user).release_at, 2);
}

#[test]
fn unstake_triggers_rebase_on_request() {
    let test = setup_protocol(Options::default());
    let user = test.user(2_000);
    test.stake_and_claim(&user, 2_000);
    test.approve(&user, 2_000);

    test.advance(EPOCH_LENGTH);
    test.staking.unstake(&user, &500, &false);
    assert_eq!(test.staking.query_epoch().number, 1);

    test.staking.unstake(&user, &500, &true);
    assert_eq!(test.staking.query_epoch().number, 2);
}
