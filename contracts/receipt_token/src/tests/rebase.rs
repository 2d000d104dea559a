use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address, Env };
use yieldstake::{ constants::INDEX_BASE, error::ErrorCode };

use super::setup::deploy_receipt_token;

#[test]
fn rebase_credits_holders_pro_rata() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let staker1 = Address::generate(&env);
    let staker2 = Address::generate(&env);
    let token = deploy_receipt_token(&env, &admin, &Address::generate(&env));

    token.mint(&staker1, &10_000);
    token.mint(&staker2, &1_000);

    assert_eq!(token.rebase(&1_000, &1), 12_000);

    assert_eq!(token.balance(&staker1), 10_909);
    assert_eq!(token.balance(&staker2), 1_090);
    assert_eq!(token.total_supply(), 12_000);
    assert!(token.balance(&staker1) + token.balance(&staker2) <= token.total_supply());

    let record = token.query_rebase(&1).unwrap();
    assert_eq!(record.profit, 1_000);
    assert_eq!(record.total_supply_before, 11_000);
    assert_eq!(record.total_supply_after, 12_000);
    assert_eq!(record.index, token.index());
}

#[test]
fn large_supplies_fit_in_shares() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let whale = Address::generate(&env);
    let token = deploy_receipt_token(&env, &admin, &Address::generate(&env));

    // a billion units of an 18 decimal asset
    let amount: i128 = 1_000_000_000 * 10i128.pow(18);
    token.mint(&whale, &amount);
    assert_eq!(token.balance(&whale), amount);

    let supply = token.rebase(&(amount / 10), &1);
    assert_eq!(supply, amount + amount / 10);

    // divisor rounding costs at most one part in a billion
    let balance = token.balance(&whale);
    assert!(balance <= supply);
    assert!(supply - balance <= supply / 1_000_000_000);
}

#[test]
fn rebase_with_empty_supply_is_a_no_op() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token = deploy_receipt_token(&env, &admin, &Address::generate(&env));

    assert_eq!(token.rebase(&5_000, &1), 0);
    assert_eq!(token.total_supply(), 0);
    assert_eq!(token.index(), INDEX_BASE);
    assert_eq!(token.query_rebase(&1).unwrap().profit, 0);
}

#[test]
fn negative_profit_is_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token = deploy_receipt_token(&env, &admin, &Address::generate(&env));
    token.mint(&Address::generate(&env), &10);

    assert_eq!(token.try_rebase(&-1, &1), Err(Ok(ErrorCode::OutOfRange)));
}

#[test]
fn increases_never_exceed_profit() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token = deploy_receipt_token(&env, &admin, &Address::generate(&env));

    let holdings = [7_919i128, 104_729, 3, 55_555, 1_000_003];
    let holders: [Address; 5] = core::array::from_fn(|_| Address::generate(&env));
    for (holder, amount) in holders.iter().zip(holdings.iter()) {
        token.mint(holder, amount);
    }

    let mut previous_index = token.index();
    for (epoch, profit) in [12_345i128, 1, 987_654, 31_337].iter().enumerate() {
        let supply_before = token.total_supply();
        let before: [i128; 5] = core::array::from_fn(|i| token.balance(&holders[i]));

        token.rebase(profit, &(epoch as u64 + 1));

        let dust_before = supply_before - before.iter().sum::<i128>();
        let mut total_increase = 0;
        for (i, holder) in holders.iter().enumerate() {
            let increase = token.balance(holder) - before[i];
            let fair = (profit * before[i]) / supply_before;
            // truncation of the old balance and of the new divisor
            assert!((increase - fair).abs() <= 2 + profit / supply_before);
            total_increase += increase;
        }
        // only profit and previously truncated dust can be handed out
        assert!(total_increase <= *profit + dust_before);
        assert_eq!(token.total_supply(), supply_before + profit);

        let index = token.index();
        assert!(index >= previous_index);
        previous_index = index;
    }
}

#[test]
fn transfers_after_rebase_keep_amounts_exact() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let token = deploy_receipt_token(&env, &admin, &Address::generate(&env));

    token.mint(&alice, &10_000);
    token.rebase(&2_500, &1);
    assert_eq!(token.balance(&alice), 12_500);

    token.transfer(&alice, &bob, &2_500);
    assert_eq!(token.balance(&alice), 10_000);
    assert_eq!(token.balance(&bob), 2_500);

    token.mint(&bob, &500);
    assert_eq!(token.balance(&bob), 3_000);
    assert_eq!(token.total_supply(), 13_000);
}
