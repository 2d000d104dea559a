use soroban_sdk::{ Address, Env };
use yieldstake::{
    constants::{ BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD },
    error::{ ErrorCode, YieldResult },
    math::safe_math::SafeMath,
    validate,
};

use crate::{ elastic::{ amount_to_shares, shares_to_amount }, storage::DataKey };

pub fn read_shares(env: &Env, addr: Address) -> u128 {
    let key = DataKey::Shares(addr);
    if let Some(shares) = env.storage().persistent().get::<DataKey, u128>(&key) {
        env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        shares
    } else {
        0
    }
}

fn write_shares(env: &Env, addr: Address, shares: u128) {
    let key = DataKey::Shares(addr);
    if shares == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &shares);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn read_balance(env: &Env, addr: Address, shares_per_unit: u128) -> YieldResult<i128> {
    shares_to_amount(env, read_shares(env, addr), shares_per_unit)
}

/// Credits `amount` to `addr` and returns the shares added.
pub fn receive_balance(
    env: &Env,
    addr: Address,
    amount: i128,
    shares_per_unit: u128
) -> YieldResult<u128> {
    let shares = amount_to_shares(env, amount, shares_per_unit)?;
    let current = read_shares(env, addr.clone());
    write_shares(env, addr, current.safe_add(shares, env)?);
    Ok(shares)
}

/// Debits `amount` from `addr` and returns the shares removed.
pub fn spend_balance(
    env: &Env,
    addr: Address,
    amount: i128,
    shares_per_unit: u128
) -> YieldResult<u128> {
    let current = read_shares(env, addr.clone());
    let balance = shares_to_amount(env, current, shares_per_unit)?;
    validate!(
        env,
        balance >= amount,
        ErrorCode::InsufficientBalance,
        "not enough receipt balance: {} < {}",
        balance,
        amount
    )?;

    let shares = amount_to_shares(env, amount, shares_per_unit)?;
    write_shares(env, addr, current.safe_sub(shares, env)?);
    Ok(shares)
}
